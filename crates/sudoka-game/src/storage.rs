//! Saved-game persistence.

use std::{
    cell::RefCell,
    fmt, fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use derive_more::{Display, Error, From};
use log::warn;
use serde::{Deserialize, Serialize};
use sudoka_core::{Board, FixedMask, Position};
use sudoka_generator::Difficulty;

use crate::{
    config::{Player, Theme},
    notes::NoteGrid,
    snapshot::Snapshot,
};

/// File name of the save record, versioned so a future format change can
/// coexist with old saves.
const SAVE_FILE: &str = "sudoka_v1.json";

/// The complete persisted state of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// Current board contents.
    pub board: Board,
    /// The puzzle's unique solution.
    pub solution: Board,
    /// Mask of given cells.
    pub fixed: FixedMask,
    /// Pencil marks.
    pub notes: NoteGrid,
    /// Difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
    /// Seed that generated the puzzle.
    pub seed: u64,
    /// Whether number entry currently toggles notes.
    pub notes_mode: bool,
    /// Whether placements prune peer notes automatically.
    pub auto_notes: bool,
    /// Play time so far, in milliseconds.
    pub elapsed_ms: u64,
    /// Undo history, oldest first. The first entry is the initial state.
    pub undo_stack: Vec<Snapshot>,
    /// Redo history.
    pub redo_stack: Vec<Snapshot>,
    /// Currently selected cell.
    pub selected: Option<Position>,
    /// Player identity.
    pub player: Player,
    /// UI theme.
    pub theme: Theme,
}

/// Error raised by save-game storage backends.
#[derive(Debug, Display, Error, From)]
pub enum StorageError {
    /// No per-user data directory could be determined.
    #[display("no user data directory available")]
    NoDataDir,
    /// Reading or writing the save file failed.
    #[display("save file I/O failed: {_0}")]
    #[from]
    Io(io::Error),
    /// The save record could not be encoded.
    #[display("save data could not be encoded: {_0}")]
    #[from]
    Encode(serde_json::Error),
}

/// A place to keep the single save record.
///
/// There is exactly one slot: saving overwrites the previous record, and
/// loading a missing or unreadable record yields `None` rather than an
/// error, so a corrupted save degrades into "no game to continue".
pub trait Storage: fmt::Debug {
    /// Writes the save record, replacing any previous one.
    fn save(&mut self, data: &SaveData) -> Result<(), StorageError>;

    /// Reads the save record, or `None` if there is none or it cannot be
    /// decoded.
    fn load(&self) -> Result<Option<SaveData>, StorageError>;

    /// Deletes the save record. Deleting a missing record is not an error.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Storage in a JSON file under the user's data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage at the default per-user location
    /// (`<data_dir>/sudoka/sudoka_v1.json`).
    pub fn new() -> Result<Self, StorageError> {
        let dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::with_path(dir.join("sudoka").join(SAVE_FILE)))
    }

    /// Creates storage at an explicit file path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the save file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn save(&mut self, data: &SaveData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&json) {
            Ok(data) => Ok(Some(data)),
            Err(err) => {
                warn!("ignoring unreadable save file {}: {err}", self.path.display());
                Ok(None)
            }
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage, mainly for tests.
///
/// Clones share the same slot, so a test can keep a handle while the game
/// owns another. The record is kept in serialized form to exercise the same
/// encoding path as [`FileStorage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, data: &SaveData) -> Result<(), StorageError> {
        let json = serde_json::to_string(data)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>, StorageError> {
        let slot = self.slot.borrow();
        let Some(json) = slot.as_deref() else {
            return Ok(None);
        };
        match serde_json::from_str(json) {
            Ok(data) => Ok(Some(data)),
            Err(err) => {
                warn!("ignoring unreadable in-memory save: {err}");
                Ok(None)
            }
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use sudoka_generator::PuzzleGenerator;

    use super::*;

    fn sample_save() -> SaveData {
        let generated = PuzzleGenerator::generate_seeded(11, Difficulty::Easy);
        SaveData {
            board: generated.puzzle,
            solution: generated.solution,
            fixed: generated.fixed,
            notes: NoteGrid::new(),
            difficulty: generated.difficulty,
            seed: generated.seed,
            notes_mode: false,
            auto_notes: true,
            elapsed_ms: 1234,
            undo_stack: vec![Snapshot::new(generated.puzzle, NoteGrid::new())],
            redo_stack: Vec::new(),
            selected: Some(Position::new(4, 4)),
            player: Player::default(),
            theme: Theme::Dark,
        }
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let data = sample_save();
        storage.save(&data).unwrap();
        assert_eq!(storage.load().unwrap(), Some(data));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_storage_clones_share_the_slot() {
        let mut storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.save(&sample_save()).unwrap();
        assert!(observer.load().unwrap().is_some());
    }

    #[test]
    fn test_corrupted_record_loads_as_none() {
        let storage = MemoryStorage {
            slot: Rc::new(RefCell::new(Some("{not json".to_owned()))),
        };
        assert!(storage.load().unwrap().is_none());
    }

    fn temp_save_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("sudoka-test-{tag}-{nanos}/{SAVE_FILE}"))
    }

    #[test]
    fn test_file_storage_round_trip() {
        let mut storage = FileStorage::with_path(temp_save_path("round-trip"));
        assert!(storage.load().unwrap().is_none());

        let data = sample_save();
        storage.save(&data).unwrap();
        assert_eq!(storage.load().unwrap(), Some(data));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        // Clearing again is fine.
        storage.clear().unwrap();
    }

    #[test]
    fn test_file_storage_ignores_corrupted_file() {
        let path = temp_save_path("corrupted");
        let storage = FileStorage::with_path(&path);

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert!(storage.load().unwrap().is_none());

        fs::remove_file(&path).unwrap();
    }
}
