//! The interactive game controller.

use std::time::{Duration, Instant};

use log::warn;
use sudoka_core::{Board, Digit, FixedMask, Position};
use sudoka_generator::{Difficulty, PuzzleGenerator};
use sudoka_solver::{Hint, logical_hint};

use crate::{
    config::{GameConfig, Player, Theme},
    notes::NoteGrid,
    snapshot::Snapshot,
    storage::{FileStorage, SaveData, Storage, StorageError},
};

/// A sudoku game in progress.
///
/// The controller owns the board, the pencil marks, the undo/redo history,
/// and the play timer, and keeps the saved game on disk in sync: every
/// committed change (placement, note edit, hint, undo, redo) is persisted
/// through the configured [`Storage`].
///
/// State-changing operations return `bool` to report whether anything
/// happened; rejected moves (writing to a given, placing a conflicting
/// digit, re-placing the same digit) leave the game untouched.
///
/// # Examples
///
/// ```
/// use sudoka_game::{GameConfig, MemoryStorage, SudokuGame};
/// use sudoka_generator::Difficulty;
///
/// let mut game = SudokuGame::new(Box::new(MemoryStorage::new()));
/// game.new_game(GameConfig::new(Difficulty::Easy));
///
/// assert!(!game.is_solved());
/// assert!(!game.undo()); // nothing to undo yet
/// ```
#[derive(Debug)]
pub struct SudokuGame {
    storage: Box<dyn Storage>,
    generator: PuzzleGenerator,
    board: Board,
    solution: Board,
    fixed: FixedMask,
    notes: NoteGrid,
    difficulty: Difficulty,
    seed: u64,
    player: Player,
    theme: Theme,
    selected: Option<Position>,
    notes_mode: bool,
    auto_notes: bool,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    elapsed: Duration,
    resumed_at: Option<Instant>,
}

impl SudokuGame {
    /// Creates a controller with no puzzle loaded.
    ///
    /// Call [`new_game`](Self::new_game) or
    /// [`continue_last`](Self::continue_last) to start playing.
    #[must_use]
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            generator: PuzzleGenerator::new(),
            board: Board::new(),
            solution: Board::new(),
            fixed: FixedMask::new(),
            notes: NoteGrid::new(),
            difficulty: Difficulty::default(),
            seed: 0,
            player: Player::default(),
            theme: Theme::default(),
            selected: None,
            notes_mode: false,
            auto_notes: true,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            elapsed: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// Creates a controller persisting to the default save file location.
    pub fn with_file_storage() -> Result<Self, StorageError> {
        Ok(Self::new(Box::new(FileStorage::new()?)))
    }

    /// Starts a fresh game with a newly generated puzzle.
    pub fn new_game(&mut self, config: GameConfig) {
        let generated = self.generator.generate(config.difficulty);
        self.install(generated.puzzle, generated.solution, generated.seed, config);
    }

    /// Starts a fresh game with the puzzle identified by `seed`, for
    /// reproducible games.
    pub fn new_game_seeded(&mut self, seed: u64, config: GameConfig) {
        let generated = PuzzleGenerator::generate_seeded(seed, config.difficulty);
        self.install(generated.puzzle, generated.solution, generated.seed, config);
    }

    fn install(&mut self, puzzle: Board, solution: Board, seed: u64, config: GameConfig) {
        self.board = puzzle;
        self.solution = solution;
        self.fixed = FixedMask::from_board(&puzzle);
        self.notes = NoteGrid::new();
        self.difficulty = config.difficulty;
        self.seed = seed;
        self.player = config.player;
        self.theme = config.theme;
        self.selected = None;
        self.notes_mode = false;
        self.auto_notes = true;
        self.undo_stack = vec![self.snapshot()];
        self.redo_stack = Vec::new();
        self.elapsed = Duration::ZERO;
        self.resumed_at = Some(Instant::now());
        self.persist();
    }

    /// Resumes the saved game, returning whether one was loaded.
    ///
    /// A missing or unreadable save record simply returns `false`; the
    /// current state is only replaced on success.
    pub fn continue_last(&mut self) -> bool {
        let data = match self.storage.load() {
            Ok(Some(data)) => data,
            Ok(None) => return false,
            Err(err) => {
                warn!("failed to load saved game: {err}");
                return false;
            }
        };

        self.board = data.board;
        self.solution = data.solution;
        self.fixed = data.fixed;
        self.notes = data.notes;
        self.difficulty = data.difficulty;
        self.seed = data.seed;
        self.player = data.player;
        self.theme = data.theme;
        self.selected = data.selected;
        self.notes_mode = data.notes_mode;
        self.auto_notes = data.auto_notes;
        self.undo_stack = data.undo_stack;
        self.redo_stack = data.redo_stack;
        if self.undo_stack.is_empty() {
            self.undo_stack.push(self.snapshot());
        }
        self.elapsed = Duration::from_millis(data.elapsed_ms);
        self.resumed_at = Some(Instant::now());
        true
    }

    /// Selects a cell (or clears the selection with `None`).
    pub fn select_cell(&mut self, pos: Option<Position>) {
        self.selected = pos;
    }

    /// Returns the selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Enters a digit at a cell, or clears it with `None`.
    ///
    /// In notes mode a digit toggles the cell's pencil mark instead (and
    /// `None` does nothing). Moves are rejected without changing state when
    /// the cell is a given, when the digit equals the cell's current
    /// content, or when the placement would conflict with a peer.
    ///
    /// Returns whether the game state changed.
    pub fn place_number(&mut self, pos: Position, digit: Option<Digit>) -> bool {
        if self.fixed.is_fixed(pos) {
            return false;
        }

        if self.notes_mode {
            let Some(digit) = digit else {
                return false;
            };
            self.notes.toggle(pos, digit);
            self.commit();
            return true;
        }

        if self.board.get(pos) == digit {
            return false;
        }
        if let Some(digit) = digit {
            if !self.board.is_valid_placement(pos, digit) {
                return false;
            }
        }

        self.board.set(pos, digit);
        if self.auto_notes && let Some(digit) = digit {
            self.notes.remove_from_peers(pos, digit);
        }
        self.commit();
        true
    }

    /// Applies one logically forced placement, if any exists.
    ///
    /// The hint is played onto the board like a regular move and the reason
    /// is returned so the UI can explain it.
    pub fn hint(&mut self) -> Option<Hint> {
        let hint = logical_hint(&self.board)?;
        self.board.set(hint.pos, Some(hint.digit));
        if self.auto_notes {
            self.notes.remove_from_peers(hint.pos, hint.digit);
        }
        self.commit();
        Some(hint)
    }

    /// Reverts the last committed change, returning whether anything was
    /// undone.
    ///
    /// The initial puzzle state always stays on the history, so a fresh game
    /// has nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.undo_stack.len() <= 1 {
            return false;
        }
        // The top of the undo stack is the current state; move it aside and
        // restore the one below it.
        if let Some(current) = self.undo_stack.pop() {
            self.redo_stack.push(current);
        }
        if let Some(&previous) = self.undo_stack.last() {
            self.restore(previous);
        }
        self.persist();
        true
    }

    /// Re-applies the most recently undone change, returning whether
    /// anything was redone.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(next);
        self.restore(next);
        self.persist();
        true
    }

    /// Toggles notes mode, returning the new state.
    pub fn toggle_notes_mode(&mut self) -> bool {
        self.notes_mode = !self.notes_mode;
        self.notes_mode
    }

    /// Toggles automatic note pruning, returning the new state.
    pub fn toggle_auto_notes(&mut self) -> bool {
        self.auto_notes = !self.auto_notes;
        self.auto_notes
    }

    /// Pauses the play timer.
    pub fn pause(&mut self) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.elapsed += resumed_at.elapsed();
        }
    }

    /// Resumes the play timer after [`pause`](Self::pause).
    pub fn resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    /// Deletes the saved game record.
    pub fn clear_save(&mut self) {
        if let Err(err) = self.storage.clear() {
            warn!("failed to clear saved game: {err}");
        }
    }

    /// Returns whether the board is completely and correctly filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_solved() && self.board == self.solution
    }

    /// Returns whether the cell is a given and thus not editable.
    #[must_use]
    pub fn is_readonly(&self, pos: Position) -> bool {
        self.fixed.is_fixed(pos)
    }

    /// Returns the peers conflicting with the digit at `pos`, for error
    /// highlighting.
    #[must_use]
    pub fn conflicts(&self, pos: Position) -> Vec<Position> {
        self.board.conflicts(pos)
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the given-cell mask of the current puzzle.
    #[must_use]
    pub fn fixed(&self) -> &FixedMask {
        &self.fixed
    }

    /// Returns the pencil marks.
    #[must_use]
    pub fn notes(&self) -> &NoteGrid {
        &self.notes
    }

    /// Returns the difficulty of the current puzzle.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the seed of the current puzzle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the player identity.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the UI theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether notes mode is active.
    #[must_use]
    pub fn notes_mode(&self) -> bool {
        self.notes_mode
    }

    /// Returns whether automatic note pruning is active.
    #[must_use]
    pub fn auto_notes(&self) -> bool {
        self.auto_notes
    }

    /// Returns the total play time, including the currently running stretch.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let running = self.resumed_at.map_or(Duration::ZERO, |t| t.elapsed());
        self.elapsed + running
    }

    /// Returns the total play time in whole milliseconds, as persisted.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.notes)
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.notes = snapshot.notes;
    }

    /// Records the current state on the history and persists it.
    fn commit(&mut self) {
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        self.persist();
    }

    /// Best-effort save; a failing backend downgrades to a warning so play
    /// can continue.
    fn persist(&mut self) {
        let data = self.save_data();
        if let Err(err) = self.storage.save(&data) {
            warn!("failed to persist game: {err}");
        }
    }

    fn save_data(&self) -> SaveData {
        SaveData {
            board: self.board,
            solution: self.solution,
            fixed: self.fixed,
            notes: self.notes,
            difficulty: self.difficulty,
            seed: self.seed,
            notes_mode: self.notes_mode,
            auto_notes: self.auto_notes,
            elapsed_ms: self.elapsed_ms(),
            undo_stack: self.undo_stack.clone(),
            redo_stack: self.redo_stack.clone(),
            selected: self.selected,
            player: self.player.clone(),
            theme: self.theme,
        }
    }
}
