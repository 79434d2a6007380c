//! Solved-grid construction and clue removal.

use log::{debug, warn};
use rand::{RngExt, SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg64Mcg;
use sudoka_core::{Board, Digit, FixedMask, Position};
use sudoka_solver::count_solutions;

use crate::{difficulty::Difficulty, fallback::fallback};

/// Tuning knobs for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Difficulty to aim for.
    pub difficulty: Difficulty,
    /// Number of givens the removal loop tries to reach.
    pub target_givens: usize,
    /// Fewest givens an attempt may end with and still be accepted.
    pub min_givens: usize,
    /// How many fresh grids to try before falling back to a curated puzzle.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// Creates the default configuration for a difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            target_givens: difficulty.target_givens(),
            min_givens: difficulty.min_givens(),
            max_attempts: 8,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// A freshly generated puzzle together with everything needed to play it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board with clues removed.
    pub puzzle: Board,
    /// The unique completion of `puzzle`.
    pub solution: Board,
    /// Mask of the given cells of `puzzle`.
    pub fixed: FixedMask,
    /// Seed that reproduces this puzzle via [`PuzzleGenerator::generate_seeded`].
    pub seed: u64,
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
}

/// Generates sudoku puzzles with a unique solution.
///
/// Each puzzle starts from a random solved grid; clues are then removed one
/// by one in random order, keeping a removal only if the board still has
/// exactly one solution. Every generated puzzle records the seed that
/// produced it, so any puzzle can be regenerated exactly.
///
/// # Examples
///
/// ```
/// use sudoka_generator::{Difficulty, PuzzleGenerator};
///
/// let mut generator = PuzzleGenerator::from_seed(42);
/// let generated = generator.generate(Difficulty::Medium);
///
/// assert!(generated.solution.is_solved());
/// assert!(generated.puzzle.filled_count() >= Difficulty::Medium.min_givens());
///
/// let again = PuzzleGenerator::generate_seeded(generated.seed, Difficulty::Medium);
/// assert_eq!(again.puzzle, generated.puzzle);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from the operating system's entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a generator with a fixed seed, producing a reproducible
    /// sequence of puzzles.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generates a puzzle with the default configuration for `difficulty`.
    pub fn generate(&mut self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with(&GeneratorConfig::new(difficulty))
    }

    /// Generates a puzzle with an explicit configuration.
    pub fn generate_with(&mut self, config: &GeneratorConfig) -> GeneratedPuzzle {
        // Each puzzle gets its own sub-seed so it can be reproduced without
        // replaying the generator's whole history.
        let seed = self.rng.random();
        Self::generate_seeded_with(seed, config)
    }

    /// Regenerates the puzzle identified by `seed` at `difficulty`.
    #[must_use]
    pub fn generate_seeded(seed: u64, difficulty: Difficulty) -> GeneratedPuzzle {
        Self::generate_seeded_with(seed, &GeneratorConfig::new(difficulty))
    }

    /// Regenerates the puzzle identified by `seed` with an explicit
    /// configuration.
    #[must_use]
    pub fn generate_seeded_with(seed: u64, config: &GeneratorConfig) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let difficulty = config.difficulty;

        for attempt in 0..config.max_attempts {
            if let Some((puzzle, solution)) = try_generate(&mut rng, config) {
                debug!(
                    "generated {difficulty} puzzle with {} givens (seed {seed}, attempt {attempt})",
                    puzzle.filled_count()
                );
                return GeneratedPuzzle {
                    puzzle,
                    solution,
                    fixed: FixedMask::from_board(&puzzle),
                    seed,
                    difficulty,
                };
            }
        }

        warn!("generation failed for {difficulty} (seed {seed}), using fallback puzzle");
        let (puzzle, solution) = fallback(difficulty);
        GeneratedPuzzle {
            puzzle,
            solution,
            fixed: FixedMask::from_board(&puzzle),
            seed,
            difficulty,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One generation attempt: build a solved grid, then thin it out.
fn try_generate(rng: &mut Pcg64Mcg, config: &GeneratorConfig) -> Option<(Board, Board)> {
    let solution = solved_grid(rng);
    let mut puzzle = solution;

    let mut order = Position::ALL;
    order.shuffle(rng);

    for pos in order {
        if puzzle.filled_count() <= config.target_givens {
            break;
        }
        let backup = puzzle.get(pos);
        puzzle.set(pos, None);
        if count_solutions(&puzzle, 2) != 1 {
            puzzle.set(pos, backup);
        }
    }

    let accepted =
        count_solutions(&puzzle, 2) == 1 && puzzle.filled_count() >= config.min_givens;
    accepted.then_some((puzzle, solution))
}

/// Builds a random complete solution.
///
/// Starts from a fixed valid pattern and applies the symmetry-preserving
/// shuffles: band order, row order within each band, stack order, and column
/// order within each stack. Every result is a valid solved grid.
fn solved_grid(rng: &mut Pcg64Mcg) -> Board {
    let row_order = shuffled_lines(rng);
    let column_order = shuffled_lines(rng);

    let mut board = Board::new();
    for pos in Position::ALL {
        let y = row_order[usize::from(pos.y())];
        let x = column_order[usize::from(pos.x())];
        board.set(pos, Some(Digit::ALL[(y * 3 + y / 3 + x) % 9]));
    }
    board
}

/// Produces a permutation of 0..9 that only reorders whole chunks of three
/// and lines within a chunk.
fn shuffled_lines(rng: &mut Pcg64Mcg) -> [usize; 9] {
    let mut chunks = [0, 1, 2];
    chunks.shuffle(rng);

    let mut lines = [0; 9];
    for (i, chunk) in chunks.into_iter().enumerate() {
        let mut in_chunk = [chunk * 3, chunk * 3 + 1, chunk * 3 + 2];
        in_chunk.shuffle(rng);
        lines[i * 3..i * 3 + 3].copy_from_slice(&in_chunk);
    }
    lines
}
