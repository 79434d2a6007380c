//! Puzzle generation for sudoka.
//!
//! [`PuzzleGenerator`] produces boards with a single solution at four
//! [`Difficulty`] levels. Generation is seedable and fully deterministic:
//! the seed stored in a [`GeneratedPuzzle`] reproduces it bit for bit.
//!
//! If no attempt yields an acceptable puzzle (which is rare), the generator
//! falls back to a curated puzzle of the requested difficulty instead of
//! failing.
//!
//! # Examples
//!
//! ```
//! use sudoka_generator::{Difficulty, PuzzleGenerator};
//!
//! let mut generator = PuzzleGenerator::new();
//! let generated = generator.generate(Difficulty::Easy);
//!
//! assert!(generated.solution.is_solved());
//! assert!(generated.puzzle.filled_count() >= Difficulty::Easy.min_givens());
//! ```

pub mod difficulty;
mod fallback;
pub mod generate;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generate::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator},
};
