//! Example demonstrating puzzle generation.
//!
//! Generates a puzzle at the requested difficulty and prints the board, its
//! solution, and the seed that reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a previously generated puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --seed 12345
//! ```
//!
//! Generate several puzzles at once:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5
//! ```

use clap::Parser;
use sudoka_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzle.
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed to reproduce a specific puzzle. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.seed {
        Some(seed) => {
            print_puzzle(&PuzzleGenerator::generate_seeded(seed, args.difficulty));
        }
        None => {
            let mut generator = PuzzleGenerator::new();
            for i in 0..args.count {
                if i > 0 {
                    println!();
                }
                print_puzzle(&generator.generate(args.difficulty));
            }
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Difficulty: {}", generated.difficulty);
    println!("Seed:       {}", generated.seed);
    println!("Givens:     {}", generated.puzzle.filled_count());
    println!();
    println!("Puzzle:");
    print_grid(&generated.puzzle.to_string());
    println!();
    println!("Solution:");
    print_grid(&generated.solution.to_string());
}

fn print_grid(cells: &str) {
    for row in 0..9 {
        println!("  {}", &cells[row * 9..row * 9 + 9]);
    }
}
