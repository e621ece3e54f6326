//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one or more puzzles and prints the problem, solution, and
//! seed of each. Seeds make puzzles reproducible:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! cargo run --example generate_puzzle -- --phrase 2026-08-27
//! cargo run --example generate_puzzle -- --count 3
//! ```
//!
//! Set `RUST_LOG=debug` to see generation timing.

use std::process;

use clap::{Parser, ValueEnum};
use kumiko_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
            Tier::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to carve for.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: Tier,

    /// Exact seed as 64 hex characters. Mutually exclusive with --phrase.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase (e.g. a date for a daily puzzle).
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Number of puzzles to generate (seeded runs always produce one).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();
    let difficulty = Difficulty::from(args.difficulty);

    let fixed_seed = match &args.seed {
        Some(hex) => match hex.parse::<PuzzleSeed>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("invalid --seed: {err}");
                process::exit(2);
            }
        },
        None => args.phrase.as_deref().map(PuzzleSeed::from_phrase),
    };

    let count = if fixed_seed.is_some() { 1 } else { args.count };
    for _ in 0..count {
        let puzzle = match fixed_seed {
            Some(seed) => generator.generate_with_seed(difficulty, seed),
            None => generator.generate(difficulty),
        };
        println!("Seed:");
        println!("  {}", puzzle.seed);
        println!("Problem ({}):", puzzle.difficulty);
        println!("  {}", puzzle.problem);
        println!("Solution:");
        println!("  {}", puzzle.solution);
        println!();
    }
}
