//! Example demonstrating the backtracking solver on puzzle text.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ```
//!
//! The puzzle is a single 81-character string in row-major order, with `.`
//! marking empty cells. Enable debug logging with `RUST_LOG=debug`.

use std::process;

use clap::Parser;
use ninefold_core::DigitGrid;
use ninefold_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle string (digits 1-9, '.' for empty cells).
    puzzle: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid: DigitGrid = match args.puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    log::debug!("solving {grid}");
    match solve(&grid) {
        Ok(solution) => {
            println!("Puzzle:");
            println!("  {grid}");
            println!();
            println!("Solution:");
            println!("  {solution}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
