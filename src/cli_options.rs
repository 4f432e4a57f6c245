/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Labyrinth.

Labyrinth is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Labyrinth is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Labyrinth. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Labyrinth works as a filter. In generation mode, it writes a random maze in the `MAZE`
//! byte format to the standard output. Otherwise, it reads a maze from the standard input,
//! solves it, and prints an SVG image of the maze and its solution.
//!
//! # Examples
//!
//! Generate a maze with 30 columns and 20 rows, then draw it:
//!
//! ```text
//! $ labyrinth -g -w 30 -h 20 -s 1234 > maze.mze
//! $ labyrinth < maze.mze > maze.svg
//! ```
//!
//! Print the solution as JSON:
//!
//! ```text
//! $ labyrinth --json < maze.mze
//! {
//!   "rows": 20,
//!   "columns": 30,
//!   "entry": [
//!     7,
//!     29
//!   ],
//!   ...
//! }
//! ```

use clap::{ArgAction, Parser};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io;

use labyrinth::maze::report::SolutionReport;
use labyrinth::maze::{Maze, MazeError, codec, svg};

use crate::config::{COPYRIGHT_NOTICE, USAGE};

/// Generate and solve mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE, disable_help_flag = true)]
struct Args {
    /// Generate a random maze and write it to the standard output
    #[arg(short, long, default_value_t = false, requires = "width", requires = "height")]
    generate: bool,

    /// Number of columns of the generated maze
    #[arg(short, long, requires = "generate", value_parser = clap::value_parser!(u8).range(2..=255))]
    width: Option<u8>,

    /// Number of rows of the generated maze
    #[arg(short = 'h', long, requires = "generate", value_parser = clap::value_parser!(u8).range(2..=255))]
    height: Option<u8>,

    /// Seed for the random generator
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// Print the solution as JSON instead of drawing the maze
    #[arg(long, default_value_t = false, conflicts_with = "generate")]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let ret: Result<(), MazeError> = if args.generate {
        generate(&args)
    } else {
        solve(args.json)
    };

    match ret {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            1
        }
    }
}

/// Carve a random maze and write it to the standard output.
fn generate(args: &Args) -> Result<(), MazeError> {
    let columns: usize = args.width.map(usize::from).unwrap_or_default();
    let rows: usize = args.height.map(usize::from).unwrap_or_default();
    let seed: u64 = args.seed.unwrap_or_else(rand::random);
    info!("Generating a {rows}x{columns} maze with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let maze: Maze = Maze::random(rows, columns, &mut rng)?;
    debug!(
        "Entry ({}, {}), exit ({}, {})",
        maze.entry().row(),
        maze.entry().column(),
        maze.exit().row(),
        maze.exit().column()
    );
    codec::write_to(maze.grid(), io::stdout().lock())
}

/// Read a maze from the standard input, solve it, and print the result.
fn solve(json: bool) -> Result<(), MazeError> {
    let grid = codec::read_from(io::stdin().lock())?;
    let maze: Maze = Maze::build(grid)?;

    if json {
        let report: SolutionReport = SolutionReport::from(&maze);
        let text: String = report
            .to_json()
            .map_err(|e| MazeError::Io(io::Error::other(e)))?;
        println!("{text}");
    } else {
        print!("{}", svg::render(&maze));
    }
    Ok(())
}
