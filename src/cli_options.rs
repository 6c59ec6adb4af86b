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
//! Without a labyrinth file, or with `--generate`, Labyrinth starts with a random labyrinth.
//! Without `--algorithm`, Labyrinth reads its commands from the standard input.
//!
//! # Examples
//!
//! Verify a labyrinth file:
//!
//! ```text
//! $ labyrinth --check maze.txt
//! Labyrinth state : ok
//! ```
//!
//! Generate a 10x20 labyrinth, save it, and animate the shortest path:
//!
//! ```text
//! $ labyrinth -g --rows 10 --cols 20 -s 42 -o maze.json -a shortest -r
//! ```
//!
//! Compare both searches over 1000 random labyrinths:
//!
//! ```text
//! $ labyrinth --stress 1000
//! 1000 labyrinths: 1000 valid, 734 solved, 266 without solution, 0 disagreements
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::{self, Algorithm, Application, StressReport};
use crate::config::{COPYRIGHT_NOTICE, DEFAULT_DIMENSION, DEFAULT_FRAME_DELAY_MS};
use crate::draw::Draw;
use crate::maze::generator;
use crate::maze::grid::Maze;
use crate::maze::search_error::SearchError;
use crate::maze::validator;
use crate::saver::layout::SaverMaze;

/// Generate, verify, and solve labyrinths in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Labyrinth file, in text format or in JSON format with the .json extension
    file: Option<PathBuf>,

    /// Generate a random labyrinth instead of loading a file
    #[arg(short, long, default_value_t = false, conflicts_with = "file")]
    generate: bool,

    /// Number of rows of the generated labyrinths
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns of the generated labyrinths
    #[arg(long)]
    cols: Option<usize>,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run the search and exit instead of reading commands from the standard input
    #[arg(value_enum, short, long)]
    algorithm: Option<Algorithm>,

    /// Replay the path found by the search
    #[arg(short, long, default_value_t = false, requires = "algorithm")]
    replay: bool,

    /// Only verify the labyrinth
    #[arg(short, long, default_value_t = false)]
    check: bool,

    /// Pause between the frames of the animations, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    delay_ms: u64,

    /// Do not animate the searches
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Save the labyrinth to the given file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run both searches on the given number of random labyrinths and compare the results
    #[arg(long)]
    stress: Option<usize>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Random seed: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    //
    // Compare the searches over random labyrinths
    //
    if let Some(count) = args.stress {
        let report: StressReport = application::stress_test(&mut rng, count);
        println!(
            "{} labyrinths: {} valid, {} solved, {} without solution, {} disagreements",
            report.runs,
            report.runs - report.invalid,
            report.solved,
            report.unsolved,
            report.disagreements
        );
        return if report.invalid == 0 && report.disagreements == 0 {
            0
        } else {
            1
        };
    }

    //
    // Load or generate the labyrinth
    //
    let size: Option<(usize, usize)> = match (args.rows, args.cols) {
        (None, None) => None,
        (rows, cols) => Some((
            rows.unwrap_or(DEFAULT_DIMENSION),
            cols.unwrap_or(DEFAULT_DIMENSION),
        )),
    };
    let maze: Maze = match &args.file {
        Some(file) if !args.generate => match load(file) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: {}: {e}", file.display());
                return 1;
            }
        },
        _ => match size {
            Some((rows, cols)) => generator::generate_with_size(&mut rng, rows, cols),
            None => generator::generate_labyrinth(&mut rng),
        },
    };

    let valid: bool = validator::check_labyrinth(&maze);
    println!("Labyrinth state : {}", if valid { "ok" } else { "invalid" });
    if args.check {
        return if valid { 0 } else { 1 };
    }

    if let Some(output) = &args.output {
        if let Err(e) = SaverMaze::new(output.clone()).save_maze(&maze) {
            eprintln!("Error: {}: {e}", output.display());
            return 1;
        }
        debug!("Labyrinth saved in {output:?}");
    }

    let draw: Draw = Draw::new(Duration::from_millis(args.delay_ms), !args.quiet);
    draw.show(&maze);
    let mut app: Application<StdRng> = Application::new(maze, rng, draw);
    app.set_size(size);

    //
    // Run a single search
    //
    if let Some(algorithm) = args.algorithm {
        let ret: Result<(), SearchError> = app.search(algorithm);
        match ret {
            Ok(()) => {
                println!(
                    "Output reached: {} cells",
                    app.maze().solution_path().len()
                );
                if args.replay {
                    app.replay();
                }
            }
            Err(e) => println!("{e}"),
        }
        return 0;
    }

    //
    // Interactive mode
    //
    match app.run_interactive(io::stdin().lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Load the labyrinth from the given file.
fn load(file: &Path) -> Result<Maze, Box<dyn Error>> {
    match SaverMaze::new(file.to_path_buf()).get_maze()? {
        Some(maze) => Ok(maze),
        None => Err(Box::new(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        ))),
    }
}
