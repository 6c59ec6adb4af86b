/*
application.rs

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

//! Drive the labyrinth: generate, search, and replay.
//!
//! The [`Application`] object owns the current labyrinth and chains the operations of the
//! [`crate::maze`] module in the right order, with the marker resets in between.
//! It also runs the interactive menu.

use clap::ValueEnum;
use log::{debug, info, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};

use crate::draw::Draw;
use crate::maze::deep_search;
use crate::maze::generator;
use crate::maze::grid::Maze;
use crate::maze::search_error::SearchError;
use crate::maze::shortest_path;
use crate::maze::solution;
use crate::maze::validator;

/// Search algorithm.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Deep exploration with the right-hand rule
    Deep,

    /// Breadth first search for the shortest path
    Shortest,
}

/// Interactive menu commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Generate,
    SimpleSearch,
    ShortestPath,
    Replay,
    Exit,
}

impl Command {
    /// Return the command for the given key, if any.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'g' => Some(Command::Generate),
            's' => Some(Command::SimpleSearch),
            'f' => Some(Command::ShortestPath),
            'r' => Some(Command::Replay),
            'e' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Manage the current labyrinth.
pub struct Application<R: Rng> {
    /// Current labyrinth.
    maze: Maze,

    /// Whether the latest search found the exit. The stored path can be replayed only then.
    found: bool,

    /// Size of the generated labyrinths. Random when not set.
    size: Option<(usize, usize)>,

    /// Random source for generating labyrinths.
    rng: R,

    /// Terminal output.
    draw: Draw,
}

impl<R: Rng> Application<R> {
    /// Create an [`Application`] object.
    pub fn new(maze: Maze, rng: R, draw: Draw) -> Self {
        Self {
            maze,
            found: false,
            size: None,
            rng,
            draw,
        }
    }

    /// Set the size of the labyrinths that [`Application::generate`] builds.
    pub fn set_size(&mut self, size: Option<(usize, usize)>) {
        self.size = size;
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    /// Replace the labyrinth with a new random one.
    pub fn generate(&mut self) {
        self.maze = match self.size {
            Some((rows, cols)) => generator::generate_with_size(&mut self.rng, rows, cols),
            None => generator::generate_labyrinth(&mut self.rng),
        };
        self.found = false;
        if !validator::check_labyrinth(&self.maze) {
            warn!("Generated labyrinth is not consistent");
        }
        self.draw.show(&self.maze);
    }

    /// Explore the labyrinth deeply and store the path to the exit.
    pub fn simple_search(&mut self) -> Result<(), SearchError> {
        self.maze.clear_all_markers();
        let draw: &mut Draw = &mut self.draw;
        let ret: Result<(), SearchError> =
            deep_search::find_exit_deep_exploration(&mut self.maze, |m| draw.frame(m));
        solution::store_path(&mut self.maze);
        self.found = ret.is_ok();
        ret
    }

    /// Look for the shortest path and store it.
    ///
    /// On success, the labyrinth is printed with only the solution path marked.
    pub fn shortest_path(&mut self) -> Result<(), SearchError> {
        self.maze.clear();
        let draw: &mut Draw = &mut self.draw;
        let ret: Result<(), SearchError> =
            shortest_path::find_shortest_path(&mut self.maze, |m| draw.frame(m));
        solution::store_path(&mut self.maze);
        self.maze.clear_research_markers();
        self.found = ret.is_ok();
        if self.found {
            self.draw.show(&self.maze);
        }
        ret
    }

    /// Run the given search.
    pub fn search(&mut self, algorithm: Algorithm) -> Result<(), SearchError> {
        debug!("Running the {algorithm:?} search");
        match algorithm {
            Algorithm::Deep => self.simple_search(),
            Algorithm::Shortest => self.shortest_path(),
        }
    }

    /// Replay the path of the latest successful search.
    ///
    /// Return `false` when there is no path to replay.
    pub fn replay(&mut self) -> bool {
        if !self.found {
            info!("No path to replay");
            return false;
        }
        self.maze.clear_all_markers();
        let draw: &mut Draw = &mut self.draw;
        solution::replay_latest_path(&mut self.maze, |m| draw.frame(m));
        true
    }

    /// Run the given command.
    ///
    /// Return `false` for the [`Command::Exit`] command.
    pub fn run_command(&mut self, command: Command) -> bool {
        match command {
            Command::Generate => self.generate(),
            Command::SimpleSearch | Command::ShortestPath => {
                let algorithm: Algorithm = if command == Command::SimpleSearch {
                    Algorithm::Deep
                } else {
                    Algorithm::Shortest
                };
                match self.search(algorithm) {
                    Ok(()) => println!(
                        "Output reached: {} cells",
                        self.maze.solution_path().len()
                    ),
                    Err(e) => println!("{e}"),
                }
            }
            Command::Replay => {
                if !self.replay() {
                    println!("No path to replay");
                }
            }
            Command::Exit => return false,
        }
        true
    }

    /// Read commands from the given input until the exit command or the end of the input.
    pub fn run_interactive<B: BufRead>(&mut self, input: B) -> io::Result<()> {
        self.print_menu()?;
        for line in input.lines() {
            let line: String = line?;
            let mut printed: bool = false;
            for command in line.chars().filter_map(Command::from_key) {
                if !self.run_command(command) {
                    return Ok(());
                }
                self.print_menu()?;
                printed = true;
            }
            if !printed {
                debug!("Ignoring input {line:?}");
            }
        }
        Ok(())
    }

    fn print_menu(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.found {
            writeln!(
                stdout,
                "<g = generate>, <s = simple search>, <f = find shortest path>, \
                 <r = replay latest>, <e = exit>"
            )?;
        } else {
            writeln!(
                stdout,
                "<g = generate>, <s = simple search>, <f = find shortest path>, <e = exit>"
            )?;
        }
        stdout.flush()
    }
}

/// Results of running both searches over many random labyrinths.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StressReport {
    /// Number of labyrinths generated.
    pub runs: usize,

    /// Labyrinths that the validator rejected.
    pub invalid: usize,

    /// Labyrinths with a path between the entrance and the exit.
    pub solved: usize,

    /// Labyrinths without a path.
    pub unsolved: usize,

    /// Labyrinths for which the searches do not agree: one finds a path and not the other, or
    /// the breadth first search finds a longer path.
    pub disagreements: usize,
}

/// Generate `count` labyrinths, solve each of them with both searches, and compare the results.
pub fn stress_test<R: Rng + ?Sized>(rng: &mut R, count: usize) -> StressReport {
    let mut report: StressReport = StressReport::default();

    for i in 0..count {
        let mut maze: Maze = generator::generate_labyrinth(rng);
        report.runs += 1;
        if !validator::check_labyrinth(&maze) {
            report.invalid += 1;
        }

        maze.clear_all_markers();
        let deep: Result<(), SearchError> =
            deep_search::find_exit_deep_exploration(&mut maze, |_| ());
        solution::store_path(&mut maze);
        let deep_length: usize = maze.solution_path().len();

        maze.clear();
        let shortest: Result<(), SearchError> = shortest_path::find_shortest_path(&mut maze, |_| ());
        solution::store_path(&mut maze);
        maze.clear_research_markers();
        let shortest_length: usize = maze.solution_path().len();

        match (deep, shortest) {
            (Ok(()), Ok(())) if shortest_length <= deep_length => report.solved += 1,
            (Err(SearchError::NoSolution), Err(SearchError::NoSolution)) => report.unsolved += 1,
            (d, s) => {
                warn!(
                    "Run {i}: deep search {d:?} ({deep_length} cells), \
                     shortest path {s:?} ({shortest_length} cells)\n{maze}"
                );
                report.disagreements += 1;
            }
        }
    }
    info!("{report:?}");
    report
}
