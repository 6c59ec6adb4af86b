/*
draw.rs

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

//! Draw labyrinths in the terminal.
//!
//! Each cell is three characters wide and two lines high:
//!
//! ```text
//! +--+--+
//! |@ * |
//! +  +  +
//! |  |  |
//! +--+--+
//! ```
//!
//! `@` is the current position of the search, `*` marks the cells of the research path or of
//! the solution.

use log::warn;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::grid::Maze;

/// Escape sequence that clears the screen and moves the cursor to the top left corner.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Escape sequence that switches the terminal to replace mode.
const REPLACE_MODE: &str = "\x1b[4l";

/// Return the ASCII representation of the labyrinth.
pub fn labyrinth_to_ascii(maze: &Maze) -> String {
    let mut out: String = String::new();

    // Top border
    for col in 0..maze.cols() {
        out.push('+');
        out.push_str(wall_or_space(maze.cell((0, col)), Direction::Up, "--", "  "));
    }
    out.push_str("+\n");

    for row in 0..maze.rows() {
        out.push_str(wall_or_space(maze.cell((row, 0)), Direction::Left, "|", " "));
        for col in 0..maze.cols() {
            let cell: Option<&Cell> = maze.cell((row, col));
            out.push_str(match cell {
                Some(c) if c.is_current() => "@ ",
                Some(c) if c.is_on_solution() || c.is_bfs_visited() => "* ",
                _ => "  ",
            });
            out.push_str(wall_or_space(cell, Direction::Right, "|", " "));
        }
        out.push('\n');

        for col in 0..maze.cols() {
            out.push('+');
            out.push_str(wall_or_space(
                maze.cell((row, col)),
                Direction::Down,
                "--",
                "  ",
            ));
        }
        out.push_str("+\n");
    }
    out
}

fn wall_or_space(
    cell: Option<&Cell>,
    direction: Direction,
    wall: &'static str,
    space: &'static str,
) -> &'static str {
    match cell {
        Some(c) if c.has_wall(direction) => wall,
        _ => space,
    }
}

/// Draw object that prints the labyrinth in the terminal, one frame at a time.
#[derive(Debug, Clone)]
pub struct Draw {
    /// Pause before each frame.
    delay: Duration,

    /// Whether to print the intermediate frames of the searches.
    /// When disabled, only the frames requested with [`Draw::show`] are printed.
    animate: bool,

    /// Number of frames received from the searches, printed or not.
    frames: usize,
}

impl Draw {
    /// Create a [`Draw`] object.
    pub fn new(delay: Duration, animate: bool) -> Self {
        Self {
            delay,
            animate,
            frames: 0,
        }
    }

    /// Return the number of frames received since the object was created.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Render function for the searches and the replay.
    pub fn frame(&mut self, maze: &Maze) {
        self.frames += 1;
        if !self.animate {
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if let Err(e) = Self::print(maze, true) {
            warn!("Cannot draw the labyrinth: {e}");
        }
    }

    /// Print the labyrinth, without clearing the screen.
    pub fn show(&self, maze: &Maze) {
        if let Err(e) = Self::print(maze, false) {
            warn!("Cannot draw the labyrinth: {e}");
        }
    }

    fn print(maze: &Maze, clear_screen: bool) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if clear_screen {
            write!(stdout, "{CLEAR_SCREEN}{REPLACE_MODE}")?;
        }
        write!(stdout, "{}", labyrinth_to_ascii(maze))?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::loader::parse_labyrinth;
    use crate::maze::shortest_path::find_shortest_path;
    use crate::maze::solution::store_path;

    #[test]
    fn walls_and_markers_are_drawn() {
        let mut maze: Maze = parse_labyrinth("2 2 0 0 1 1\n9 12\n7 7\n").unwrap();
        assert_eq!(
            labyrinth_to_ascii(&maze),
            "+--+--+\n|     |\n+  +  +\n|  |  |\n+--+--+\n"
        );

        find_shortest_path(&mut maze, |_| ()).unwrap();
        store_path(&mut maze);
        maze.clear_research_markers();
        assert_eq!(
            labyrinth_to_ascii(&maze),
            "+--+--+\n|*  * |\n+  +  +\n|  |* |\n+--+--+\n"
        );
    }

    #[test]
    fn frames_are_counted_without_animation() {
        let maze: Maze = parse_labyrinth("1 2 0 0 0 1\n11 14\n").unwrap();
        let mut draw: Draw = Draw::new(Duration::ZERO, false);
        draw.frame(&maze);
        draw.frame(&maze);
        assert_eq!(draw.frames(), 2);
    }
}
