/*
validator.rs

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

//! Verify the walls of a labyrinth.

use log::warn;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::grid::Maze;

/// Check that failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Check {
    /// Empty grid, or entrance or exit outside the grid.
    Attributes,

    /// A border cell has no wall on the side of the border.
    Border(Direction),

    /// The right wall of the cell does not match the left wall of the cell on its right.
    RightLeft,

    /// The bottom wall of the cell does not match the top wall of the cell below it.
    UpDown,
}

/// First inconsistency found in a labyrinth.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub row: usize,
    pub col: usize,
    pub check: Check,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.check {
            Check::Attributes => write!(f, "Labyrinth attributes issue"),
            Check::Border(d) => {
                write!(f, "{d} border check failure at {}, {}", self.row, self.col)
            }
            Check::RightLeft => write!(
                f,
                "Right/left check failure at {}, {} with {}, {}",
                self.row,
                self.col,
                self.row,
                self.col + 1
            ),
            Check::UpDown => write!(
                f,
                "Up/down check failure at {}, {} with {}, {}",
                self.row,
                self.col,
                self.row + 1,
                self.col
            ),
        }
    }
}

impl Error for ValidationError {}

/// Verify the labyrinth and return the first inconsistency.
///
/// # Errors
///
/// The function returns an error when the grid is empty, when the entrance or the exit is outside
/// the grid, when a border cell is open on the border, or when two adjacent cells disagree on the
/// wall that separates them.
pub fn validate(maze: &Maze) -> Result<(), ValidationError> {
    let (rows, cols) = (maze.rows(), maze.cols());

    if rows == 0 || cols == 0 || !maze.ends_inside() {
        return Err(ValidationError {
            row: 0,
            col: 0,
            check: Check::Attributes,
        });
    }

    for cell in maze.iter() {
        let (row, col) = cell.position();
        let fail = |check: Check| Err(ValidationError { row, col, check });

        let borders: [(bool, Direction); 4] = [
            (row == 0, Direction::Up),
            (row == rows - 1, Direction::Down),
            (col == 0, Direction::Left),
            (col == cols - 1, Direction::Right),
        ];
        if let Some((_, d)) = borders
            .iter()
            .find(|(on_border, d)| *on_border && !cell.has_wall(*d))
        {
            return fail(Check::Border(*d));
        }

        if col < cols - 1
            && cell.has_wall(Direction::Right) != maze[(row, col + 1)].has_wall(Direction::Left)
        {
            return fail(Check::RightLeft);
        }
        if row < rows - 1
            && cell.has_wall(Direction::Down) != maze[(row + 1, col)].has_wall(Direction::Up)
        {
            return fail(Check::UpDown);
        }
    }
    Ok(())
}

/// Check the given labyrinth is accurate.
///
/// The first inconsistency is logged.
pub fn check_labyrinth(maze: &Maze) -> bool {
    match validate(maze) {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}
