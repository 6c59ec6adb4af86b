/*
generator.rs

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

//! Generate a random labyrinth.
//!
//! The cells are built row by row.
//! Each cell gets its border walls, copies the walls that its left and top neighbors already
//! decided, and then draws one of its four sides at random.
//! When the drawn side is the bottom or the right side, a wall is built there.
//! The left and top sides are never closed by the draw, so that the cell stays open toward the
//! cells already built.
//!
//! The result may contain loops, and is not guaranteed to have a path between the entrance and
//! the exit.

use log::debug;
use rand::Rng;

use super::direction::{Direction, WallSet};
use super::grid::{Maze, Position};
use crate::config::MAX_DIMENSION;

/// Generate a labyrinth with a random number of rows and columns, between 1 and
/// [`MAX_DIMENSION`].
pub fn generate_labyrinth<R: Rng + ?Sized>(rng: &mut R) -> Maze {
    let rows: usize = rng.random_range(1..=MAX_DIMENSION);
    let cols: usize = rng.random_range(1..=MAX_DIMENSION);
    generate_with_size(rng, rows, cols)
}

/// Generate a labyrinth with the given size.
///
/// The size is brought back between 1 and [`MAX_DIMENSION`].
/// The entrance is on the top or the left side of the labyrinth, the exit on the bottom or the
/// right side.
pub fn generate_with_size<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Maze {
    let rows: usize = rows.clamp(1, MAX_DIMENSION);
    let cols: usize = cols.clamp(1, MAX_DIMENSION);

    let in_row: usize = rng.random_range(0..rows);
    let out_row: usize = rng.random_range(0..rows);

    let in_col: usize = if in_row != 0 {
        0
    } else {
        rng.random_range(0..cols)
    };
    let out_col: usize = if out_row != rows - 1 {
        cols - 1
    } else {
        rng.random_range(0..cols)
    };

    let entrance: Position = (in_row, in_col);
    let exit: Position = (out_row, out_col);
    debug!("Generating {rows}x{cols}  entrance = {entrance:?}  exit = {exit:?}");

    let mut walls: Vec<Vec<WallSet>> = vec![vec![WallSet::empty(); cols]; rows];
    for row in 0..rows {
        for col in 0..cols {
            let mut w: WallSet = WallSet::empty();

            if row == 0 {
                w.insert(Direction::Up);
            }
            if col == 0 {
                w.insert(Direction::Left);
            }
            if row == rows - 1 {
                w.insert(Direction::Down);
            }
            if col == cols - 1 {
                w.insert(Direction::Right);
            }

            // The neighbors on the left and on the top are already built: their decision wins
            if col > 0 && walls[row][col - 1].contains(Direction::Right) {
                w.insert(Direction::Left);
            }
            if row > 0 && walls[row - 1][col].contains(Direction::Down) {
                w.insert(Direction::Up);
            }

            if let Some(kept) = Direction::from_repr(rng.random_range(0..4))
                && kept != Direction::Up
                && kept != Direction::Left
            {
                w.insert(kept);
            }

            walls[row][col] = w;
        }
    }

    Maze::from_walls(rows, cols, entrance, exit, &walls)
}
