/*
loader.rs

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

//! Load a labyrinth from its text representation.
//!
//! The text starts with six integers, the header:
//!
//! ```text
//! rows cols entrance_row entrance_col exit_row exit_col
//! ```
//!
//! Then `rows * cols` integers follow, row by row, one per cell.
//! Each integer is the mask of the physical walls of the cell: `1` for the left wall, `2` for the
//! bottom wall, `4` for the right wall, and `8` for the top wall.
//!
//! ```text
//! 1 2 0 0 0 1
//! 11 14
//! ```

use log::{debug, warn};
use std::error::Error;
use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use super::direction::WallSet;
use super::grid::{Maze, Position};

/// Type of errors.
#[derive(Debug)]
pub enum LoadError {
    /// The six header integers are missing, or describe an impossible labyrinth.
    MalformedHeader,

    /// The cell value at the given position is missing or is not a wall mask.
    MalformedBody { row: usize, col: usize },

    /// The source cannot be read.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::MalformedHeader => {
                write!(f, "Problem while reading labyrinth: non expected type of header")
            }
            LoadError::MalformedBody { row, col } => write!(
                f,
                "Problem while reading labyrinth: expected a wall mask for cell {row}, {col}"
            ),
            LoadError::Io(e) => write!(f, "Cannot read labyrinth: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Read a labyrinth from the given source.
///
/// # Errors
///
/// The function returns an error when the source cannot be read, or when its content does not
/// describe a labyrinth. No labyrinth is returned in that case.
pub fn load_labyrinth<R: Read>(mut reader: R) -> Result<Maze, LoadError> {
    let mut text: String = String::new();
    reader.read_to_string(&mut text)?;
    parse_labyrinth(&text)
}

/// Build a labyrinth from its text representation.
///
/// Reading stops at the first token that is not an integer, so the remaining values are
/// reported missing. Tokens after the last cell are ignored.
///
/// # Errors
///
/// [`LoadError::MalformedHeader`] or [`LoadError::MalformedBody`].
pub fn parse_labyrinth(text: &str) -> Result<Maze, LoadError> {
    let mut tokens = text.split_whitespace().map(i64::from_str);

    let mut header: [i64; 6] = [0; 6];
    for value in header.iter_mut() {
        match tokens.next() {
            Some(Ok(v)) => *value = v,
            _ => {
                warn!("Labyrinth header has less than six integers");
                return Err(LoadError::MalformedHeader);
            }
        }
    }
    let [rows, cols, in_row, in_col, out_row, out_col] = header;

    if rows <= 0 || cols <= 0 {
        warn!("Labyrinth size {rows}x{cols} is not valid");
        return Err(LoadError::MalformedHeader);
    }
    let inside = |r: i64, c: i64| (0..rows).contains(&r) && (0..cols).contains(&c);
    if !inside(in_row, in_col) || !inside(out_row, out_col) {
        warn!("Entrance {in_row}, {in_col} or exit {out_row}, {out_col} is outside the labyrinth");
        return Err(LoadError::MalformedHeader);
    }

    let (rows, cols): (usize, usize) = match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) => (r, c),
        _ => return Err(LoadError::MalformedHeader),
    };
    let entrance: Position = (in_row as usize, in_col as usize);
    let exit: Position = (out_row as usize, out_col as usize);

    let mut walls: Vec<Vec<WallSet>> = Vec::new();
    for row in 0..rows {
        let mut line: Vec<WallSet> = Vec::new();
        for col in 0..cols {
            let mask: u8 = match tokens.next() {
                Some(Ok(v)) if (0..=i64::from(WallSet::ALL_BITS)).contains(&v) => v as u8,
                _ => {
                    warn!("Expected a wall mask between 0 and 15 for cell {row}, {col}");
                    return Err(LoadError::MalformedBody { row, col });
                }
            };
            line.push(WallSet::from_bits(mask));
        }
        walls.push(line);
    }

    debug!("Labyrinth loaded: {rows}x{cols}");
    Ok(Maze::from_walls(rows, cols, entrance, exit, &walls))
}

impl FromStr for Maze {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labyrinth(s)
    }
}
