/*
layout.rs

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

//! Save and restore the layout of a labyrinth: its size, entrance, exit, and walls.
//!
//! Search markers and stored paths are never saved.
//!
//! Two formats are supported, selected by the file name extension:
//!
//! * `.json`: a serialization of the [`MazeLayout`] object in JSON format by using [`serde`].
//! * anything else: the text format described in [`crate::maze::loader`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::maze::direction::WallSet;
use crate::maze::grid::{Maze, Position};
use crate::maze::loader::{self, LoadError};

/// Serializable description of a labyrinth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeLayout {
    pub rows: usize,
    pub cols: usize,
    pub entrance: Position,
    pub exit: Position,

    /// Wall masks, row by row.
    pub walls: Vec<Vec<u8>>,
}

impl From<&Maze> for MazeLayout {
    fn from(maze: &Maze) -> Self {
        Self {
            rows: maze.rows(),
            cols: maze.cols(),
            entrance: maze.entrance(),
            exit: maze.exit(),
            walls: maze.wall_masks(),
        }
    }
}

impl TryFrom<MazeLayout> for Maze {
    type Error = LoadError;

    /// Build the labyrinth with the same checks as the text loader.
    fn try_from(layout: MazeLayout) -> Result<Self, Self::Error> {
        let inside = |p: Position| p.0 < layout.rows && p.1 < layout.cols;
        if layout.rows == 0
            || layout.cols == 0
            || !inside(layout.entrance)
            || !inside(layout.exit)
        {
            return Err(LoadError::MalformedHeader);
        }

        let mut walls: Vec<Vec<WallSet>> = Vec::new();
        for row in 0..layout.rows {
            let mut line: Vec<WallSet> = Vec::new();
            for col in 0..layout.cols {
                match layout.walls.get(row).and_then(|r| r.get(col)) {
                    Some(&mask) if mask <= WallSet::ALL_BITS => {
                        line.push(WallSet::from_bits(mask));
                    }
                    _ => return Err(LoadError::MalformedBody { row, col }),
                }
            }
            walls.push(line);
        }
        Ok(Maze::from_walls(
            layout.rows,
            layout.cols,
            layout.entrance,
            layout.exit,
            &walls,
        ))
    }
}

/// Object to save and restore a labyrinth.
pub struct SaverMaze {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Labyrinth file: {save_file:?}");
        Self { save_file }
    }

    /// Whether the file uses the JSON format.
    fn is_json(&self) -> bool {
        self.save_file
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
    }

    /// Retrieve the labyrinth from the file.
    ///
    /// Return the [`Maze`] object or None if the file does not exist.
    pub fn get_maze(&self) -> Result<Option<Maze>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let maze: Maze = if self.is_json() {
            let layout: MazeLayout = serde_json::from_reader(reader)?;
            Maze::try_from(layout)?
        } else {
            loader::load_labyrinth(reader)?
        };
        Ok(Some(maze))
    }

    /// Save the layout of the provided [`Maze`] object.
    pub fn save_maze(&self, maze: &Maze) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        if self.is_json() {
            serde_json::to_writer_pretty(&mut writer, &MazeLayout::from(maze))?;
        } else {
            write!(writer, "{maze}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generator::generate_labyrinth;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        let mut p: PathBuf = env::temp_dir();
        p.push(format!("labyrinth-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn saved_labyrinths_are_restored() {
        let maze: Maze = generate_labyrinth(&mut StdRng::seed_from_u64(11));
        for name in ["layout.json", "layout.txt"] {
            let path: PathBuf = temp_file(name);
            let saver: SaverMaze = SaverMaze::new(path.clone());
            saver.save_maze(&maze).unwrap();
            let restored: Option<Maze> = saver.get_maze().unwrap();
            fs::remove_file(&path).unwrap();
            assert_eq!(restored, Some(maze.clone()), "{name}");
        }
    }

    #[test]
    fn missing_file_gives_nothing() {
        let saver: SaverMaze = SaverMaze::new(temp_file("missing.json"));
        assert!(saver.get_maze().unwrap().is_none());
    }

    #[test]
    fn inconsistent_layout_is_rejected() {
        let layout: MazeLayout = MazeLayout {
            rows: 1,
            cols: 2,
            entrance: (0, 0),
            exit: (0, 1),
            walls: vec![vec![11]],
        };
        assert!(matches!(
            Maze::try_from(layout.clone()),
            Err(LoadError::MalformedBody { row: 0, col: 1 })
        ));

        let huge: MazeLayout = MazeLayout {
            rows: usize::MAX,
            ..layout.clone()
        };
        assert!(matches!(
            Maze::try_from(huge),
            Err(LoadError::MalformedBody { row: 0, col: 1 })
        ));

        let layout: MazeLayout = MazeLayout {
            exit: (1, 1),
            ..layout
        };
        assert!(matches!(
            Maze::try_from(layout),
            Err(LoadError::MalformedHeader)
        ));
    }
}
