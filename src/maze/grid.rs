/*
grid.rs

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

//! The labyrinth grid.
//!
//! A [`Maze`] owns its cells, stored row by row, and the entrance and exit positions.
//! Cell positions are `(row, column)` tuples.
//! Links between cells (the parent direction recorded by the searches and the child direction of
//! the stored solution) are [`Direction`] values, resolved into positions by
//! [`Maze::neighbor`].

use log::{Level, debug, log_enabled};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::cell::Cell;
use super::direction::{Direction, WallSet};

/// Cell position as `(row, column)`.
pub type Position = (usize, usize);

/// Labyrinth object.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    entrance: Position,
    exit: Position,
    matrix: Vec<Vec<Cell>>,
}

impl Maze {
    /// Create a [`Maze`] object from the physical walls of each cell.
    ///
    /// The object is not verified. Use [`super::validator::check_labyrinth`] for that.
    /// Missing cells in `walls` are created without walls.
    pub fn from_walls(
        rows: usize,
        cols: usize,
        entrance: Position,
        exit: Position,
        walls: &[Vec<WallSet>],
    ) -> Self {
        let matrix: Vec<Vec<Cell>> = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let w: WallSet = walls
                            .get(row)
                            .and_then(|r| r.get(col))
                            .copied()
                            .unwrap_or_default();
                        Cell::new(row, col, w)
                    })
                    .collect()
            })
            .collect();

        let maze: Maze = Self {
            rows,
            cols,
            entrance,
            exit,
            matrix,
        };
        maze.debug();
        maze
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn entrance(&self) -> Position {
        self.entrance
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Whether the entrance and the exit are inside the grid.
    pub fn ends_inside(&self) -> bool {
        self.cell(self.entrance).is_some() && self.cell(self.exit).is_some()
    }

    /// Return the cell at the given position, if the position is inside the grid.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.matrix.get(pos.0).and_then(|r| r.get(pos.1))
    }

    /// Return the position of the adjacent cell in the given direction, if the grid has one.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row: usize = pos.0.checked_add_signed(dr)?;
        let col: usize = pos.1.checked_add_signed(dc)?;
        if row < self.rows && col < self.cols {
            Some((row, col))
        } else {
            None
        }
    }

    /// Return the adjacent cell position if no physical wall separates it from the given cell.
    ///
    /// A missing border wall does not lead anywhere: the side of the grid is always closed.
    pub fn open_neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        match self.cell(pos) {
            Some(c) if !c.has_wall(direction) => self.neighbor(pos, direction),
            _ => None,
        }
    }

    /// Return the side of the grid the given position touches, if any.
    ///
    /// When the position is in a corner, the top side wins over the left side, which wins over
    /// the bottom side, which wins over the right side.
    pub fn border_direction(&self, pos: Position) -> Option<Direction> {
        if pos.0 == 0 {
            Some(Direction::Up)
        } else if pos.1 == 0 {
            Some(Direction::Left)
        } else if pos.0 + 1 == self.rows {
            Some(Direction::Down)
        } else if pos.1 + 1 == self.cols {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Iterate over the cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.matrix.iter().flatten()
    }

    /// Clear the labyrinth back to its initial state, including the stored solution path.
    pub fn clear(&mut self) {
        self.reset(false, false);
    }

    /// Clear the search markers, but keep the solution path identifiers and the stored path.
    pub fn clear_research_markers(&mut self) {
        self.reset(true, true);
    }

    /// Clear all the markers, only keep the stored path that is used for replay.
    pub fn clear_all_markers(&mut self) {
        self.reset(false, true);
    }

    fn reset(&mut self, keep_solution: bool, keep_chain: bool) {
        for cell in self.matrix.iter_mut().flatten() {
            cell.reset(keep_solution, keep_chain);
        }
    }

    /// Remove the stored solution path.
    pub(super) fn clear_chain(&mut self) {
        for cell in self.matrix.iter_mut().flatten() {
            cell.child = None;
        }
    }

    /// Return the stored solution path, from the entrance, by following the child links.
    ///
    /// The path always contains at least the entrance. The walk stops after visiting as many
    /// cells as the grid holds.
    pub fn solution_path(&self) -> Vec<Position> {
        let mut path: Vec<Position> = Vec::new();
        let mut pos: Position = self.entrance;

        while let Some(cell) = self.cell(pos) {
            path.push(pos);
            if path.len() > self.rows * self.cols {
                break;
            }
            match cell.child.and_then(|d| self.neighbor(pos, d)) {
                Some(next) => pos = next,
                None => break,
            }
        }
        path
    }

    /// Return the physical walls as masks, row by row.
    pub fn wall_masks(&self) -> Vec<Vec<u8>> {
        self.matrix
            .iter()
            .map(|r| r.iter().map(|c| c.walls().bits()).collect())
            .collect()
    }

    /// Print the wall masks.
    fn debug(&self) {
        if log_enabled!(Level::Debug) {
            debug!(
                "Labyrinth {}x{}  entrance = {:?}  exit = {:?}",
                self.rows, self.cols, self.entrance, self.exit
            );
            let mut s: String = String::new();
            for row in &self.matrix {
                s.clear();
                for cell in row {
                    s.push_str(&format!("{:>3}", cell.walls().bits()));
                }
                debug!("{s}");
            }
        }
    }
}

impl Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.matrix[pos.0][pos.1]
    }
}

impl IndexMut<Position> for Maze {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.matrix[pos.0][pos.1]
    }
}

/// Write the labyrinth in the text format that [`super::loader::load_labyrinth`] reads.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} {} {} {} {} {}",
            self.rows, self.cols, self.entrance.0, self.entrance.1, self.exit.0, self.exit.1
        )?;
        for row in &self.matrix {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.walls().bits().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        // 1x3 corridor open from left to right
        let walls: Vec<Vec<WallSet>> = vec![vec![
            WallSet::from_bits(11),
            WallSet::from_bits(10),
            WallSet::from_bits(14),
        ]];
        Maze::from_walls(1, 3, (0, 0), (0, 2), &walls)
    }

    #[test]
    fn neighbors_stay_inside_the_grid() {
        let maze: Maze = corridor();
        assert_eq!(maze.neighbor((0, 0), Direction::Left), None);
        assert_eq!(maze.neighbor((0, 0), Direction::Up), None);
        assert_eq!(maze.neighbor((0, 0), Direction::Down), None);
        assert_eq!(maze.neighbor((0, 0), Direction::Right), Some((0, 1)));
        assert_eq!(maze.neighbor((0, 2), Direction::Right), None);
        assert_eq!(maze.open_neighbor((0, 1), Direction::Left), Some((0, 0)));
        assert_eq!(maze.open_neighbor((0, 1), Direction::Up), None);
    }

    #[test]
    fn border_direction_prefers_the_top_side() {
        let maze: Maze = Maze::from_walls(3, 3, (0, 0), (2, 2), &[]);
        assert_eq!(maze.border_direction((0, 0)), Some(Direction::Up));
        assert_eq!(maze.border_direction((1, 0)), Some(Direction::Left));
        assert_eq!(maze.border_direction((2, 1)), Some(Direction::Down));
        assert_eq!(maze.border_direction((1, 2)), Some(Direction::Right));
        assert_eq!(maze.border_direction((1, 1)), None);
    }

    #[test]
    fn resets_are_idempotent() {
        let mut maze: Maze = corridor();
        maze[(0, 1)].parent = Some(Direction::Left);
        maze[(0, 1)].on_solution = true;
        maze[(0, 1)].bfs_visited = true;
        maze[(0, 1)].explored.insert(Direction::Right);
        maze[(0, 0)].child = Some(Direction::Right);

        maze.clear_research_markers();
        let once: Maze = maze.clone();
        maze.clear_research_markers();
        assert_eq!(maze, once);
        assert!(maze[(0, 1)].is_on_solution());
        assert!(!maze[(0, 1)].is_bfs_visited());
        assert_eq!(maze[(0, 1)].explored(), maze[(0, 1)].walls());

        maze.clear_all_markers();
        let once: Maze = maze.clone();
        maze.clear_all_markers();
        assert_eq!(maze, once);
        assert!(!maze[(0, 1)].is_on_solution());
        assert_eq!(maze[(0, 0)].child(), Some(Direction::Right));

        maze.clear();
        let once: Maze = maze.clone();
        maze.clear();
        assert_eq!(maze, once);
        assert_eq!(maze, corridor());
    }

    #[test]
    fn text_output_lists_the_walls() {
        assert_eq!(corridor().to_string(), "1 3 0 0 0 2\n11 10 14\n");
    }
}
