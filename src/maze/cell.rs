/*
cell.rs

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

//! Labyrinth cell.

use super::direction::{Direction, WallSet};

/// One cell of the labyrinth.
///
/// The physical walls never change after the labyrinth is built.
/// All the other fields are search and display state that the reset operations of
/// [`super::grid::Maze`] clear.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Physical walls.
    walls: WallSet,

    /// Physical and logical walls.
    /// Logical walls are the directions already explored during the current search.
    pub(super) explored: WallSet,

    /// Direction the search came from when it first entered the cell.
    pub(super) parent: Option<Direction>,

    /// Direction of the next cell in the stored solution path, toward the exit.
    pub(super) child: Option<Direction>,

    /// The search is currently on this cell.
    pub(super) current: bool,

    /// The breadth first search has dequeued this cell.
    pub(super) bfs_visited: bool,

    /// The cell is part of the ongoing research path, or of the solution.
    pub(super) on_solution: bool,

    row: usize,
    col: usize,
}

impl Cell {
    /// Create a [`Cell`] object. The logical walls start as a copy of the physical walls.
    pub fn new(row: usize, col: usize, walls: WallSet) -> Self {
        Self {
            walls,
            explored: walls,
            parent: None,
            child: None,
            current: false,
            bfs_visited: false,
            on_solution: false,
            row,
            col,
        }
    }

    pub fn walls(&self) -> WallSet {
        self.walls
    }

    pub fn explored(&self) -> WallSet {
        self.explored
    }

    pub fn parent(&self) -> Option<Direction> {
        self.parent
    }

    pub fn child(&self) -> Option<Direction> {
        self.child
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn is_bfs_visited(&self) -> bool {
        self.bfs_visited
    }

    pub fn is_on_solution(&self) -> bool {
        self.on_solution
    }

    /// Return the (row, column) position of the cell.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Whether a physical wall blocks the given direction.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction)
    }

    /// Whether the direction is physically open and not yet explored.
    pub fn is_unexplored(&self, direction: Direction) -> bool {
        !self.walls.contains(direction) && !self.explored.contains(direction)
    }

    /// Whether no direction is left to explore, the parent direction counting as closed.
    pub fn is_exhausted(&self) -> bool {
        self.explored.with(self.parent).is_full()
    }

    /// Reset the search state. The physical walls are copied back into the logical walls.
    pub(super) fn reset(&mut self, keep_solution: bool, keep_chain: bool) {
        self.explored = self.walls;
        self.parent = None;
        self.current = false;
        self.bfs_visited = false;
        if !keep_solution {
            self.on_solution = false;
        }
        if !keep_chain {
            self.child = None;
        }
    }
}
