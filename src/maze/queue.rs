/*
queue.rs

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

//! Queue of cells for the breadth first search.

use std::collections::VecDeque;

use super::grid::Position;

/// First in, first out list of cell positions.
///
/// The queue does not own cells, only their positions in the [`super::grid::Maze`].
#[derive(Debug, Default)]
pub struct CellQueue {
    cells: VecDeque<Position>,
}

impl CellQueue {
    /// Create an empty [`CellQueue`] object.
    pub fn new() -> Self {
        Self {
            cells: VecDeque::new(),
        }
    }

    /// Add a cell at the end of the queue.
    pub fn add(&mut self, pos: Position) {
        self.cells.push_back(pos);
    }

    /// Remove and return the first cell of the queue.
    pub fn pick(&mut self) -> Option<Position> {
        self.cells.pop_front()
    }

    /// Remove all the cells.
    pub fn drain(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_come_out_in_order() {
        let mut queue: CellQueue = CellQueue::new();
        assert_eq!(queue.pick(), None);
        queue.add((0, 0));
        queue.add((0, 1));
        queue.add((1, 1));
        assert_eq!(queue.pick(), Some((0, 0)));
        queue.add((2, 2));
        assert_eq!(queue.pick(), Some((0, 1)));
        queue.drain();
        assert_eq!(queue.pick(), None);
    }
}
