/*
shortest_path.rs

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

//! Find the shortest path with a breadth first search.
//!
//! 1. Add the entrance to a queue.
//! 2. While there are cells in the queue:
//!    1. pick the first cell,
//!    2. if the cell is the exit, the search ends,
//!    3. otherwise add to the queue each adjacent open cell that has not been discovered yet.
//! 3. If the queue is empty and the exit has not been reached, there is no solution.
//!
//! A discovered cell records the direction of the cell that discovered it.
//! Following these parent directions from the exit gives the shortest path, see
//! [`super::solution::store_path`].

use log::{debug, error, info};

use super::direction::Direction;
use super::grid::{Maze, Position};
use super::queue::CellQueue;
use super::search_error::SearchError;

/// Look for the shortest path between the entrance and the exit.
///
/// The `render` function is called each time a cell is picked from the queue.
/// Clear the labyrinth with [`Maze::clear`] before starting a new search.
///
/// # Errors
///
/// [`SearchError::NoSolution`] when the queue is empty before the exit is reached.
/// [`SearchError::QueueExhaustedUnexpectedly`] when the entrance or the exit is outside the grid.
pub fn find_shortest_path<F>(maze: &mut Maze, mut render: F) -> Result<(), SearchError>
where
    F: FnMut(&Maze),
{
    if !maze.ends_inside() {
        error!("Entrance or exit outside the labyrinth");
        return Err(SearchError::QueueExhaustedUnexpectedly);
    }
    let entrance: Position = maze.entrance();
    let mut queue: CellQueue = CellQueue::new();

    maze[entrance].bfs_visited = true;
    queue.add(entrance);

    while let Some(pos) = queue.pick() {
        let cell = &mut maze[pos];
        let mut next: Option<Direction> = cell.parent;
        cell.bfs_visited = true;
        cell.current = true;
        render(maze);
        maze[pos].current = false;

        if pos == maze.exit() {
            info!("Shortest path has just been found");
            queue.drain();
            return Ok(());
        }

        // The entrance checks its four sides, the other cells skip the side they come from
        let num_walls_to_check: usize = if next.is_none() { 4 } else { 3 };

        for _ in 0..num_walls_to_check {
            let d: Direction = Direction::after(next);
            next = Some(d);

            if let Some(n) = maze.open_neighbor(pos, d)
                && n != entrance
                && maze[n].parent.is_none()
            {
                maze[n].parent = Some(d.opposite());
                queue.add(n);
                debug!("Cell {}, {} discovered from {}, {}", n.0, n.1, pos.0, pos.1);
            }
        }
    }

    info!(
        "No solution found (entrance {}, {}  exit {}, {})",
        entrance.0,
        entrance.1,
        maze.exit().0,
        maze.exit().1
    );
    Err(SearchError::NoSolution)
}
