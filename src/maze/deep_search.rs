/*
deep_search.rs

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

//! Find the exit by exploring the labyrinth deeply, with the right-hand rule.
//!
//! 1. Explore deeply until reaching a dead end or the exit.
//! 2. On a dead end, go back to the latest crossroads and go back to step 1.
//! 3. On the exit, stop.
//! 4. If going back from a dead end leads to the entrance and no crossroads is left, then the
//!    exit is unreachable.
//!
//! Each direction the search takes is closed with a logical wall, so it is never tried again.
//! The logical walls only accumulate during a search, which guarantees that it ends.
//! A cell is entered only once: a direction that leads to a cell already reached is closed
//! without moving, so that going back from a dead end never skips a crossroads.

use log::{debug, error, info};

use super::direction::Direction;
use super::grid::{Maze, Position};
use super::search_error::SearchError;

/// Look for the exit, starting from the entrance.
///
/// The `render` function is called each time the search enters a cell or leaves a dead end.
/// Clear the labyrinth markers with [`Maze::clear_all_markers`] before starting a new search.
///
/// # Errors
///
/// [`SearchError::NoSolution`] when all the paths have been tried without reaching the exit.
/// [`SearchError::QueueExhaustedUnexpectedly`] when the entrance or the exit is outside the grid.
pub fn find_exit_deep_exploration<F>(maze: &mut Maze, mut render: F) -> Result<(), SearchError>
where
    F: FnMut(&Maze),
{
    if !maze.ends_inside() {
        error!("Entrance or exit outside the labyrinth");
        return Err(SearchError::QueueExhaustedUnexpectedly);
    }
    let mut pos: Position = maze.entrance();
    enter(maze, pos, None, &mut render);

    loop {
        if pos == maze.exit() {
            info!("Exit reached at {}, {}", pos.0, pos.1);
            return Ok(());
        }

        match next_direction(maze, pos) {
            Some((d, n)) => {
                pos = n;
                enter(maze, pos, Some(d.opposite()), &mut render);
            }
            None => {
                debug!("Dead end reached at {}, {}, going back", pos.0, pos.1);
                if let Some(d) = maze[pos].parent {
                    maze[pos].explored.insert(d);
                }
                pos = go_back(maze, pos, &mut render)?;
                debug!("Crossroads at {}, {}", pos.0, pos.1);
            }
        }
    }
}

/// Mark the cell as part of the current path and render it.
fn enter<F>(maze: &mut Maze, pos: Position, incoming: Option<Direction>, render: &mut F)
where
    F: FnMut(&Maze),
{
    let cell = &mut maze[pos];
    if cell.parent.is_none() {
        cell.parent = incoming;
    }
    cell.on_solution = true;
    cell.current = true;
    render(maze);
    maze[pos].current = false;
}

/// Return the first unexplored direction that leads to a cell not visited yet, with the position
/// of that cell.
///
/// Directions are probed anticlockwise, starting after the parent direction.
/// At the entrance, which has no parent, the probe starts after the side of the grid the entrance
/// touches and goes all the way around.
/// Each probed direction is closed logically, whether it leads somewhere or not.
fn next_direction(maze: &mut Maze, pos: Position) -> Option<(Direction, Position)> {
    let entrance: Position = maze.entrance();
    let parent: Option<Direction> = maze[pos].parent;
    let num_walls_to_check: usize = if parent.is_none() { 4 } else { 3 };

    let mut next: Option<Direction> = parent.or_else(|| maze.border_direction(entrance));
    for _ in 0..num_walls_to_check {
        let d: Direction = Direction::after(next);
        next = Some(d);
        if !maze[pos].is_unexplored(d) {
            continue;
        }
        maze[pos].explored.insert(d);
        if let Some(n) = maze.neighbor(pos, d)
            && n != entrance
            && maze[n].parent.is_none()
        {
            return Some((d, n));
        }
    }
    None
}

/// Go back from a dead end, following the parent directions, until a cell with an unexplored
/// direction.
fn go_back<F>(maze: &mut Maze, mut pos: Position, render: &mut F) -> Result<Position, SearchError>
where
    F: FnMut(&Maze),
{
    let entrance: Position = maze.entrance();

    while maze[pos].is_exhausted() {
        if pos == entrance {
            info!(
                "All paths tried: no solution found (entrance {}, {}  exit {}, {})",
                entrance.0,
                entrance.1,
                maze.exit().0,
                maze.exit().1
            );
            return Err(SearchError::NoSolution);
        }
        maze[pos].on_solution = false;
        render(maze);

        pos = match maze[pos].parent.and_then(|d| maze.neighbor(pos, d)) {
            Some(p) => p,
            None => {
                error!("Cell {}, {} has no parent to go back to", pos.0, pos.1);
                return Err(SearchError::QueueExhaustedUnexpectedly);
            }
        };
    }
    Ok(pos)
}
