/*
solution.rs

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

//! Store and replay the latest path found.
//!
//! After a search, each reached cell knows the direction it was entered from.
//! [`store_path`] follows these parent directions from the exit back to the entrance, and
//! records in each cell the direction of the next one.
//! [`replay_latest_path`] then follows the recorded directions from the entrance to the exit.

use log::debug;

use super::grid::{Maze, Position};

/// Build the path from the entrance to the exit, using the parent directions left by the latest
/// search.
///
/// The previously stored path is dropped.
/// Cells that the breadth first search visited along the way get the solution marker.
pub fn store_path(maze: &mut Maze) {
    maze.clear_chain();
    if !maze.ends_inside() {
        debug!("No path stored: entrance or exit outside the labyrinth");
        return;
    }

    let entrance: Position = maze.entrance();
    let mut pos: Position = maze.exit();
    let mut length: usize = 1;

    for _ in 0..maze.rows() * maze.cols() {
        let cell = &mut maze[pos];
        if cell.bfs_visited {
            cell.on_solution = true;
        }

        let parent = match cell.parent {
            Some(d) if pos != entrance => d,
            _ => break,
        };
        let previous: Position = match maze.neighbor(pos, parent) {
            Some(p) => p,
            None => break,
        };
        maze[previous].child = Some(parent.opposite());
        pos = previous;
        length += 1;
    }

    if pos == entrance {
        debug!("Path stored: {length} cells");
    } else {
        debug!("No path stored: {}, {} has no parent", pos.0, pos.1);
    }
}

/// Go over the stored path, from the entrance to the exit.
///
/// The `render` function is called for each cell of the path.
/// Clear the markers with [`Maze::clear_all_markers`] before replaying.
pub fn replay_latest_path<F>(maze: &mut Maze, mut render: F)
where
    F: FnMut(&Maze),
{
    let mut pos: Position = maze.entrance();
    if maze.cell(pos).is_none() {
        return;
    }

    for _ in 0..maze.rows() * maze.cols() {
        let cell = &mut maze[pos];
        cell.on_solution = true;
        cell.current = true;
        render(maze);
        maze[pos].current = false;

        match maze[pos].child.and_then(|d| maze.neighbor(pos, d)) {
            Some(next) => pos = next,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::deep_search::find_exit_deep_exploration;
    use crate::maze::direction::{Direction, WallSet};
    use crate::maze::loader::parse_labyrinth;
    use crate::maze::shortest_path::find_shortest_path;

    const OPEN_3X3: &str = "3 3 0 0 2 2\n9 8 12\n1 0 4\n3 2 6\n";

    #[test]
    fn shortest_path_chain_reaches_the_exit() {
        let mut maze: Maze = parse_labyrinth(OPEN_3X3).unwrap();
        find_shortest_path(&mut maze, |_| ()).unwrap();
        store_path(&mut maze);
        maze.clear_research_markers();

        let path: Vec<Position> = maze.solution_path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(2, 2)));
        assert_eq!(maze[(2, 2)].child(), None);

        // Only the cells of the path keep the solution marker
        let marked: usize = maze.iter().filter(|c| c.is_on_solution()).count();
        assert_eq!(marked, 5);
        assert!(path.iter().all(|p| maze[*p].is_on_solution()));
    }

    #[test]
    fn replay_follows_the_stored_path() {
        let mut maze: Maze = parse_labyrinth(OPEN_3X3).unwrap();
        find_exit_deep_exploration(&mut maze, |_| ()).unwrap();
        store_path(&mut maze);
        let expected: Vec<Position> = maze.solution_path();

        maze.clear_all_markers();
        let mut replayed: Vec<Position> = Vec::new();
        replay_latest_path(&mut maze, |m: &Maze| {
            if let Some(c) = m.iter().find(|c| c.is_current()) {
                replayed.push(c.position());
            }
        });
        assert_eq!(replayed, expected);
        assert_eq!(replayed.last(), Some(&(2, 2)));
        assert!(replayed.iter().all(|p| maze[*p].is_on_solution()));
    }

    #[test]
    fn store_path_replaces_the_previous_chain() {
        let mut maze: Maze = parse_labyrinth(OPEN_3X3).unwrap();
        find_exit_deep_exploration(&mut maze, |_| ()).unwrap();
        store_path(&mut maze);

        maze.clear();
        maze[(0, 1)].child = Some(Direction::Down);
        find_shortest_path(&mut maze, |_| ()).unwrap();
        store_path(&mut maze);

        let path: Vec<Position> = maze.solution_path();
        let links: usize = maze.iter().filter(|c| c.child().is_some()).count();
        assert_eq!(links, path.len() - 1);
    }

    #[test]
    fn failed_search_stores_only_the_entrance() {
        let mut maze: Maze = parse_labyrinth("2 2 0 0 1 1\n13 13\n7 7\n").unwrap();
        assert!(find_shortest_path(&mut maze, |_| ()).is_err());
        store_path(&mut maze);
        assert_eq!(maze.solution_path(), vec![(0, 0)]);
        assert!(maze.iter().all(|c| c.child().is_none()));
    }

    #[test]
    fn ends_outside_the_grid_store_and_replay_nothing() {
        let walls: Vec<Vec<WallSet>> = vec![vec![WallSet::all()]];
        for (entrance, exit) in [((0, 5), (0, 0)), ((0, 0), (3, 3))] {
            let mut maze: Maze = Maze::from_walls(1, 1, entrance, exit, &walls);
            assert!(!maze.ends_inside());
            store_path(&mut maze);
            let mut frames: usize = 0;
            replay_latest_path(&mut maze, |_| frames += 1);
            assert!(maze.iter().all(|c| c.child().is_none()));
            assert_eq!(frames, usize::from(maze.cell(entrance).is_some()));
        }
    }
}
