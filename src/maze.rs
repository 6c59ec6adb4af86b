/*
maze.rs

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

//! Build, verify, and solve labyrinths.
//!
//! A labyrinth is a [`grid::Maze`] object: a grid of [`cell::Cell`] objects separated by walls,
//! with an entrance and an exit.
//! You get one by loading its text representation with [`loader::load_labyrinth`], or by
//! generating a random one with [`generator::generate_labyrinth`].
//! [`validator::check_labyrinth`] verifies that the walls of adjacent cells agree and that the
//! labyrinth is closed on its borders.
//!
//! Two searches find a path between the entrance and the exit:
//!
//! * [`deep_search::find_exit_deep_exploration`] explores the labyrinth deeply with the
//!   right-hand rule, going back from each dead end, until it reaches the exit.
//!
//! * [`shortest_path::find_shortest_path`] is a breadth first search that finds the shortest
//!   path.
//!
//! Both searches record in each cell the direction they came from.
//! After the search, [`solution::store_path`] turns these directions into a path from the
//! entrance to the exit that [`solution::replay_latest_path`] can replay.
//!
//! The searches and the replay call a render function each time the labyrinth changes in a way
//! worth displaying.
//! The function receives the labyrinth and decides how to show it, see [`crate::draw`].
//!
//! Typical sequence for the breadth first search:
//!
//! ```
//! use labyrinth::maze::{grid::Maze, loader, shortest_path, solution};
//!
//! let mut maze: Maze = loader::parse_labyrinth("1 2 0 0 0 1\n11 14\n").unwrap();
//! maze.clear();
//! shortest_path::find_shortest_path(&mut maze, |_| ()).unwrap();
//! solution::store_path(&mut maze);
//! maze.clear_research_markers();
//! assert_eq!(maze.solution_path(), vec![(0, 0), (0, 1)]);
//! ```

pub mod cell;
pub mod deep_search;
pub mod direction;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod queue;
pub mod search_error;
pub mod shortest_path;
pub mod solution;
pub mod validator;
