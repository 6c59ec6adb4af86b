/*
search_properties.rs

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

//! Property-based tests for the searches, run on random labyrinths.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

use labyrinth::maze::deep_search::find_exit_deep_exploration;
use labyrinth::maze::direction::{Direction, WallSet};
use labyrinth::maze::generator::generate_with_size;
use labyrinth::maze::grid::{Maze, Position};
use labyrinth::maze::loader::parse_labyrinth;
use labyrinth::maze::search_error::SearchError;
use labyrinth::maze::shortest_path::find_shortest_path;
use labyrinth::maze::solution::{replay_latest_path, store_path};
use labyrinth::maze::validator::{check_labyrinth, validate};

const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

fn random_maze(seed: u64, rows: usize, cols: usize) -> Maze {
    generate_with_size(&mut StdRng::seed_from_u64(seed), rows, cols)
}

/// Number of moves between the entrance and the exit, computed without the crate's searches.
fn distance(maze: &Maze) -> Option<usize> {
    let mut dist: Vec<Vec<Option<usize>>> = vec![vec![None; maze.cols()]; maze.rows()];
    let mut queue: VecDeque<Position> = VecDeque::new();
    let (r, c) = maze.entrance();
    dist[r][c] = Some(0);
    queue.push_back(maze.entrance());

    while let Some(p) = queue.pop_front() {
        let d: usize = dist[p.0][p.1]?;
        if p == maze.exit() {
            return Some(d);
        }
        for direction in DIRECTIONS {
            if let Some(n) = maze.open_neighbor(p, direction)
                && dist[n.0][n.1].is_none()
            {
                dist[n.0][n.1] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Whether each step of the path goes through an open side.
fn is_open_walk(maze: &Maze, path: &[Position]) -> bool {
    path.windows(2).all(|w| {
        DIRECTIONS
            .iter()
            .any(|d| maze.open_neighbor(w[0], *d) == Some(w[1]))
    })
}

fn deep_search(maze: &mut Maze) -> Result<(), SearchError> {
    maze.clear_all_markers();
    let ret: Result<(), SearchError> = find_exit_deep_exploration(maze, |_| ());
    store_path(maze);
    ret
}

fn shortest_search(maze: &mut Maze) -> Result<(), SearchError> {
    maze.clear();
    let ret: Result<(), SearchError> = find_shortest_path(maze, |_| ());
    store_path(maze);
    maze.clear_research_markers();
    ret
}

proptest! {
    /// Both searches find the exit exactly when a path exists.
    #[test]
    fn prop_searches_agree_on_reachability(seed in any::<u64>(), rows in 1usize..=12, cols in 1usize..=12) {
        let mut maze: Maze = random_maze(seed, rows, cols);
        let reachable: bool = distance(&maze).is_some();

        let deep: Result<(), SearchError> = deep_search(&mut maze);
        let shortest: Result<(), SearchError> = shortest_search(&mut maze);

        prop_assert_eq!(deep.is_ok(), reachable, "deep search {:?}\n{}", deep, maze);
        prop_assert_eq!(shortest.is_ok(), reachable, "shortest path {:?}\n{}", shortest, maze);
        if !reachable {
            prop_assert_eq!(deep, Err(SearchError::NoSolution));
            prop_assert_eq!(shortest, Err(SearchError::NoSolution));
        }
    }

    /// The stored path of the breadth first search is a shortest walk through open sides.
    #[test]
    fn prop_shortest_path_is_minimal(seed in any::<u64>(), rows in 1usize..=12, cols in 1usize..=12) {
        let mut maze: Maze = random_maze(seed, rows, cols);
        let expected: Option<usize> = distance(&maze);
        prop_assume!(expected.is_some());

        prop_assert!(shortest_search(&mut maze).is_ok());
        let path: Vec<Position> = maze.solution_path();
        prop_assert_eq!(Some(path.len() - 1), expected);
        prop_assert_eq!(path.first(), Some(&maze.entrance()));
        prop_assert_eq!(path.last(), Some(&maze.exit()));
        prop_assert!(is_open_walk(&maze, &path));

        let marked: usize = maze.iter().filter(|c| c.is_on_solution()).count();
        prop_assert_eq!(marked, path.len());
    }

    /// The deep search path is an open walk, never shorter than the breadth first search path.
    #[test]
    fn prop_deep_path_is_not_shorter(seed in any::<u64>(), rows in 1usize..=12, cols in 1usize..=12) {
        let mut maze: Maze = random_maze(seed, rows, cols);
        prop_assume!(distance(&maze).is_some());

        prop_assert!(deep_search(&mut maze).is_ok());
        let deep_path: Vec<Position> = maze.solution_path();
        prop_assert_eq!(deep_path.last(), Some(&maze.exit()));
        prop_assert!(is_open_walk(&maze, &deep_path));

        prop_assert!(shortest_search(&mut maze).is_ok());
        prop_assert!(maze.solution_path().len() <= deep_path.len());
    }

    /// Replaying goes over the stored path, cell by cell.
    #[test]
    fn prop_replay_follows_the_path(seed in any::<u64>(), rows in 1usize..=12, cols in 1usize..=12) {
        let mut maze: Maze = random_maze(seed, rows, cols);
        prop_assume!(deep_search(&mut maze).is_ok());
        let expected: Vec<Position> = maze.solution_path();

        maze.clear_all_markers();
        let mut replayed: Vec<Position> = Vec::new();
        replay_latest_path(&mut maze, |m: &Maze| {
            replayed.extend(m.iter().filter(|c| c.is_current()).map(|c| c.position()));
        });
        prop_assert_eq!(replayed, expected);
    }

    /// Opening or closing a single side between two cells makes the labyrinth inconsistent.
    #[test]
    fn prop_flipped_wall_is_rejected(
        seed in any::<u64>(),
        rows in 1usize..=12,
        cols in 2usize..=12,
        row in any::<prop::sample::Index>(),
        col in any::<prop::sample::Index>(),
    ) {
        let maze: Maze = random_maze(seed, rows, cols);
        prop_assert!(validate(&maze).is_ok());

        let (row, col) = (row.index(rows), col.index(cols - 1));
        let mut walls: Vec<Vec<WallSet>> = maze
            .wall_masks()
            .into_iter()
            .map(|r| r.into_iter().map(WallSet::from_bits).collect())
            .collect();
        walls[row][col] = WallSet::from_bits(walls[row][col].bits() ^ Direction::Right.bit());

        let broken: Maze = Maze::from_walls(rows, cols, maze.entrance(), maze.exit(), &walls);
        prop_assert!(validate(&broken).is_err());
        prop_assert!(!check_labyrinth(&broken));
    }

    /// The resets give the same result when run twice.
    #[test]
    fn prop_resets_are_idempotent(seed in any::<u64>(), rows in 1usize..=12, cols in 1usize..=12) {
        let mut maze: Maze = random_maze(seed, rows, cols);
        let _ = deep_search(&mut maze);

        let resets: [fn(&mut Maze); 3] = [
            Maze::clear,
            Maze::clear_research_markers,
            Maze::clear_all_markers,
        ];
        for reset in resets {
            let mut once: Maze = maze.clone();
            reset(&mut once);
            let mut twice: Maze = once.clone();
            reset(&mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}

#[test]
fn corridor_is_solved_by_both_searches() {
    for text in ["1 2 0 0 0 1\n11 14\n", "1 2 0 0 0 1\n9 5\n"] {
        let mut maze: Maze = parse_labyrinth(text).unwrap();
        assert_eq!(deep_search(&mut maze), Ok(()));
        assert_eq!(maze.solution_path(), vec![(0, 0), (0, 1)]);
        assert_eq!(shortest_search(&mut maze), Ok(()));
        assert_eq!(maze.solution_path(), vec![(0, 0), (0, 1)]);
    }
}

#[test]
fn closed_cells_have_no_solution() {
    for text in ["2 2 0 0 1 1\n15 15\n15 15\n", "2 2 0 0 1 1\n13 13\n7 7\n"] {
        let mut maze: Maze = parse_labyrinth(text).unwrap();
        assert_eq!(deep_search(&mut maze), Err(SearchError::NoSolution));
        assert_eq!(shortest_search(&mut maze), Err(SearchError::NoSolution));
    }
}

#[test]
fn single_cell_is_its_own_exit() {
    let mut maze: Maze = parse_labyrinth("1 1 0 0 0 0\n15\n").unwrap();
    assert!(check_labyrinth(&maze));
    assert_eq!(deep_search(&mut maze), Ok(()));
    assert_eq!(maze.solution_path(), vec![(0, 0)]);
    assert_eq!(shortest_search(&mut maze), Ok(()));
    assert_eq!(maze.solution_path(), vec![(0, 0)]);
}
