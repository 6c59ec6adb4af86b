/*
search_error.rs

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

//! Outcome of a failed search.

use std::error::Error;
use std::fmt;

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// All paths tried: the exit cannot be reached from the entrance.
    NoSolution,

    /// The labyrinth or the search reached a state that a consistent labyrinth cannot produce.
    ///
    /// Both searches report it: when the entrance or the exit is outside the grid, and for the
    /// deep exploration, when going back from a dead end meets a cell without parent.
    QueueExhaustedUnexpectedly,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::NoSolution => write!(f, "No solution found"),
            SearchError::QueueExhaustedUnexpectedly => {
                write!(f, "Search stopped in an unexpected state")
            }
        }
    }
}

impl Error for SearchError {}
