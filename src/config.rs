/*
config.rs

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

//! Build-time settings.

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Largest number of rows or columns of a generated labyrinth.
pub const MAX_DIMENSION: usize = 40;

/// Pause between two frames when animating a search, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

/// Number of rows or columns of a generated labyrinth when only the other one is given.
pub const DEFAULT_DIMENSION: usize = 10;
