/*
direction.rs

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

//! Directions around a cell and sets of walls.

use std::fmt;
use strum_macros::FromRepr;

/// The four sides of a cell.
///
/// The discriminant is the bit index used by the text format: bit 0 is the left wall, bit 1 the
/// bottom wall, bit 2 the right wall, and bit 3 the top wall.
/// The declaration order is also the anticlockwise rotation used by the path finders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Direction {
    /// Return the wall bit for the direction.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Return the direction on the other side of the cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
        }
    }

    /// Return the next direction when turning around the cell anticlockwise.
    pub fn next_anticlockwise(self) -> Self {
        match self {
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
        }
    }

    /// Return the direction that follows `previous` in the anticlockwise rotation.
    ///
    /// Without a previous direction the rotation starts on the left wall.
    pub fn after(previous: Option<Direction>) -> Self {
        match previous {
            Some(d) => d.next_anticlockwise(),
            None => Direction::Left,
        }
    }

    /// Row and column offsets for moving one cell in the direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// Set of directions, stored as the 4-bit mask of the text format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WallSet(u8);

impl WallSet {
    /// Mask with the four walls.
    pub const ALL_BITS: u8 = 0b1111;

    /// Empty set (no walls).
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set with the four walls.
    pub fn all() -> Self {
        Self(Self::ALL_BITS)
    }

    /// Build a set from a mask. Bits above the four walls are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// Return the mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Whether the four walls are in the set.
    pub fn is_full(self) -> bool {
        self.0 == Self::ALL_BITS
    }

    /// Return a copy of the set with the given direction added.
    pub fn with(mut self, direction: Option<Direction>) -> Self {
        if let Some(d) = direction {
            self.insert(d);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_visits_the_four_sides() {
        let mut d: Direction = Direction::after(None);
        let mut seen: Vec<Direction> = Vec::new();
        for _ in 0..4 {
            seen.push(d);
            d = d.next_anticlockwise();
        }
        assert_eq!(
            seen,
            [Direction::Left, Direction::Down, Direction::Right, Direction::Up]
        );
        assert_eq!(d, Direction::Left);
        assert_eq!(Direction::after(Some(Direction::Up)), Direction::Left);
    }

    #[test]
    fn bits_match_the_text_format() {
        assert_eq!(Direction::Left.bit(), 1);
        assert_eq!(Direction::Down.bit(), 2);
        assert_eq!(Direction::Right.bit(), 4);
        assert_eq!(Direction::Up.bit(), 8);
        for i in 0..4 {
            let d: Direction = Direction::from_repr(i).unwrap();
            assert_eq!(d.bit(), 1 << i);
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Direction::from_repr(4), None);
    }

    #[test]
    fn wall_sets() {
        let walls: WallSet = WallSet::from_bits(0b1011);
        assert!(!walls.is_full());
        assert!(walls.contains(Direction::Up));
        assert!(!walls.contains(Direction::Right));
        assert!(walls.with(Some(Direction::Right)).is_full());
        assert_eq!(walls.with(None), walls);
        assert_eq!(WallSet::from_bits(0xff), WallSet::all());
    }
}
