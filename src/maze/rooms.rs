/*
rooms.rs

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

//! Rooms and room grids.
//!
//! A room fits in one byte: the lower four bits are the walls (see [`Walls`]) and the
//! upper four bits are the score.

use bitflags::bitflags;
use log::debug;
use strum_macros::FromRepr;

use super::{MAX_DIMENSION, MazeError};
use crate::collections::dictionary::Dictionary;

bitflags! {
    /// Closed walls of a room. A missing flag is an open wall.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const EAST = 1;
        const NORTH = 1 << 1;
        const WEST = 1 << 2;
        const SOUTH = 1 << 3;
    }
}

/// The four sides of a room, in the order of their wall bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    /// Wall on this side of a room.
    pub fn wall(self) -> Walls {
        match self {
            Direction::East => Walls::EAST,
            Direction::North => Walls::NORTH,
            Direction::West => Walls::WEST,
            Direction::South => Walls::SOUTH,
        }
    }
}

/// Carving mark.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RoomColor {
    #[default]
    Unvisited,
    Visited,
}

/// A cell of the maze.
#[derive(Debug, Clone)]
pub struct Room {
    walls: Walls,
    score: u8,
    row: usize,
    column: usize,
    index: usize,
    color: RoomColor,

    /// Index of the adjacent room on each side. Border sides have no entry.
    neighbors: Dictionary<Direction, usize>,
}

impl Room {
    /// Decode a room byte.
    fn from_byte(byte: u8, row: usize, column: usize, index: usize) -> Self {
        Self {
            walls: Walls::from_bits_truncate(byte),
            score: byte >> 4,
            row,
            column,
            index,
            color: RoomColor::Unvisited,
            neighbors: Dictionary::new(),
        }
    }

    /// Encode the room as one byte.
    pub fn to_byte(&self) -> u8 {
        self.walls.bits() | (self.score << 4)
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Position of the room in the row-major order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color(&self) -> RoomColor {
        self.color
    }

    /// Whether the wall on the given side is open.
    pub fn is_open(&self, side: Direction) -> bool {
        !self.walls.contains(side.wall())
    }

    /// Index of the adjacent room on the given side.
    pub fn neighbor(&self, side: Direction) -> Option<usize> {
        self.neighbors.get(&side).ok().copied()
    }

    /// Adjacent rooms, as side and room index.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        self.neighbors.iter().map(|(d, i)| (*d, *i))
    }
}

/// Rooms of a maze, in row-major order.
#[derive(Debug, Clone)]
pub struct RoomGrid {
    rows: usize,
    columns: usize,
    rooms: Vec<Room>,
}

impl RoomGrid {
    /// Create the grid from room bytes in row-major order.
    ///
    /// # Errors
    ///
    /// * [`MazeError::InvalidDimensions`] if a dimension is zero or above
    ///   [`MAX_DIMENSION`].
    /// * [`MazeError::Truncated`] if there are fewer than `rows * columns` bytes.
    pub fn from_bytes(rows: usize, columns: usize, bytes: &[u8]) -> Result<Self, MazeError> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&columns) {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let count: usize = rows * columns;
        if bytes.len() < count {
            return Err(MazeError::Truncated {
                expected: count,
                got: bytes.len(),
            });
        }

        let rooms: Vec<Room> = bytes[..count]
            .iter()
            .enumerate()
            .map(|(i, b)| Room::from_byte(*b, i / columns, i % columns, i))
            .collect();
        let mut grid = Self {
            rows,
            columns,
            rooms,
        };
        grid.link_neighbors();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room at the given position.
    pub fn room(&self, row: usize, column: usize) -> Option<&Room> {
        if row < self.rows && column < self.columns {
            self.rooms.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Room with the given row-major index.
    pub fn room_at(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Room adjacent to the room `index` on the given side.
    pub fn neighbor(&self, index: usize, side: Direction) -> Option<&Room> {
        self.room_at(index)?
            .neighbor(side)
            .and_then(|i| self.room_at(i))
    }

    /// Room bytes in row-major order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.rooms.iter().map(Room::to_byte).collect()
    }

    /// Open the wall on the given side of a room, and the facing wall of the adjacent room.
    pub(crate) fn open(&mut self, index: usize, side: Direction) {
        let other: Option<usize> = self.room_at(index).and_then(|r| r.neighbor(side));
        if let Some(room) = self.rooms.get_mut(index) {
            room.walls.remove(side.wall());
        }
        if let Some(room) = other.and_then(|i| self.rooms.get_mut(i)) {
            room.walls.remove(side.opposite().wall());
        }
    }

    pub(crate) fn set_color(&mut self, index: usize, color: RoomColor) {
        if let Some(room) = self.rooms.get_mut(index) {
            room.color = color;
        }
    }

    /// Record the adjacent rooms of every room.
    fn link_neighbors(&mut self) {
        let (rows, columns) = (self.rows, self.columns);
        for room in &mut self.rooms {
            let (r, c) = (room.row, room.column);
            if c + 1 < columns {
                room.neighbors.put(Direction::East, room.index + 1);
            }
            if r > 0 {
                room.neighbors.put(Direction::North, room.index - columns);
            }
            if c > 0 {
                room.neighbors.put(Direction::West, room.index - 1);
            }
            if r + 1 < rows {
                room.neighbors.put(Direction::South, room.index + columns);
            }
        }
    }

    /// Print the grid with the debug log level, one text line per wall row.
    pub fn debug(&self) {
        for row in self.rooms.chunks(self.columns) {
            let mut top: String = String::from("+");
            let mut middle: String = String::new();
            for room in row {
                top.push_str(if room.is_open(Direction::North) { "  +" } else { "--+" });
                middle.push(if room.is_open(Direction::West) { ' ' } else { '|' });
                middle.push_str(&format!("{:>2}", room.score));
            }
            if let Some(last) = row.last() {
                middle.push(if last.is_open(Direction::East) { ' ' } else { '|' });
            }
            debug!("{top}");
            debug!("{middle}");
        }

        let mut bottom: String = String::from("+");
        let start: usize = self.rooms.len().saturating_sub(self.columns);
        for room in &self.rooms[start..] {
            bottom.push_str(if room.is_open(Direction::South) { "  +" } else { "--+" });
        }
        debug!("{bottom}");
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, RoomGrid, Walls};
    use crate::maze::MazeError;

    #[test]
    fn room_byte() {
        let grid = RoomGrid::from_bytes(1, 2, &[0xA5, 0x0F]).unwrap();
        let room = grid.room(0, 0).unwrap();
        assert_eq!(room.walls(), Walls::EAST | Walls::WEST);
        assert_eq!(room.score(), 10);
        assert!(room.is_open(Direction::North));
        assert!(!room.is_open(Direction::East));
        assert_eq!(room.to_byte(), 0xA5);
        assert_eq!(grid.to_bytes(), [0xA5, 0x0F]);
    }

    #[test]
    fn direction_repr() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_repr(i as u8), Some(*d));
            assert_eq!(d.wall().bits(), 1 << i);
            assert_eq!(d.opposite().opposite(), *d);
        }
        assert_eq!(Direction::from_repr(4), None);
    }

    #[test]
    fn neighbors() {
        let grid = RoomGrid::from_bytes(3, 4, &[0x0F; 12]).unwrap();
        let corner = grid.room(0, 0).unwrap();
        assert_eq!(corner.neighbor(Direction::East), Some(1));
        assert_eq!(corner.neighbor(Direction::South), Some(4));
        assert_eq!(corner.neighbor(Direction::North), None);
        assert_eq!(corner.neighbors().count(), 2);

        let center = grid.room(1, 1).unwrap();
        assert_eq!(center.index(), 5);
        assert_eq!(center.neighbors().count(), 4);
        assert_eq!(grid.neighbor(5, Direction::West).map(|r| r.index()), Some(4));
        assert_eq!(grid.neighbor(5, Direction::North).map(|r| r.index()), Some(1));
        assert!(grid.room(3, 0).is_none());
        assert!(grid.room(0, 4).is_none());
    }

    #[test]
    fn open_both_sides() {
        let mut grid = RoomGrid::from_bytes(2, 2, &[0x0F; 4]).unwrap();
        grid.open(0, Direction::South);
        assert!(grid.room(0, 0).unwrap().is_open(Direction::South));
        assert!(grid.room(1, 0).unwrap().is_open(Direction::North));

        // Border walls only have one side
        grid.open(3, Direction::East);
        assert!(grid.room(1, 1).unwrap().is_open(Direction::East));
    }

    #[test]
    fn invalid_grids() {
        assert!(matches!(
            RoomGrid::from_bytes(0, 3, &[]),
            Err(MazeError::InvalidDimensions { rows: 0, columns: 3 })
        ));
        assert!(matches!(
            RoomGrid::from_bytes(2, 256, &[]),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            RoomGrid::from_bytes(2, 2, &[0; 3]),
            Err(MazeError::Truncated { expected: 4, got: 3 })
        ));
    }
}
