/*
carver.rs

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

//! Random maze generation.
//!
//! The carver starts from a grid where every wall is closed, opens an entry and an exit on
//! the border, then removes walls with a randomized depth-first walk from the entry. Every
//! room is reached exactly once by the walk, so the open walls form a spanning tree of the
//! grid: there is exactly one path between any two rooms.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::rooms::{Direction, RoomColor, RoomGrid, Walls};
use super::{MAX_DIMENSION, MAX_SCORE, MazeError};
use crate::collections::work_list::{Stack, WorkList};

/// Carve a random grid of the given size.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] if a dimension is not in `1..=255`.
pub fn carve<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<RoomGrid, MazeError> {
    if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&columns) {
        return Err(MazeError::InvalidDimensions { rows, columns });
    }

    let bytes: Vec<u8> = (0..rows * columns)
        .map(|_| Walls::all().bits() | (rng.random_range(0..MAX_SCORE) << 4))
        .collect();
    let mut grid: RoomGrid = RoomGrid::from_bytes(rows, columns, &bytes)?;

    // The exit must be another room. A single room gets two openings instead.
    let (entry, entry_side) = pick_border(&grid, rng);
    let (exit, exit_side) = loop {
        let (room, side) = pick_border(&grid, rng);
        if room != entry || (grid.len() == 1 && side != entry_side) {
            break (room, side);
        }
    };
    grid.open(entry, entry_side);
    grid.open(exit, exit_side);
    debug!("Carving {rows}x{columns}: entry {entry} ({entry_side:?}), exit {exit} ({exit_side:?})");

    let mut stack: Stack<usize> = Stack::new();
    grid.set_color(entry, RoomColor::Visited);
    stack.push(entry);

    while let Some(&current) = stack.peek() {
        let unvisited: Vec<(Direction, usize)> = match grid.room_at(current) {
            Some(room) => room
                .neighbors()
                .filter(|(_, i)| {
                    grid.room_at(*i)
                        .is_some_and(|r| r.color() == RoomColor::Unvisited)
                })
                .collect(),
            None => Vec::new(),
        };

        match unvisited.choose(rng) {
            Some(&(side, next)) => {
                grid.open(current, side);
                grid.set_color(next, RoomColor::Visited);
                stack.push(next);
            }
            None => {
                let _ = stack.pop();
            }
        }
    }

    for i in 0..grid.len() {
        grid.set_color(i, RoomColor::Unvisited);
    }
    Ok(grid)
}

/// Pick a random side of the grid, and a random room along that side.
fn pick_border<R: Rng + ?Sized>(grid: &RoomGrid, rng: &mut R) -> (usize, Direction) {
    let (rows, columns) = (grid.rows(), grid.columns());
    let side: Direction =
        Direction::from_repr(rng.random_range(0..4)).unwrap_or(Direction::East);
    let (row, column) = match side {
        Direction::East => (rng.random_range(0..rows), columns - 1),
        Direction::North => (0, rng.random_range(0..columns)),
        Direction::West => (rng.random_range(0..rows), 0),
        Direction::South => (rows - 1, rng.random_range(0..columns)),
    };
    (row * columns + column, side)
}
