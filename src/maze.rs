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

//! Rectangular mazes backed by the weighted graph.
//!
//! A maze is a grid of [`Room`] objects. Each room has four walls and a score. A room
//! becomes a graph vertex, and two adjacent rooms without a wall between them become an
//! edge weighted by their scores. The entry and the exit are the two rooms with an open
//! wall on the border of the grid, and solving the maze is a shortest path query between
//! them.
//!
//! * [`rooms`] describes the rooms and the grid.
//! * [`builder`] derives the graph and the solution from a grid ([`Maze::build`]).
//! * [`carver`] creates random grids.
//! * [`codec`] reads and writes the `MAZE` byte format.
//! * [`svg`] and [`report`] present a solved maze.

use thiserror::Error;

use crate::graph::GraphError;

pub mod builder;
pub mod carver;
pub mod codec;
pub mod report;
pub mod rooms;
pub mod svg;

pub use builder::Maze;
pub use rooms::{Direction, Room, RoomColor, RoomGrid, Walls};

/// Largest number of rows or columns. The `MAZE` format stores each dimension in one byte.
pub const MAX_DIMENSION: usize = 255;

/// Scores are in `0..MAX_SCORE`. They are stored in the upper four bits of the room byte.
pub const MAX_SCORE: u8 = 16;

/// Errors raised while loading, building, or solving a maze.
#[derive(Error, Debug)]
pub enum MazeError {
    /// The room data describes a maze that cannot exist.
    #[error("invalid room data: {0}")]
    FormatInconsistency(String),

    /// No path connects the entry to the exit.
    #[error("the maze has no solution")]
    Unsolvable,

    #[error("invalid maze dimensions: {rows} rows, {columns} columns")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("the data does not start with the MAZE signature")]
    InvalidHeader,

    #[error("truncated maze data: {got} bytes instead of {expected}")]
    Truncated { expected: usize, got: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
