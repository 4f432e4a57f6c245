/*
builder.rs

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

//! Build and solve a maze from a grid of rooms.

use log::{Level, debug, log_enabled};
use rand::Rng;

use super::rooms::{Direction, Room, RoomGrid};
use super::{MazeError, carver};
use crate::graph::{Graph, VertexRef, VertexView};

/// A solved maze.
#[derive(Debug)]
pub struct Maze {
    grid: RoomGrid,

    /// Index of the entry room.
    entry: usize,

    /// Index of the exit room.
    exit: usize,

    /// One vertex per room, keyed by room index.
    graph: Graph<usize>,

    /// Room indexes from the entry to the exit.
    solution: Vec<usize>,
}

impl Maze {
    /// Derive the graph of the rooms and solve the maze.
    ///
    /// # Errors
    ///
    /// * [`MazeError::FormatInconsistency`] if two adjacent rooms disagree on the wall
    ///   between them, or if the border does not have exactly two openings.
    /// * [`MazeError::Unsolvable`] if no path joins the entry to the exit.
    pub fn build(grid: RoomGrid) -> Result<Self, MazeError> {
        if log_enabled!(Level::Debug) {
            grid.debug();
        }

        let mut graph: Graph<usize> = Graph::with_capacity(grid.len());
        for room in grid.rooms() {
            graph.add_vertex(room.index())?;
        }

        for room in grid.rooms() {
            for side in [Direction::East, Direction::South] {
                let Some(other) = grid.neighbor(room.index(), side) else {
                    continue;
                };
                let open: bool = room.is_open(side);
                if open != other.is_open(side.opposite()) {
                    return Err(MazeError::FormatInconsistency(format!(
                        "rooms ({}, {}) and ({}, {}) disagree on their common wall",
                        room.row(),
                        room.column(),
                        other.row(),
                        other.column()
                    )));
                }
                if open {
                    let weight: f64 = f64::from(room.score() + other.score() + 1);
                    graph.connect_weighted(&room.index(), &other.index(), weight)?;
                }
            }
        }

        let (entry, exit) = find_openings(&grid)?;

        let solution: Vec<usize> = graph
            .dijkstra(&entry, &exit)?
            .iter()
            .map(|v| *v.element())
            .collect();
        if solution.is_empty() {
            return Err(MazeError::Unsolvable);
        }

        debug!(
            "Maze {}x{}: {} edges, entry {entry}, exit {exit}, solution through {} rooms",
            grid.rows(),
            grid.columns(),
            graph.edge_count(),
            solution.len()
        );

        Ok(Self {
            grid,
            entry,
            exit,
            graph,
            solution,
        })
    }

    /// Carve a random maze and solve it.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if a dimension is not in `1..=255`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        Self::build(carver::carve(rows, columns, rng)?)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn grid(&self) -> &RoomGrid {
        &self.grid
    }

    /// Rooms in row-major order.
    pub fn rooms(&self) -> &[Room] {
        self.grid.rooms()
    }

    pub fn room(&self, row: usize, column: usize) -> Option<&Room> {
        self.grid.room(row, column)
    }

    pub fn entry(&self) -> &Room {
        &self.grid.rooms()[self.entry]
    }

    pub fn exit(&self) -> &Room {
        &self.grid.rooms()[self.exit]
    }

    pub fn graph(&self) -> &Graph<usize> {
        &self.graph
    }

    /// Vertexes of the solution, from the entry to the exit.
    pub fn solution(&self) -> Vec<VertexRef<'_, usize>> {
        self.solution
            .iter()
            .filter_map(|i| self.graph.vertex(i).ok())
            .collect()
    }

    /// Rooms of the solution, from the entry to the exit.
    pub fn solution_rooms(&self) -> Vec<&Room> {
        self.solution
            .iter()
            .filter_map(|i| self.grid.room_at(*i))
            .collect()
    }

    /// Sum of the edge weights along the solution.
    pub fn solution_cost(&self) -> f64 {
        self.solution
            .windows(2)
            .filter_map(|w| self.graph.weight(&w[0], &w[1]).ok())
            .sum()
    }
}

/// Find the entry and the exit rooms.
///
/// The border is scanned in this order: east column, north row, west column, south row.
/// The first opening is the entry and the second one is the exit.
fn find_openings(grid: &RoomGrid) -> Result<(usize, usize), MazeError> {
    let (rows, columns) = (grid.rows(), grid.columns());
    let east = (0..rows).map(|r| (r, columns - 1, Direction::East));
    let north = (0..columns).map(|c| (0, c, Direction::North));
    let west = (0..rows).map(|r| (r, 0, Direction::West));
    let south = (0..columns).map(|c| (rows - 1, c, Direction::South));

    let mut openings: Vec<usize> = Vec::with_capacity(2);
    for (row, column, side) in east.chain(north).chain(west).chain(south) {
        let Some(room) = grid.room(row, column) else {
            continue;
        };
        if !room.is_open(side) {
            continue;
        }
        if openings.len() == 2 {
            return Err(MazeError::FormatInconsistency(format!(
                "room ({row}, {column}) is a third opening in the border"
            )));
        }
        openings.push(room.index());
    }

    match openings[..] {
        [entry, exit] => Ok((entry, exit)),
        _ => Err(MazeError::FormatInconsistency(format!(
            "the border has {} opening(s) instead of two",
            openings.len()
        ))),
    }
}
