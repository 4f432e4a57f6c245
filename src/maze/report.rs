/*
report.rs

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

//! Machine-readable summary of a solved maze.

use serde::Serialize;

use super::builder::Maze;

/// Solution of a maze, serialized to JSON by the command line.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub rows: usize,
    pub columns: usize,

    /// Position of the entry room, as `(row, column)`.
    pub entry: (usize, usize),

    /// Position of the exit room.
    pub exit: (usize, usize),

    /// Positions of the rooms from the entry to the exit.
    pub path: Vec<(usize, usize)>,

    /// Sum of the edge weights along the path.
    pub cost: f64,

    /// Number of moves from the entry to the exit.
    pub steps: usize,
}

impl SolutionReport {
    pub fn new(maze: &Maze) -> Self {
        let path: Vec<(usize, usize)> = maze
            .solution_rooms()
            .iter()
            .map(|r| (r.row(), r.column()))
            .collect();
        Self {
            rows: maze.rows(),
            columns: maze.columns(),
            entry: (maze.entry().row(), maze.entry().column()),
            exit: (maze.exit().row(), maze.exit().column()),
            steps: path.len().saturating_sub(1),
            path,
            cost: maze.solution_cost(),
        }
    }

    /// Return the report as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] raised by the serializer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Maze> for SolutionReport {
    fn from(maze: &Maze) -> Self {
        Self::new(maze)
    }
}
