/*
lib.rs

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

//! Generate and solve rectangular mazes.
//!
//! The crate is built in layers:
//!
//! * [`collections`]: a chained hash dictionary with pluggable hash functions, an indexed
//!   binary min-heap, and the traversal work lists.
//! * [`graph`]: an undirected weighted graph with traversals and shortest paths.
//! * [`maze`]: the maze model. A grid of rooms, decoded from the `MAZE` byte format or
//!   carved at random, becomes a graph whose shortest path from the entry to the exit is
//!   the solution. Solved mazes can be rendered as SVG or summarized as JSON.
//!
//! # Examples
//!
//! ```
//! use labyrinth::maze::{Maze, svg};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let maze = Maze::random(10, 15, &mut rng).unwrap();
//! assert!(maze.graph().is_connected());
//! let image: String = svg::render(&maze);
//! assert!(image.contains("<svg"));
//! ```

pub mod collections;
pub mod graph;
pub mod maze;
