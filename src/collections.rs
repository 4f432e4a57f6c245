/*
collections.rs

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

//! Containers backing the graph runtime.
//!
//! * [`dictionary::Dictionary`] is an open-hashing map with chained buckets. The hash
//!   function is pluggable through the [`dictionary::KeyHasher`] trait, and the byte
//!   oriented strategies live in [`hashers`].
//! * [`heap::IndexedMinHeap`] is a binary min-heap whose elements remember their own
//!   position, which makes removing or reordering an arbitrary element cheap.
//!   [`linear_queue::LinearScanQueue`] offers the same [`heap::MinQueue`] contract with a
//!   flat array, which is faster on dense graphs.
//! * [`work_list::Queue`] and [`work_list::Stack`] are the traversal work lists.

use thiserror::Error;

pub mod dictionary;
pub mod hashers;
pub mod heap;
pub mod linear_queue;
pub mod work_list;

/// Errors raised by the containers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The key is not in the dictionary.
    #[error("the key is not in the dictionary")]
    NotFound,

    /// Extracting from an empty container. The payload names the container.
    #[error("cannot extract an element from an empty {0}")]
    Empty(&'static str),
}
