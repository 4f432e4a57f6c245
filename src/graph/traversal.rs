/*
traversal.rs

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

//! Graph traversals.
//!
//! Breadth-first and depth-first traversals share one loop and differ only by their work
//! list. During a traversal, the vertexes are colored `Unvisited` then `Visited`. All the
//! colors are back to `Neutral` when the traversal returns.

use std::fmt::Debug;
use std::hash::Hash;

use super::vertexes::{Color, VertexRef};
use super::{Graph, GraphError};
use crate::collections::work_list::{Queue, Stack, WorkList};

impl<T: Clone + Eq + Hash + Debug> Graph<T> {
    /// Set the traversal mark of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the element is not in the graph.
    pub fn set_color(&self, element: &T, color: Color) -> Result<(), GraphError> {
        self.lookup(element)?.color.set(color);
        Ok(())
    }

    /// Call `visitor` on every vertex, in insertion order.
    pub fn for_each_vertex<F>(&self, mut visitor: F)
    where
        F: FnMut(VertexRef<'_, T>),
    {
        for v in self.vertices() {
            visitor(VertexRef::new(self, v));
        }
    }

    /// Visit the vertexes reachable from `start`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the element is not in the graph.
    pub fn bfs<F>(&self, start: &T, visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(VertexRef<'_, T>),
    {
        let slot: usize = self.slot_of(start)?;
        self.traverse(slot, Queue::new(), visitor);
        Ok(())
    }

    /// Visit the vertexes reachable from `start`, deepest first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the element is not in the graph.
    pub fn dfs<F>(&self, start: &T, visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(VertexRef<'_, T>),
    {
        let slot: usize = self.slot_of(start)?;
        self.traverse(slot, Stack::new(), visitor);
        Ok(())
    }

    /// Whether every vertex can be reached from every other vertex.
    ///
    /// An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.slots.iter().position(Option::is_some) else {
            return true;
        };
        self.traverse(first, Queue::new(), |_| {}) == self.len()
    }

    /// Run the traversal loop from the vertex in slot `start`. Return the number of visited
    /// vertexes.
    fn traverse<W, F>(&self, start: usize, mut work: W, mut visitor: F) -> usize
    where
        W: WorkList<usize>,
        F: FnMut(VertexRef<'_, T>),
    {
        for v in self.vertices() {
            v.color.set(Color::Unvisited);
        }

        let mut visited: usize = 0;
        if let Some(v) = self.vertex_at(start) {
            v.color.set(Color::Visited);
            work.push(start);
        }

        while let Ok(slot) = work.pop() {
            let Some(v) = self.vertex_at(slot) else {
                continue;
            };
            visitor(VertexRef::new(self, v));
            visited += 1;

            for (_, n) in &v.neighbors {
                if let Some(w) = self.vertex_at(n.slot)
                    && w.color.get() == Color::Unvisited
                {
                    w.color.set(Color::Visited);
                    work.push(n.slot);
                }
            }
        }

        for v in self.vertices() {
            v.color.set(Color::Neutral);
        }
        visited
    }
}
