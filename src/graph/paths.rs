/*
paths.rs

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

//! Shortest paths.
//!
//! [`Graph::shortest_path`] counts edges and ignores the weights. [`Graph::dijkstra`] uses
//! the weights.
//!
//! Both algorithms label every vertex with its distance to the origin, then walk back from
//! the destination to the origin along the labels. When several neighbors fit during the
//! walk back, the first one in the neighbor dictionary wins, so among paths of equal cost,
//! which one is returned is not specified.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use super::vertexes::{Vertex, VertexRef};
use super::{Graph, GraphError};
use crate::collections::heap::{Indexable, IndexedMinHeap, MinQueue};
use crate::collections::linear_queue::LinearScanQueue;
use crate::collections::work_list::{Queue, WorkList};

/// Element of the Dijkstra priority queues.
///
/// The position of the element in the queue is kept in the vertex itself. Elements are
/// ordered by tentative distance, and are equal only when they wrap the same vertex.
struct Tentative<'g, T>(&'g Vertex<T>);

impl<T> Indexable for Tentative<'_, T> {
    fn index(&self) -> Option<usize> {
        self.0.heap_index.get()
    }

    fn set_index(&mut self, index: Option<usize>) {
        self.0.heap_index.set(index);
    }
}

impl<T> PartialEq for Tentative<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T> PartialOrd for Tentative<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.distance.get().partial_cmp(&other.0.distance.get())
    }
}

impl<T: Clone + Eq + Hash + Debug> Graph<T> {
    /// Path with the fewest edges from `origin` to `destination`, both included.
    ///
    /// The path is empty if `destination` cannot be reached. It contains only `origin` if
    /// the two elements are the same.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if one of the elements is not in the graph.
    pub fn shortest_path(
        &self,
        origin: &T,
        destination: &T,
    ) -> Result<Vec<VertexRef<'_, T>>, GraphError> {
        let start: &Vertex<T> = self.lookup(origin)?;
        let end: &Vertex<T> = self.lookup(destination)?;

        for v in self.vertices() {
            v.distance.set(f64::INFINITY);
        }
        start.distance.set(0.0);

        let mut queue: Queue<&Vertex<T>> = Queue::new();
        queue.push(start);
        while let Ok(u) = queue.pop() {
            if std::ptr::eq(u, end) {
                break;
            }
            for (_, n) in &u.neighbors {
                if let Some(v) = self.vertex_at(n.slot)
                    && v.distance.get().is_infinite()
                {
                    v.distance.set(u.distance.get() + 1.0);
                    queue.push(v);
                }
            }
        }

        Ok(self.walk_back(end, |_| 1.0))
    }

    /// Path of least total weight from `origin` to `destination`, both included.
    ///
    /// The path is empty if `destination` cannot be reached. It contains only `origin` if
    /// the two elements are the same.
    ///
    /// On dense graphs, the search uses a [`LinearScanQueue`], otherwise an
    /// [`IndexedMinHeap`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if one of the elements is not in the graph.
    pub fn dijkstra(
        &self,
        origin: &T,
        destination: &T,
    ) -> Result<Vec<VertexRef<'_, T>>, GraphError> {
        let start: &Vertex<T> = self.lookup(origin)?;
        let end: &Vertex<T> = self.lookup(destination)?;

        for v in self.vertices() {
            v.distance.set(f64::INFINITY);
            v.heap_index.set(None);
        }
        start.distance.set(0.0);

        // Dense when edges > n(n-1)/2 - n
        let n: usize = self.len();
        let tentatives = self.vertices().map(Tentative);
        if self.edges + n > n * n.saturating_sub(1) / 2 {
            debug!(
                "Dijkstra: {n} vertexes, {} edges, linear scan queue",
                self.edges
            );
            self.relax_all(tentatives.collect::<LinearScanQueue<_>>());
        } else {
            debug!("Dijkstra: {n} vertexes, {} edges, binary heap", self.edges);
            self.relax_all(tentatives.collect::<IndexedMinHeap<_>>());
        }

        Ok(self.walk_back(end, |w| w))
    }

    /// Extract the vertexes by increasing distance, and lower the distance of their
    /// neighbors.
    fn relax_all<'g, Q>(&'g self, mut queue: Q)
    where
        Q: MinQueue<Tentative<'g, T>>,
    {
        while let Ok(Tentative(u)) = queue.extract_min() {
            let du: f64 = u.distance.get();
            for (_, n) in &u.neighbors {
                let Some(v) = self.vertex_at(n.slot) else {
                    continue;
                };
                if v.distance.get() > du + n.weight {
                    v.distance.set(du + n.weight);
                    queue.reorder(&Tentative(v));
                }
            }
        }
    }

    /// Build the path that ends at `end`, from the distance labels.
    ///
    /// `cost` converts an edge weight into the distance that the labeling added for that
    /// edge.
    fn walk_back<'g, C>(&'g self, end: &'g Vertex<T>, cost: C) -> Vec<VertexRef<'g, T>>
    where
        C: Fn(f64) -> f64,
    {
        if end.distance.get().is_infinite() {
            return Vec::new();
        }

        let mut path: Vec<VertexRef<'g, T>> = vec![VertexRef::new(self, end)];
        let mut current: &Vertex<T> = end;
        while current.distance.get() > 0.0 {
            let d: f64 = current.distance.get();
            let previous: Option<&Vertex<T>> = current.neighbors.values().find_map(|n| {
                self.vertex_at(n.slot)
                    .filter(|v| v.distance.get() + cost(n.weight) == d)
            });
            let Some(v) = previous else {
                break;
            };
            path.push(VertexRef::new(self, v));
            current = v;
        }
        path.reverse();
        path
    }
}
