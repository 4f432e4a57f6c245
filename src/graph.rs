/*
graph.rs

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

//! Undirected weighted graph.
//!
//! A [`Graph`] stores its vertexes in an arena: a vector of slots addressed by integer.
//! A [`Dictionary`] maps each element to its slot, and each vertex keeps its own
//! dictionary of neighbors (element to slot and weight). Removing a vertex leaves an empty
//! slot behind, so slots are never reused and the arena keeps the insertion order.
//!
//! The graph operations are split across the submodules:
//!
//! * [`weighted`]: edges and weights.
//! * [`traversal`]: breadth-first and depth-first traversals, connectivity.
//! * [`paths`]: unweighted shortest path and Dijkstra's algorithm.
//! * [`vertexes`]: the vertex storage and the read-only [`VertexView`] projections.
//!
//! Traversals store their scratch state inside the vertexes, in [`std::cell::Cell`] fields.
//! They only need a shared borrow of the graph, but the graph is not [`Sync`].

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::collections::dictionary::Dictionary;

pub mod paths;
pub mod traversal;
pub mod vertexes;
pub mod weighted;

use vertexes::Vertex;
pub use vertexes::{Color, NeighborRef, Neighbors, VertexRef, VertexView};

/// Errors raised by the graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The arguments do not make sense for the graph in its current state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex is not in the graph.
    #[error("{0} is not in the graph")]
    NotFound(String),
}

/// Undirected graph with positive edge weights.
pub struct Graph<T> {
    /// Vertex arena. Removed vertexes leave `None` behind.
    slots: Vec<Option<Vertex<T>>>,

    /// Slot of each element.
    index: Dictionary<T, usize>,

    /// Number of edges.
    edges: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: Dictionary::new(),
            edges: 0,
        }
    }
}

impl<T> Graph<T> {
    /// Vertex in the given slot, if the slot is still occupied.
    fn vertex_at(&self, slot: usize) -> Option<&Vertex<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn vertex_at_mut(&mut self, slot: usize) -> Option<&mut Vertex<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Live vertexes in insertion order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.slots.iter().flatten()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// Create an empty [`Graph`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertexes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: Dictionary::with_capacity(capacity),
            edges: 0,
        }
    }

    /// Number of vertexes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the graph has no vertex.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Whether the element is a vertex of the graph.
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains(element)
    }

    /// Elements of the graph, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.vertices().map(|v| &v.element)
    }

    /// Add a vertex for the given element.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if the element is already in the graph.
    pub fn add_vertex(&mut self, element: T) -> Result<(), GraphError> {
        if self.index.contains(&element) {
            return Err(GraphError::InvalidArgument(format!(
                "{element:?} is already in the graph"
            )));
        }
        self.index.put(element.clone(), self.slots.len());
        self.slots.push(Some(Vertex::new(element)));
        Ok(())
    }

    /// Remove the vertex and all its edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the element is not in the graph.
    pub fn remove_vertex(&mut self, element: &T) -> Result<(), GraphError> {
        let slot: usize = self.slot_of(element)?;
        let vertex: Vertex<T> = self
            .slots
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or_else(|| not_found(element))?;

        for (_, n) in &vertex.neighbors {
            if let Some(other) = self.vertex_at_mut(n.slot) {
                // Both sides of an edge are always recorded
                let _ = other.neighbors.remove(element);
            }
        }
        self.edges -= vertex.neighbors.len();
        let _ = self.index.remove(element);
        Ok(())
    }

    /// Return a view of the vertex for the given element.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the element is not in the graph.
    pub fn vertex(&self, element: &T) -> Result<VertexRef<'_, T>, GraphError> {
        Ok(VertexRef::new(self, self.lookup(element)?))
    }

    /// Remove all the vertexes and edges.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.edges = 0;
    }

    fn slot_of(&self, element: &T) -> Result<usize, GraphError> {
        self.index
            .get(element)
            .copied()
            .map_err(|_| not_found(element))
    }

    fn lookup(&self, element: &T) -> Result<&Vertex<T>, GraphError> {
        let slot: usize = self.slot_of(element)?;
        self.vertex_at(slot).ok_or_else(|| not_found(element))
    }
}

fn not_found<T: fmt::Debug>(element: &T) -> GraphError {
    GraphError::NotFound(format!("{element:?}"))
}

impl<T: Clone + Eq + Hash + fmt::Debug> PartialEq for Graph<T> {
    /// Graphs are equal when they have the same elements and the same weighted edges.
    /// Insertion order does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.edges == other.edges
            && self.vertices().all(|v| {
                other.lookup(&v.element).is_ok_and(|w| {
                    v.neighbors.len() == w.neighbors.len()
                        && v.neighbors.iter().all(|(e, n)| {
                            w.neighbors.get(e).is_ok_and(|m| m.weight == n.weight)
                        })
                })
            })
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    /// List the vertexes then the edges: `{a, b, }, {(a, b), }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for v in self.vertices() {
            write!(f, "{}, ", v.element)?;
        }
        write!(f, "}}, {{")?;
        for (slot, v) in self.slots.iter().enumerate() {
            let Some(v) = v else { continue };
            for (other, n) in &v.neighbors {
                if n.slot > slot {
                    write!(f, "({}, {other}), ", v.element)?;
                }
            }
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.index.len())
            .field("edges", &self.edges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Graph, GraphError};

    fn triangle() -> Graph<char> {
        let mut g = Graph::new();
        for c in ['a', 'b', 'c'] {
            g.add_vertex(c).unwrap();
        }
        g.connect(&'a', &'b').unwrap();
        g.connect(&'b', &'c').unwrap();
        g.connect_weighted(&'c', &'a', 3.0).unwrap();
        g
    }

    #[test]
    fn add_vertex() {
        let mut g: Graph<u32> = Graph::new();
        assert!(g.is_empty());
        g.add_vertex(4).unwrap();
        g.add_vertex(2).unwrap();
        assert_eq!(g.len(), 2);
        assert!(g.contains(&4));
        assert!(matches!(g.add_vertex(4), Err(GraphError::InvalidArgument(_))));
        assert_eq!(g.elements().copied().collect::<Vec<u32>>(), [4, 2]);
    }

    #[test]
    fn remove_vertex_drops_its_edges() {
        let mut g = triangle();
        assert_eq!(g.edge_count(), 3);
        g.remove_vertex(&'b').unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains(&'b'));
        assert_eq!(g.are_neighbors(&'a', &'c'), Ok(true));
        assert_eq!(
            g.remove_vertex(&'b'),
            Err(GraphError::NotFound("'b'".to_string()))
        );

        // Slots are not reused
        g.add_vertex('b').unwrap();
        assert_eq!(g.elements().copied().collect::<String>(), "acb");
    }

    #[test]
    fn vertex_lookup() {
        let g = triangle();
        assert!(g.vertex(&'a').is_ok());
        assert!(matches!(g.vertex(&'z'), Err(GraphError::NotFound(_))));
    }

    #[test]
    fn equality() {
        let g1 = triangle();
        let mut g2: Graph<char> = Graph::new();
        for c in ['c', 'a', 'b'] {
            g2.add_vertex(c).unwrap();
        }
        g2.connect_weighted(&'a', &'c', 3.0).unwrap();
        g2.connect(&'c', &'b').unwrap();
        assert_ne!(g1, g2);
        g2.connect(&'b', &'a').unwrap();
        assert_eq!(g1, g2);
        g2.set_weight(&'a', &'b', 2.0).unwrap();
        assert_ne!(g1, g2);
    }

    #[test]
    fn display() {
        let mut g: Graph<u8> = Graph::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.connect(&1, &2).unwrap();
        assert_eq!(g.to_string(), "{1, 2, }, {(1, 2), }");
    }

    #[test]
    fn clear() {
        let mut g = triangle();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.to_string(), "{}, {}");
    }
}
