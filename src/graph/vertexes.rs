/*
vertexes.rs

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

//! Vertexes of the graph and their read-only views.
//!
//! A [`Vertex`] lives in a slot of the graph arena. Its neighbors are stored as slot numbers,
//! so no vertex holds a reference to another. The traversal and shortest path algorithms
//! keep their scratch state (color, tentative distance, heap position) in [`Cell`] fields,
//! which lets them run on a shared borrow of the graph.

use std::cell::Cell;
use std::fmt;

use super::Graph;
use crate::collections::dictionary::{self, Dictionary};

/// Marks set on the vertexes during a traversal.
///
/// Vertexes are `Neutral` outside of traversals.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Neutral,
    Unvisited,
    Visited,
}

/// Edge from a vertex to the vertex in slot `slot`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct Neighbor {
    pub(super) slot: usize,
    pub(super) weight: f64,
}

/// Graph vertex: the element plus the algorithm scratch state.
#[derive(Debug)]
pub(super) struct Vertex<T> {
    pub(super) element: T,
    pub(super) neighbors: Dictionary<T, Neighbor>,
    pub(super) color: Cell<Color>,
    pub(super) distance: Cell<f64>,
    pub(super) heap_index: Cell<Option<usize>>,
}

impl<T> Vertex<T> {
    pub(super) fn new(element: T) -> Self {
        Self {
            element,
            neighbors: Dictionary::new(),
            color: Cell::new(Color::Neutral),
            distance: Cell::new(f64::INFINITY),
            heap_index: Cell::new(None),
        }
    }
}

/// Read-only access to a vertex, shared by the vertex and neighbor projections.
pub trait VertexView<'g, T> {
    /// Element stored in the vertex.
    fn element(&self) -> &'g T;

    /// Number of edges of the vertex.
    fn degree(&self) -> usize;

    /// Current traversal mark.
    fn color(&self) -> Color;

    /// Adjacent vertexes, in no particular order.
    fn neighbors(&self) -> Neighbors<'g, T>;
}

/// Projection of a vertex, borrowed from the graph.
pub struct VertexRef<'g, T> {
    graph: &'g Graph<T>,
    vertex: &'g Vertex<T>,
}

impl<'g, T> VertexRef<'g, T> {
    pub(super) fn new(graph: &'g Graph<T>, vertex: &'g Vertex<T>) -> Self {
        Self { graph, vertex }
    }

    /// Distance computed by the last shortest path search.
    ///
    /// Infinite for the vertexes that the search did not reach.
    pub fn distance(&self) -> f64 {
        self.vertex.distance.get()
    }
}

impl<T> Clone for VertexRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexRef<'_, T> {}

impl<'g, T> VertexView<'g, T> for VertexRef<'g, T> {
    fn element(&self) -> &'g T {
        &self.vertex.element
    }

    fn degree(&self) -> usize {
        self.vertex.neighbors.len()
    }

    fn color(&self) -> Color {
        self.vertex.color.get()
    }

    fn neighbors(&self) -> Neighbors<'g, T> {
        Neighbors {
            graph: self.graph,
            entries: self.vertex.neighbors.iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for VertexRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("element", &self.vertex.element)
            .field("degree", &self.vertex.neighbors.len())
            .finish()
    }
}

/// Projection of an edge, seen from one of its ends.
///
/// The view describes the vertex at the other end, and [`NeighborRef::weight`] gives the
/// weight of the edge.
pub struct NeighborRef<'g, T> {
    vertex: VertexRef<'g, T>,
    weight: f64,
}

impl<'g, T> NeighborRef<'g, T> {
    /// Weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Full view of the adjacent vertex.
    pub fn vertex(&self) -> VertexRef<'g, T> {
        self.vertex
    }
}

impl<'g, T> VertexView<'g, T> for NeighborRef<'g, T> {
    fn element(&self) -> &'g T {
        self.vertex.element()
    }

    fn degree(&self) -> usize {
        self.vertex.degree()
    }

    fn color(&self) -> Color {
        self.vertex.color()
    }

    fn neighbors(&self) -> Neighbors<'g, T> {
        self.vertex.neighbors()
    }
}

impl<T: fmt::Debug> fmt::Debug for NeighborRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighborRef")
            .field("element", self.vertex.element())
            .field("weight", &self.weight)
            .finish()
    }
}

/// Iterator over the neighbors of a vertex.
pub struct Neighbors<'g, T> {
    graph: &'g Graph<T>,
    entries: dictionary::Iter<'g, T, Neighbor>,
}

impl<'g, T> Iterator for Neighbors<'g, T> {
    type Item = NeighborRef<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph: &'g Graph<T> = self.graph;
        self.entries.by_ref().find_map(|(_, n)| {
            graph.vertex_at(n.slot).map(|vertex| NeighborRef {
                vertex: VertexRef::new(graph, vertex),
                weight: n.weight,
            })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, VertexView};
    use crate::graph::Graph;

    #[test]
    fn vertex_projection() {
        let mut g: Graph<&str> = Graph::new();
        for e in ["a", "b", "c"] {
            g.add_vertex(e).unwrap();
        }
        g.connect_weighted(&"a", &"b", 2.5).unwrap();
        g.connect(&"a", &"c").unwrap();

        let a = g.vertex(&"a").unwrap();
        assert_eq!(*a.element(), "a");
        assert_eq!(a.degree(), 2);
        assert_eq!(a.color(), Color::Neutral);

        let mut seen: Vec<(&str, f64)> = a.neighbors().map(|n| (*n.element(), n.weight())).collect();
        seen.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(seen, [("b", 2.5), ("c", 1.0)]);
    }

    #[test]
    fn neighbor_projection_walks_on() {
        let mut g: Graph<u32> = Graph::new();
        for e in 0..3 {
            g.add_vertex(e).unwrap();
        }
        g.connect(&0, &1).unwrap();
        g.connect(&1, &2).unwrap();

        let zero = g.vertex(&0).unwrap();
        let one = zero.neighbors().next().unwrap();
        assert_eq!(*one.element(), 1);
        assert_eq!(one.degree(), 2);
        let mut beyond: Vec<u32> = one.neighbors().map(|n| *n.element()).collect();
        beyond.sort_unstable();
        assert_eq!(beyond, [0, 2]);
        assert_eq!(*one.vertex().element(), 1);
    }

    #[test]
    fn colors_follow_set_color() {
        let mut g: Graph<u8> = Graph::new();
        g.add_vertex(1).unwrap();
        g.set_color(&1, Color::Visited).unwrap();
        assert_eq!(g.vertex(&1).unwrap().color(), Color::Visited);
        assert!(g.set_color(&2, Color::Visited).is_err());
    }
}
