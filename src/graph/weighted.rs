/*
weighted.rs

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

//! Edges and weights.
//!
//! Edges are undirected: connecting `a` to `b` records the neighbor on both vertexes,
//! with the same weight. Weights are strictly positive and finite, which Dijkstra's
//! algorithm relies on.

use std::fmt::Debug;
use std::hash::Hash;

use super::vertexes::Neighbor;
use super::{Graph, GraphError};

impl<T: Clone + Eq + Hash + Debug> Graph<T> {
    /// Connect two vertexes with an edge of weight 1.
    ///
    /// # Errors
    ///
    /// See [`Graph::connect_weighted`].
    pub fn connect(&mut self, a: &T, b: &T) -> Result<(), GraphError> {
        self.connect_weighted(a, b, 1.0)
    }

    /// Connect two vertexes with an edge of the given weight.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NotFound`] if one of the elements is not in the graph.
    /// * [`GraphError::InvalidArgument`] if `a` and `b` are the same element, if the
    ///   weight is not a positive finite number, or if the vertexes are already connected.
    pub fn connect_weighted(&mut self, a: &T, b: &T, weight: f64) -> Result<(), GraphError> {
        let slot_a: usize = self.slot_of(a)?;
        let slot_b: usize = self.slot_of(b)?;
        if a == b {
            return Err(GraphError::InvalidArgument(format!(
                "cannot connect {a:?} to itself"
            )));
        }
        check_weight(weight)?;
        if self.are_neighbors(a, b)? {
            return Err(GraphError::InvalidArgument(format!(
                "{a:?} and {b:?} are already connected"
            )));
        }

        self.record(slot_a, b, slot_b, weight)?;
        self.record(slot_b, a, slot_a, weight)?;
        self.edges += 1;
        Ok(())
    }

    /// Remove the edge between two vertexes.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NotFound`] if one of the elements is not in the graph.
    /// * [`GraphError::InvalidArgument`] if the vertexes are not connected.
    pub fn disconnect(&mut self, a: &T, b: &T) -> Result<(), GraphError> {
        let slot_a: usize = self.slot_of(a)?;
        let slot_b: usize = self.slot_of(b)?;
        if !self.are_neighbors(a, b)? {
            return Err(not_connected(a, b));
        }

        for (slot, other) in [(slot_a, b), (slot_b, a)] {
            if let Some(v) = self.vertex_at_mut(slot) {
                let _ = v.neighbors.remove(other);
            }
        }
        self.edges -= 1;
        Ok(())
    }

    /// Whether an edge connects the two vertexes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if one of the elements is not in the graph.
    pub fn are_neighbors(&self, a: &T, b: &T) -> Result<bool, GraphError> {
        let vertex_a = self.lookup(a)?;
        self.slot_of(b)?;
        Ok(vertex_a.neighbors.contains(b))
    }

    /// Weight of the edge between two vertexes.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NotFound`] if one of the elements is not in the graph.
    /// * [`GraphError::InvalidArgument`] if the vertexes are not connected.
    pub fn weight(&self, a: &T, b: &T) -> Result<f64, GraphError> {
        let vertex_a = self.lookup(a)?;
        self.slot_of(b)?;
        vertex_a
            .neighbors
            .get(b)
            .map(|n| n.weight)
            .map_err(|_| not_connected(a, b))
    }

    /// Change the weight of the edge between two vertexes.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NotFound`] if one of the elements is not in the graph.
    /// * [`GraphError::InvalidArgument`] if the vertexes are not connected, or if the
    ///   weight is not a positive finite number.
    pub fn set_weight(&mut self, a: &T, b: &T, weight: f64) -> Result<(), GraphError> {
        check_weight(weight)?;
        let slot_a: usize = self.slot_of(a)?;
        let slot_b: usize = self.slot_of(b)?;
        if !self.are_neighbors(a, b)? {
            return Err(not_connected(a, b));
        }

        for (slot, other) in [(slot_a, b), (slot_b, a)] {
            if let Some(n) = self
                .vertex_at_mut(slot)
                .and_then(|v| v.neighbors.get_mut(other).ok())
            {
                n.weight = weight;
            }
        }
        Ok(())
    }

    /// Add `element` (in slot `slot`) to the neighbors of the vertex in slot `at`.
    fn record(&mut self, at: usize, element: &T, slot: usize, weight: f64) -> Result<(), GraphError> {
        let vertex = self
            .vertex_at_mut(at)
            .ok_or_else(|| GraphError::NotFound(format!("slot {at}")))?;
        vertex.neighbors.put(element.clone(), Neighbor { slot, weight });
        Ok(())
    }
}

fn check_weight(weight: f64) -> Result<(), GraphError> {
    if weight > 0.0 && weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument(format!(
            "the weight must be a positive number, not {weight}"
        )))
    }
}

fn not_connected<T: Debug>(a: &T, b: &T) -> GraphError {
    GraphError::InvalidArgument(format!("{a:?} and {b:?} are not connected"))
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, GraphError};

    fn pair() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_vertex("x").unwrap();
        g.add_vertex("y").unwrap();
        g
    }

    #[test]
    fn connect_is_symmetric() {
        let mut g = pair();
        g.connect_weighted(&"x", &"y", 4.5).unwrap();
        assert_eq!(g.are_neighbors(&"x", &"y"), Ok(true));
        assert_eq!(g.are_neighbors(&"y", &"x"), Ok(true));
        assert_eq!(g.weight(&"x", &"y"), Ok(4.5));
        assert_eq!(g.weight(&"y", &"x"), Ok(4.5));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn connect_errors() {
        let mut g = pair();
        assert!(matches!(
            g.connect(&"x", &"x"),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            g.connect(&"x", &"z"),
            Err(GraphError::NotFound(_))
        ));
        for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                g.connect_weighted(&"x", &"y", w),
                Err(GraphError::InvalidArgument(_))
            ));
        }
        g.connect(&"x", &"y").unwrap();
        assert!(matches!(
            g.connect(&"y", &"x"),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn disconnect_undoes_connect() {
        let mut g = pair();
        let before = format!("{g}");
        g.connect(&"x", &"y").unwrap();
        g.disconnect(&"y", &"x").unwrap();
        assert_eq!(g.are_neighbors(&"x", &"y"), Ok(false));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(format!("{g}"), before);
        assert!(matches!(
            g.disconnect(&"x", &"y"),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            g.disconnect(&"x", &"q"),
            Err(GraphError::NotFound(_))
        ));
    }

    #[test]
    fn set_weight_updates_both_ends() {
        let mut g = pair();
        assert!(g.set_weight(&"x", &"y", 2.0).is_err());
        g.connect(&"x", &"y").unwrap();
        g.set_weight(&"y", &"x", 7.0).unwrap();
        assert_eq!(g.weight(&"x", &"y"), Ok(7.0));
        assert!(matches!(
            g.set_weight(&"x", &"y", -3.0),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(g.weight(&"x", &"q"), Err(GraphError::NotFound(_))));
    }
}
