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


use proptest::prelude::*;

use labyrinth::graph::{Graph, VertexView};

/// Every pair `(a, b)` with `a < b`, in a fixed order.
fn pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
        .collect()
}

/// Build a graph on `0..n` with the edges that have a weight.
fn build(n: usize, weights: &[Option<u8>]) -> Graph<usize> {
    let mut g: Graph<usize> = Graph::with_capacity(n);
    for i in 0..n {
        g.add_vertex(i).unwrap();
    }
    for ((a, b), w) in pairs(n).into_iter().zip(weights) {
        if let Some(w) = w {
            g.connect_weighted(&a, &b, f64::from(*w)).unwrap();
        }
    }
    g
}

/// Distances from vertex 0 by repeated relaxation over every edge.
fn relaxed_distances(n: usize, weights: &[Option<u8>]) -> Vec<f64> {
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    dist[0] = 0.0;
    for _ in 0..n {
        for ((a, b), w) in pairs(n).into_iter().zip(weights) {
            if let Some(w) = w {
                let w = f64::from(*w);
                dist[b] = dist[b].min(dist[a] + w);
                dist[a] = dist[a].min(dist[b] + w);
            }
        }
    }
    dist
}

fn is_dense(g: &Graph<usize>) -> bool {
    let n: usize = g.len();
    g.edge_count() + n > n * (n - 1) / 2
}

/// Run Dijkstra from 0 to every vertex and compare with the relaxed distances.
fn check_paths(g: &Graph<usize>, expected: &[f64]) -> Result<(), TestCaseError> {
    for (target, want) in expected.iter().enumerate() {
        let path = g.dijkstra(&0, &target).unwrap();
        if want.is_infinite() {
            prop_assert!(path.is_empty());
            continue;
        }
        prop_assert_eq!(*path[0].element(), 0);
        prop_assert_eq!(*path[path.len() - 1].element(), target);
        prop_assert_eq!(path[path.len() - 1].distance(), *want);

        let mut cost: f64 = 0.0;
        for step in path.windows(2) {
            cost += g.weight(step[0].element(), step[1].element()).unwrap();
        }
        prop_assert_eq!(cost, *want);
    }
    Ok(())
}

proptest! {
    #[test]
    fn dijkstra_on_complete_graphs(
        (n, weights) in (2usize..14).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(prop::option::weighted(1.0, 1u8..20), n * (n - 1) / 2))
        })
    ) {
        let g: Graph<usize> = build(n, &weights);
        prop_assert!(is_dense(&g));
        check_paths(&g, &relaxed_distances(n, &weights))?;
    }

    #[test]
    fn dijkstra_on_sparse_graphs(
        (n, weights) in (4usize..20).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(prop::option::weighted(0.25, 1u8..20), n * (n - 1) / 2))
        })
    ) {
        let g: Graph<usize> = build(n, &weights);
        prop_assume!(!is_dense(&g));
        check_paths(&g, &relaxed_distances(n, &weights))?;
    }

    #[test]
    fn both_queues_agree(
        (n, weights) in (4usize..14).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(prop::option::weighted(0.3, 1u8..20), n * (n - 1) / 2))
        })
    ) {
        let sparse: Graph<usize> = build(n, &weights);
        prop_assume!(!is_dense(&sparse));

        // Same distances, with every missing pair joined by an edge too heavy to be used
        let heavy: Vec<Option<u8>> = weights.iter().map(|w| Some(w.unwrap_or(u8::MAX))).collect();
        let dense: Graph<usize> = build(n, &heavy);
        prop_assert!(is_dense(&dense));

        // Paths have at most 13 edges of weight 19 or less, so the heavy edges never help
        let reference: Vec<f64> = relaxed_distances(n, &weights);
        let capped: Vec<f64> = relaxed_distances(n, &heavy);
        check_paths(&sparse, &reference)?;
        check_paths(&dense, &capped)?;
        for (target, want) in reference.iter().enumerate() {
            if want.is_finite() {
                prop_assert_eq!(capped[target], *want);
            } else {
                prop_assert!(capped[target] >= f64::from(u8::MAX));
            }
        }
    }
}
