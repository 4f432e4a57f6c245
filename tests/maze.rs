/*
maze.rs

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
use rand::SeedableRng;
use rand::rngs::StdRng;

use labyrinth::graph::VertexView;
use labyrinth::maze::{Direction, Maze, MazeError, RoomGrid, carver, codec};

/// 2x2 grid with every internal wall open, the entry north of (0, 0) and the exit south of
/// (1, 1).
const OPEN_SQUARE: [u8; 10] = [0x4D, 0x41, 0x5A, 0x45, 2, 2, 0x04, 0x03, 0x0C, 0x01];

#[test]
fn solve_open_square() {
    let maze = Maze::build(codec::decode(&OPEN_SQUARE).unwrap()).unwrap();
    let path = maze.solution();
    assert_eq!(path.len(), 3);
    assert_eq!(*path[0].element(), 0);
    assert_eq!(*path[2].element(), 3);

    let rooms = maze.solution_rooms();
    for step in rooms.windows(2) {
        let open = Direction::ALL.into_iter().any(|d| {
            step[0].neighbor(d) == Some(step[1].index())
                && step[0].is_open(d)
                && step[1].is_open(d.opposite())
        });
        assert!(open, "no open wall between {:?} and {:?}", step[0], step[1]);
    }
}

#[test]
fn mismatched_walls() {
    // (0, 1) keeps its west wall while (0, 0) opens east
    let mut bytes = OPEN_SQUARE;
    bytes[7] |= 0x04;
    let grid = codec::decode(&bytes).unwrap();
    assert!(matches!(
        Maze::build(grid),
        Err(MazeError::FormatInconsistency(_))
    ));
}

#[test]
fn thin_mazes() {
    let mut rng = StdRng::seed_from_u64(255);
    for (rows, columns) in [(1, 255), (255, 1), (1, 2), (2, 1)] {
        let maze = Maze::random(rows, columns, &mut rng).unwrap();
        assert!(maze.graph().is_connected());
        assert_eq!(maze.graph().edge_count(), rows * columns - 1);
        assert_ne!(maze.entry().index(), maze.exit().index());
    }
}

#[test]
fn svg_output() {
    let maze = Maze::build(codec::decode(&OPEN_SQUARE).unwrap()).unwrap();
    let image: String = labyrinth::maze::svg::render(&maze);
    assert!(image.contains("<svg"));
    assert_eq!(image.matches("<circle").count(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn carved_mazes_are_connected(rows in 1usize..=255, columns in 1usize..=255, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::random(rows, columns, &mut rng).unwrap();
        prop_assert!(maze.graph().is_connected());
        prop_assert_eq!(maze.graph().len(), rows * columns);
        prop_assert_eq!(maze.graph().edge_count(), rows * columns - 1);

        let path = maze.solution();
        prop_assert!(!path.is_empty());
        prop_assert_eq!(*path[0].element(), maze.entry().index());
        prop_assert_eq!(*path[path.len() - 1].element(), maze.exit().index());
    }

    #[test]
    fn round_trip_keeps_the_graph(rows in 1usize..=40, columns in 1usize..=40, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid: RoomGrid = carver::carve(rows, columns, &mut rng).unwrap();
        let bytes: Vec<u8> = codec::encode(&grid);
        prop_assert_eq!(bytes.len(), 6 + rows * columns);

        let original = Maze::build(grid).unwrap();
        let decoded = Maze::build(codec::decode(&bytes).unwrap()).unwrap();
        prop_assert_eq!(original.graph(), decoded.graph());
        prop_assert_eq!(original.entry().index(), decoded.entry().index());
        prop_assert_eq!(original.exit().index(), decoded.exit().index());
        prop_assert_eq!(original.solution_cost(), decoded.solution_cost());
    }

    #[test]
    fn bfs_and_dijkstra_reach_the_same_rooms(rows in 2usize..=20, columns in 2usize..=20, seed in any::<u64>()) {
        // On a spanning tree, both searches find the only path
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::random(rows, columns, &mut rng).unwrap();
        let entry = maze.entry().index();
        let exit = maze.exit().index();

        let hops: Vec<usize> = maze
            .graph()
            .shortest_path(&entry, &exit)
            .unwrap()
            .iter()
            .map(|v| *v.element())
            .collect();
        let weighted: Vec<usize> = maze.solution().iter().map(|v| *v.element()).collect();
        prop_assert_eq!(hops, weighted);
    }
}
