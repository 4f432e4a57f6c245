/*
svg.rs

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

//! SVG rendering of a solved maze.

use super::builder::Maze;
use super::rooms::{Direction, Room};

/// Side of a room, in SVG user units.
pub const CELL: usize = 20;

/// Blank space around the maze.
pub const MARGIN: usize = 20;

const WALL_COLOR: &str = "black";
const WALL_WIDTH: usize = 4;
const PATH_COLOR: &str = "#960C0C";
const PATH_WIDTH: usize = 7;
const ENTRY_COLOR: &str = "#2FC489";
const EXIT_COLOR: &str = "#5B60D2";
const MARKER_RADIUS: usize = 6;

/// Render the maze, its solution, and the entry and exit markers.
pub fn render(maze: &Maze) -> String {
    let width: usize = maze.columns() * CELL + 2 * MARGIN;
    let height: usize = maze.rows() * CELL + 2 * MARGIN;
    let mut svg: String = String::new();

    svg.push_str("<?xml version='1.0' encoding='UTF-8' ?>\n");
    svg.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}'>\n"
    ));
    svg.push_str(&format!(
        "  <rect fill='white' stroke='white' stroke-width='1' width='{width}' height='{height}'/>\n"
    ));

    // Outer border first. The inner walls are drawn from the east and south walls of
    // every room.
    let (rows, columns) = (maze.rows(), maze.columns());
    let border = (0..rows)
        .map(|r| (r, columns - 1, Direction::East))
        .chain((0..columns).map(|c| (0, c, Direction::North)))
        .chain((0..rows).map(|r| (r, 0, Direction::West)))
        .chain((0..columns).map(|c| (rows - 1, c, Direction::South)));
    for (row, column, side) in border {
        if let Some(room) = maze.room(row, column)
            && !room.is_open(side)
        {
            wall(&mut svg, room, side);
        }
    }
    for room in maze.rooms() {
        for side in [Direction::East, Direction::South] {
            if !room.is_open(side) {
                wall(&mut svg, room, side);
            }
        }
    }

    let path: Vec<&Room> = maze.solution_rooms();
    for step in path.windows(2) {
        let (x1, y1) = center(step[0]);
        let (x2, y2) = center(step[1]);
        line(&mut svg, (x1, y1, x2, y2), PATH_COLOR, PATH_WIDTH);
    }

    marker(&mut svg, maze.entry(), ENTRY_COLOR);
    marker(&mut svg, maze.exit(), EXIT_COLOR);
    svg.push_str("</svg>\n");
    svg
}

/// Upper left corner of a room.
fn corner(room: &Room) -> (usize, usize) {
    (MARGIN + room.column() * CELL, MARGIN + room.row() * CELL)
}

fn center(room: &Room) -> (usize, usize) {
    let (x, y) = corner(room);
    (x + CELL / 2, y + CELL / 2)
}

fn wall(svg: &mut String, room: &Room, side: Direction) {
    let (x, y) = corner(room);
    let segment = match side {
        Direction::East => (x + CELL, y, x + CELL, y + CELL),
        Direction::North => (x, y, x + CELL, y),
        Direction::West => (x, y, x, y + CELL),
        Direction::South => (x, y + CELL, x + CELL, y + CELL),
    };
    line(svg, segment, WALL_COLOR, WALL_WIDTH);
}

fn line(svg: &mut String, (x1, y1, x2, y2): (usize, usize, usize, usize), color: &str, width: usize) {
    svg.push_str(&format!(
        "  <line x1='{x1}' y1='{y1}' x2='{x2}' y2='{y2}' stroke='{color}' stroke-width='{width}'/>\n"
    ));
}

fn marker(svg: &mut String, room: &Room, color: &str) {
    let (cx, cy) = center(room);
    svg.push_str(&format!(
        "  <circle cx='{cx}' cy='{cy}' r='{MARKER_RADIUS}' stroke='black' stroke-width='2' fill='{color}'/>\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::maze::{Maze, RoomGrid};

    fn square() -> Maze {
        let grid = RoomGrid::from_bytes(2, 2, &[0x04, 0x03, 0x0C, 0x01]).unwrap();
        Maze::build(grid).unwrap()
    }

    #[test]
    fn document() {
        let svg: String = render(&square());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width='80' height='80'"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn walls_path_and_markers() {
        let svg: String = render(&square());

        // West border of (0, 0) and east border of (0, 1)
        assert!(svg.contains("<line x1='20' y1='20' x2='20' y2='40' stroke='black'"));
        assert!(svg.contains("<line x1='60' y1='20' x2='60' y2='40' stroke='black'"));

        // Two solution segments
        assert_eq!(svg.matches("stroke='#960C0C'").count(), 2);
        assert!(svg.contains("<circle cx='30' cy='30'"));
        assert!(svg.contains("fill='#2FC489'"));
        assert!(svg.contains("<circle cx='50' cy='50'"));
        assert!(svg.contains("fill='#5B60D2'"));
    }

    #[test]
    fn every_element_is_written() {
        let svg: String = render(&square());

        // 6 border walls, 3 inner east or south walls
        assert_eq!(svg.matches("stroke='black' stroke-width='4'").count(), 9);

        // Header, rectangle, closing tag, 9 walls, 2 path segments, 2 markers
        assert_eq!(svg.lines().count(), 17);
        assert!(svg.lines().all(|l| l.trim_end().ends_with('>')));
    }
}
