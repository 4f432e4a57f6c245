/*
codec.rs

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

//! `MAZE` byte format.
//!
//! ```text
//! 0x4D 0x41 0x5A 0x45   signature ("MAZE")
//! rows                  one byte
//! columns               one byte
//! rooms                 rows * columns bytes, row-major
//! ```
//!
//! Each room byte holds the closed walls in its lower four bits (east, north, west,
//! south from the least significant bit) and the score in its upper four bits. Bytes after
//! the last room are ignored.

use std::io::{Read, Write};

use super::MazeError;
use super::rooms::RoomGrid;

/// File signature.
pub const MAGIC: [u8; 4] = *b"MAZE";

/// Signature plus the two dimension bytes.
pub const HEADER_LEN: usize = 6;

/// Smallest number of rows or columns accepted by the decoder.
pub const MIN_DIMENSION: usize = 1;

/// Serialize the grid.
pub fn encode(grid: &RoomGrid) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::with_capacity(HEADER_LEN + grid.len());
    bytes.extend_from_slice(&MAGIC);
    // Grid dimensions never exceed 255
    bytes.push(grid.rows() as u8);
    bytes.push(grid.columns() as u8);
    bytes.extend(grid.to_bytes());
    bytes
}

/// Deserialize a grid.
///
/// # Errors
///
/// * [`MazeError::InvalidHeader`] if the data does not start with [`MAGIC`].
/// * [`MazeError::InvalidDimensions`] if a dimension is below [`MIN_DIMENSION`].
/// * [`MazeError::Truncated`] if the data ends before the last room.
pub fn decode(bytes: &[u8]) -> Result<RoomGrid, MazeError> {
    let signature: &[u8] = &bytes[..bytes.len().min(MAGIC.len())];
    if signature != &MAGIC[..signature.len()] {
        return Err(MazeError::InvalidHeader);
    }
    if bytes.len() < HEADER_LEN {
        return Err(MazeError::Truncated {
            expected: HEADER_LEN,
            got: bytes.len(),
        });
    }

    let rows: usize = usize::from(bytes[4]);
    let columns: usize = usize::from(bytes[5]);
    if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
        return Err(MazeError::InvalidDimensions { rows, columns });
    }

    let expected: usize = HEADER_LEN + rows * columns;
    if bytes.len() < expected {
        return Err(MazeError::Truncated {
            expected,
            got: bytes.len(),
        });
    }
    RoomGrid::from_bytes(rows, columns, &bytes[HEADER_LEN..expected])
}

/// Read a whole grid from a reader.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if reading fails, or any error from [`decode`].
pub fn read_from<R: Read>(mut reader: R) -> Result<RoomGrid, MazeError> {
    let mut bytes: Vec<u8> = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Write the grid to a writer.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if writing fails.
pub fn write_to<W: Write>(grid: &RoomGrid, mut writer: W) -> Result<(), MazeError> {
    writer.write_all(&encode(grid))?;
    writer.flush()?;
    Ok(())
}
