/*
hashers.rs

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

//! Byte-oriented hash functions.
//!
//! The functions take a byte slice and return a 32-bit value. [`HashAlgorithm`] wraps them
//! so that they can be plugged into a [`super::dictionary::Dictionary`] for any key that
//! can be viewed as bytes.

use super::dictionary::KeyHasher;

/// Seed of the Bob Jenkins accumulators (golden ratio).
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Seed of the Bernstein accumulator.
const BERNSTEIN_SEED: u32 = 5381;

/// Available byte hash functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// See [`xor`].
    Xor,

    /// See [`bob_jenkins`].
    #[default]
    BobJenkins,

    /// See [`bernstein`].
    Bernstein,
}

impl HashAlgorithm {
    /// Hash the given bytes with the selected algorithm.
    pub fn hash(self, bytes: &[u8]) -> u32 {
        match self {
            HashAlgorithm::Xor => xor(bytes),
            HashAlgorithm::BobJenkins => bob_jenkins(bytes),
            HashAlgorithm::Bernstein => bernstein(bytes),
        }
    }
}

impl<K> KeyHasher<K> for HashAlgorithm
where
    K: AsRef<[u8]> + ?Sized,
{
    fn hash_key(&self, key: &K) -> u32 {
        self.hash(key.as_ref())
    }
}

/// XOR of the big-endian 32-bit words of the key.
///
/// A trailing partial word fills the most significant bytes of the last word.
pub fn xor(key: &[u8]) -> u32 {
    let mut chunks = key.chunks_exact(4);
    let mut r: u32 = 0;

    for chunk in &mut chunks {
        r ^= u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut tail: [u8; 4] = [0; 4];
    let rest: &[u8] = chunks.remainder();
    tail[..rest.len()].copy_from_slice(rest);
    r ^ u32::from_be_bytes(tail)
}

/// Bob Jenkins' hash (lookup2 mixing) with a fixed seed.
pub fn bob_jenkins(key: &[u8]) -> u32 {
    let mut a: u32 = GOLDEN_RATIO;
    let mut b: u32 = GOLDEN_RATIO;
    let mut c: u32 = 0xFFFF_FFFF;
    let mut chunks = key.chunks_exact(12);

    for chunk in &mut chunks {
        a = a.wrapping_add(little_endian(&chunk[0..4]));
        b = b.wrapping_add(little_endian(&chunk[4..8]));
        c = c.wrapping_add(little_endian(&chunk[8..12]));
        (a, b, c) = mix(a, b, c);
    }

    // The key length is truncated to 32 bits, like the accumulators
    c = c.wrapping_add(key.len() as u32);

    // The lowest byte of `c` is taken by the length, so the tail only fills its upper
    // three bytes
    let rest: &[u8] = chunks.remainder();
    let mut tail: [u8; 12] = [0; 12];
    tail[1..=rest.len()].copy_from_slice(rest);
    a = a.wrapping_add(little_endian(&tail[1..5]));
    b = b.wrapping_add(little_endian(&tail[5..9]));
    c = c.wrapping_add(little_endian(&tail[8..12]) & 0xFFFF_FF00);

    mix(a, b, c).2
}

/// Daniel J. Bernstein's additive hash: `h = h * 33 + byte`.
pub fn bernstein(key: &[u8]) -> u32 {
    key.iter().fold(BERNSTEIN_SEED, |h, &byte| {
        h.wrapping_add(h << 5).wrapping_add(u32::from(byte))
    })
}

/// Read four bytes as a little-endian word.
fn little_endian(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Bob Jenkins' mixing step.
fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 13);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 8);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 13);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 12);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 16);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 5);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 3);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 10);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 15);
    (a, b, c)
}

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, bernstein, bob_jenkins, xor};
    use crate::collections::dictionary::KeyHasher;

    const TWELVE: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

    #[test]
    fn xor_vectors() {
        assert_eq!(xor(&[]), 0x0000_0000);
        assert_eq!(xor(&[0x00]), 0x0000_0000);
        assert_eq!(xor(b"abc"), 0x6162_6300);
        assert_eq!(xor(b"abcd"), 0x6162_6364);
        assert_eq!(xor(b"abcde"), 0x0462_6364);
        assert_eq!(xor(b"Hello, world!"), 0x693B_207F);
        assert_eq!(xor(&TWELVE), 0x0D0E_0F00);
        assert_eq!(xor(&[0xFF, 0x80, 0x7F]), 0xFF80_7F00);
    }

    #[test]
    fn bob_jenkins_vectors() {
        assert_eq!(bob_jenkins(&[]), 0xBB74_2E94);
        assert_eq!(bob_jenkins(&[0x00]), 0xBD49_D10D);
        assert_eq!(bob_jenkins(b"abc"), 0xA4E0_34C3);
        assert_eq!(bob_jenkins(b"abcd"), 0x90CC_7C5F);
        assert_eq!(bob_jenkins(b"abcde"), 0x8893_4524);
        assert_eq!(bob_jenkins(b"Hello, world!"), 0x4774_C694);
        assert_eq!(bob_jenkins(&TWELVE), 0x45E5_3407);
        assert_eq!(
            bob_jenkins(b"The quick brown fox jumps over the lazy dog"),
            0x674F_13D2
        );
        assert_eq!(bob_jenkins(&[0xFF, 0x80, 0x7F]), 0xC714_A447);
    }

    #[test]
    fn bernstein_vectors() {
        assert_eq!(bernstein(&[]), 0x0000_1505);
        assert_eq!(bernstein(&[0x00]), 0x0002_B5A5);
        assert_eq!(bernstein(b"abc"), 0x0B88_5C8B);
        assert_eq!(bernstein(b"abcd"), 0x7C93_EE4F);
        assert_eq!(bernstein(b"abcde"), 0x0F11_B894);
        assert_eq!(bernstein(b"Hello, world!"), 0xE187_96AE);
        assert_eq!(bernstein(&TWELVE), 0xEE71_9493);
        assert_eq!(bernstein(&[0xFF, 0x80, 0x7F]), 0x0B8B_00A3);
    }

    #[test]
    fn algorithm_as_key_hasher() {
        let key: String = "abc".to_string();
        assert_eq!(HashAlgorithm::Xor.hash_key(&key), 0x6162_6300);
        assert_eq!(HashAlgorithm::BobJenkins.hash_key("abc"), 0xA4E0_34C3);
        assert_eq!(HashAlgorithm::Bernstein.hash_key(&b"abc"[..]), 0x0B88_5C8B);
    }
}
