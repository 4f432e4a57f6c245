/*
dictionary.rs

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

//! Open-hashing dictionary.
//!
//! Entries are stored in buckets. The bucket of a key is `hash(key) & (capacity - 1)`, so
//! the capacity is always a power of two. Keys that land in the same bucket are chained in
//! insertion order.
//!
//! After every insertion, if the load factor reaches [`MAX_LOAD`], the bucket array is
//! doubled and every entry is dispatched again with the new mask. The rehash happens
//! inside the [`Dictionary::put`] call that crossed the threshold.

use log::debug;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::CollectionError;

/// Maximum load factor before the bucket array is doubled.
pub const MAX_LOAD: f64 = 0.72;

/// Minimum number of buckets.
pub const MIN_CAPACITY: usize = 64;

/// Hash strategy used by a [`Dictionary`] to compute the bucket of a key.
///
/// Two keys that are equal must produce the same hash. When a dictionary is queried with a
/// borrowed form of its keys, the borrowed form must hash like the owned key.
pub trait KeyHasher<K: ?Sized> {
    /// Return the 32-bit hash of the key.
    fn hash_key(&self, key: &K) -> u32;
}

/// Default strategy: the standard library hasher, folded to 32 bits.
#[derive(Debug, Copy, Clone, Default)]
pub struct StdKeyHasher;

impl<K: Hash + ?Sized> KeyHasher<K> for StdKeyHasher {
    fn hash_key(&self, key: &K) -> u32 {
        let mut h = DefaultHasher::default();
        key.hash(&mut h);
        let hash: u64 = h.finish();
        (hash ^ (hash >> 32)) as u32
    }
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u32,
{
    fn hash_key(&self, key: &K) -> u32 {
        self(key)
    }
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Collision chain. An empty slot is `None`, never an empty vector.
type Bucket<K, V> = Option<Vec<Entry<K, V>>>;

/// Open-hashing map from keys to values.
#[derive(Clone)]
pub struct Dictionary<K, V, H = StdKeyHasher> {
    buckets: Vec<Bucket<K, V>>,
    items: usize,
    hasher: H,
}

impl<K, V> Dictionary<K, V, StdKeyHasher> {
    /// Create an empty dictionary with [`MIN_CAPACITY`] buckets and the default hasher.
    pub fn new() -> Self {
        Self::with_buckets(MIN_CAPACITY, StdKeyHasher)
    }

    /// Create an empty dictionary sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, StdKeyHasher)
    }
}

impl<K, V> Default for Dictionary<K, V, StdKeyHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> Dictionary<K, V, H> {
    /// Create an empty dictionary with the given hash strategy.
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_buckets(MIN_CAPACITY, hasher)
    }

    /// Create an empty dictionary sized for `capacity` entries, with the given hash
    /// strategy.
    ///
    /// Below [`MIN_CAPACITY`], the dictionary gets [`MIN_CAPACITY`] buckets. Otherwise it
    /// gets the smallest power of two that is at least twice `capacity`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        let buckets: usize = if capacity < MIN_CAPACITY {
            MIN_CAPACITY
        } else {
            (capacity * 2).next_power_of_two()
        };
        Self::with_buckets(buckets, hasher)
    }

    fn with_buckets(buckets: usize, hasher: H) -> Self {
        Self {
            buckets: Self::empty_buckets(buckets),
            items: 0,
            hasher,
        }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.items
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Return the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Return the ratio between the number of entries and the number of buckets.
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.buckets.len() as f64
    }

    /// Number of collisions: for each bucket, the number of entries beyond the first.
    pub fn collisions(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(|chain| chain.len().saturating_sub(1))
            .sum()
    }

    /// Largest number of collisions in a single bucket.
    pub fn max_collisions(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(|chain| chain.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
    }

    /// Remove all the entries. The number of buckets does not change.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|bucket| *bucket = None);
        self.items = 0;
    }

    /// Iterate over the entries. The order is not specified, but it does not change as
    /// long as the dictionary is not modified.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: [].iter(),
            remaining: self.items,
        }
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Iterate over the values, mutably.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.buckets
            .iter_mut()
            .flatten()
            .flat_map(|chain| chain.iter_mut().map(|entry| &mut entry.value))
    }

    fn empty_buckets(n: usize) -> Vec<Bucket<K, V>> {
        (0..n).map(|_| None).collect()
    }
}

impl<K, V, H> Dictionary<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Add a value under the given key.
    ///
    /// If the key is already in the dictionary, then its value is replaced and the previous
    /// value is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let i: usize = self.bucket_index(&key);
        let chain: &mut Vec<Entry<K, V>> = self.buckets[i].get_or_insert_with(Vec::new);

        if let Some(entry) = chain.iter_mut().find(|e| e.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        chain.push(Entry { key, value });
        self.items += 1;

        if self.load_factor() >= MAX_LOAD {
            self.grow();
        }
        None
    }

    /// Double the number of buckets and dispatch every entry again.
    fn grow(&mut self) {
        let new_cap: usize = self.buckets.len() * 2;
        debug!(
            "Dictionary rehash: {} entries, {} -> {} buckets",
            self.items,
            self.buckets.len(),
            new_cap
        );

        let old = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_cap));
        for entry in old.into_iter().flatten().flatten() {
            let i: usize = self.bucket_index(&entry.key);
            self.buckets[i].get_or_insert_with(Vec::new).push(entry);
        }
    }
}

impl<K, V, H> Dictionary<K, V, H> {
    /// Return the value for the given key.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] if the key is not in the dictionary.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let i: usize = self.bucket_index(key);
        self.buckets[i]
            .as_ref()
            .and_then(|chain| chain.iter().find(|e| e.key.borrow() == key))
            .map(|e| &e.value)
            .ok_or(CollectionError::NotFound)
    }

    /// Return a mutable reference to the value for the given key.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] if the key is not in the dictionary.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let i: usize = self.bucket_index(key);
        self.buckets[i]
            .as_mut()
            .and_then(|chain| chain.iter_mut().find(|e| e.key.borrow() == key))
            .map(|e| &mut e.value)
            .ok_or(CollectionError::NotFound)
    }

    /// Whether the key is in the dictionary.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.get(key).is_ok()
    }

    /// Remove the entry for the given key and return its value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] if the key is not in the dictionary.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let i: usize = self.bucket_index(key);
        let chain: &mut Vec<Entry<K, V>> =
            self.buckets[i].as_mut().ok_or(CollectionError::NotFound)?;
        let position: usize = chain
            .iter()
            .position(|e| e.key.borrow() == key)
            .ok_or(CollectionError::NotFound)?;

        let entry: Entry<K, V> = chain.remove(position);
        if chain.is_empty() {
            self.buckets[i] = None;
        }
        self.items -= 1;
        Ok(entry.value)
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        self.hasher.hash_key(key) as usize & (self.buckets.len() - 1)
    }
}

/// Iterator over the entries of a [`Dictionary`].
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    chain: std::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            // Skip the empty slots
            match self.buckets.find_map(|bucket| bucket.as_ref()) {
                Some(chain) => self.chain = chain.iter(),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, H> IntoIterator for &'a Dictionary<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary<K, V, StdKeyHasher>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Dictionary::new();
        for (k, v) in iter {
            d.put(k, v);
        }
        d
    }
}

impl<K, V, H> PartialEq for Dictionary<K, V, H>
where
    K: Eq,
    V: PartialEq,
    H: KeyHasher<K>,
{
    /// Two dictionaries are equal when they map the same keys to equal values. The hash
    /// strategies and capacities may differ.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_ok_and(|w| v == w))
    }
}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for Dictionary<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
