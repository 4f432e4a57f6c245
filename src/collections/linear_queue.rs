/*
linear_queue.rs

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

//! Flat priority queue for dense graphs.
//!
//! Each extraction scans the whole array, which costs `O(n)`, but changing the priority of
//! an element costs nothing. When almost every vertex is adjacent to every other vertex,
//! the number of priority changes dominates, and this queue beats the binary heap.

use super::CollectionError;
use super::heap::{Indexable, MinQueue};

/// Unordered array of slots. An element keeps its slot until it is extracted.
#[derive(Debug, Clone)]
pub struct LinearScanQueue<T> {
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T> Default for LinearScanQueue<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }
}

impl<T: Indexable + PartialOrd> LinearScanQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Add an element. Its index becomes its slot.
    pub fn insert(&mut self, mut element: T) {
        element.set_index(Some(self.slots.len()));
        self.slots.push(Some(element));
        self.live += 1;
    }

    /// Whether the element is still waiting in the queue.
    pub fn contains(&self, element: &T) -> bool {
        element
            .index()
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
            .is_some_and(|e| e == element)
    }

    /// Remove and return the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] when no element is left.
    pub fn extract_min(&mut self) -> Result<T, CollectionError> {
        let mut smallest: Option<usize> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            let Some(e) = slot else { continue };
            match smallest.and_then(|s| self.slots[s].as_ref()) {
                Some(current) if current <= e => {}
                _ => smallest = Some(i),
            }
        }

        let mut element: T = smallest
            .and_then(|i| self.slots[i].take())
            .ok_or(CollectionError::Empty("queue"))?;
        element.set_index(None);
        self.live -= 1;
        Ok(element)
    }
}

impl<T: Indexable + PartialOrd> MinQueue<T> for LinearScanQueue<T> {
    fn extract_min(&mut self) -> Result<T, CollectionError> {
        LinearScanQueue::extract_min(self)
    }

    // Every extraction scans all the slots
    fn reorder(&mut self, _element: &T) {}

    fn len(&self) -> usize {
        self.live
    }
}

impl<T: Indexable + PartialOrd> FromIterator<T> for LinearScanQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for e in iter {
            queue.insert(e);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScanQueue;
    use crate::collections::CollectionError;
    use crate::collections::heap::MinQueue;
    use crate::collections::heap::tests::Item;

    #[test]
    fn extracts_in_order() {
        let mut q: LinearScanQueue<Item> = [4, 2, 8, 2, -1]
            .iter()
            .enumerate()
            .map(|(id, p)| Item::new(id, *p))
            .collect();
        assert_eq!(MinQueue::len(&q), 5);

        let mut out: Vec<i64> = Vec::new();
        while let Ok(e) = q.extract_min() {
            assert_eq!(e.index, None);
            out.push(e.priority);
        }
        assert_eq!(out, [-1, 2, 2, 4, 8]);
        assert!(MinQueue::is_empty(&q));
        assert_eq!(q.extract_min().unwrap_err(), CollectionError::Empty("queue"));
    }

    #[test]
    fn slots_are_stable() {
        let mut q = LinearScanQueue::new();
        for i in 0..4 {
            q.insert(Item::new(i, 10 - i as i64));
        }
        let first: Item = q.extract_min().unwrap();
        assert_eq!(first.id, 3);

        let mut lookup: Item = Item::new(1, 9);
        lookup.index = Some(1);
        assert!(q.contains(&lookup));
        lookup.index = Some(3);
        assert!(!q.contains(&lookup));
    }

    #[test]
    fn key_changes_are_seen_by_the_next_scan() {
        let mut q = LinearScanQueue::new();
        for i in 0..3 {
            q.insert(Item::new(i, i as i64));
        }
        if let Some(Some(e)) = q.slots.get_mut(2) {
            e.priority = -5;
        }
        let changed: Item = Item::new(2, -5);
        q.reorder(&changed);
        assert_eq!(q.extract_min().map(|e| e.id), Ok(2));
    }
}
