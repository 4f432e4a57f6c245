/*
heap.rs

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

//! Binary min-heap over elements that know their own position.
//!
//! Every element stored in an [`IndexedMinHeap`] implements [`Indexable`]: the heap writes
//! the element's current slot into it on every move. Removing or reordering an arbitrary
//! element then costs `O(log n)`, because the element tells the heap where it is.
//!
//! Elements that are not in a heap report a `None` index.

use super::CollectionError;

/// Elements that can remember their position in a heap.
pub trait Indexable {
    /// Return the position of the element, or `None` when the element is detached.
    fn index(&self) -> Option<usize>;

    /// Record the position of the element.
    fn set_index(&mut self, index: Option<usize>);
}

/// Priority structures used by the shortest path search.
///
/// [`IndexedMinHeap`] and [`super::linear_queue::LinearScanQueue`] both implement it; the
/// choice between them is only a matter of performance.
pub trait MinQueue<T> {
    /// Remove and return the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] when there are no elements left.
    fn extract_min(&mut self) -> Result<T, CollectionError>;

    /// Restore the ordering after the sort key of `element` has been modified.
    fn reorder(&mut self, element: &T);

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary min-heap of [`Indexable`] elements.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    tree: Vec<T>,
}

impl<T> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self { tree: Vec::new() }
    }
}

impl<T: Indexable + PartialOrd> IndexedMinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
        }
    }

    /// Build a heap from a vector in `O(n)` (Floyd's method).
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        for (i, e) in elements.iter_mut().enumerate() {
            e.set_index(Some(i));
        }
        let mut heap = Self { tree: elements };
        for i in (0..heap.tree.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Return the smallest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Return the element in the given slot.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.tree.get(index)
    }

    /// Iterate over the elements in array order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.tree.iter()
    }

    /// Add an element.
    pub fn insert(&mut self, mut element: T) {
        if self.tree.len() == self.tree.capacity() {
            // Double the backing storage
            self.tree.reserve(self.tree.len().max(1));
        }
        let i: usize = self.tree.len();
        element.set_index(Some(i));
        self.tree.push(element);
        self.sift_up(i);
    }

    /// Remove and return the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, CollectionError> {
        if self.tree.is_empty() {
            return Err(CollectionError::Empty("heap"));
        }
        let last: usize = self.tree.len() - 1;
        self.swap(0, last);
        let mut root: T = self.detach_last()?;
        root.set_index(None);
        self.sift_down(0);
        Ok(root)
    }

    /// Whether the element is in the heap.
    ///
    /// The element is in the heap if its index points to a live slot, and the element in
    /// that slot equals it.
    pub fn contains(&self, element: &T) -> bool {
        element
            .index()
            .and_then(|i| self.tree.get(i))
            .is_some_and(|e| e == element)
    }

    /// Remove the given element and return it.
    ///
    /// Returns `None` when the element is not in the heap.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        if !self.contains(element) {
            return None;
        }
        let i: usize = element.index()?;
        let last: usize = self.tree.len() - 1;
        self.swap(i, last);
        let mut removed: T = self.detach_last().ok()?;
        removed.set_index(None);

        // The element that took the slot can be smaller than its new parent or larger than
        // its new children
        if i < self.tree.len() {
            let i: usize = self.sift_up(i);
            self.sift_down(i);
        }
        Some(removed)
    }

    /// Restore the heap property after the sort key of `element` has been changed.
    pub fn reorder(&mut self, element: &T) {
        if let Some(i) = element.index().filter(|i| *i < self.tree.len()) {
            let i: usize = self.sift_up(i);
            self.sift_down(i);
        }
    }

    /// Remove all the elements.
    pub fn clear(&mut self) {
        for mut e in self.tree.drain(..) {
            e.set_index(None);
        }
    }

    /// Move the element in slot `i` up until its parent is smaller. Return its final slot.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent: usize = (i - 1) / 2;
            if self.tree[i] < self.tree[parent] {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    /// Move the element in slot `i` down until its children are larger.
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left: usize = 2 * i + 1;
            let right: usize = left + 1;
            let mut smallest: usize = i;

            if left < self.tree.len() && self.tree[left] < self.tree[smallest] {
                smallest = left;
            }
            if right < self.tree.len() && self.tree[right] < self.tree[smallest] {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.tree.swap(i, j);
        self.tree[i].set_index(Some(i));
        self.tree[j].set_index(Some(j));
    }

    fn detach_last(&mut self) -> Result<T, CollectionError> {
        self.tree.pop().ok_or(CollectionError::Empty("heap"))
    }
}

impl<T: Indexable + PartialOrd> MinQueue<T> for IndexedMinHeap<T> {
    fn extract_min(&mut self) -> Result<T, CollectionError> {
        IndexedMinHeap::extract_min(self)
    }

    fn reorder(&mut self, element: &T) {
        IndexedMinHeap::reorder(self, element);
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<T: Indexable + PartialOrd> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Wraps elements that cannot store their own position.
#[derive(Debug)]
struct Adapter<T> {
    element: T,
    index: Option<usize>,
}

impl<T> Indexable for Adapter<T> {
    fn index(&self) -> Option<usize> {
        self.index
    }

    fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }
}

impl<T: PartialEq> PartialEq for Adapter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<T: PartialOrd> PartialOrd for Adapter<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.element.partial_cmp(&other.element)
    }
}

/// Sort the elements in ascending order with a heap.
pub fn heap_sort<T: PartialOrd>(elements: Vec<T>) -> Vec<T> {
    let mut heap: IndexedMinHeap<Adapter<T>> = elements
        .into_iter()
        .map(|element| Adapter {
            element,
            index: None,
        })
        .collect();

    let mut sorted: Vec<T> = Vec::with_capacity(heap.len());
    while let Ok(a) = heap.extract_min() {
        sorted.push(a.element);
    }
    sorted
}
