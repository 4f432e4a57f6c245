/*
work_list.rs

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

//! FIFO and LIFO work lists for graph traversals.

use std::collections::VecDeque;

use super::CollectionError;

/// Common interface of the traversal work lists.
///
/// Breadth-first and depth-first traversals share the same loop; only the work list
/// differs.
pub trait WorkList<T> {
    /// Add an element to the work list.
    fn push(&mut self, element: T);

    /// Remove the next element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] when the work list is empty.
    fn pop(&mut self) -> Result<T, CollectionError>;

    /// Return the next element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Number of elements in the work list.
    fn len(&self) -> usize;

    /// Whether the work list is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty [`Queue`] object.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }
}

impl<T> WorkList<T> for Queue<T> {
    fn push(&mut self, element: T) {
        self.elements.push_back(element);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.elements
            .pop_front()
            .ok_or(CollectionError::Empty("queue"))
    }

    fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Last in, first out.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty [`Stack`] object.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> WorkList<T> for Stack<T> {
    fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.elements.pop().ok_or(CollectionError::Empty("stack"))
    }

    fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Queue, Stack, WorkList};
    use crate::collections::CollectionError;

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        for i in 0..5 {
            q.push(i);
        }
        assert_eq!(q.len(), 5);
        assert_eq!(q.peek(), Some(&0));
        for i in 0..5 {
            assert_eq!(q.pop(), Ok(i));
        }
        assert!(q.is_empty());
        assert_eq!(q.pop(), Err(CollectionError::Empty("queue")));
    }

    #[test]
    fn stack_is_lifo() {
        let mut s = Stack::new();
        for i in 0..5 {
            s.push(i);
        }
        assert_eq!(s.peek(), Some(&4));
        for i in (0..5).rev() {
            assert_eq!(s.pop(), Ok(i));
        }
        assert_eq!(s.peek(), None);
        assert_eq!(s.pop(), Err(CollectionError::Empty("stack")));
    }
}
