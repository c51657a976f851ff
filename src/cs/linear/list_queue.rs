//! # Linked Queue
//!
//! A FIFO queue backed by a singly-linked list whose nodes live in an index arena. Links are slot
//! indices into a `Vec`, so the queue keeps both a head and a tail handle without raw pointers, and
//! `enqueue` (at the tail) and `dequeue` (at the head) are O(1). Slots freed by `dequeue` are reused.
//!
//! Copying walks the list front to back and dropping releases the arena in one go, so very long
//! queues never recurse node by node.

use std::fmt::{self, Debug, Display, Formatter};

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly-linked FIFO queue.
pub struct ListQueue<T> {
    /// Node arena; `None` marks a free slot.
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> ListQueue<T> {
    pub fn new() -> Self {
        ListQueue {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let node = Node { value, next: None };
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.nodes[tail].as_mut()) {
            Some(last) => last.next = Some(index),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.nodes[index].take()?;
        self.free.push(index);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.node(self.head).map(|node| &node.value)
    }

    /// Returns the back element.
    pub fn back(&self) -> Option<&T> {
        self.node(self.tail).map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element and releases the arena slots.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    fn node(&self, index: Option<usize>) -> Option<&Node<T>> {
        index.and_then(|i| self.nodes.get(i)).and_then(Option::as_ref)
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Option<Node<T>>],
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?.as_ref()?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> Default for ListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ListQueue<T> {
    /// Deep copy with the same order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ListQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListQueue<T> {}

impl<T> Extend<T> for ListQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for ListQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = ListQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug> Debug for ListQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `{ front, ..., back, }`
impl<T: Display> Display for ListQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self.iter() {
            write!(f, "{}, ", value)?;
        }
        write!(f, "}}")
    }
}
