//! # Linked Stack
//!
//! A LIFO stack backed by a singly-linked list of boxed nodes. The top of the stack is the head of
//! the list, so `push`, `pop` and `peek` are O(1).
//!
//! Copying and dropping walk the list iteratively, so very long stacks never recurse node by node.

use std::fmt::{self, Debug, Display, Formatter};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked LIFO stack.
pub struct ListStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> ListStack<T> {
    pub fn new() -> Self {
        ListStack { head: None, len: 0 }
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element, unlinking one node at a time.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> Default for ListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ListStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ListStack<T> {
    /// Deep copy with the same order. Elements are pushed bottom first.
    fn clone(&self) -> Self {
        let top_down: Vec<&T> = self.iter().collect();
        let mut copy = ListStack::new();
        for value in top_down.into_iter().rev() {
            copy.push(value.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for ListStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListStack<T> {}

impl<T> Extend<T> for ListStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ListStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = ListStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Debug> Debug for ListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `{ bottom, ..., top, }`
impl<T: Display> Display for ListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_down: Vec<&T> = self.iter().collect();
        write!(f, "{{ ")?;
        for value in top_down.into_iter().rev() {
            write!(f, "{}, ", value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let s: ListStack<i32> = ListStack::new();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert!(s.peek().is_none());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut s: ListStack<i32> = ListStack::new();
        assert!(s.pop().is_none());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn lifo_order() {
        let mut s = ListStack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert!(s.is_empty());
    }

    #[test]
    fn peek_returns_without_removing() {
        let mut s = ListStack::new();
        s.push(42);
        assert_eq!(s.peek(), Some(&42));
        assert_eq!(s.peek(), Some(&42));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn peek_mut_changes_top() {
        let mut s = ListStack::new();
        s.push(1);
        s.push(2);
        if let Some(top) = s.peek_mut() {
            *top = 20;
        }
        assert_eq!(s.pop(), Some(20));
        assert_eq!(s.pop(), Some(1));
    }

    #[test]
    fn clear_then_reuse() {
        let mut s = ListStack::new();
        s.push(1);
        s.push(2);
        s.clear();
        assert!(s.is_empty());
        assert!(s.peek().is_none());
        s.push(3);
        assert_eq!(s.len(), 1);
        assert_eq!(s.peek(), Some(&3));
    }

    #[test]
    fn display_lists_bottom_to_top() {
        let mut s = ListStack::new();
        assert_eq!(s.to_string(), "{ }");
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.to_string(), "{ 1, 2, 3, }");
    }

    #[test]
    fn iter_goes_top_down() {
        let s: ListStack<i32> = (1..=4).collect();
        let items: Vec<_> = s.iter().copied().collect();
        assert_eq!(items, vec![4, 3, 2, 1]);
    }

    #[test]
    fn clone_preserves_order_and_is_independent() {
        let mut s = ListStack::new();
        s.push(String::from("a"));
        s.push(String::from("b"));
        let mut copy = s.clone();
        assert_eq!(s, copy);
        assert_eq!(copy.to_string(), "{ a, b, }");

        copy.push(String::from("c"));
        s.pop();
        assert_eq!(s.len(), 1);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.pop().as_deref(), Some("c"));
        assert_eq!(copy.pop().as_deref(), Some("b"));
    }

    #[test]
    fn equality_is_by_size_and_order() {
        let a: ListStack<i32> = vec![1, 2, 3].into_iter().collect();
        let b: ListStack<i32> = vec![1, 2, 3].into_iter().collect();
        let c: ListStack<i32> = vec![3, 2, 1].into_iter().collect();
        let d: ListStack<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn long_stack_clones_and_drops_without_recursion() {
        let s: ListStack<u32> = (0..200_000).collect();
        let copy = s.clone();
        assert_eq!(copy.len(), 200_000);
        assert_eq!(copy.peek(), Some(&199_999));
        drop(s);
        drop(copy);
    }

    #[test]
    fn debug_format() {
        let s: ListStack<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", s), "[2, 1]");
    }
}
