//! Linked linear containers.
//!
//! The stack links boxed nodes; the queue links slots of an index arena. Both copy and drop
//! without recursing over their nodes.

pub mod list_queue;
pub mod list_stack;

pub use list_queue::ListQueue;
pub use list_stack::ListStack;
