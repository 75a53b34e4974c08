//! In-memory FIFO notification queue.
//!
//! Passed into the CLI layer alongside the registry; nothing survives
//! a process restart.

use std::collections::VecDeque;

/// Pending notification messages, delivered in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    messages: VecDeque<String>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
    }

    /// Removes and returns all pending messages, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        self.messages.drain(..).collect()
    }

    /// Returns the number of pending messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_fifo_order() {
        let mut queue = NotificationQueue::new();
        queue.push("first");
        queue.push("second");
        queue.push("third");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain(), ["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_empty_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn drain_resets_the_queue() {
        let mut queue = NotificationQueue::new();
        queue.push("old");
        queue.drain();

        queue.push("new");
        assert_eq!(queue.drain(), ["new"]);
    }
}
