//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use runner_core::Tick;

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Rewards: pickups, milestones, mints.
    Success,
    Warning,
    Error,
}

/// Single line in the message panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub text: String,
    pub tick: Option<Tick>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, tick: Option<Tick>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            tick,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>, level: MessageLevel) {
        self.push(MessageEntry::new(message, None, level));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = MessageLog::new(2);
        log.push_text("a", MessageLevel::Info);
        log.push_text("b", MessageLevel::Info);
        log.push_text("c", MessageLevel::Info);

        let texts: Vec<_> = log.recent(10).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut log = MessageLog::new(0);
        log.push_text("only", MessageLevel::Warning);
        assert_eq!(log.len(), 1);
    }
}
