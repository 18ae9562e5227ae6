//! Emotional history — a fixed-size FIFO ring of processed summaries.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::EmotionalSummary;

/// One processed call, as remembered for stability scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalHistoryEntry {
    /// When the call was processed.
    pub timestamp: DateTime<Utc>,
    /// Summary at the time of the call.
    pub summary: EmotionalSummary,
    /// Text that triggered the call.
    pub trigger_text: String,
    /// Free-form context supplied by the caller.
    pub context_text: String,
}

/// Bounded history; the oldest entry is evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionalHistory {
    entries: VecDeque<EmotionalHistoryEntry>,
    capacity: usize,
}

impl EmotionalHistory {
    /// Create an empty ring holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry. Returns how many old entries were evicted.
    pub fn push(&mut self, entry: EmotionalHistoryEntry) -> usize {
        self.entries.push_back(entry);
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// The `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &EmotionalHistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EmotionalHistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&EmotionalHistoryEntry> {
        self.entries.back()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str) -> EmotionalHistoryEntry {
        EmotionalHistoryEntry {
            timestamp: Utc::now(),
            summary: EmotionalSummary::neutral(),
            trigger_text: tag.to_string(),
            context_text: String::new(),
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = EmotionalHistory::new(3);
        for i in 0..5 {
            history.push(entry(&format!("t{i}")));
        }
        assert_eq!(history.len(), 3);
        let texts: Vec<_> = history.iter().map(|e| e.trigger_text.as_str()).collect();
        assert_eq!(texts, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut history = EmotionalHistory::new(10);
        history.push(entry("a"));
        history.push(entry("b"));
        history.push(entry("c"));
        let texts: Vec<_> = history.recent(2).map(|e| e.trigger_text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b"]);
    }

    #[test]
    fn push_reports_evictions() {
        let mut history = EmotionalHistory::new(1);
        assert_eq!(history.push(entry("a")), 0);
        assert_eq!(history.push(entry("b")), 1);
    }
}
