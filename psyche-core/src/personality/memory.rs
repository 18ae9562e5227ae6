//! Personality memories and the interaction log.
//!
//! Memories are scored for importance when stored. When the log overflows,
//! a single sort-and-truncate pass keeps the most important ones:
//!
//! ```text
//! importance = 30
//!            + 30 [a detected emotion is high-intensity]
//!            + 25 [content mentions a personal topic]
//!            + 10 [content longer than 200 chars]
//!            +  5 [content contains '?']
//! ```

use std::cmp::Reverse;
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::{self, EmotionalSummary};
use crate::types::{MemoryId, Mood, Score, clamp_percent};

/// Emotions whose presence makes an exchange memorable.
pub const HIGH_INTENSITY: &[&str] = &[
    "excitement", "anger", "love", "fear", "rage", "euphoria", "grief", "despair", "elation",
];

/// Phrases that mark a personal topic.
pub const PERSONAL_KEYWORDS: &[&str] = &[
    "i feel", "family", "friend", "love", "dream", "remember", "secret", "afraid", "hope",
    "life", "myself",
];

const BASE_IMPORTANCE: f32 = 30.0;
const LONG_CONTENT_CHARS: usize = 200;

/// One remembered exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityMemory {
    /// Unique id.
    pub id: MemoryId,
    /// Remembered text.
    pub content: String,
    /// Summary at the time the memory was formed.
    pub emotional_context: EmotionalSummary,
    /// Importance in `[0, 100]`.
    pub importance: f32,
    /// When the memory was formed.
    pub timestamp: DateTime<Utc>,
    /// Detected emotion names plus the mood label.
    pub tags: Vec<String>,
    /// Kind of memory, e.g. `"conversation"`.
    pub memory_type: String,
}

/// Importance score of a new memory.
#[must_use]
pub fn score_importance<S: AsRef<str>>(detected: &[S], content: &str) -> f32 {
    let mut importance = BASE_IMPORTANCE;
    if detected
        .iter()
        .any(|e| mood::member(HIGH_INTENSITY, e.as_ref()))
    {
        importance += 30.0;
    }
    let lower = content.to_lowercase();
    if PERSONAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        importance += 25.0;
    }
    if content.chars().count() > LONG_CONTENT_CHARS {
        importance += 10.0;
    }
    if content.contains('?') {
        importance += 5.0;
    }
    clamp_percent(importance)
}

/// Chronological memory log with importance-based eviction.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryLog {
    memories: Vec<PersonalityMemory>,
    capacity: usize,
    retain: usize,
}

impl MemoryLog {
    /// Log that evicts down to `retain` entries once it exceeds `capacity`.
    #[must_use]
    pub fn new(capacity: usize, retain: usize) -> Self {
        Self {
            memories: Vec::new(),
            capacity,
            retain: retain.min(capacity),
        }
    }

    /// Append a memory. Returns how many memories were evicted.
    pub fn push(&mut self, memory: PersonalityMemory) -> usize {
        self.memories.push(memory);
        if self.memories.len() > self.capacity {
            self.evict()
        } else {
            0
        }
    }

    /// Keep the `retain` most important memories in chronological order.
    /// Ties keep the older memory.
    fn evict(&mut self) -> usize {
        let before = self.memories.len();
        let mut ranked: Vec<(usize, f32)> = self
            .memories
            .iter()
            .enumerate()
            .map(|(i, m)| (i, m.importance))
            .collect();
        ranked.sort_by_key(|&(_, importance)| Reverse(Score::new(importance)));

        let mut keep = vec![false; before];
        for &(i, _) in ranked.iter().take(self.retain) {
            keep[i] = true;
        }
        let mut index = 0;
        self.memories.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
        before - self.memories.len()
    }

    /// Trim to capacity after a bulk load.
    pub(crate) fn enforce_capacity(&mut self) -> usize {
        if self.memories.len() > self.capacity {
            self.evict()
        } else {
            0
        }
    }

    /// The `n` most recent memories, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &PersonalityMemory> {
        self.memories.iter().rev().take(n)
    }

    /// Every memory, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[PersonalityMemory] {
        &self.memories
    }

    /// Number of memories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub(crate) fn replace(&mut self, memories: Vec<PersonalityMemory>) {
        self.memories = memories;
    }
}

/// One processed conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// When the turn was processed.
    pub timestamp: DateTime<Utc>,
    /// User utterance.
    pub user_text: String,
    /// Generated reply.
    pub reply_text: String,
    /// Emotions fed to the engine (after fallback).
    pub detected: Vec<String>,
    /// Base intensity used.
    pub intensity: f32,
    /// Mood after processing.
    pub mood: Mood,
}

/// Most recent interactions, oldest evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionLog {
    records: VecDeque<InteractionRecord>,
    capacity: usize,
}

impl InteractionLog {
    /// Log holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    /// Append a record, dropping the oldest past capacity.
    pub fn push(&mut self, record: InteractionRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory(importance: f32, tag: usize) -> PersonalityMemory {
        PersonalityMemory {
            id: MemoryId::new(),
            content: format!("memory {tag}"),
            emotional_context: EmotionalSummary::neutral(),
            importance,
            timestamp: Utc::now(),
            tags: Vec::new(),
            memory_type: "conversation".to_string(),
        }
    }

    #[test]
    fn plain_content_scores_base() {
        let none: [&str; 0] = [];
        assert!((score_importance(&none, "ok then") - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn every_signal_adds_up() {
        let long = format!("I feel like my family matters? {}", "x".repeat(200));
        let score = score_importance(&["love"], &long);
        assert!((score - 100.0).abs() < f32::EPSILON);

        let score = score_importance(&["calm"], "what do you dream about?");
        assert!((score - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn overflow_keeps_top_eighty_in_order() {
        let mut log = MemoryLog::new(100, 80);
        for i in 0..100 {
            #[allow(clippy::cast_precision_loss)]
            let importance = (i % 10) as f32 * 10.0;
            assert_eq!(log.push(memory(importance, i)), 0);
        }
        assert_eq!(log.len(), 100);

        let evicted = log.push(memory(95.0, 100));
        assert_eq!(evicted, 21);
        assert_eq!(log.len(), 80);
        assert!(log.as_slice().iter().all(|m| m.importance >= 20.0));
        assert_eq!(log.recent(1).next().map(|m| m.content.as_str()), Some("memory 100"));

        let tags: Vec<usize> = log
            .as_slice()
            .iter()
            .filter_map(|m| m.content.strip_prefix("memory ")?.parse().ok())
            .collect();
        assert!(tags.windows(2).all(|w| w[0] < w[1]), "chronological order kept");
    }

    #[test]
    fn ties_keep_the_older_memory() {
        let mut log = MemoryLog::new(3, 2);
        log.push(memory(50.0, 0));
        log.push(memory(50.0, 1));
        log.push(memory(50.0, 2));
        log.push(memory(50.0, 3));
        let kept: Vec<_> = log.as_slice().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(kept, vec!["memory 0", "memory 1"]);
    }

    #[test]
    fn interaction_log_is_bounded() {
        let mut log = InteractionLog::new(2);
        for i in 0..5 {
            log.push(InteractionRecord {
                timestamp: Utc::now(),
                user_text: format!("u{i}"),
                reply_text: String::new(),
                detected: Vec::new(),
                intensity: 60.0,
                mood: Mood::Chill,
            });
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().map(|r| r.user_text.as_str()), Some("u3"));
    }
}
