//! Adaptive `(word, emotion)` weight table.
//!
//! Every processed utterance reinforces the pairing between its words and the
//! emotions detected in it. The detector then adds a small learned bonus when
//! those words show up again. The table is capped: once it grows past
//! `max_entries` it is pruned to the `prune_to` heaviest pairs.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LearningConfig;

/// One learned pairing, as exported in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedWeight {
    /// Normalised token.
    pub word: String,
    /// Emotion name.
    pub emotion: String,
    /// Weight in `[0, 1]`.
    pub weight: f32,
}

/// Word → emotion → weight. Iteration order (word, then emotion) is the
/// tie-break order used when pruning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningTable {
    words: BTreeMap<String, BTreeMap<String, f32>>,
    len: usize,
}

/// Split text into lowercase tokens with surrounding ASCII punctuation removed.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
        .filter(|t| !t.is_empty())
}

impl LearningTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `(word, emotion)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Learned weight of a pairing (0 when absent).
    #[must_use]
    pub fn weight(&self, word: &str, emotion: &str) -> f32 {
        self.words
            .get(word)
            .and_then(|m| m.get(emotion))
            .copied()
            .unwrap_or(0.0)
    }

    /// All emotions learned for one word.
    #[must_use]
    pub fn emotions_for(&self, word: &str) -> Option<&BTreeMap<String, f32>> {
        self.words.get(word)
    }

    /// Add `increment` to a pairing, capped at `max_weight`.
    pub fn reinforce(&mut self, word: &str, emotion: &str, increment: f32, max_weight: f32) {
        let slot = self.words.entry(word.to_string()).or_default();
        let weight = slot.entry(emotion.to_string()).or_insert_with(|| {
            self.len += 1;
            0.0
        });
        *weight = (*weight + increment).clamp(0.0, max_weight);
    }

    /// Reinforce every qualifying token of `context` against every emotion,
    /// then prune if the table grew too large.
    ///
    /// Returns the number of pairs removed by pruning.
    pub fn learn<S: AsRef<str>>(
        &mut self,
        context: &str,
        emotions: &[S],
        config: &LearningConfig,
    ) -> usize {
        if emotions.is_empty() {
            return 0;
        }
        for token in tokenize(context).filter(|t| t.chars().count() >= config.min_token_len) {
            for emotion in emotions {
                self.reinforce(&token, emotion.as_ref(), config.increment, config.max_weight);
            }
        }
        if self.len > config.max_entries {
            self.prune(config.prune_to)
        } else {
            0
        }
    }

    /// Keep only the `keep` heaviest pairs. Ties keep the earlier key.
    ///
    /// Returns the number of pairs removed.
    pub fn prune(&mut self, keep: usize) -> usize {
        if self.len <= keep {
            return 0;
        }
        let mut all = self.entries();
        all.sort_by_key(|e| Reverse(OrderedFloat(e.weight)));
        let removed = all.len() - keep;
        all.truncate(keep);

        self.words.clear();
        self.len = 0;
        for e in all {
            self.words
                .entry(e.word)
                .or_default()
                .insert(e.emotion, e.weight);
            self.len += 1;
        }
        debug!(removed, kept = self.len, "Pruned learning table");
        removed
    }

    /// Flatten the table in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<LearnedWeight> {
        let mut out = Vec::with_capacity(self.len);
        for (word, emotions) in &self.words {
            for (emotion, &weight) in emotions {
                out.push(LearnedWeight {
                    word: word.clone(),
                    emotion: emotion.clone(),
                    weight,
                });
            }
        }
        out
    }

    /// Rebuild a table from flattened entries. Later duplicates win.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = LearnedWeight>) -> Self {
        let mut table = Self::new();
        for e in entries {
            let slot = table.words.entry(e.word).or_default();
            if slot.insert(e.emotion, e.weight).is_none() {
                table.len += 1;
            }
        }
        table
    }
}
