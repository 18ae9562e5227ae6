//! Emotion Detector — heuristic scoring of catalog entries against text.
//!
//! Scoring per catalog entry:
//!
//! ```text
//! confidence = 0.3 × (matching trigger fragments)
//!            + 0.1 [text has '!'] + 0.05 [text has '?'] + 0.15 [text has ≥2 consecutive capitals]
//!            + 0.1 × Σ_tokens learned(token, entry)
//! ```
//!
//! Entries scoring above the threshold are ranked (stable, so ties keep
//! catalog order) and the top `max_results` names returned. This is keyword
//! matching, not a sentiment model.

use std::cmp::Reverse;
use std::sync::Arc;

use tracing::trace;

use crate::catalog::EmotionCatalog;
use crate::config::DetectionConfig;
use crate::learning::{self, LearningTable};
use crate::types::{EmotionId, Score};

/// Stateless scorer over a catalog; learned weights are passed in per call.
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    catalog: Arc<EmotionCatalog>,
    config: DetectionConfig,
}

/// Whether the text contains two consecutive uppercase letters.
fn has_shouting(text: &str) -> bool {
    let mut prev_upper = false;
    for c in text.chars() {
        let upper = c.is_uppercase();
        if upper && prev_upper {
            return true;
        }
        prev_upper = upper;
    }
    false
}

impl EmotionDetector {
    /// Create a detector over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<EmotionCatalog>, config: DetectionConfig) -> Self {
        Self { catalog, config }
    }

    /// Detection settings in use.
    #[must_use]
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Ranked emotion names for `text`.
    ///
    /// `context` only appears in trace output. Returns an empty list when
    /// nothing clears the threshold; see [`EmotionDetector::fallback`].
    #[must_use]
    pub fn detect(
        &self,
        text: &str,
        context: &str,
        learning: &LearningTable,
        max_results: usize,
    ) -> Vec<String> {
        self.detect_scored(text, context, learning, max_results)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Like [`EmotionDetector::detect`] but keeps the confidences.
    #[must_use]
    pub fn detect_scored(
        &self,
        text: &str,
        context: &str,
        learning: &LearningTable,
        max_results: usize,
    ) -> Vec<(String, f32)> {
        if max_results == 0 {
            return Vec::new();
        }
        let cfg = &self.config;
        let normalized = text.to_lowercase();

        let mut global = 0.0;
        if text.contains('!') {
            global += cfg.exclamation_bonus;
        }
        if text.contains('?') {
            global += cfg.question_bonus;
        }
        if has_shouting(text) {
            global += cfg.shouting_bonus;
        }

        let mut scores: Vec<f32> = self
            .catalog
            .all()
            .map(|def| {
                let hits = def
                    .triggers
                    .iter()
                    .filter(|t| !t.is_empty() && normalized.contains(t.as_str()))
                    .count();
                #[allow(clippy::cast_precision_loss)]
                let keyword = hits as f32 * cfg.trigger_weight;
                keyword + global
            })
            .collect();

        if !learning.is_empty() {
            for token in learning::tokenize(&normalized) {
                let Some(emotions) = learning.emotions_for(&token) else {
                    continue;
                };
                for (emotion, weight) in emotions {
                    if let Some(id) = self.catalog.id_of(emotion) {
                        if let Some(score) = scores.get_mut(id.index()) {
                            *score += cfg.learned_weight_scale * weight;
                        }
                    }
                }
            }
        }

        let mut ranked: Vec<(usize, f32)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(_, s)| s > cfg.confidence_threshold)
            .collect();
        ranked.sort_by_key(|&(_, s)| Reverse(Score::new(s)));
        ranked.truncate(max_results);

        let result: Vec<(String, f32)> = ranked
            .into_iter()
            .filter_map(|(i, s)| {
                let id = EmotionId(u16::try_from(i).ok()?);
                self.catalog.get(id).map(|d| (d.name.clone(), s))
            })
            .collect();

        trace!(
            chars = text.len(),
            context = %context,
            detected = ?result,
            "Scored text against catalog"
        );
        result
    }

    /// Names substituted when a conversation detects nothing.
    #[must_use]
    pub fn fallback(&self) -> Vec<String> {
        self.config.fallback.clone()
    }

    /// [`EmotionDetector::detect`], substituting [`EmotionDetector::fallback`]
    /// when nothing clears the threshold.
    #[must_use]
    pub fn detect_or_fallback(
        &self,
        text: &str,
        context: &str,
        learning: &LearningTable,
        max_results: usize,
    ) -> Vec<String> {
        let detected = self.detect(text, context, learning, max_results);
        if detected.is_empty() {
            self.fallback()
        } else {
            detected
        }
    }
}
