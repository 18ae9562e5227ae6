//! Emotion State Engine — decay, conflict, enhancement and merge.
//!
//! Every [`EmotionEngine::process`] call runs, in order:
//!
//! 1. **Decay** — each tracked intensity × its catalog `decay_rate`.
//! 2. Per detected emotion `e`, in detection order:
//!    - **Conflict** — each tracked `c ∈ e.conflicts` shrinks ×0.7; the
//!      effective intensity of `e` loses 0.3 × the shrunk value.
//!    - **Enhancement** — each tracked `h ∈ e.enhances` grows ×1.2.
//!    - **Merge** — tracked `e` gains `effective × 0.5`; new `e` starts at
//!      `effective`.
//! 3. Clamp to `[0, 100]` and drop everything below the floor.
//! 4. Record history, then reinforce the learning table.
//!
//! Decay is call-driven: nothing changes between calls.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::EmotionCatalog;
use crate::config::{EmotionConfig, LearningConfig, PsycheConfig};
use crate::detector::EmotionDetector;
use crate::history::{EmotionalHistory, EmotionalHistoryEntry};
use crate::learning::LearningTable;
use crate::mood::{self, EmotionalSummary};
use crate::state::EmotionState;
use crate::types::{EmotionId, EngineStats, clamp_percent};

/// Owns one evolving emotional state plus its history and learned weights.
///
/// Single-owner: hosts serialize access per engine.
#[derive(Debug, Clone)]
pub struct EmotionEngine {
    catalog: Arc<EmotionCatalog>,
    detector: EmotionDetector,
    config: EmotionConfig,
    learning_config: LearningConfig,
    state: EmotionState,
    history: EmotionalHistory,
    learning: LearningTable,
    stats: EngineStats,
}

impl EmotionEngine {
    /// Engine over the built-in catalog.
    #[must_use]
    pub fn new(config: &PsycheConfig) -> Self {
        Self::with_catalog(EmotionCatalog::builtin(), config)
    }

    /// Engine over a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: Arc<EmotionCatalog>, config: &PsycheConfig) -> Self {
        for name in &config.detection.fallback {
            if catalog.id_of(name).is_none() {
                warn!(emotion = %name, "Fallback emotion missing from catalog; it will be skipped");
            }
        }
        Self {
            detector: EmotionDetector::new(Arc::clone(&catalog), config.detection.clone()),
            catalog,
            config: config.emotion.clone(),
            learning_config: config.learning.clone(),
            state: EmotionState::new(),
            history: EmotionalHistory::new(config.emotion.history_capacity),
            learning: LearningTable::new(),
            stats: EngineStats::default(),
        }
    }

    /// Catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Arc<EmotionCatalog> {
        &self.catalog
    }

    /// Detector bound to this engine's catalog.
    #[must_use]
    pub fn detector(&self) -> &EmotionDetector {
        &self.detector
    }

    /// Emotion settings in use.
    #[must_use]
    pub fn config(&self) -> &EmotionConfig {
        &self.config
    }

    /// Rank emotions for `text` using this engine's learned weights.
    #[must_use]
    pub fn detect(&self, text: &str, context: &str, max_results: usize) -> Vec<String> {
        self.detector
            .detect(text, context, &self.learning, max_results)
    }

    /// [`EmotionEngine::detect`] with confidences.
    #[must_use]
    pub fn detect_scored(&self, text: &str, context: &str, max_results: usize) -> Vec<(String, f32)> {
        self.detector
            .detect_scored(text, context, &self.learning, max_results)
    }

    /// Fold detected emotions into the state and return the new summary.
    ///
    /// `context` is recorded in history and feeds the learning table.
    /// An empty `detected` list only decays.
    pub fn process<S: AsRef<str>>(
        &mut self,
        detected: &[S],
        base_intensity: f32,
        context: &str,
    ) -> EmotionalSummary {
        self.process_with_trigger(detected, base_intensity, context, context)
    }

    /// [`EmotionEngine::process`] with the triggering utterance recorded
    /// separately from the caller's context. Learning reads `trigger_text`.
    pub fn process_with_trigger<S: AsRef<str>>(
        &mut self,
        detected: &[S],
        base_intensity: f32,
        trigger_text: &str,
        context_text: &str,
    ) -> EmotionalSummary {
        self.stats.process_calls += 1;
        let floor = self.config.intensity_floor;
        let base = clamp_percent(base_intensity);

        self.state.decay(&self.catalog);
        let mut faded = self.state.settle(floor);

        let mut applied: Vec<String> = Vec::with_capacity(detected.len());
        for name in detected {
            let name = name.as_ref();
            let Some(id) = self.catalog.id_of(name) else {
                debug!(emotion = name, "Skipping unknown emotion");
                self.stats.skipped_unknown += 1;
                continue;
            };
            self.apply(id, base);
            applied.push(name.to_string());
        }
        faded += self.state.settle(floor);
        self.stats.faded_out += faded as u64;

        let entry = EmotionalHistoryEntry {
            timestamp: Utc::now(),
            summary: self.summarize(),
            trigger_text: trigger_text.to_string(),
            context_text: context_text.to_string(),
        };
        self.stats.history_evictions += self.history.push(entry) as u64;

        if !applied.is_empty() {
            let removed = self
                .learning
                .learn(trigger_text, &applied, &self.learning_config);
            if removed > 0 {
                self.stats.learning_prunes += 1;
            }
        }

        let summary = self.summarize();
        debug!(
            detected = applied.len(),
            tracked = self.state.len(),
            faded,
            primary = %summary.primary_emotion,
            mood = %summary.mood,
            "Processed emotions"
        );
        summary
    }

    /// Conflict, enhancement and merge for one detected emotion.
    fn apply(&mut self, id: EmotionId, base: f32) {
        let mut effective = base;

        for &c in self.catalog.conflicts_of(id) {
            if let Some(shrunk) = self.state.scale(c, self.config.conflict_shrink) {
                effective = (effective - shrunk * self.config.conflict_suppression).max(0.0);
            }
        }
        for &h in self.catalog.enhances_of(id) {
            self.state.scale(h, self.config.enhancement_gain);
        }

        match self.state.get(id) {
            Some(current) => self
                .state
                .insert(id, (current + effective * self.config.reinforcement).min(100.0)),
            None => self.state.insert(id, effective),
        }
    }

    /// Current summary. Pure: repeated calls return equal values.
    #[must_use]
    pub fn summarize(&self) -> EmotionalSummary {
        mood::summarize(&self.catalog, &self.state, &self.history, &self.config)
    }

    /// Clear intensities. History and learned weights are kept.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Intensity of a tracked emotion by name.
    #[must_use]
    pub fn intensity(&self, name: &str) -> Option<f32> {
        self.catalog.id_of(name).and_then(|id| self.state.get(id))
    }

    /// Tracked `(name, intensity)` pairs in catalog order.
    pub fn tracked(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.state
            .iter()
            .map(|(id, v)| (self.catalog.name(id), v))
    }

    /// Whether any emotion of `family` is tracked above `threshold`.
    #[must_use]
    pub fn any_above(&self, family: &[&str], threshold: f32) -> bool {
        self.tracked()
            .any(|(name, v)| v > threshold && mood::member(family, name))
    }

    /// State view.
    #[must_use]
    pub fn state(&self) -> &EmotionState {
        &self.state
    }

    /// History ring.
    #[must_use]
    pub fn history(&self) -> &EmotionalHistory {
        &self.history
    }

    /// Learned weights.
    #[must_use]
    pub fn learning(&self) -> &LearningTable {
        &self.learning
    }

    /// Runtime counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub(crate) fn restore_state(&mut self, state: EmotionState) {
        self.state = state;
    }

    pub(crate) fn restore_history(&mut self, history: EmotionalHistory) {
        self.history = history;
    }

    pub(crate) fn restore_learning(&mut self, learning: LearningTable) {
        self.learning = learning;
    }

    pub(crate) fn learning_config(&self) -> &LearningConfig {
        &self.learning_config
    }
}
