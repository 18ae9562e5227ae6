//! Configuration for the PSYCHE simulation core.
//!
//! Maps directly to `psyche.toml`. Every field has a default, so an empty
//! document (or a document with only a few overrides) is valid.

use serde::{Deserialize, Serialize};

use crate::error::{PsycheError, Result};

/// Top-level PSYCHE configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PsycheConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Emotion state evolution.
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Heuristic text detection.
    #[serde(default)]
    pub detection: DetectionConfig,
    /// Adaptive word weight table.
    #[serde(default)]
    pub learning: LearningConfig,
    /// Persona memory log limits.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Persona trait drift and conversation scaling.
    #[serde(default)]
    pub personality: PersonalityConfig,
}

impl PsycheConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PsycheError::Config` if the TOML is invalid or the limits are
    /// inconsistent (see [`PsycheConfig::validate`]).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| PsycheError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    /// Returns `PsycheError::Config` naming the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(PsycheError::Config(msg));

        if self.learning.prune_to > self.learning.max_entries {
            return bad(format!(
                "learning.prune_to ({}) exceeds learning.max_entries ({})",
                self.learning.prune_to, self.learning.max_entries
            ));
        }
        if self.memory.retain_after_eviction > self.memory.capacity {
            return bad(format!(
                "memory.retain_after_eviction ({}) exceeds memory.capacity ({})",
                self.memory.retain_after_eviction, self.memory.capacity
            ));
        }
        if self.emotion.history_capacity == 0 {
            return bad("emotion.history_capacity must be at least 1".to_string());
        }
        if !(0.0..=100.0).contains(&self.emotion.intensity_floor) {
            return bad(format!(
                "emotion.intensity_floor ({}) must lie in [0, 100]",
                self.emotion.intensity_floor
            ));
        }
        if self.personality.min_intensity > self.personality.max_intensity {
            return bad(format!(
                "personality.min_intensity ({}) exceeds personality.max_intensity ({})",
                self.personality.min_intensity, self.personality.max_intensity
            ));
        }
        if self.detection.fallback.is_empty() {
            return bad("detection.fallback must name at least one emotion".to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level hint for the host's subscriber: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Emotion state evolution constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Tracked emotions below this intensity are dropped.
    #[serde(default = "default_5_0")]
    pub intensity_floor: f32,
    /// Only emotions above this intensity take part in mood synthesis.
    #[serde(default = "default_10_0")]
    pub summary_floor: f32,
    /// Intensity used by `process` callers that have no better estimate.
    #[serde(default = "default_60_0")]
    pub default_base_intensity: f32,
    /// Fraction of a tracked conflicting emotion subtracted from a new one.
    #[serde(default = "default_0_3")]
    pub conflict_suppression: f32,
    /// Multiplier applied to a tracked emotion when a conflicting one arrives.
    #[serde(default = "default_0_7")]
    pub conflict_shrink: f32,
    /// Multiplier applied to a tracked emotion when an enhancing one arrives.
    #[serde(default = "default_1_2")]
    pub enhancement_gain: f32,
    /// Fraction of a re-detected emotion's intensity added to its tracked value.
    #[serde(default = "default_0_5")]
    pub reinforcement: f32,
    /// Emotional history ring size.
    #[serde(default = "default_50")]
    pub history_capacity: usize,
    /// How many recent history entries feed the stability metric.
    #[serde(default = "default_5_usize")]
    pub stability_window: usize,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            intensity_floor: 5.0,
            summary_floor: 10.0,
            default_base_intensity: 60.0,
            conflict_suppression: 0.3,
            conflict_shrink: 0.7,
            enhancement_gain: 1.2,
            reinforcement: 0.5,
            history_capacity: 50,
            stability_window: 5,
        }
    }
}

/// Heuristic detection weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Default number of emotions returned by `detect`.
    #[serde(default = "default_4")]
    pub max_results: usize,
    /// Entries must score strictly above this to be returned.
    #[serde(default = "default_0_2")]
    pub confidence_threshold: f32,
    /// Score per matching trigger fragment.
    #[serde(default = "default_0_3")]
    pub trigger_weight: f32,
    /// Flat bonus when the text contains `!`.
    #[serde(default = "default_0_1")]
    pub exclamation_bonus: f32,
    /// Flat bonus when the text contains `?`.
    #[serde(default = "default_0_05")]
    pub question_bonus: f32,
    /// Flat bonus when the text contains two consecutive uppercase letters.
    #[serde(default = "default_0_15")]
    pub shouting_bonus: f32,
    /// Multiplier on learned word weights.
    #[serde(default = "default_0_1")]
    pub learned_weight_scale: f32,
    /// Emotions substituted when a conversation detects nothing.
    #[serde(default = "default_fallback")]
    pub fallback: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_results: 4,
            confidence_threshold: 0.2,
            trigger_weight: 0.3,
            exclamation_bonus: 0.1,
            question_bonus: 0.05,
            shouting_bonus: 0.15,
            learned_weight_scale: 0.1,
            fallback: default_fallback(),
        }
    }
}

/// Adaptive `(word, emotion)` weight table limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Weight added per reinforcement.
    #[serde(default = "default_0_1")]
    pub increment: f32,
    /// Ceiling for any single weight.
    #[serde(default = "default_1_0")]
    pub max_weight: f32,
    /// Tokens must be at least this many characters long to be learned.
    #[serde(default = "default_3_usize")]
    pub min_token_len: usize,
    /// Pruning triggers when the table grows beyond this many entries.
    #[serde(default = "default_1000")]
    pub max_entries: usize,
    /// Entries kept (highest weight first) after pruning.
    #[serde(default = "default_800")]
    pub prune_to: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            increment: 0.1,
            max_weight: 1.0,
            min_token_len: 3,
            max_entries: 1000,
            prune_to: 800,
        }
    }
}

/// Persona memory log limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Eviction runs when the log grows beyond this many memories.
    #[serde(default = "default_100")]
    pub capacity: usize,
    /// Memories kept (highest importance first) after eviction.
    #[serde(default = "default_80")]
    pub retain_after_eviction: usize,
    /// Interaction records kept per persona (oldest dropped first).
    #[serde(default = "default_200")]
    pub max_interactions: usize,
    /// Recent memories included in the prompt context.
    #[serde(default = "default_5_usize")]
    pub prompt_recent: usize,
    /// Characters of each memory shown in the prompt context.
    #[serde(default = "default_100")]
    pub prompt_snippet_chars: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            retain_after_eviction: 80,
            max_interactions: 200,
            prompt_recent: 5,
            prompt_snippet_chars: 100,
        }
    }
}

/// Persona trait drift and conversation intensity scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityConfig {
    /// Persona activated when a core is created.
    #[serde(default = "default_personality")]
    pub default_personality: String,
    /// Base intensity before expression/trait scaling.
    #[serde(default = "default_60_0")]
    pub conversation_base_intensity: f32,
    /// Lower clamp for scaled conversation intensity.
    #[serde(default = "default_10_0")]
    pub min_intensity: f32,
    /// Upper clamp for scaled conversation intensity.
    #[serde(default = "default_100_0")]
    pub max_intensity: f32,
    /// Rebellion drifts when a rebellious emotion is tracked above this.
    #[serde(default = "default_70_0")]
    pub rebellion_threshold: f32,
    /// Empathy drifts when an empathetic emotion is tracked above this.
    #[serde(default = "default_60_0")]
    pub empathy_threshold: f32,
    /// Fraction of the learning rate added to relational awareness per interaction.
    #[serde(default = "default_0_5")]
    pub relational_gain: f32,
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            default_personality: default_personality(),
            conversation_base_intensity: 60.0,
            min_intensity: 10.0,
            max_intensity: 100.0,
            rebellion_threshold: 70.0,
            empathy_threshold: 60.0,
            relational_gain: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_personality() -> String { "nova".to_string() }
fn default_fallback() -> Vec<String> { vec!["calm".to_string(), "curiosity".to_string()] }
fn default_0_05() -> f32 { 0.05 }
fn default_0_1() -> f32 { 0.1 }
fn default_0_15() -> f32 { 0.15 }
fn default_0_2() -> f32 { 0.2 }
fn default_0_3() -> f32 { 0.3 }
fn default_0_5() -> f32 { 0.5 }
fn default_0_7() -> f32 { 0.7 }
fn default_1_0() -> f32 { 1.0 }
fn default_1_2() -> f32 { 1.2 }
fn default_5_0() -> f32 { 5.0 }
fn default_10_0() -> f32 { 10.0 }
fn default_60_0() -> f32 { 60.0 }
fn default_70_0() -> f32 { 70.0 }
fn default_100_0() -> f32 { 100.0 }
fn default_3_usize() -> usize { 3 }
fn default_4() -> usize { 4 }
fn default_5_usize() -> usize { 5 }
fn default_50() -> usize { 50 }
fn default_80() -> usize { 80 }
fn default_100() -> usize { 100 }
fn default_200() -> usize { 200 }
fn default_800() -> usize { 800 }
fn default_1000() -> usize { 1000 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PsycheConfig::from_toml("").expect("empty config parses");
        assert_eq!(config.emotion.history_capacity, 50);
        assert_eq!(config.learning.max_entries, 1000);
        assert_eq!(config.learning.prune_to, 800);
        assert_eq!(config.memory.capacity, 100);
        assert_eq!(config.memory.retain_after_eviction, 80);
        assert_eq!(config.detection.fallback, vec!["calm", "curiosity"]);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PsycheConfig::from_toml(
            r#"
            [emotion]
            intensity_floor = 2.5

            [personality]
            default_personality = "sage"
            "#,
        )
        .expect("parses");
        assert!((config.emotion.intensity_floor - 2.5).abs() < f32::EPSILON);
        assert!((config.emotion.conflict_shrink - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.personality.default_personality, "sage");
    }

    #[test]
    fn inconsistent_learning_limits_rejected() {
        let err = PsycheConfig::from_toml(
            r"
            [learning]
            max_entries = 10
            prune_to = 20
            ",
        )
        .expect_err("prune_to > max_entries must fail");
        assert!(matches!(err, PsycheError::Config(_)));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = PsycheConfig::from_toml("[emotion\nfloor = ").expect_err("bad toml");
        assert!(matches!(err, PsycheError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("psyche.toml");
        std::fs::write(&path, "[memory]\nprompt_recent = 3\n").expect("write");
        let config = PsycheConfig::from_file(&path).expect("load");
        assert_eq!(config.memory.prompt_recent, 3);
    }
}
