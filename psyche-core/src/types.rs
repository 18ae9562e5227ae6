//! Core type definitions for the PSYCHE simulation core.
//!
//! All types are serializable so that the persistence collaborator can store
//! them as plain data.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Stable index of an emotion inside its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmotionId(pub u16);

impl EmotionId {
    /// Arena slot of this emotion.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Unique identifier for a persona memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryId(pub Uuid);

impl MemoryId {
    /// Create a new random memory ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Emotion categories
// ---------------------------------------------------------------------------

/// Broad family an emotion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    /// Basic, widely recognised emotions.
    Core,
    /// Blends and socially learned emotions.
    Complex,
    /// Emotions about thinking itself.
    Meta,
    /// Dark or corrosive emotions.
    Shadow,
    /// Aesthetic, hard-to-name states.
    Poetic,
    /// Emotions directed at other people.
    Social,
}

impl EmotionCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Core,
        Self::Complex,
        Self::Meta,
        Self::Shadow,
        Self::Poetic,
        Self::Social,
    ];

    /// Lowercase label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Complex => "complex",
            Self::Meta => "meta",
            Self::Shadow => "shadow",
            Self::Poetic => "poetic",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Glyph shown for a mood label nobody mapped.
pub const FALLBACK_GLYPH: &str = "🤖";

/// Discrete label summarising the dominant emotional pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Overwhelming positive energy.
    Ecstatic,
    /// Upbeat and energetic.
    Hyped,
    /// Self-assured.
    Confident,
    /// Relaxed baseline.
    Chill,
    /// Curious and reflective.
    Thoughtful,
    /// Quietly sad.
    Melancholy,
    /// Angry, defiant energy.
    Rebellious,
    /// Dry and biting.
    Sarcastic,
    /// Warm and attentive.
    Caring,
    /// Torn between competing emotions.
    Conflicted,
}

impl Mood {
    /// Every mood, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Ecstatic,
        Self::Hyped,
        Self::Confident,
        Self::Chill,
        Self::Thoughtful,
        Self::Melancholy,
        Self::Rebellious,
        Self::Sarcastic,
        Self::Caring,
        Self::Conflicted,
    ];

    /// Lowercase label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ecstatic => "ecstatic",
            Self::Hyped => "hyped",
            Self::Confident => "confident",
            Self::Chill => "chill",
            Self::Thoughtful => "thoughtful",
            Self::Melancholy => "melancholy",
            Self::Rebellious => "rebellious",
            Self::Sarcastic => "sarcastic",
            Self::Caring => "caring",
            Self::Conflicted => "conflicted",
        }
    }

    /// Display glyph for the presentation layer.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ecstatic => "🤩",
            Self::Hyped => "🔥",
            Self::Confident => "😎",
            Self::Chill => "😌",
            Self::Thoughtful => "🤔",
            Self::Melancholy => "😔",
            Self::Rebellious => "😈",
            Self::Sarcastic => "😏",
            Self::Caring => "🥰",
            Self::Conflicted => "😵",
        }
    }

    /// Emotions used to seed a fresh state whose baseline is this mood.
    #[must_use]
    pub fn seed_emotions(self) -> &'static [&'static str] {
        match self {
            Self::Ecstatic => &["euphoria", "excitement"],
            Self::Hyped => &["excitement", "enthusiasm"],
            Self::Confident => &["confidence", "pride"],
            Self::Chill => &["calm", "serenity"],
            Self::Thoughtful => &["curiosity", "contemplation"],
            Self::Melancholy => &["melancholy", "longing"],
            Self::Rebellious => &["defiance", "rebellion"],
            Self::Sarcastic => &["sarcasm", "amusement"],
            Self::Caring => &["compassion", "affection"],
            Self::Conflicted => &["ambivalence", "doubt"],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood '{s}'"))
    }
}

/// Glyph lookup by raw label, falling back to [`FALLBACK_GLYPH`].
#[must_use]
pub fn glyph_for(label: &str) -> &'static str {
    label.parse::<Mood>().map_or(FALLBACK_GLYPH, Mood::glyph)
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Totally ordered score used to rank detections and memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(pub OrderedFloat<f32>);

impl Score {
    /// Create a score from a raw f32.
    #[must_use]
    pub fn new(score: f32) -> Self {
        Self(OrderedFloat(score))
    }

    /// Get the raw score value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0.into_inner()
    }
}

/// Clamp a scalar into `[0, 100]`, mapping NaN to 0.
#[must_use]
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

// ---------------------------------------------------------------------------
// Runtime statistics
// ---------------------------------------------------------------------------

/// Runtime counters for one emotion engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Number of `process` calls handled.
    pub process_calls: u64,
    /// Detected names skipped because the catalog does not know them.
    pub skipped_unknown: u64,
    /// Tracked emotions removed after falling below the floor.
    pub faded_out: u64,
    /// History entries evicted from the ring.
    pub history_evictions: u64,
    /// Learning table pruning passes.
    pub learning_prunes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_a_distinct_glyph() {
        let mut glyphs: Vec<_> = Mood::ALL.iter().map(|m| m.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Mood::ALL.len());
        assert!(!glyphs.contains(&FALLBACK_GLYPH));
    }

    #[test]
    fn glyph_lookup_falls_back_for_unknown_labels() {
        assert_eq!(glyph_for("hyped"), "🔥");
        assert_eq!(glyph_for("  Caring "), "🥰");
        assert_eq!(glyph_for("bored"), FALLBACK_GLYPH);
    }

    #[test]
    fn mood_round_trips_through_label() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn clamp_percent_handles_nan_and_bounds() {
        assert_eq!(clamp_percent(f32::NAN), 0.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
    }
}
