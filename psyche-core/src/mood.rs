//! Mood Synthesizer — summary metrics derived from the emotion state.
//!
//! Pure functions: nothing here mutates the state or the history.
//!
//! | metric    | definition                                                         |
//! |-----------|--------------------------------------------------------------------|
//! | mood      | tiered rules on the primary emotion, or "conflicted"               |
//! | arousal   | Σ intensity × (1.5 high-energy / 0.8 other) ÷ n                    |
//! | valence   | Σ intensity × (1.2 positive / 0.4 other) ÷ n                       |
//! | coherence | 100 − Σ min(a, b) over conflicting pairs                           |
//! | stability | mean similarity to the last few history entries                    |

use std::cmp::Reverse;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::catalog::EmotionCatalog;
use crate::config::EmotionConfig;
use crate::history::EmotionalHistory;
use crate::state::EmotionState;
use crate::types::{EmotionId, Mood, Score, clamp_percent};

// ---------------------------------------------------------------------------
// Emotion families
// ---------------------------------------------------------------------------

/// Boost arousal.
pub const HIGH_ENERGY: &[&str] = &["excitement", "anger", "fear", "surprise"];
/// Boost valence.
pub const POSITIVE: &[&str] = &["happiness", "love", "pride", "excitement", "gratitude"];

const HIGH_POSITIVE: &[&str] = &[
    "happiness", "excitement", "euphoria", "elation", "rapture", "love", "pride", "triumph", "enthusiasm",
];
const HIGH_NEGATIVE: &[&str] = &[
    "anger", "rage", "defiance", "rebellion", "spite", "indignation", "frustration", "contempt", "scorn",
];
const HAPPY: &[&str] = &[
    "happiness", "excitement", "euphoria", "elation", "enthusiasm", "playfulness", "amusement", "whimsy", "rapture",
];
const CONFIDENT: &[&str] = &["pride", "confidence", "determination", "triumph", "empowerment", "certainty"];
const SPITEFUL: &[&str] = &[
    "spite", "sarcasm", "cynicism", "contempt", "scorn", "schadenfreude", "irony", "annoyance", "malice", "bitterness",
];
const CURIOUS: &[&str] = &[
    "curiosity", "wonder", "fascination", "contemplation", "introspection", "epiphany", "inspiration", "reverie", "awe",
];
const LOVING: &[&str] = &[
    "love", "affection", "tenderness", "compassion", "empathy", "gratitude", "sympathy", "protectiveness",
];
const SAD: &[&str] = &[
    "sadness", "grief", "melancholy", "loneliness", "longing", "nostalgia", "regret", "wistfulness", "despair", "saudade",
];

/// Primary emotion of the neutral summary. Valid whether or not the catalog
/// defines it.
pub const NEUTRAL_PRIMARY: &str = "calm";

/// Top-two gap below which three or more active emotions read as conflicted.
const CONFLICTED_GAP: f32 = 20.0;

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Derived view of an emotion state. Recomputed on demand, never stored as
/// the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalSummary {
    /// Strongest active emotion ("calm" when nothing is active).
    pub primary_emotion: String,
    /// Intensity of the primary emotion (0 for the neutral summary).
    #[serde(default)]
    pub primary_intensity: f32,
    /// Next strongest emotions, at most two, strongest first.
    pub secondary_emotions: Vec<String>,
    /// Discrete mood label.
    pub mood: Mood,
    /// Energy level in `[0, 100]`.
    pub arousal: f32,
    /// Positivity in `[0, 100]`.
    pub valence: f32,
    /// How little the active emotions fight each other, in `[0, 100]`.
    pub coherence: f32,
    /// Similarity to recent history, in `[0, 100]`.
    pub stability: f32,
}

impl EmotionalSummary {
    /// The fixed summary of an empty state.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            primary_emotion: NEUTRAL_PRIMARY.to_string(),
            primary_intensity: 0.0,
            secondary_emotions: Vec::new(),
            mood: Mood::Chill,
            arousal: 50.0,
            valence: 50.0,
            coherence: 100.0,
            stability: 100.0,
        }
    }

    /// Text rendering used by prompts and status displays.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Primary emotion: {} ({:.0}/100)",
            self.primary_emotion, self.primary_intensity
        );
        let _ = writeln!(out, "Mood: {} {}", self.mood, self.mood.glyph());
        let _ = writeln!(
            out,
            "Arousal: {:.0}/100 | Valence: {:.0}/100",
            self.arousal, self.valence
        );
        if self.secondary_emotions.is_empty() {
            let _ = writeln!(out, "Secondary emotions: none");
        } else {
            let _ = writeln!(
                out,
                "Secondary emotions: {}",
                self.secondary_emotions.join(", ")
            );
        }
        let _ = write!(
            out,
            "Coherence: {:.0}/100 | Stability: {:.0}/100",
            self.coherence, self.stability
        );
        out
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Summarise `state` against `history`.
#[must_use]
pub fn summarize(
    catalog: &EmotionCatalog,
    state: &EmotionState,
    history: &EmotionalHistory,
    config: &EmotionConfig,
) -> EmotionalSummary {
    let mut active: Vec<(EmotionId, f32)> = state
        .iter()
        .filter(|&(_, i)| i > config.summary_floor)
        .collect();
    if active.is_empty() {
        return EmotionalSummary::neutral();
    }
    active.sort_by_key(|&(_, i)| Reverse(Score::new(i)));

    let (primary_id, primary_intensity) = active[0];
    let primary = catalog.name(primary_id).to_string();
    let secondary: Vec<String> = active
        .iter()
        .skip(1)
        .take(2)
        .map(|&(id, _)| catalog.name(id).to_string())
        .collect();

    let mut mood = classify_mood(&primary, primary_intensity);
    if active.len() >= 3 && (active[0].1 - active[1].1) < CONFLICTED_GAP {
        mood = Mood::Conflicted;
    }

    let arousal = weighted_mean(catalog, &active, HIGH_ENERGY, 1.5, 0.8);
    let valence = weighted_mean(catalog, &active, POSITIVE, 1.2, 0.4);
    let coherence = coherence(catalog, &active);

    let mut summary = EmotionalSummary {
        primary_emotion: primary,
        primary_intensity,
        secondary_emotions: secondary,
        mood,
        arousal,
        valence,
        coherence,
        stability: 100.0,
    };
    summary.stability = stability(&summary, history, config.stability_window);
    summary
}

/// Tiered mood rule on the primary emotion.
///
/// Bands: `i > 80`, `60 ≤ i ≤ 80`, `40 ≤ i < 60`; anything unmatched is chill.
#[must_use]
pub fn classify_mood(primary: &str, intensity: f32) -> Mood {
    let is = |family: &[&str]| member(family, primary);
    if intensity > 80.0 {
        if is(HIGH_POSITIVE) {
            return Mood::Ecstatic;
        }
        if is(HIGH_NEGATIVE) {
            return Mood::Rebellious;
        }
    } else if intensity >= 60.0 {
        if is(HAPPY) {
            return Mood::Hyped;
        }
        if is(CONFIDENT) {
            return Mood::Confident;
        }
        if is(SPITEFUL) {
            return Mood::Sarcastic;
        }
    } else if intensity >= 40.0 {
        if is(CURIOUS) {
            return Mood::Thoughtful;
        }
        if is(LOVING) {
            return Mood::Caring;
        }
        if is(SAD) {
            return Mood::Melancholy;
        }
    }
    Mood::Chill
}

/// Whether `name` belongs to `family`.
#[must_use]
pub fn member(family: &[&str], name: &str) -> bool {
    family.iter().any(|f| *f == name)
}

#[allow(clippy::cast_precision_loss)]
fn weighted_mean(
    catalog: &EmotionCatalog,
    active: &[(EmotionId, f32)],
    boosted: &[&str],
    boost: f32,
    base: f32,
) -> f32 {
    let total: f32 = active
        .iter()
        .map(|&(id, i)| {
            let m = if member(boosted, catalog.name(id)) { boost } else { base };
            i * m
        })
        .sum();
    clamp_percent(total / active.len() as f32)
}

fn coherence(catalog: &EmotionCatalog, active: &[(EmotionId, f32)]) -> f32 {
    let mut clash = 0.0;
    for (n, &(a, ia)) in active.iter().enumerate() {
        for &(b, ib) in &active[n + 1..] {
            if catalog.in_conflict(a, b) {
                clash += ia.min(ib);
            }
        }
    }
    (100.0 - clash).max(0.0)
}

#[allow(clippy::cast_precision_loss)]
fn stability(current: &EmotionalSummary, history: &EmotionalHistory, window: usize) -> f32 {
    let recent: Vec<f32> = history
        .recent(window)
        .map(|e| similarity(current, &e.summary))
        .collect();
    if recent.is_empty() {
        return 100.0;
    }
    clamp_percent(recent.iter().sum::<f32>() / recent.len() as f32)
}

/// Similarity of two summaries in `[0, 100]`.
///
/// 40 for the same primary, 15 per shared secondary, 25 for the same mood,
/// and up to 20 for close arousal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &EmotionalSummary, b: &EmotionalSummary) -> f32 {
    let mut score = 0.0;
    if a.primary_emotion == b.primary_emotion {
        score += 40.0;
    }
    let shared = a
        .secondary_emotions
        .iter()
        .filter(|s| b.secondary_emotions.contains(s))
        .count();
    score += 15.0 * shared as f32;
    if a.mood == b.mood {
        score += 25.0;
    }
    score += (20.0 - (a.arousal - b.arousal).abs() / 5.0).max(0.0);
    clamp_percent(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::EmotionalHistoryEntry;
    use chrono::Utc;

    fn state_of(pairs: &[(&str, f32)]) -> EmotionState {
        let catalog = EmotionCatalog::builtin();
        let mut state = EmotionState::new();
        for (name, i) in pairs {
            state.insert(catalog.id_of(name).expect("known emotion"), *i);
        }
        state
    }

    fn run(pairs: &[(&str, f32)]) -> EmotionalSummary {
        summarize(
            &EmotionCatalog::builtin(),
            &state_of(pairs),
            &EmotionalHistory::new(50),
            &EmotionConfig::default(),
        )
    }

    #[test]
    fn empty_state_is_exactly_neutral() {
        assert_eq!(run(&[]), EmotionalSummary::neutral());
    }

    #[test]
    fn faint_emotions_are_ignored() {
        assert_eq!(run(&[("anger", 9.0), ("fear", 10.0)]), EmotionalSummary::neutral());
    }

    #[test]
    fn sixty_is_inside_the_hyped_band() {
        let s = run(&[("happiness", 60.0)]);
        assert_eq!(s.primary_emotion, "happiness");
        assert_eq!(s.mood, Mood::Hyped);
        assert_eq!(classify_mood("happiness", 59.9), Mood::Chill);
        assert_eq!(classify_mood("happiness", 80.0), Mood::Hyped);
        assert_eq!(classify_mood("happiness", 80.5), Mood::Ecstatic);
    }

    #[test]
    fn mood_bands_follow_families() {
        assert_eq!(classify_mood("rage", 95.0), Mood::Rebellious);
        assert_eq!(classify_mood("pride", 70.0), Mood::Confident);
        assert_eq!(classify_mood("sarcasm", 65.0), Mood::Sarcastic);
        assert_eq!(classify_mood("curiosity", 45.0), Mood::Thoughtful);
        assert_eq!(classify_mood("compassion", 50.0), Mood::Caring);
        assert_eq!(classify_mood("grief", 40.0), Mood::Melancholy);
        assert_eq!(classify_mood("curiosity", 90.0), Mood::Chill);
        assert_eq!(classify_mood("calm", 30.0), Mood::Chill);
    }

    #[test]
    fn close_top_two_with_three_active_is_conflicted() {
        let s = run(&[("happiness", 70.0), ("curiosity", 60.0), ("calm", 20.0)]);
        assert_eq!(s.mood, Mood::Conflicted);

        // Only two active: no override.
        let s = run(&[("happiness", 70.0), ("curiosity", 60.0)]);
        assert_eq!(s.mood, Mood::Hyped);
    }

    #[test]
    fn primary_and_secondaries_by_intensity() {
        let s = run(&[("calm", 20.0), ("curiosity", 50.0), ("love", 30.0), ("pride", 15.0)]);
        assert_eq!(s.primary_emotion, "curiosity");
        assert_eq!(s.secondary_emotions, vec!["love", "calm"]);
        assert!((s.primary_intensity - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn arousal_and_valence_weights() {
        let s = run(&[("excitement", 40.0)]);
        assert!((s.arousal - 60.0).abs() < 1e-4);
        assert!((s.valence - 48.0).abs() < 1e-4);

        let s = run(&[("calm", 50.0), ("anger", 50.0)]);
        assert!((s.arousal - (50.0 * 0.8 + 50.0 * 1.5) / 2.0).abs() < 1e-4);
        assert!((s.valence - 20.0).abs() < 1e-4);
    }

    #[test]
    fn arousal_is_clamped() {
        let s = run(&[("excitement", 100.0)]);
        assert!((s.arousal - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn coherence_drops_for_conflicting_pairs() {
        let s = run(&[("happiness", 50.0), ("sadness", 30.0)]);
        assert!((s.coherence - 70.0).abs() < 1e-4);

        let s = run(&[("happiness", 90.0), ("sadness", 80.0), ("grief", 70.0)]);
        // happiness/sadness 80 + happiness/grief 70 ⇒ floor at 0.
        assert!(s.coherence.abs() < f32::EPSILON);
    }

    #[test]
    fn stability_compares_with_recent_history() {
        let catalog = EmotionCatalog::builtin();
        let config = EmotionConfig::default();
        let state = state_of(&[("happiness", 60.0)]);
        let mut history = EmotionalHistory::new(50);

        let first = summarize(&catalog, &state, &history, &config);
        assert!((first.stability - 100.0).abs() < f32::EPSILON);

        history.push(EmotionalHistoryEntry {
            timestamp: Utc::now(),
            summary: EmotionalSummary::neutral(),
            trigger_text: String::new(),
            context_text: String::new(),
        });
        let second = summarize(&catalog, &state, &history, &config);
        // Different primary and mood; arousal 48 vs 50 ⇒ 20 − 0.4.
        assert!((second.stability - 19.6).abs() < 1e-3);
    }

    #[test]
    fn similarity_of_identical_summaries_is_capped() {
        let mut s = run(&[("happiness", 60.0), ("calm", 30.0), ("curiosity", 20.0)]);
        s.mood = Mood::Hyped;
        assert!((similarity(&s, &s) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn summarize_is_idempotent() {
        let catalog = EmotionCatalog::builtin();
        let config = EmotionConfig::default();
        let state = state_of(&[("love", 55.0), ("fear", 35.0), ("hope", 22.0)]);
        let history = EmotionalHistory::new(50);
        assert_eq!(
            summarize(&catalog, &state, &history, &config),
            summarize(&catalog, &state, &history, &config)
        );
    }

    #[test]
    fn render_mentions_every_metric() {
        let text = run(&[("happiness", 60.0), ("calm", 30.0)]).render();
        assert!(text.contains("Primary emotion: happiness (60/100)"));
        assert!(text.contains("Mood: hyped"));
        assert!(text.contains("Secondary emotions: calm"));
        assert!(text.contains("Coherence:"));
        assert!(text.contains("Stability:"));
    }
}
