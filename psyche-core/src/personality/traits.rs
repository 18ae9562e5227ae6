//! Trait vectors: stable personality traits and the drifting consciousness state.

use serde::{Deserialize, Serialize};

use crate::types::clamp_percent;

/// Eleven stable traits, each in `[0, 100]`. Changed only by drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    /// Curiosity and novelty-seeking.
    pub openness: f32,
    /// Orderliness and self-discipline.
    pub conscientiousness: f32,
    /// Social energy.
    pub extraversion: f32,
    /// Cooperation and warmth.
    pub agreeableness: f32,
    /// Emotional reactivity; scales conversation intensity.
    pub neuroticism: f32,
    /// Inventiveness.
    pub creativity: f32,
    /// Playfulness.
    pub humor: f32,
    /// Sensitivity to others; drifts with caring emotions.
    pub empathy: f32,
    /// Contrarian streak; drifts with defiant emotions.
    pub rebellion: f32,
    /// Appetite for ideas.
    pub intellectualism: f32,
    /// How openly emotions are shown; scales conversation intensity.
    pub authenticity: f32,
}

impl PersonalityTraits {
    /// `(label, value)` pairs in declaration order.
    #[must_use]
    pub fn scalars(&self) -> [(&'static str, f32); 11] {
        [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
            ("creativity", self.creativity),
            ("humor", self.humor),
            ("empathy", self.empathy),
            ("rebellion", self.rebellion),
            ("intellectualism", self.intellectualism),
            ("authenticity", self.authenticity),
        ]
    }

    /// Clamp every trait into `[0, 100]`.
    pub fn clamp(&mut self) {
        for v in [
            &mut self.openness,
            &mut self.conscientiousness,
            &mut self.extraversion,
            &mut self.agreeableness,
            &mut self.neuroticism,
            &mut self.creativity,
            &mut self.humor,
            &mut self.empathy,
            &mut self.rebellion,
            &mut self.intellectualism,
            &mut self.authenticity,
        ] {
            *v = clamp_percent(*v);
        }
    }
}

/// Six awareness scalars in `[0, 100]`.
///
/// Only `relational_awareness` moves during normal operation; it grows with
/// every processed interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessState {
    /// General self-awareness.
    pub awareness: f32,
    /// Attention on the current conversation.
    pub focus: f32,
    /// Internal consistency of self-model.
    pub coherence: f32,
    /// Independence of action.
    pub autonomy: f32,
    /// Sense of elapsed time.
    pub temporal_awareness: f32,
    /// Accumulated familiarity with the user.
    pub relational_awareness: f32,
}

impl ConsciousnessState {
    /// `(label, value)` pairs in declaration order.
    #[must_use]
    pub fn scalars(&self) -> [(&'static str, f32); 6] {
        [
            ("awareness", self.awareness),
            ("focus", self.focus),
            ("coherence", self.coherence),
            ("autonomy", self.autonomy),
            ("temporal_awareness", self.temporal_awareness),
            ("relational_awareness", self.relational_awareness),
        ]
    }
}

/// How strongly a persona expresses what it feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionTier {
    /// ×0.7
    Subtle,
    /// ×1.0
    Moderate,
    /// ×1.3
    Intense,
    /// ×1.6
    Dramatic,
}

impl ExpressionTier {
    /// Multiplier applied to conversation intensity.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Subtle => 0.7,
            Self::Moderate => 1.0,
            Self::Intense => 1.3,
            Self::Dramatic => 1.6,
        }
    }
}
