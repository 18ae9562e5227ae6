//! Personality Trait Core — persona profiles layered over one emotion engine.
//!
//! A core owns one [`EmotionEngine`] plus a [`PersonalityProfile`] per
//! built-in persona. Exactly one persona is active. Switching persona clears
//! the emotion state and seeds it from the persona's baseline mood; profiles
//! (traits, consciousness, memories, interactions) persist across switches.
//!
//! Each conversation turn:
//!
//! ```text
//! detect("{user} {reply}") ──▶ fallback if empty ──▶ intensity from traits
//!        │
//!        ▼
//! engine.process ──▶ store memory (evict 100 → 80) ──▶ log interaction ──▶ drift
//! ```

pub mod memory;
pub mod presets;
pub mod traits;

use chrono::Utc;
use tracing::{debug, info, warn};

pub use memory::{InteractionLog, InteractionRecord, MemoryLog, PersonalityMemory};
pub use presets::PersonalityPreset;
pub use traits::{ConsciousnessState, ExpressionTier, PersonalityTraits};

use crate::config::{MemoryConfig, PersonalityConfig, PsycheConfig};
use crate::engine::EmotionEngine;
use crate::mood::EmotionalSummary;
use crate::prompt::{self, PromptInputs};
use crate::types::MemoryId;

/// Emotions that push the rebellion trait when strongly felt.
pub const REBELLION_FAMILY: &[&str] = &["defiance", "rebellion", "anger", "spite"];
/// Emotions that push the empathy trait when strongly felt.
pub const EMPATHY_FAMILY: &[&str] = &["empathy", "compassion", "love", "tenderness"];

/// Live state of one persona.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityProfile {
    preset: PersonalityPreset,
    pub(crate) traits: PersonalityTraits,
    pub(crate) consciousness: ConsciousnessState,
    pub(crate) memories: MemoryLog,
    pub(crate) interactions: InteractionLog,
}

impl PersonalityProfile {
    fn new(preset: PersonalityPreset, memory: &MemoryConfig) -> Self {
        Self {
            traits: preset.traits,
            consciousness: preset.consciousness,
            memories: MemoryLog::new(memory.capacity, memory.retain_after_eviction),
            interactions: InteractionLog::new(memory.max_interactions),
            preset,
        }
    }

    /// Persona id.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.preset.id
    }

    /// Static persona definition.
    #[must_use]
    pub fn preset(&self) -> &PersonalityPreset {
        &self.preset
    }

    /// Current traits.
    #[must_use]
    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    /// Current consciousness.
    #[must_use]
    pub fn consciousness(&self) -> &ConsciousnessState {
        &self.consciousness
    }

    /// Stored memories.
    #[must_use]
    pub fn memories(&self) -> &MemoryLog {
        &self.memories
    }

    /// Interaction log.
    #[must_use]
    pub fn interactions(&self) -> &InteractionLog {
        &self.interactions
    }
}

/// Result of one conversation turn.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOutcome {
    /// Emotions fed to the engine (fallback applied).
    pub detected: Vec<String>,
    /// Whether the fallback pair was used.
    pub used_fallback: bool,
    /// Base intensity used.
    pub intensity: f32,
    /// Summary after processing.
    pub summary: EmotionalSummary,
    /// Id of the stored memory.
    pub memory_id: MemoryId,
    /// Importance of the stored memory.
    pub importance: f32,
    /// Memories evicted by this turn.
    pub evicted: usize,
}

/// Persona profiles plus the shared emotion engine.
#[derive(Debug, Clone)]
pub struct PersonalityCore {
    engine: EmotionEngine,
    profiles: Vec<PersonalityProfile>,
    active: usize,
    config: PersonalityConfig,
    max_results: usize,
    base_intensity: f32,
    prompt_recent: usize,
    snippet_chars: usize,
}

impl PersonalityCore {
    /// Core with every built-in persona and the configured default active.
    ///
    /// An unknown default falls back to the first built-in persona.
    #[must_use]
    pub fn new(config: &PsycheConfig) -> Self {
        let profiles = presets::builtin()
            .into_iter()
            .map(|p| PersonalityProfile::new(p, &config.memory))
            .collect();
        let mut core = Self {
            engine: EmotionEngine::new(config),
            profiles,
            active: 0,
            config: config.personality.clone(),
            max_results: config.detection.max_results,
            base_intensity: config.emotion.default_base_intensity,
            prompt_recent: config.memory.prompt_recent,
            snippet_chars: config.memory.prompt_snippet_chars,
        };
        let default = core.config.default_personality.clone();
        if !core.activate(&default) {
            let first = core.profiles[0].id();
            core.activate(first);
        }
        core
    }

    /// Switch persona. Unknown ids are ignored and return `false`.
    pub fn activate(&mut self, personality_id: &str) -> bool {
        let Some(index) = self.profiles.iter().position(|p| p.id() == personality_id) else {
            warn!(personality = personality_id, "Ignoring unknown personality");
            return false;
        };
        self.active = index;
        self.engine.reset();

        let preset = self.profiles[index].preset();
        let seeds = preset.baseline_mood.seed_emotions();
        let context = format!("activate {}", preset.id);
        let summary = self
            .engine
            .process_with_trigger(seeds, self.base_intensity, "", &context);
        info!(
            personality = personality_id,
            baseline = %preset.baseline_mood,
            mood = %summary.mood,
            "Activated personality"
        );
        true
    }

    /// Process one exchange: update emotions, remember it and drift traits.
    pub fn process_conversation(
        &mut self,
        user_text: &str,
        reply_text: &str,
        context: &str,
    ) -> InteractionOutcome {
        let combined = format!("{user_text} {reply_text}");
        let mut detected = self.engine.detect(&combined, context, self.max_results);
        let used_fallback = detected.is_empty();
        if used_fallback {
            detected = self.engine.detector().fallback();
        }

        let intensity = self.conversation_intensity();
        let summary = self
            .engine
            .process_with_trigger(&detected, intensity, &combined, context);

        let content = format!("User: {user_text}\nMe: {reply_text}");
        let importance = memory::score_importance(&detected, &content);
        let mut tags = detected.clone();
        tags.push(summary.mood.as_str().to_string());
        let memory_id = MemoryId::new();
        let now = Utc::now();

        let rebellion_hot = self
            .engine
            .any_above(REBELLION_FAMILY, self.config.rebellion_threshold);
        let empathy_hot = self
            .engine
            .any_above(EMPATHY_FAMILY, self.config.empathy_threshold);

        let relational_gain = self.config.relational_gain;
        let profile = &mut self.profiles[self.active];
        let evicted = profile.memories.push(PersonalityMemory {
            id: memory_id,
            content,
            emotional_context: summary.clone(),
            importance,
            timestamp: now,
            tags,
            memory_type: "conversation".to_string(),
        });
        profile.interactions.push(InteractionRecord {
            timestamp: now,
            user_text: user_text.to_string(),
            reply_text: reply_text.to_string(),
            detected: detected.clone(),
            intensity,
            mood: summary.mood,
        });

        let step = profile.preset.learning_rate * (1.0 - profile.preset.stability_factor);
        if rebellion_hot {
            profile.traits.rebellion += step;
        }
        if empathy_hot {
            profile.traits.empathy += step;
        }
        profile.traits.clamp();
        let relational = &mut profile.consciousness.relational_awareness;
        *relational = (*relational + profile.preset.learning_rate * relational_gain).min(100.0);

        debug!(
            personality = profile.id(),
            detected = ?detected,
            used_fallback,
            intensity,
            importance,
            evicted,
            "Processed conversation turn"
        );

        InteractionOutcome {
            detected,
            used_fallback,
            intensity,
            summary,
            memory_id,
            importance,
            evicted,
        }
    }

    /// Base intensity for a conversation turn with the active persona.
    ///
    /// `60 × tier × (0.5 + neuroticism/100) × (0.3 + 0.7 × authenticity/100)`,
    /// clamped to the configured range.
    #[must_use]
    pub fn conversation_intensity(&self) -> f32 {
        let profile = self.active_profile();
        let traits = profile.traits();
        let raw = self.config.conversation_base_intensity
            * profile.preset().expression.multiplier()
            * (0.5 + traits.neuroticism / 100.0)
            * (0.3 + 0.7 * traits.authenticity / 100.0);
        raw.max(self.config.min_intensity).min(self.config.max_intensity)
    }

    /// Prompt context for the active persona. Read-only.
    #[must_use]
    pub fn build_prompt_context(&self) -> String {
        let profile = self.active_profile();
        let summary = self.engine.summarize();
        let memories: Vec<&PersonalityMemory> = profile.memories.recent(self.prompt_recent).collect();
        prompt::build_context(&PromptInputs {
            preset: profile.preset(),
            summary: &summary,
            memories: &memories,
            traits: profile.traits(),
            consciousness: profile.consciousness(),
            snippet_chars: self.snippet_chars,
        })
    }

    /// Clear the emotion state. Profiles are untouched.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Id of the active persona.
    #[must_use]
    pub fn active_id(&self) -> &'static str {
        self.active_profile().id()
    }

    /// Active persona profile.
    #[must_use]
    pub fn active_profile(&self) -> &PersonalityProfile {
        &self.profiles[self.active]
    }

    /// Profile of any persona.
    #[must_use]
    pub fn profile(&self, personality_id: &str) -> Option<&PersonalityProfile> {
        self.profiles.iter().find(|p| p.id() == personality_id)
    }

    /// Current emotional summary.
    #[must_use]
    pub fn summarize(&self) -> EmotionalSummary {
        self.engine.summarize()
    }

    /// Ids of every persona, in preset order.
    pub fn known_personalities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(PersonalityProfile::id)
    }

    /// The `n` most recent memories of the active persona, newest first.
    #[must_use]
    pub fn recent_memories(&self, n: usize) -> Vec<&PersonalityMemory> {
        self.active_profile().memories.recent(n).collect()
    }

    /// Underlying emotion engine.
    #[must_use]
    pub fn engine(&self) -> &EmotionEngine {
        &self.engine
    }

    pub(crate) fn engine_mut(&mut self) -> &mut EmotionEngine {
        &mut self.engine
    }

    pub(crate) fn profile_mut(&mut self, personality_id: &str) -> Option<&mut PersonalityProfile> {
        self.profiles.iter_mut().find(|p| p.id() == personality_id)
    }

    pub(crate) fn profiles(&self) -> &[PersonalityProfile] {
        &self.profiles
    }

    /// Make a persona active without touching the emotion state.
    pub(crate) fn set_active(&mut self, personality_id: &str) -> bool {
        match self.profiles.iter().position(|p| p.id() == personality_id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}
