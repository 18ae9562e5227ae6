//! Snapshots — plain-data documents for an external persistence collaborator.
//!
//! Every document carries a `version`. Export never fails; import validates
//! the whole document before touching any state, so a rejected import leaves
//! the target unchanged. Over-capacity collections are trimmed on import
//! (oldest or lowest-weight first) and logged at warn.
//!
//! Encodings: JSON via `serde_json`, MessagePack via `rmp-serde` (named
//! fields, so documents stay self-describing).

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::EmotionCatalog;
use crate::engine::EmotionEngine;
use crate::error::{PsycheError, Result};
use crate::history::{EmotionalHistory, EmotionalHistoryEntry};
use crate::learning::{LearnedWeight, LearningTable};
use crate::mood::{EmotionalSummary, NEUTRAL_PRIMARY};
use crate::personality::{
    ConsciousnessState, InteractionLog, InteractionRecord, PersonalityCore, PersonalityMemory,
    PersonalityTraits,
};
use crate::state::EmotionState;

/// Current document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A versioned, serializable document.
pub trait Snapshot: Serialize + DeserializeOwned {
    /// Document kind, used in error messages.
    const DOCUMENT: &'static str;

    /// Version stamped into the document.
    fn version(&self) -> u32;
}

/// Encode a snapshot as JSON.
///
/// # Errors
/// Returns `PsycheError::Serialization` if encoding fails.
pub fn to_json<T: Snapshot>(snapshot: &T) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Decode a JSON snapshot and check its version.
///
/// # Errors
/// Returns `PsycheError::Serialization` for undecodable input and
/// `PsycheError::Snapshot` for a version mismatch.
pub fn from_json<T: Snapshot>(json: &str) -> Result<T> {
    check_version(serde_json::from_str(json)?)
}

/// Encode a snapshot as MessagePack.
///
/// # Errors
/// Returns `PsycheError::Serialization` if encoding fails.
pub fn to_msgpack<T: Snapshot>(snapshot: &T) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(snapshot)?)
}

/// Decode a MessagePack snapshot and check its version.
///
/// # Errors
/// Returns `PsycheError::Serialization` for undecodable input and
/// `PsycheError::Snapshot` for a version mismatch.
pub fn from_msgpack<T: Snapshot>(bytes: &[u8]) -> Result<T> {
    check_version(rmp_serde::from_slice(bytes)?)
}

fn check_version<T: Snapshot>(snapshot: T) -> Result<T> {
    ensure_version(T::DOCUMENT, snapshot.version())?;
    Ok(snapshot)
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// One tracked intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityEntry {
    /// Emotion name.
    pub emotion: String,
    /// Intensity in `[0, 100]`.
    pub intensity: f32,
}

/// Emotional history ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Document version.
    pub version: u32,
    /// Entries, oldest first.
    pub entries: Vec<EmotionalHistoryEntry>,
}

/// Learning table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSnapshot {
    /// Document version.
    pub version: u32,
    /// Pairs in key order.
    pub entries: Vec<LearnedWeight>,
}

/// Whole emotion engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Document version.
    pub version: u32,
    /// Tracked intensities in catalog order.
    pub intensities: Vec<IntensityEntry>,
    /// History ring.
    pub history: HistorySnapshot,
    /// Learned weights.
    pub learning: LearningSnapshot,
}

/// One persona's live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Document version.
    pub version: u32,
    /// Persona id.
    pub personality_id: String,
    /// Traits.
    pub traits: PersonalityTraits,
    /// Consciousness.
    pub consciousness: ConsciousnessState,
    /// Memories, oldest first.
    pub memories: Vec<PersonalityMemory>,
    /// Interactions, oldest first.
    pub interactions: Vec<InteractionRecord>,
}

/// Whole personality core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreSnapshot {
    /// Document version.
    pub version: u32,
    /// Active persona id.
    pub active_id: String,
    /// Every persona profile.
    pub profiles: Vec<ProfileSnapshot>,
    /// Shared emotion engine.
    pub engine: EngineSnapshot,
}

impl Snapshot for HistorySnapshot {
    const DOCUMENT: &'static str = "history";
    fn version(&self) -> u32 {
        self.version
    }
}

impl Snapshot for LearningSnapshot {
    const DOCUMENT: &'static str = "learning";
    fn version(&self) -> u32 {
        self.version
    }
}

impl Snapshot for EngineSnapshot {
    const DOCUMENT: &'static str = "engine";
    fn version(&self) -> u32 {
        self.version
    }
}

impl Snapshot for ProfileSnapshot {
    const DOCUMENT: &'static str = "profile";
    fn version(&self) -> u32 {
        self.version
    }
}

impl Snapshot for CoreSnapshot {
    const DOCUMENT: &'static str = "core";
    fn version(&self) -> u32 {
        self.version
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn ensure_version(document: &'static str, version: u32) -> Result<()> {
    if version == SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(PsycheError::snapshot(
            document,
            format!("version {version} (expected {SNAPSHOT_VERSION})"),
        ))
    }
}

fn ensure_in(document: &'static str, what: &str, value: f32, max: f32) -> Result<()> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(PsycheError::snapshot(
            document,
            format!("{what} = {value} is outside [0, {max}]"),
        ))
    }
}

fn ensure_percent(document: &'static str, what: &str, value: f32) -> Result<()> {
    ensure_in(document, what, value, 100.0)
}

fn ensure_known(document: &'static str, catalog: &EmotionCatalog, name: &str) -> Result<()> {
    if catalog.id_of(name).is_some() {
        Ok(())
    } else {
        Err(PsycheError::snapshot(document, format!("unknown emotion '{name}'")))
    }
}

fn validate_summary(
    document: &'static str,
    catalog: &EmotionCatalog,
    summary: &EmotionalSummary,
) -> Result<()> {
    if summary.primary_emotion != NEUTRAL_PRIMARY {
        ensure_known(document, catalog, &summary.primary_emotion)?;
    }
    for name in &summary.secondary_emotions {
        ensure_known(document, catalog, name)?;
    }
    ensure_percent(document, "primary_intensity", summary.primary_intensity)?;
    ensure_percent(document, "arousal", summary.arousal)?;
    ensure_percent(document, "valence", summary.valence)?;
    ensure_percent(document, "coherence", summary.coherence)?;
    ensure_percent(document, "stability", summary.stability)
}

// ---------------------------------------------------------------------------
// Engine import / export
// ---------------------------------------------------------------------------

impl EmotionEngine {
    /// Export the history ring.
    #[must_use]
    pub fn export_history(&self) -> HistorySnapshot {
        HistorySnapshot {
            version: SNAPSHOT_VERSION,
            entries: self.history().iter().cloned().collect(),
        }
    }

    /// Export the learning table.
    #[must_use]
    pub fn export_learning(&self) -> LearningSnapshot {
        LearningSnapshot {
            version: SNAPSHOT_VERSION,
            entries: self.learning().entries(),
        }
    }

    /// Export intensities, history and learned weights.
    #[must_use]
    pub fn export_snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            version: SNAPSHOT_VERSION,
            intensities: self
                .tracked()
                .map(|(name, intensity)| IntensityEntry {
                    emotion: name.to_string(),
                    intensity,
                })
                .collect(),
            history: self.export_history(),
            learning: self.export_learning(),
        }
    }

    /// Replace the history ring.
    ///
    /// # Errors
    /// Returns `PsycheError::Snapshot` for a version mismatch, unknown
    /// emotion names or out-of-range scalars.
    pub fn import_history(&mut self, snapshot: &HistorySnapshot) -> Result<()> {
        let history = self.build_history(snapshot)?;
        self.restore_history(history);
        Ok(())
    }

    /// Replace the learning table.
    ///
    /// # Errors
    /// Returns `PsycheError::Snapshot` for a version mismatch, unknown
    /// emotion names, empty words or out-of-range weights.
    pub fn import_learning(&mut self, snapshot: &LearningSnapshot) -> Result<()> {
        let learning = self.build_learning(snapshot)?;
        self.restore_learning(learning);
        Ok(())
    }

    /// Replace intensities, history and learned weights.
    ///
    /// # Errors
    /// Returns `PsycheError::Snapshot` if any part fails validation; the
    /// engine is left unchanged in that case.
    pub fn import_snapshot(&mut self, snapshot: &EngineSnapshot) -> Result<()> {
        const DOC: &str = EngineSnapshot::DOCUMENT;
        ensure_version(DOC, snapshot.version)?;

        let catalog = self.catalog();
        let mut state = EmotionState::new();
        for entry in &snapshot.intensities {
            let Some(id) = catalog.id_of(&entry.emotion) else {
                return Err(PsycheError::snapshot(
                    DOC,
                    format!("unknown emotion '{}'", entry.emotion),
                ));
            };
            if state.contains(id) {
                return Err(PsycheError::snapshot(
                    DOC,
                    format!("duplicate emotion '{}'", entry.emotion),
                ));
            }
            ensure_percent(DOC, &entry.emotion, entry.intensity)?;
            state.insert(id, entry.intensity);
        }
        let history = self.build_history(&snapshot.history)?;
        let learning = self.build_learning(&snapshot.learning)?;

        let dropped = state.settle(self.config().intensity_floor);
        if dropped > 0 {
            warn!(dropped, "Dropped imported intensities below the floor");
        }
        info!(
            tracked = state.len(),
            history = history.len(),
            learned = learning.len(),
            "Imported engine snapshot"
        );
        self.restore_state(state);
        self.restore_history(history);
        self.restore_learning(learning);
        Ok(())
    }

    fn build_history(&self, snapshot: &HistorySnapshot) -> Result<EmotionalHistory> {
        const DOC: &str = HistorySnapshot::DOCUMENT;
        ensure_version(DOC, snapshot.version)?;
        for entry in &snapshot.entries {
            validate_summary(DOC, self.catalog(), &entry.summary)?;
        }

        let mut history = EmotionalHistory::new(self.config().history_capacity);
        let mut trimmed = 0;
        for entry in &snapshot.entries {
            trimmed += history.push(entry.clone());
        }
        if trimmed > 0 {
            warn!(trimmed, capacity = history.capacity(), "Trimmed imported history");
        }
        Ok(history)
    }

    fn build_learning(&self, snapshot: &LearningSnapshot) -> Result<LearningTable> {
        const DOC: &str = LearningSnapshot::DOCUMENT;
        ensure_version(DOC, snapshot.version)?;
        let limits = self.learning_config();
        for entry in &snapshot.entries {
            if entry.word.is_empty() {
                return Err(PsycheError::snapshot(DOC, "empty word"));
            }
            ensure_known(DOC, self.catalog(), &entry.emotion)?;
            ensure_in(DOC, &entry.word, entry.weight, limits.max_weight)?;
        }

        let mut learning = LearningTable::from_entries(snapshot.entries.iter().cloned());
        if learning.len() > limits.max_entries {
            let removed = learning.prune(limits.prune_to);
            warn!(removed, capacity = limits.prune_to, "Trimmed imported learning table");
        }
        Ok(learning)
    }
}

// ---------------------------------------------------------------------------
// Personality import / export
// ---------------------------------------------------------------------------

impl PersonalityCore {
    /// Export one persona's profile.
    #[must_use]
    pub fn export_profile(&self, personality_id: &str) -> Option<ProfileSnapshot> {
        self.profile(personality_id).map(|p| ProfileSnapshot {
            version: SNAPSHOT_VERSION,
            personality_id: p.id().to_string(),
            traits: p.traits,
            consciousness: p.consciousness,
            memories: p.memories.as_slice().to_vec(),
            interactions: p.interactions.iter().cloned().collect(),
        })
    }

    /// Replace one persona's profile.
    ///
    /// # Errors
    /// Returns `PsycheError::Snapshot` for a version mismatch, an unknown
    /// persona id, unknown emotion names or out-of-range scalars.
    pub fn import_profile(&mut self, snapshot: &ProfileSnapshot) -> Result<()> {
        self.validate_profile(snapshot)?;
        self.apply_profile(snapshot);
        info!(personality = %snapshot.personality_id, "Imported profile snapshot");
        Ok(())
    }

    /// Export every profile, the active id and the engine.
    #[must_use]
    pub fn export_snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            version: SNAPSHOT_VERSION,
            active_id: self.active_id().to_string(),
            profiles: self
                .known_personalities()
                .filter_map(|id| self.export_profile(id))
                .collect(),
            engine: self.engine().export_snapshot(),
        }
    }

    /// Replace the whole core. Profiles missing from the document are left
    /// as they are.
    ///
    /// # Errors
    /// Returns `PsycheError::Snapshot` if any part fails validation; the
    /// core is left unchanged in that case.
    pub fn import_snapshot(&mut self, snapshot: &CoreSnapshot) -> Result<()> {
        const DOC: &str = CoreSnapshot::DOCUMENT;
        ensure_version(DOC, snapshot.version)?;
        if self.profile(&snapshot.active_id).is_none() {
            return Err(PsycheError::snapshot(
                DOC,
                format!("unknown personality '{}'", snapshot.active_id),
            ));
        }
        let mut seen = HashSet::new();
        for profile in &snapshot.profiles {
            if !seen.insert(profile.personality_id.as_str()) {
                return Err(PsycheError::snapshot(
                    DOC,
                    format!("duplicate personality '{}'", profile.personality_id),
                ));
            }
            self.validate_profile(profile)?;
        }

        // Engine first: a rejected engine leaves the profiles untouched.
        self.engine_mut().import_snapshot(&snapshot.engine)?;
        for profile in &snapshot.profiles {
            self.apply_profile(profile);
        }
        self.set_active(&snapshot.active_id);
        info!(
            active = %snapshot.active_id,
            profiles = snapshot.profiles.len(),
            "Imported core snapshot"
        );
        Ok(())
    }

    fn validate_profile(&self, snapshot: &ProfileSnapshot) -> Result<()> {
        const DOC: &str = ProfileSnapshot::DOCUMENT;
        ensure_version(DOC, snapshot.version)?;
        if self.profile(&snapshot.personality_id).is_none() {
            return Err(PsycheError::snapshot(
                DOC,
                format!("unknown personality '{}'", snapshot.personality_id),
            ));
        }
        for (label, value) in snapshot.traits.scalars() {
            ensure_percent(DOC, label, value)?;
        }
        for (label, value) in snapshot.consciousness.scalars() {
            ensure_percent(DOC, label, value)?;
        }
        let catalog = self.engine().catalog();
        for memory in &snapshot.memories {
            ensure_percent(DOC, "importance", memory.importance)?;
            validate_summary(DOC, catalog, &memory.emotional_context)?;
        }
        for record in &snapshot.interactions {
            ensure_percent(DOC, "intensity", record.intensity)?;
            for name in &record.detected {
                ensure_known(DOC, catalog, name)?;
            }
        }
        Ok(())
    }

    /// Apply a validated profile snapshot.
    fn apply_profile(&mut self, snapshot: &ProfileSnapshot) {
        let Some(profile) = self.profile_mut(&snapshot.personality_id) else {
            return;
        };
        profile.traits = snapshot.traits;
        profile.consciousness = snapshot.consciousness;

        profile.memories.replace(snapshot.memories.clone());
        let evicted = profile.memories.enforce_capacity();
        if evicted > 0 {
            warn!(
                personality = %snapshot.personality_id,
                evicted,
                "Trimmed imported memories"
            );
        }

        let mut interactions = InteractionLog::new(profile.interactions.capacity());
        for record in &snapshot.interactions {
            interactions.push(record.clone());
        }
        let trimmed = snapshot.interactions.len() - interactions.len();
        if trimmed > 0 {
            warn!(
                personality = %snapshot.personality_id,
                trimmed,
                "Trimmed imported interactions"
            );
        }
        profile.interactions = interactions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PsycheConfig;

    fn engine() -> EmotionEngine {
        let mut engine = EmotionEngine::new(&PsycheConfig::default());
        engine.process(&["happiness", "curiosity"], 60.0, "sunny morning walk");
        engine.process(&["gratitude"], 40.0, "thank you kindly");
        engine
    }

    #[test]
    fn engine_snapshot_round_trips_through_json() {
        let source = engine();
        let json = to_json(&source.export_snapshot()).expect("encode");
        let decoded: EngineSnapshot = from_json(&json).expect("decode");

        let mut target = EmotionEngine::new(&PsycheConfig::default());
        target.import_snapshot(&decoded).expect("import");
        assert_eq!(target.export_snapshot(), source.export_snapshot());
        assert_eq!(target.summarize(), source.summarize());
    }

    #[test]
    fn engine_snapshot_round_trips_through_msgpack() {
        let source = engine();
        let bytes = to_msgpack(&source.export_snapshot()).expect("encode");
        let decoded: EngineSnapshot = from_msgpack(&bytes).expect("decode");
        assert_eq!(decoded, source.export_snapshot());
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let mut snapshot = engine().export_snapshot();
        snapshot.version = 99;
        let json = to_json(&snapshot).expect("encode");
        let err = from_json::<EngineSnapshot>(&json).expect_err("bad version");
        assert!(matches!(err, PsycheError::Snapshot { document: "engine", .. }));

        let mut target = EmotionEngine::new(&PsycheConfig::default());
        assert!(target.import_snapshot(&snapshot).is_err());
    }

    #[test]
    fn unknown_emotion_is_rejected_and_state_kept() {
        let mut target = engine();
        let before = target.export_snapshot();

        let mut snapshot = before.clone();
        snapshot.intensities.push(IntensityEntry {
            emotion: "schmappiness".to_string(),
            intensity: 50.0,
        });
        assert!(target.import_snapshot(&snapshot).is_err());
        assert_eq!(target.export_snapshot(), before);
    }

    #[test]
    fn non_finite_intensity_is_rejected() {
        let mut snapshot = engine().export_snapshot();
        snapshot.intensities[0].intensity = f32::NAN;
        let mut target = EmotionEngine::new(&PsycheConfig::default());
        let err = target.import_snapshot(&snapshot).expect_err("NaN");
        assert!(matches!(err, PsycheError::Snapshot { .. }));
    }

    #[test]
    fn out_of_range_learning_weight_is_rejected() {
        let mut snapshot = engine().export_learning();
        snapshot.entries[0].weight = 3.0;
        let mut target = EmotionEngine::new(&PsycheConfig::default());
        assert!(target.import_learning(&snapshot).is_err());
        assert!(target.learning().is_empty());
    }

    #[test]
    fn oversized_history_is_trimmed_oldest_first() {
        let mut source = EmotionEngine::new(&PsycheConfig::default());
        for _ in 0..10 {
            source.process(&["calm"], 30.0, "");
        }
        let snapshot = source.export_history();

        let mut config = PsycheConfig::default();
        config.emotion.history_capacity = 4;
        let mut target = EmotionEngine::new(&config);
        target.import_history(&snapshot).expect("import");
        assert_eq!(target.history().len(), 4);
        assert_eq!(target.history().latest(), snapshot.entries.last());
    }

    #[test]
    fn custom_catalog_engine_round_trips() {
        use std::sync::Arc;

        use crate::catalog::EmotionDefinition;
        use crate::types::{EmotionCategory, EmotionId};

        let def = |name: &str, trigger: &str, conflict: &str| EmotionDefinition {
            id: EmotionId(0),
            name: name.to_string(),
            category: EmotionCategory::Core,
            triggers: vec![trigger.to_string()],
            conflicts_with: vec![conflict.to_string()],
            enhances: Vec::new(),
            decay_rate: 0.8,
            resonance_freq: 1.0,
        };
        let catalog = Arc::new(
            EmotionCatalog::from_definitions(vec![
                def("sunny", "sun", "gloomy"),
                def("gloomy", "rain", "sunny"),
            ])
            .expect("valid catalog"),
        );
        let config = PsycheConfig::default();

        let mut source = EmotionEngine::with_catalog(Arc::clone(&catalog), &config);
        let none: [&str; 0] = [];
        source.process(&none, 60.0, "");
        source.process(&["sunny"], 60.0, "sun is out");
        assert_eq!(source.history().iter().next().map(|e| e.summary.primary_emotion.as_str()), Some("calm"));

        let json = to_json(&source.export_snapshot()).expect("encode");
        let decoded: EngineSnapshot = from_json(&json).expect("decode");
        let mut target = EmotionEngine::with_catalog(catalog, &config);
        target.import_snapshot(&decoded).expect("neutral history entries import");
        assert_eq!(target.export_snapshot(), source.export_snapshot());
    }

    #[test]
    fn oversized_learning_table_is_pruned_like_runtime() {
        let snapshot = LearningSnapshot {
            version: SNAPSHOT_VERSION,
            entries: (0..1200u16)
                .map(|i| LearnedWeight {
                    word: format!("word{i}"),
                    emotion: "calm".to_string(),
                    weight: f32::from(i % 10 + 1) / 10.0,
                })
                .collect(),
        };
        let mut target = EmotionEngine::new(&PsycheConfig::default());
        target.import_learning(&snapshot).expect("import");
        assert_eq!(target.learning().len(), 800);
        assert!(target.learning().weight("word9", "calm") > 0.99);
    }

    #[test]
    fn malformed_bytes_are_serialization_errors() {
        let err = from_json::<EngineSnapshot>("{not json").expect_err("garbage");
        assert!(matches!(err, PsycheError::Serialization(_)));
        let err = from_msgpack::<EngineSnapshot>(&[0xc1, 0x00]).expect_err("garbage");
        assert!(matches!(err, PsycheError::Serialization(_)));
    }

    #[test]
    fn core_snapshot_round_trips() {
        let mut source = PersonalityCore::new(&PsycheConfig::default());
        source.process_conversation("I'm so happy!", "Me too!", "");
        source.activate("sage");
        source.process_conversation("Why does rain fall?", "Condensation.", "");

        let bytes = to_msgpack(&source.export_snapshot()).expect("encode");
        let decoded: CoreSnapshot = from_msgpack(&bytes).expect("decode");

        let mut target = PersonalityCore::new(&PsycheConfig::default());
        target.import_snapshot(&decoded).expect("import");
        assert_eq!(target.active_id(), "sage");
        assert_eq!(target.export_snapshot(), source.export_snapshot());
        assert_eq!(target.build_prompt_context(), source.build_prompt_context());
    }

    #[test]
    fn unknown_personality_is_rejected() {
        let mut core = PersonalityCore::new(&PsycheConfig::default());
        let mut profile = core.export_profile("nova").expect("nova");
        profile.personality_id = "nobody".to_string();
        assert!(core.import_profile(&profile).is_err());

        let mut snapshot = core.export_snapshot();
        snapshot.active_id = "nobody".to_string();
        assert!(core.import_snapshot(&snapshot).is_err());
    }

    #[test]
    fn out_of_range_trait_is_rejected() {
        let mut core = PersonalityCore::new(&PsycheConfig::default());
        let mut profile = core.export_profile("sage").expect("sage");
        profile.traits.empathy = 140.0;
        assert!(core.import_profile(&profile).is_err());
        assert_eq!(core.profile("sage").map(|p| p.traits().empathy), Some(85.0));
    }

    #[test]
    fn oversized_memories_are_evicted_on_import() {
        let mut core = PersonalityCore::new(&PsycheConfig::default());
        core.process_conversation("hello there", "hi", "");
        let mut profile = core.export_profile("nova").expect("nova");
        let template = profile.memories[0].clone();
        profile.memories = (0..150).map(|_| template.clone()).collect();

        core.import_profile(&profile).expect("import");
        assert_eq!(core.active_profile().memories().len(), 80);
    }
}
