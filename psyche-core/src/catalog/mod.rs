//! Emotion Catalog — the static knowledge base of named emotions.
//!
//! The catalog is an arena of [`EmotionDefinition`]s plus a name → id index.
//! Conflict and enhancement relationships are resolved once into adjacency
//! lists of [`EmotionId`]s, so the (possibly cyclic, possibly asymmetric)
//! relationship graph never holds references into itself.
//!
//! The built-in catalog is built lazily on first use and shared read-only
//! via [`EmotionCatalog::builtin`].

mod builtin;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PsycheError, Result};
use crate::types::{EmotionCategory, EmotionId};

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionDefinition {
    /// Stable arena index (assigned from position when the catalog is built).
    pub id: EmotionId,
    /// Unique lookup key.
    pub name: String,
    /// Broad family.
    pub category: EmotionCategory,
    /// Lowercase keyword/phrase fragments, as authored (duplicates preserved).
    pub triggers: Vec<String>,
    /// Emotions this one suppresses when (re)detected.
    pub conflicts_with: Vec<String>,
    /// Emotions this one amplifies when (re)detected.
    pub enhances: Vec<String>,
    /// Multiplicative retention per decay tick, in (0, 1].
    pub decay_rate: f32,
    /// Relative base frequency, for analytics only.
    pub resonance_freq: f32,
}

/// Read-only emotion knowledge base.
#[derive(Debug, Clone)]
pub struct EmotionCatalog {
    entries: Vec<EmotionDefinition>,
    by_name: HashMap<String, EmotionId>,
    conflicts: Vec<Vec<EmotionId>>,
    enhances: Vec<Vec<EmotionId>>,
}

static BUILTIN: LazyLock<Arc<EmotionCatalog>> = LazyLock::new(|| {
    let defs = builtin::SEEDS
        .iter()
        .map(|s| EmotionDefinition {
            id: EmotionId(0),
            name: s.name.to_string(),
            category: s.category,
            triggers: s.triggers.iter().map(|t| (*t).to_string()).collect(),
            conflicts_with: s.conflicts.iter().map(|t| (*t).to_string()).collect(),
            enhances: s.enhances.iter().map(|t| (*t).to_string()).collect(),
            decay_rate: s.decay,
            resonance_freq: s.freq,
        })
        .collect();
    Arc::new(EmotionCatalog::assemble(defs))
});

impl EmotionCatalog {
    /// The shared built-in catalog (~100 emotions).
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build a custom catalog, validating it first.
    ///
    /// Ids are reassigned from position; triggers are lowercased.
    ///
    /// # Errors
    /// Returns `PsycheError::Config` on duplicate or empty names, a decay
    /// rate outside (0, 1], more than `u16::MAX` entries, or a relationship
    /// naming an emotion that is not in the list.
    pub fn from_definitions(mut defs: Vec<EmotionDefinition>) -> Result<Self> {
        if defs.len() > usize::from(u16::MAX) {
            return Err(PsycheError::Config(format!(
                "catalog has {} entries (max {})",
                defs.len(),
                u16::MAX
            )));
        }

        let mut seen = HashSet::with_capacity(defs.len());
        for def in &defs {
            if def.name.trim().is_empty() {
                return Err(PsycheError::Config("emotion with empty name".to_string()));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(PsycheError::Config(format!(
                    "duplicate emotion '{}'",
                    def.name
                )));
            }
            if !(def.decay_rate > 0.0 && def.decay_rate <= 1.0) {
                return Err(PsycheError::Config(format!(
                    "emotion '{}' has decay_rate {} outside (0, 1]",
                    def.name, def.decay_rate
                )));
            }
        }
        for def in &defs {
            for target in def.conflicts_with.iter().chain(&def.enhances) {
                if !seen.contains(target.as_str()) {
                    return Err(PsycheError::Config(format!(
                        "emotion '{}' references unknown emotion '{target}'",
                        def.name
                    )));
                }
            }
        }

        for def in &mut defs {
            for trigger in &mut def.triggers {
                *trigger = trigger.to_lowercase();
            }
        }
        Ok(Self::assemble(defs))
    }

    /// Index and resolve relationships. Dangling references are dropped.
    fn assemble(mut entries: Vec<EmotionDefinition>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, def) in entries.iter_mut().enumerate() {
            def.id = EmotionId(u16::try_from(i).unwrap_or(u16::MAX));
            by_name.insert(def.name.clone(), def.id);
        }

        let resolve = |owner: &str, names: &[String]| -> Vec<EmotionId> {
            let mut ids: Vec<EmotionId> = Vec::with_capacity(names.len());
            for name in names {
                match by_name.get(name) {
                    Some(&id) if !ids.contains(&id) => ids.push(id),
                    Some(_) => {}
                    None => warn!(emotion = owner, target = %name, "Dropping dangling emotion reference"),
                }
            }
            ids
        };

        let conflicts = entries
            .iter()
            .map(|d| resolve(&d.name, &d.conflicts_with))
            .collect();
        let enhances = entries
            .iter()
            .map(|d| {
                let mut ids = resolve(&d.name, &d.enhances);
                ids.retain(|&id| id != d.id);
                ids
            })
            .collect();

        Self {
            entries,
            by_name,
            conflicts,
            enhances,
        }
    }

    /// Look up an emotion by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&EmotionDefinition> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Resolve a name to its id.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<EmotionId> {
        self.by_name.get(name).copied()
    }

    /// Look up an emotion by id.
    #[must_use]
    pub fn get(&self, id: EmotionId) -> Option<&EmotionDefinition> {
        self.entries.get(id.index())
    }

    /// Name of an emotion, or `"unknown"` for a foreign id.
    #[must_use]
    pub fn name(&self, id: EmotionId) -> &str {
        self.get(id).map_or("unknown", |d| d.name.as_str())
    }

    /// Decay rate of an emotion; foreign ids decay immediately.
    #[must_use]
    pub fn decay_rate(&self, id: EmotionId) -> f32 {
        self.get(id).map_or(0.0, |d| d.decay_rate)
    }

    /// Resolved conflict targets of `id`.
    #[must_use]
    pub fn conflicts_of(&self, id: EmotionId) -> &[EmotionId] {
        self.conflicts.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Resolved enhancement targets of `id` (never includes `id` itself).
    #[must_use]
    pub fn enhances_of(&self, id: EmotionId) -> &[EmotionId] {
        self.enhances.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Whether either emotion lists the other as a conflict.
    #[must_use]
    pub fn in_conflict(&self, a: EmotionId, b: EmotionId) -> bool {
        self.conflicts_of(a).contains(&b) || self.conflicts_of(b).contains(&a)
    }

    /// Iterate over all entries in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &EmotionDefinition> {
        self.entries.iter()
    }

    /// Iterate over the entries of one category.
    pub fn by_category(
        &self,
        category: EmotionCategory,
    ) -> impl Iterator<Item = &EmotionDefinition> {
        self.entries.iter().filter(move |d| d.category == category)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, conflicts: &[&str], enhances: &[&str]) -> EmotionDefinition {
        EmotionDefinition {
            id: EmotionId(0),
            name: name.to_string(),
            category: EmotionCategory::Core,
            triggers: vec![name.to_uppercase()],
            conflicts_with: conflicts.iter().map(|s| (*s).to_string()).collect(),
            enhances: enhances.iter().map(|s| (*s).to_string()).collect(),
            decay_rate: 0.9,
            resonance_freq: 1.0,
        }
    }

    #[test]
    fn builtin_has_about_a_hundred_entries_in_every_category() {
        let catalog = EmotionCatalog::builtin();
        assert_eq!(catalog.len(), 100);
        for category in EmotionCategory::ALL {
            assert!(
                catalog.by_category(category).count() >= 10,
                "category {category} is underpopulated"
            );
        }
    }

    #[test]
    fn builtin_relationships_all_resolve() {
        let catalog = EmotionCatalog::builtin();
        for d in catalog.all() {
            assert_eq!(catalog.conflicts_of(d.id).len(), d.conflicts_with.len(), "{}", d.name);
            assert_eq!(catalog.enhances_of(d.id).len(), d.enhances.len(), "{}", d.name);
        }
    }

    #[test]
    fn builtin_never_conflicts_and_enhances_the_same_target() {
        let catalog = EmotionCatalog::builtin();
        for d in catalog.all() {
            for c in catalog.conflicts_of(d.id) {
                assert!(
                    !catalog.enhances_of(d.id).contains(c),
                    "{} both conflicts with and enhances {}",
                    d.name,
                    catalog.name(*c)
                );
            }
        }
    }

    #[test]
    fn builtin_decay_rates_always_shrink() {
        for d in EmotionCatalog::builtin().all() {
            assert!(d.decay_rate > 0.0 && d.decay_rate < 1.0, "{}", d.name);
        }
    }

    #[test]
    fn lookup_and_ids_agree() {
        let catalog = EmotionCatalog::builtin();
        let happiness = catalog.lookup("happiness").expect("happiness exists");
        assert_eq!(catalog.id_of("happiness"), Some(happiness.id));
        assert_eq!(catalog.get(happiness.id), Some(happiness));
        assert!(catalog.lookup("schmappiness").is_none());
    }

    #[test]
    fn asymmetric_conflicts_are_preserved() {
        let catalog = EmotionCatalog::builtin();
        let malice = catalog.id_of("malice").expect("malice");
        let love = catalog.id_of("love").expect("love");
        assert!(catalog.conflicts_of(malice).contains(&love));
        assert!(!catalog.conflicts_of(love).contains(&malice));
        assert!(catalog.in_conflict(love, malice));
    }

    #[test]
    fn custom_catalog_rejects_dangling_reference() {
        let err = EmotionCatalog::from_definitions(vec![def("joy", &["gloom"], &[])])
            .expect_err("gloom is unknown");
        assert!(matches!(err, PsycheError::Config(_)));
    }

    #[test]
    fn custom_catalog_rejects_duplicates_and_bad_decay() {
        assert!(EmotionCatalog::from_definitions(vec![def("joy", &[], &[]), def("joy", &[], &[])]).is_err());

        let mut bad = def("joy", &[], &[]);
        bad.decay_rate = 1.5;
        assert!(EmotionCatalog::from_definitions(vec![bad]).is_err());
    }

    #[test]
    fn custom_catalog_reassigns_ids_and_lowercases_triggers() {
        let catalog = EmotionCatalog::from_definitions(vec![
            def("joy", &["gloom"], &["joy"]),
            def("gloom", &["joy"], &[]),
        ])
        .expect("valid");
        let gloom = catalog.lookup("gloom").expect("gloom");
        assert_eq!(gloom.id, EmotionId(1));
        assert_eq!(gloom.triggers, vec!["gloom".to_string()]);
        let joy = catalog.id_of("joy").expect("joy");
        assert!(catalog.enhances_of(joy).is_empty(), "self-enhancement is dropped");
    }
}
