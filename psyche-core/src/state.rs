//! Emotion State — bounded emotion → intensity mapping.

use std::collections::BTreeMap;

use crate::catalog::EmotionCatalog;
use crate::types::{EmotionId, clamp_percent};

/// Current intensities keyed by catalog id. Iteration follows catalog order.
///
/// Values are kept in `[0, 100]`; [`EmotionState::insert`] clamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionState {
    intensities: BTreeMap<EmotionId, f32>,
}

impl EmotionState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity of a tracked emotion.
    #[must_use]
    pub fn get(&self, id: EmotionId) -> Option<f32> {
        self.intensities.get(&id).copied()
    }

    /// Whether an emotion is tracked.
    #[must_use]
    pub fn contains(&self, id: EmotionId) -> bool {
        self.intensities.contains_key(&id)
    }

    /// Set an intensity, clamped to `[0, 100]`.
    pub fn insert(&mut self, id: EmotionId, intensity: f32) {
        self.intensities.insert(id, clamp_percent(intensity));
    }

    /// Multiply a tracked intensity by `factor`. Returns the new value, or
    /// `None` when the emotion is not tracked. Not clamped.
    pub(crate) fn scale(&mut self, id: EmotionId, factor: f32) -> Option<f32> {
        self.intensities.get_mut(&id).map(|v| {
            *v *= factor;
            *v
        })
    }

    /// Stop tracking an emotion.
    pub fn remove(&mut self, id: EmotionId) -> Option<f32> {
        self.intensities.remove(&id)
    }

    /// Number of tracked emotions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    /// Whether nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// `(id, intensity)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionId, f32)> + '_ {
        self.intensities.iter().map(|(&id, &v)| (id, v))
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.intensities.clear();
    }

    /// Apply one decay tick using each emotion's catalog rate.
    pub fn decay(&mut self, catalog: &EmotionCatalog) {
        for (&id, v) in &mut self.intensities {
            *v *= catalog.decay_rate(id);
        }
    }

    /// Clamp every intensity, then drop those below `floor`.
    ///
    /// Returns how many emotions were dropped.
    pub fn settle(&mut self, floor: f32) -> usize {
        let before = self.intensities.len();
        self.intensities.retain(|_, v| {
            *v = clamp_percent(*v);
            *v >= floor
        });
        before - self.intensities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_clamps() {
        let mut state = EmotionState::new();
        state.insert(EmotionId(0), 150.0);
        state.insert(EmotionId(1), -3.0);
        assert_eq!(state.get(EmotionId(0)), Some(100.0));
        assert_eq!(state.get(EmotionId(1)), Some(0.0));
    }

    #[test]
    fn decay_uses_catalog_rates() {
        let catalog = EmotionCatalog::builtin();
        let id = catalog.id_of("happiness").expect("happiness");
        let mut state = EmotionState::new();
        state.insert(id, 50.0);
        state.decay(&catalog);
        let expected = 50.0 * catalog.decay_rate(id);
        assert!((state.get(id).unwrap_or_default() - expected).abs() < 1e-4);
    }

    #[test]
    fn settle_clamps_and_drops_faint_entries() {
        let mut state = EmotionState::new();
        state.insert(EmotionId(0), 90.0);
        state.insert(EmotionId(1), 4.9);
        state.insert(EmotionId(2), 5.0);
        state.scale(EmotionId(0), 1.5);

        assert_eq!(state.settle(5.0), 1);
        assert_eq!(state.get(EmotionId(0)), Some(100.0));
        assert!(!state.contains(EmotionId(1)));
        assert!(state.contains(EmotionId(2)));
    }

    #[test]
    fn scale_ignores_untracked() {
        let mut state = EmotionState::new();
        assert_eq!(state.scale(EmotionId(7), 2.0), None);
        assert!(state.is_empty());
    }
}
