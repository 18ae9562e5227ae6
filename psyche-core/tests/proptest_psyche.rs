//! Property-Based Tests for PSYCHE Core
//!
//! Uses `proptest` to check the emotional-state invariants under random
//! call sequences: bounded intensities, strictly shrinking decay, conflict
//! suppression, pure summaries and bounded collections.

use proptest::prelude::*;

use psyche_core::catalog::EmotionCatalog;
use psyche_core::config::PsycheConfig;
use psyche_core::engine::EmotionEngine;
use psyche_core::mood::EmotionalSummary;
use psyche_core::personality::PersonalityCore;
use psyche_core::types::clamp_percent;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_emotion() -> impl Strategy<Value = String> {
    let names: Vec<String> = EmotionCatalog::builtin()
        .all()
        .map(|d| d.name.clone())
        .collect();
    prop::sample::select(names)
}

/// Mostly catalog names, occasionally garbage.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => arb_emotion(),
        1 => "[a-z]{4,10}",
    ]
}

/// One `process` call: detected names plus base intensity.
fn arb_call() -> impl Strategy<Value = (Vec<String>, f32)> {
    (prop::collection::vec(arb_name(), 0..5), -50.0..200.0f32)
}

/// `(a, b)` where `a` lists `b` as a conflict.
fn arb_conflict_pair() -> impl Strategy<Value = (String, String)> {
    let catalog = EmotionCatalog::builtin();
    let pairs: Vec<(String, String)> = catalog
        .all()
        .flat_map(|d| {
            catalog
                .conflicts_of(d.id)
                .iter()
                .map(|&c| (d.name.clone(), catalog.name(c).to_string()))
                .collect::<Vec<_>>()
        })
        .collect();
    prop::sample::select(pairs)
}

fn engine() -> EmotionEngine {
    EmotionEngine::new(&PsycheConfig::default())
}

// ---------------------------------------------------------------------------
// Property: intensities stay within [floor, 100]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn intensities_always_bounded(calls in prop::collection::vec(arb_call(), 1..30)) {
        let mut engine = engine();
        for (names, base) in &calls {
            engine.process(names, *base, "");
            for (name, v) in engine.tracked() {
                prop_assert!((5.0..=100.0).contains(&v), "{name} = {v}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: decay-only calls strictly shrink and never add emotions
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decay_only_strictly_shrinks(calls in prop::collection::vec(arb_call(), 1..10), ticks in 1..20usize) {
        let mut engine = engine();
        for (names, base) in &calls {
            engine.process(names, *base, "");
        }
        let none: [&str; 0] = [];
        for _ in 0..ticks {
            let before: Vec<(String, f32)> = engine
                .tracked()
                .map(|(n, v)| (n.to_string(), v))
                .collect();
            engine.process(&none, 60.0, "");
            prop_assert!(engine.tracked().count() <= before.len());
            for (name, v) in engine.tracked() {
                let old = before.iter().find(|(n, _)| n == name).map(|(_, v)| *v);
                prop_assert!(old.is_some(), "{name} appeared during decay");
                prop_assert!(v < old.unwrap_or(0.0), "{name}: {v} did not shrink");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: detecting A suppresses a conflicting tracked B
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn conflict_suppresses_tracked_target(
        (a, b) in arb_conflict_pair(),
        b_base in 10.0..100.0f32,
        a_base in 10.0..100.0f32,
        a_first in any::<bool>(),
    ) {
        let mut engine = engine();
        engine.process(&[b.as_str()], b_base, "");
        if a_first {
            engine.process(&[a.as_str()], a_base, "");
        }
        let Some(b_pre) = engine.intensity(&b) else {
            return Ok(());
        };
        let decay = engine.catalog().lookup(&b).map_or(1.0, |d| d.decay_rate);

        engine.process(&[a.as_str()], a_base, "");
        let b_post = engine.intensity(&b).unwrap_or(0.0);
        prop_assert!(b_post <= b_pre * decay * 0.7 + 1e-3, "{a} vs {b}: {b_pre} -> {b_post}");
    }
}

// ---------------------------------------------------------------------------
// Property: summaries are pure and neutral on an empty state
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn summarize_is_idempotent(calls in prop::collection::vec(arb_call(), 0..15)) {
        let mut engine = engine();
        for (names, base) in &calls {
            engine.process(names, *base, "");
        }
        let first = engine.summarize();
        prop_assert_eq!(&first, &engine.summarize());
        for v in [first.arousal, first.valence, first.coherence, first.stability] {
            prop_assert!((0.0..=100.0).contains(&v));
        }
        prop_assert!(first.secondary_emotions.len() <= 2);
    }

    #[test]
    fn reset_state_summarizes_neutral(calls in prop::collection::vec(arb_call(), 0..10)) {
        let mut engine = engine();
        for (names, base) in &calls {
            engine.process(names, *base, "");
        }
        engine.reset();
        prop_assert_eq!(engine.summarize(), EmotionalSummary::neutral());
    }
}

// ---------------------------------------------------------------------------
// Property: history and learning stay bounded
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn collections_stay_bounded(
        texts in prop::collection::vec(prop::collection::vec("[a-z]{3,9}", 1..40), 1..80),
        emotion in arb_emotion(),
    ) {
        let mut engine = engine();
        for words in &texts {
            engine.process(&[emotion.as_str()], 50.0, &words.join(" "));
            prop_assert!(engine.history().len() <= 50);
            prop_assert!(engine.learning().len() <= 1000);
        }
    }

    #[test]
    fn memories_stay_bounded(turns in 95..130usize) {
        let mut core = PersonalityCore::new(&PsycheConfig::default());
        for i in 0..turns {
            let outcome = core.process_conversation(&format!("message {i}"), "reply", "");
            let len = core.active_profile().memories().len();
            prop_assert!(len <= 100);
            if outcome.evicted > 0 {
                prop_assert_eq!(len, 80);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: clamp_percent always lands in [0, 100]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clamp_percent_bounds(v in any::<f32>()) {
        let c = clamp_percent(v);
        prop_assert!((0.0..=100.0).contains(&c));
    }
}
