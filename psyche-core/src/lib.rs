//! # PSYCHE Core Library
//!
//! Emotion and personality simulation for roleplayed AI personas.
//!
//! Free text goes in; a ranked emotion list, a renderable mood summary and a
//! prompt-context block come out:
//!
//! - **Catalog** — ~100 named emotions with triggers, conflicts, enhancements
//!   and decay rates
//! - **Detector** — keyword and punctuation heuristics plus learned word weights
//! - **Engine** — a bounded, decaying state where emotions suppress and
//!   amplify each other
//! - **Mood** — discrete mood plus arousal, valence, coherence and stability
//! - **Personality** — persona traits that drift with interaction history,
//!   a scored memory log and the prompt builder
//! - **Snapshots** — JSON / MessagePack documents for external persistence
//!
//! Everything is synchronous and call-driven. One core per session; hosts
//! serialize access.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod history;
pub mod learning;
pub mod mood;
pub mod personality;
pub mod prompt;
pub mod snapshot;
pub mod state;
pub mod types;

pub use catalog::{EmotionCatalog, EmotionDefinition};
pub use config::PsycheConfig;
pub use detector::EmotionDetector;
pub use engine::EmotionEngine;
pub use error::PsycheError;
pub use history::{EmotionalHistory, EmotionalHistoryEntry};
pub use learning::LearningTable;
pub use mood::EmotionalSummary;
pub use personality::{InteractionOutcome, PersonalityCore, PersonalityProfile};
pub use state::EmotionState;
pub use types::*;
