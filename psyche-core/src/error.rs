//! Error types for the PSYCHE core library.
//!
//! Lookup misses and bounds violations never surface here: they are skipped,
//! clamped or evicted in place. Only configuration problems and malformed
//! snapshots reach the caller.

use thiserror::Error;

/// Top-level error type for all PSYCHE operations.
#[derive(Error, Debug)]
pub enum PsycheError {
    /// A snapshot document decoded but failed validation.
    #[error("Malformed snapshot ({document}): {reason}")]
    Snapshot {
        /// Which document kind was being imported.
        document: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid TOML, inconsistent limits, bad catalog).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PsycheError {
    /// Shorthand for a [`PsycheError::Snapshot`] error.
    pub(crate) fn snapshot(document: &'static str, reason: impl Into<String>) -> Self {
        Self::Snapshot {
            document,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PsycheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<rmp_serde::encode::Error> for PsycheError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for PsycheError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PsycheError>;
