//! # Practice Configuration
//!
//! YAML practice-session files, e.g.:
//!
//! ```yaml
//! mode: dorian
//! starting-note: A
//! bpm: 90
//! beats: 32
//! ```
//!
//! `beats` is optional and only bounds how long the command-line host runs;
//! the library itself plays until stopped.

use serde::Deserialize;

use crate::error::ModalError;

/// Default number of post-count-in beats the binary plays.
pub const DEFAULT_BEATS: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PracticeConfig {
    /// One of the seven mode names (case-insensitive).
    pub mode: String,
    /// Bare starting letter, A-G.
    pub starting_note: String,
    /// Tempo in beats per minute.
    pub bpm: u16,
    /// How many musical beats the host should run before stopping.
    #[serde(default)]
    pub beats: Option<u32>,
}

impl PracticeConfig {
    /// Parse a YAML practice config.
    pub fn from_yaml(source: &str) -> Result<PracticeConfig, ModalError> {
        serde_yaml::from_str(source).map_err(|e| ModalError::Config(e.to_string()))
    }
}
