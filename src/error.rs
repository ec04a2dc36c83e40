//! # Error Types
//!
//! Failures all live at the API boundary: resolving user-supplied names,
//! validating a tempo, parsing a config file. The theory core (pitch
//! arithmetic, mode rotation, scale generation) is pure and infallible, and a
//! missing catalog entry during playback is a silent skip rather than an
//! error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModalError {
    /// The mode name is not one of the seven catalog entries.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// The starting note is not a bare letter A-G.
    #[error("Unknown starting note: {0}")]
    UnknownNote(String),

    /// Tempo must be a positive number of beats per minute.
    #[error("Invalid tempo: {0} bpm")]
    InvalidTempo(u16),

    /// Playback was started before any scale was selected.
    #[error("No scale selected; call update_mode first")]
    NoScale,

    /// The practice configuration file could not be parsed.
    #[error("Invalid config: {0}")]
    Config(String),
}
