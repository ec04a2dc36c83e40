//! # Playback
//!
//! Metronome-paced traversal of the active scale.
//!
//! [`Player`] owns the [`PlaybackState`] record (active sequence, cursor,
//! direction, metronome handle) and is its only mutator. One `play()` call
//! starts a count-in metronome; every beat after the count-in strikes the
//! note under the cursor, shows its raw spelling, and moves the cursor one
//! place, bouncing at both ends of the 18-note run. The traversal is
//! palindromic and endless, turning around at each endpoint, and playback
//! runs until `stop()`.
//!
//! ## Sub-modules
//! - `types` - [`PlaybackState`], [`Direction`], and the [`AudioSink`] /
//!   [`NoteDisplay`] host interfaces
//! - `sequencer` - the [`Player`] itself

pub mod sequencer;
pub mod types;


pub use sequencer::Player;
pub use types::{AudioSink, Direction, NoteDisplay, PlaybackState};
