//! Playback state and sink interfaces.
//!
//! The sinks are the system's only outward edges: an audio capability that
//! plays preloaded samples by canonical pitch, and a display that shows the
//! current note and the notes-line preview. Hosts implement both; the
//! sequencer drives them.

use crate::pitch::CanonicalPitch;
use crate::scale::ScaleSequence;
use crate::timer::StopHandle;

/// Traversal direction through the scale sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Everything the sequencer mutates: the active sequence, the cursor into it,
/// the traversal direction, and the metronome handle while playing.
///
/// Mutated only inside `play`/`stop`/tick handlers; the single-threaded event
/// loop serializes all access.
#[derive(Debug)]
pub struct PlaybackState {
    pub sequence: Option<ScaleSequence>,
    pub index: usize,
    pub direction: Direction,
    pub handle: Option<StopHandle>,
}

impl PlaybackState {
    pub fn new() -> PlaybackState {
        PlaybackState {
            sequence: None,
            index: 0,
            direction: Direction::Ascending,
            handle: None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState::new()
    }
}

/// Audio capability over the preloaded sample catalog.
pub trait AudioSink {
    /// Start the sample for `key`.
    fn play(&self, key: CanonicalPitch);

    /// Pause the sample for `key` and rewind it to the start. Must be
    /// harmless when the sample is not playing (stale note-stop gates fire
    /// after stop).
    fn stop_and_reset(&self, key: CanonicalPitch);

    /// Sound the metronome click.
    fn play_click(&self);
}

/// Display surface for the current note and the notes-line preview.
pub trait NoteDisplay {
    /// Show the raw, uncanonicalized spelling of the note being struck
    /// (letter + sharps + octave, no separators).
    fn set_current(&self, text: &str);

    /// Blank the current-note display.
    fn clear_current(&self);

    /// Show the notes-line preview (space-separated letters, octaves
    /// stripped).
    fn set_notes_line(&self, text: &str);
}
