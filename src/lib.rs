pub mod catalog;
pub mod config;
pub mod error;
pub mod metronome;
pub mod mode;
pub mod pitch;
pub mod playback;
pub mod scale;
pub mod timer;

pub use catalog::AudioCatalog;
pub use config::PracticeConfig;
pub use error::ModalError;
pub use mode::{Mode, ModePattern, IONIAN_PATTERN};
pub use pitch::{CanonicalPitch, Letter, Pitch, Step};
pub use playback::{AudioSink, NoteDisplay, Player};
pub use scale::{starting_octave, ScaleSequence, NOTE_COUNT};
pub use timer::{EventLoop, StopHandle, Timer};

/// Generate the 18-note practice run for a mode name and starting note.
/// This is the pure half of the pipeline; feed the result to a
/// [`Player`] for metronome-paced playback.
///
/// ```rust
/// let seq = modal::scale_for("ionian", "C")?;
/// assert_eq!(seq.preview_line(), "C D E F G A B C");
/// # Ok::<(), modal::ModalError>(())
/// ```
pub fn scale_for(mode_name: &str, starting_note: &str) -> Result<ScaleSequence, ModalError> {
    let mode =
        Mode::from_name(mode_name).ok_or_else(|| ModalError::UnknownMode(mode_name.to_string()))?;
    let letter = Letter::from_name(starting_note)
        .ok_or_else(|| ModalError::UnknownNote(starting_note.to_string()))?;
    Ok(ScaleSequence::generate(
        mode.pattern(),
        letter,
        starting_octave(letter),
    ))
}
