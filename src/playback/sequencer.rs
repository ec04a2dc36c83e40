//! The playback sequencer: walks the active scale up and down against the
//! metronome, one note per beat, until stopped.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::catalog::AudioCatalog;
use crate::error::ModalError;
use crate::metronome;
use crate::mode::Mode;
use crate::pitch::Letter;
use crate::scale::{starting_octave, ScaleSequence};
use crate::timer::Timer;

use super::types::{AudioSink, Direction, NoteDisplay, PlaybackState};

/// Flat note gate: every note sounds for half a beat, 60000/(bpm*2) ms.
fn note_gate(bpm: u16) -> Duration {
    Duration::from_secs_f64(30.0 / bpm as f64)
}

/// Flip direction at the endpoints, then move the cursor one place. The
/// turnaround happens after the endpoint is struck, so the top and bottom
/// notes each sound once per pass. Sequences shorter than two notes hold at
/// index 0.
pub(super) fn step_cursor(st: &mut PlaybackState, len: usize) {
    if len < 2 {
        return;
    }
    if st.index == len - 1 {
        st.direction = Direction::Descending;
    } else if st.index == 0 {
        st.direction = Direction::Ascending;
    }
    st.index = match st.direction {
        Direction::Ascending => st.index + 1,
        Direction::Descending => st.index - 1,
    };
}

/// Owns the playback state and drives the sinks.
///
/// Everything is `Rc`-shared because the beat callback outlives the `play`
/// call that creates it; the single-threaded event loop serializes all
/// access, so `RefCell` borrows never overlap.
pub struct Player {
    timer: Rc<dyn Timer>,
    audio: Rc<dyn AudioSink>,
    display: Rc<dyn NoteDisplay>,
    catalog: Rc<AudioCatalog>,
    state: Rc<RefCell<PlaybackState>>,
}

impl Player {
    pub fn new(
        timer: Rc<dyn Timer>,
        audio: Rc<dyn AudioSink>,
        display: Rc<dyn NoteDisplay>,
        catalog: Rc<AudioCatalog>,
    ) -> Player {
        Player {
            timer,
            audio,
            display,
            catalog,
            state: Rc::new(RefCell::new(PlaybackState::new())),
        }
    }

    /// Resolve a mode name and starting note, regenerate the scale, and
    /// publish the notes-line preview. Stops any running playback first.
    pub fn update_mode(&self, mode_name: &str, starting_note: &str) -> Result<(), ModalError> {
        let mode = Mode::from_name(mode_name)
            .ok_or_else(|| ModalError::UnknownMode(mode_name.to_string()))?;
        let letter = Letter::from_name(starting_note)
            .ok_or_else(|| ModalError::UnknownNote(starting_note.to_string()))?;
        self.set_scale(mode, letter);
        Ok(())
    }

    /// Typed variant of [`update_mode`](Player::update_mode).
    pub fn set_scale(&self, mode: Mode, start: Letter) {
        self.stop();
        let sequence = ScaleSequence::generate(mode.pattern(), start, starting_octave(start));
        self.display.set_notes_line(&sequence.preview_line());
        self.state.borrow_mut().sequence = Some(sequence);
    }

    /// Start playback at `bpm`: four count-in clicks, then one note per beat,
    /// ascending to the top of the run and back down, endlessly. Any playback
    /// already running is stopped first.
    pub fn play(&self, bpm: u16) -> Result<(), ModalError> {
        self.stop();
        if bpm == 0 {
            return Err(ModalError::InvalidTempo(bpm));
        }
        {
            let mut st = self.state.borrow_mut();
            if st.sequence.is_none() {
                return Err(ModalError::NoScale);
            }
            st.index = 0;
            st.direction = Direction::Ascending;
        }

        let gate = note_gate(bpm);
        let state = Rc::clone(&self.state);
        let audio = Rc::clone(&self.audio);
        let display = Rc::clone(&self.display);
        let catalog = Rc::clone(&self.catalog);
        let timer = Rc::clone(&self.timer);

        let on_beat = move || {
            let (pitch, len) = {
                let st = state.borrow();
                let Some(sequence) = st.sequence.as_ref() else {
                    return;
                };
                let Some(pitch) = sequence.get(st.index) else {
                    return;
                };
                (pitch, sequence.len())
            };

            // Sound the sample if the canonical pitch is in range; either
            // way the display updates with the raw spelling. No state borrow
            // is held here: sinks may call back into the player.
            let key = pitch.canonical();
            if catalog.contains(key) {
                audio.play(key);
                let gate_audio = Rc::clone(&audio);
                timer.after(gate, Box::new(move || gate_audio.stop_and_reset(key)));
            }
            display.set_current(&pitch.to_string());

            step_cursor(&mut state.borrow_mut(), len);
        };

        let click_audio = Rc::clone(&self.audio);
        let handle = metronome::start(
            self.timer.as_ref(),
            bpm,
            move || click_audio.play_click(),
            on_beat,
        );
        self.state.borrow_mut().handle = Some(handle);
        Ok(())
    }

    /// Cancel the metronome if one is running and blank the current-note
    /// display. Note-stop gates already scheduled are left to fire; the audio
    /// sink tolerates them.
    pub fn stop(&self) {
        if let Some(mut handle) = self.state.borrow_mut().handle.take() {
            handle.cancel();
        }
        self.display.clear_current();
    }

    /// Whether a metronome is currently running.
    pub fn is_playing(&self) -> bool {
        self.state.borrow().handle.is_some()
    }
}
