//! Integration tests for the modal practice engine
//!
//! Exercise the full pipeline from configuration to metronome-paced playback
//! over a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use modal::catalog::AudioCatalog;
use modal::pitch::CanonicalPitch;
use modal::playback::{AudioSink, NoteDisplay, Player};
use modal::timer::{EventLoop, Timer};
use modal::{scale_for, ModalError, PracticeConfig};

#[derive(Default)]
struct RecordingAudio {
    played: RefCell<Vec<String>>,
    clicks: RefCell<u32>,
}

impl AudioSink for RecordingAudio {
    fn play(&self, key: CanonicalPitch) {
        self.played.borrow_mut().push(key.to_string());
    }

    fn stop_and_reset(&self, _key: CanonicalPitch) {}

    fn play_click(&self) {
        *self.clicks.borrow_mut() += 1;
    }
}

#[derive(Default)]
struct RecordingDisplay {
    notes_line: RefCell<Option<String>>,
    current: RefCell<Option<String>>,
}

impl NoteDisplay for RecordingDisplay {
    fn set_current(&self, text: &str) {
        *self.current.borrow_mut() = Some(text.to_string());
    }

    fn clear_current(&self) {
        *self.current.borrow_mut() = None;
    }

    fn set_notes_line(&self, text: &str) {
        *self.notes_line.borrow_mut() = Some(text.to_string());
    }
}

fn player() -> (Rc<EventLoop>, Rc<RecordingAudio>, Rc<RecordingDisplay>, Player) {
    let el = Rc::new(EventLoop::new());
    let audio = Rc::new(RecordingAudio::default());
    let display = Rc::new(RecordingDisplay::default());
    let p = Player::new(
        Rc::clone(&el) as Rc<dyn Timer>,
        Rc::clone(&audio) as Rc<dyn AudioSink>,
        Rc::clone(&display) as Rc<dyn NoteDisplay>,
        Rc::new(AudioCatalog::guitar_range()),
    );
    (el, audio, display, p)
}

#[test]
fn c_ionian_notes_line_end_to_end() {
    let (_, _, display, player) = player();
    player.update_mode("ionian", "C").unwrap();
    assert_eq!(
        display.notes_line.borrow().as_deref(),
        Some("C D E F G A B C")
    );
}

#[test]
fn config_drives_a_full_session() {
    let yaml = "mode: aeolian\nstarting-note: A\nbpm: 60\nbeats: 8\n";
    let config = PracticeConfig::from_yaml(yaml).unwrap();

    let (el, audio, display, player) = player();
    player
        .update_mode(&config.mode, &config.starting_note)
        .unwrap();
    player.play(config.bpm).unwrap();

    // 4 count-in clicks plus the configured 8 beats at 60 bpm.
    el.advance(Duration::from_secs(4 + config.beats.unwrap() as u64));
    player.stop();

    assert_eq!(*audio.clicks.borrow(), 4);
    assert_eq!(
        *audio.played.borrow(),
        ["A2", "B2", "C3", "D3", "E3", "F3", "G3", "A3"]
    );
    assert!(display.current.borrow().is_none());

    // Stopped: nothing more fires.
    el.advance(Duration::from_secs(10));
    assert_eq!(audio.played.borrow().len(), 8);
}

#[test]
fn sharp_side_runs_stay_inside_the_catalog() {
    // Every mode/letter pair whose spelling stays on the sharp side (the
    // engine spells with sharps only; pairs needing flats are outside its
    // domain). All of these must canonicalize into the E2-C6 sample range.
    let combos: &[(&str, &[&str])] = &[
        ("ionian", &["C", "G", "D", "A", "E", "B"]),
        ("dorian", &["D", "E", "A", "B"]),
        ("phrygian", &["E", "B"]),
        ("lydian", &["C", "D", "E", "F", "G", "A", "B"]),
        ("mixolydian", &["G", "D", "A", "E", "B"]),
        ("aeolian", &["A", "E", "B"]),
        ("locrian", &["B"]),
    ];

    let catalog = AudioCatalog::guitar_range();
    for (mode, letters) in combos {
        for letter in *letters {
            let seq = scale_for(mode, letter).unwrap();
            assert_eq!(seq.len(), 18);
            for pitch in seq.pitches() {
                assert!(
                    pitch.sharps >= 0,
                    "{letter} {mode} left the sharp-side domain at {pitch}"
                );
                assert!(
                    catalog.contains(pitch.canonical()),
                    "{pitch} from {letter} {mode} is outside the catalog"
                );
            }
        }
    }
}

#[test]
fn unknown_names_are_rejected() {
    assert!(matches!(
        scale_for("pentatonic", "C"),
        Err(ModalError::UnknownMode(_))
    ));
    assert!(matches!(
        scale_for("ionian", "X"),
        Err(ModalError::UnknownNote(_))
    ));
}
