use std::env;
use std::fs;
use std::process;
use std::rc::Rc;

use modal::catalog::{asset_name, AudioCatalog, CLICK_ASSET};
use modal::config::{PracticeConfig, DEFAULT_BEATS};
use modal::metronome;
use modal::pitch::CanonicalPitch;
use modal::playback::{AudioSink, NoteDisplay, Player};
use modal::timer::{EventLoop, Timer};

/// Terminal audio sink: prints the asset that a real host would play.
struct ConsoleAudio;

impl AudioSink for ConsoleAudio {
    fn play(&self, key: CanonicalPitch) {
        println!("  play {}", asset_name(key));
    }

    fn stop_and_reset(&self, _key: CanonicalPitch) {}

    fn play_click(&self) {
        println!("  click ({})", CLICK_ASSET);
    }
}

/// Terminal display sink.
struct ConsoleDisplay;

impl NoteDisplay for ConsoleDisplay {
    fn set_current(&self, text: &str) {
        println!("{}", text);
    }

    fn clear_current(&self) {}

    fn set_notes_line(&self, text: &str) {
        println!("notes: {}", text);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: modal <session.yaml>");
        process::exit(1);
    }

    let source = match fs::read_to_string(&args[1]) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    let config = match PracticeConfig::from_yaml(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let event_loop = Rc::new(EventLoop::new());
    let timer: Rc<dyn Timer> = Rc::clone(&event_loop) as Rc<dyn Timer>;
    let player = Player::new(
        timer,
        Rc::new(ConsoleAudio),
        Rc::new(ConsoleDisplay),
        Rc::new(AudioCatalog::guitar_range()),
    );

    if let Err(e) = player.update_mode(&config.mode, &config.starting_note) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = player.play(config.bpm) {
        eprintln!("{}", e);
        process::exit(1);
    }

    // Count-in plus the configured number of musical beats, then stop.
    let beats = config.beats.unwrap_or(DEFAULT_BEATS) + metronome::COUNT_IN_TICKS;
    event_loop.run_for(metronome::period(config.bpm) * beats);
    player.stop();
}
