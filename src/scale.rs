//! # Mode Generator
//!
//! Expands a mode pattern from a starting pitch into the fixed 18-note run a
//! guitarist plays across all six strings (three notes per string).

use serde::Serialize;

use crate::mode::ModePattern;
use crate::pitch::{Letter, Pitch};

/// 3 notes per string x 6 strings.
pub const NOTE_COUNT: usize = 18;

/// How many notes the notes-line preview shows (one octave of the mode).
pub const PREVIEW_COUNT: usize = 8;

/// An ordered run of exactly [`NOTE_COUNT`] spelled pitches. Consecutive
/// entries are separated by exactly one application of the mode's step
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleSequence {
    pitches: Vec<Pitch>,
}

impl ScaleSequence {
    /// Generate the run: start at (letter, octave) with no sharps, then emit
    /// and step [`NOTE_COUNT`] times, cycling through the pattern.
    pub fn generate(pattern: ModePattern, start: Letter, octave: i8) -> ScaleSequence {
        let mut current = Pitch::natural(start, octave);
        let mut pitches = Vec::with_capacity(NOTE_COUNT);
        for i in 0..NOTE_COUNT {
            pitches.push(current);
            current = current.increment(pattern.step(i));
        }
        ScaleSequence { pitches }
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Pitch> {
        self.pitches.get(index).copied()
    }

    /// The notes-line display payload: the first [`PREVIEW_COUNT`] pitches,
    /// octave digits stripped, accidentals retained, space-separated.
    pub fn preview_line(&self) -> String {
        self.pitches
            .iter()
            .take(PREVIEW_COUNT)
            .map(|p| format!("{}{}", p.letter, "#".repeat(p.sharps.max(0) as usize)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The starting-octave convention: C and D start at octave 3, everything else
/// at octave 2. This centers the 18-note run inside the instrument's E2-C6
/// sounding range for any starting letter.
pub fn starting_octave(letter: Letter) -> i8 {
    match letter {
        Letter::C | Letter::D => 3,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Mode, IONIAN_PATTERN};
    use crate::pitch::Step;

    /// Absolute semitone index, for checking step distances.
    fn semitone(p: Pitch) -> i32 {
        let base = match p.letter {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        };
        base + p.sharps as i32 + 12 * p.octave as i32
    }

    #[test]
    fn c_ionian_has_18_entries_and_cycles_octaves() {
        let seq = ScaleSequence::generate(IONIAN_PATTERN, Letter::C, 3);
        assert_eq!(seq.len(), NOTE_COUNT);
        assert_eq!(seq.get(0), Some(Pitch::natural(Letter::C, 3)));
        // One full Ionian cycle starting on C lands on C an octave up.
        assert_eq!(seq.get(7), Some(Pitch::natural(Letter::C, 4)));
        assert_eq!(seq.get(14), Some(Pitch::natural(Letter::C, 5)));
    }

    #[test]
    fn first_entry_is_always_the_natural_start() {
        for mode in Mode::ALL {
            for letter in [Letter::A, Letter::C, Letter::E, Letter::G] {
                let octave = starting_octave(letter);
                let seq = ScaleSequence::generate(mode.pattern(), letter, octave);
                assert_eq!(seq.get(0), Some(Pitch::natural(letter, octave)));
            }
        }
    }

    #[test]
    fn consecutive_entries_differ_by_the_pattern_step() {
        let pattern = Mode::Dorian.pattern();
        let seq = ScaleSequence::generate(pattern, Letter::A, 2);
        for i in 0..NOTE_COUNT - 1 {
            let expected = match pattern.step(i) {
                Step::Half => 1,
                Step::Whole => 2,
            };
            let got = semitone(seq.get(i + 1).unwrap()) - semitone(seq.get(i).unwrap());
            assert_eq!(got, expected, "wrong interval at position {i}");
        }
    }

    #[test]
    fn letters_advance_one_per_degree() {
        let seq = ScaleSequence::generate(Mode::Lydian.pattern(), Letter::G, 2);
        let mut expected = Letter::G;
        for p in seq.pitches() {
            assert_eq!(p.letter, expected);
            expected = expected.next();
        }
    }

    #[test]
    fn starting_octave_convention() {
        assert_eq!(starting_octave(Letter::C), 3);
        assert_eq!(starting_octave(Letter::D), 3);
        assert_eq!(starting_octave(Letter::E), 2);
        assert_eq!(starting_octave(Letter::A), 2);
    }

    #[test]
    fn preview_line_strips_octaves_keeps_accidentals() {
        let c_ionian = ScaleSequence::generate(IONIAN_PATTERN, Letter::C, 3);
        assert_eq!(c_ionian.preview_line(), "C D E F G A B C");

        // G Ionian carries an F#.
        let g_ionian = ScaleSequence::generate(IONIAN_PATTERN, Letter::G, 2);
        assert_eq!(g_ionian.preview_line(), "G A B C D E F# G");
    }
}
