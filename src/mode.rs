//! # Mode Catalog
//!
//! The seven diatonic modes as rotations of the Ionian step pattern.
//!
//! A mode is nothing more than where you start reading the major scale's
//! whole/half pattern: Dorian is Ionian rotated left by one, Phrygian by two,
//! and so on through Locrian at six.

use std::fmt;

use serde::Serialize;

use crate::pitch::Step;

/// The Ionian (major) step pattern: W W H W W W H.
pub const IONIAN_PATTERN: ModePattern = ModePattern([
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Half,
]);

/// A cyclic sequence of seven scale steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModePattern(pub [Step; 7]);

impl ModePattern {
    /// Left-rotate the pattern by `n` positions (`rotate(arr, n)` =
    /// `arr[n..] ++ arr[..n]`). Rotation by 7 is the identity.
    pub fn rotated(self, n: usize) -> ModePattern {
        let mut steps = self.0;
        steps.rotate_left(n % 7);
        ModePattern(steps)
    }

    /// The step at position `i`, wrapping cyclically past the end.
    pub fn step(&self, i: usize) -> Step {
        self.0[i % 7]
    }
}

/// The seven named diatonic modes, in rotation order from Ionian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// The mode's step pattern: Ionian rotated by the mode's ordinal.
    pub fn pattern(self) -> ModePattern {
        IONIAN_PATTERN.rotated(self as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }

    /// Look up a mode by name, case-insensitively ("Dorian", "LOCRIAN", ...).
    pub fn from_name(s: &str) -> Option<Mode> {
        let trimmed = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
