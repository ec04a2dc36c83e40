//! # Note Arithmetic
//!
//! Spelled pitches and the two operations the mode engine is built on:
//! stepping a pitch up by a half or whole step while keeping one letter name
//! per scale degree, and collapsing an over-sharped spelling down to the
//! simplest sharp-or-natural equivalent.
//!
//! ## Spelling model
//! A [`Pitch`] is a letter name A-G plus a sharp count plus an octave. Scale
//! generation always advances the letter by one place per degree and pays for
//! the requested interval out of the sharp count, so spellings like `F##` are
//! normal intermediate results. [`Pitch::canonical`] reduces any such spelling
//! to a [`CanonicalPitch`] with zero or one sharp, which is the identity used
//! to key the audio sample catalog.
//!
//! The octave breaks between B and C: advancing the letter past B lands in the
//! next octave, as does canonicalizing `B#`.

use std::fmt;

use serde::Serialize;

/// Natural note letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// The next letter in the A-G cycle (G wraps to A).
    pub fn next(self) -> Letter {
        match self {
            Letter::A => Letter::B,
            Letter::B => Letter::C,
            Letter::C => Letter::D,
            Letter::D => Letter::E,
            Letter::E => Letter::F,
            Letter::F => Letter::G,
            Letter::G => Letter::A,
        }
    }

    /// Parse a bare letter name like "A" or "g". Returns `None` for anything
    /// that is not a single letter in A-G.
    pub fn from_name(s: &str) -> Option<Letter> {
        match s.trim() {
            "A" | "a" => Some(Letter::A),
            "B" | "b" => Some(Letter::B),
            "C" | "c" => Some(Letter::C),
            "D" | "d" => Some(Letter::D),
            "E" | "e" => Some(Letter::E),
            "F" | "f" => Some(Letter::F),
            "G" | "g" => Some(Letter::G),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A diatonic scale step: one or two semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    Half,
    Whole,
}

impl Step {
    /// Interval size in semitones.
    pub fn semitones(self) -> i8 {
        match self {
            Step::Half => 1,
            Step::Whole => 2,
        }
    }
}

/// A spelled pitch: letter name, sharp count, octave.
///
/// `sharps` is signed because the stepping arithmetic can pass through
/// negative values conceptually; within the sharp-side, natural-start domain
/// it always lands on 0, 1 or 2 before canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pitch {
    pub letter: Letter,
    pub sharps: i8,
    pub octave: i8,
}

impl Pitch {
    /// A natural (zero-sharp) pitch.
    pub fn natural(letter: Letter, octave: i8) -> Pitch {
        Pitch {
            letter,
            sharps: 0,
            octave,
        }
    }

    /// Advance this pitch by one scale step, moving to the next letter name.
    ///
    /// The letter always advances exactly one place; the octave ticks up when
    /// the departing letter is B. The new sharp count pays for the difference
    /// between the requested step and the fixed distance between natural
    /// letters: E-F and B-C are one semitone apart, every other adjacent pair
    /// is two.
    pub fn increment(self, step: Step) -> Pitch {
        let up_octave = self.letter == Letter::B;
        let departure = match self.letter {
            Letter::B | Letter::E => 1,
            _ => 2,
        };
        Pitch {
            letter: self.letter.next(),
            sharps: self.sharps + step.semitones() - departure,
            octave: self.octave + if up_octave { 1 } else { 0 },
        }
    }

    /// Collapse this spelling to its simplest sharp-or-natural equivalent.
    ///
    /// Rules, applied in order:
    /// 1. B with any sharps is C natural in the next octave.
    /// 2. E with any sharps is F natural.
    /// 3. A double sharp on any other letter is the next letter, natural.
    /// 4. Otherwise the letter stands, keeping at most one sharp.
    ///
    /// Pure and idempotent; a single pass covers the whole 0-2 sharp domain.
    ///
    /// ```rust
    /// use modal::pitch::{Letter, Pitch};
    ///
    /// let b_sharp = Pitch { letter: Letter::B, sharps: 1, octave: 3 };
    /// let c = b_sharp.canonical();
    /// assert_eq!((c.letter, c.sharp, c.octave), (Letter::C, false, 4));
    /// ```
    pub fn canonical(self) -> CanonicalPitch {
        if self.sharps >= 1 {
            match self.letter {
                Letter::B => {
                    return CanonicalPitch {
                        letter: Letter::C,
                        sharp: false,
                        octave: self.octave + 1,
                    }
                }
                Letter::E => {
                    return CanonicalPitch {
                        letter: Letter::F,
                        sharp: false,
                        octave: self.octave,
                    }
                }
                _ if self.sharps >= 2 => {
                    return CanonicalPitch {
                        letter: self.letter.next(),
                        sharp: false,
                        octave: self.octave,
                    }
                }
                _ => {}
            }
        }
        CanonicalPitch {
            letter: self.letter,
            sharp: self.sharps >= 1,
            octave: self.octave,
        }
    }
}

/// Raw spelling: letter, sharp marks, octave digit, no separators (`F##3`).
impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter,
            "#".repeat(self.sharps.max(0) as usize),
            self.octave
        )
    }
}

/// A pitch restricted to zero or one sharp: the identity of an audio sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalPitch {
    pub letter: Letter,
    pub sharp: bool,
    pub octave: i8,
}

impl CanonicalPitch {
    pub fn natural(letter: Letter, octave: i8) -> CanonicalPitch {
        CanonicalPitch {
            letter,
            sharp: false,
            octave,
        }
    }

    /// The chromatic successor (C, C#, D, ... B, then C an octave up).
    ///
    /// Used to enumerate every sample in the instrument range. Canonical
    /// spellings never include E# or B#, so a sharped letter always resolves
    /// to the next natural.
    pub fn next_chromatic(self) -> CanonicalPitch {
        match (self.letter, self.sharp) {
            (Letter::B, false) => CanonicalPitch::natural(Letter::C, self.octave + 1),
            (Letter::E, false) => CanonicalPitch::natural(Letter::F, self.octave),
            (letter, false) => CanonicalPitch {
                letter,
                sharp: true,
                octave: self.octave,
            },
            (letter, true) => CanonicalPitch::natural(letter.next(), self.octave),
        }
    }
}

impl fmt::Display for CanonicalPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter,
            if self.sharp { "#" } else { "" },
            self.octave
        )
    }
}
