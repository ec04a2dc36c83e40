//! # Audio Sample Catalog
//!
//! The fixed set of precomputed note samples covering the guitar's playable
//! range, keyed by canonical pitch. Built once at startup and never mutated;
//! playback only ever looks entries up.

use std::collections::HashMap;

use crate::pitch::{CanonicalPitch, Letter};

/// Lowest sounding pitch: the open low E string.
pub const RANGE_LOW: CanonicalPitch = CanonicalPitch {
    letter: Letter::E,
    sharp: false,
    octave: 2,
};

/// Highest sounding pitch: C at the top of the neck.
pub const RANGE_HIGH: CanonicalPitch = CanonicalPitch {
    letter: Letter::C,
    sharp: false,
    octave: 6,
};

/// The reserved metronome click asset.
pub const CLICK_ASSET: &str = "notes/metronome.mp3";

/// Asset identifier for a canonical pitch: the sharp mark becomes a textual
/// `-sharp` suffix, followed by the octave digit (`notes/C-sharp4.mp3`).
pub fn asset_name(pitch: CanonicalPitch) -> String {
    format!(
        "notes/{}{}{}.mp3",
        pitch.letter,
        if pitch.sharp { "-sharp" } else { "" },
        pitch.octave
    )
}

/// Immutable map from canonical pitch to its sample asset, covering every
/// semitone from [`RANGE_LOW`] to [`RANGE_HIGH`] inclusive.
#[derive(Debug, Clone)]
pub struct AudioCatalog {
    samples: HashMap<CanonicalPitch, String>,
}

impl AudioCatalog {
    /// Build the catalog for the full guitar range by walking chromatically
    /// from the low bound until the high bound is reached.
    pub fn guitar_range() -> AudioCatalog {
        AudioCatalog::with_range(RANGE_LOW, RANGE_HIGH)
    }

    /// Build a catalog over an arbitrary inclusive chromatic range. The walk
    /// terminates on equality with `high`, so `high` must be reachable from
    /// `low` by ascending chromatic steps.
    pub fn with_range(low: CanonicalPitch, high: CanonicalPitch) -> AudioCatalog {
        let mut samples = HashMap::new();
        let mut current = low;
        loop {
            samples.insert(current, asset_name(current));
            if current == high {
                break;
            }
            current = current.next_chromatic();
        }
        AudioCatalog { samples }
    }

    pub fn contains(&self, pitch: CanonicalPitch) -> bool {
        self.samples.contains_key(&pitch)
    }

    /// The asset identifier for a pitch, if it is in range.
    pub fn asset(&self, pitch: CanonicalPitch) -> Option<&str> {
        self.samples.get(&pitch).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_has_45_semitones() {
        // E2 up to C6 inclusive.
        let catalog = AudioCatalog::guitar_range();
        assert_eq!(catalog.len(), 45);
    }

    #[test]
    fn range_bounds_are_present() {
        let catalog = AudioCatalog::guitar_range();
        assert!(catalog.contains(RANGE_LOW));
        assert!(catalog.contains(RANGE_HIGH));
        // Just outside either bound is not.
        assert!(!catalog.contains(CanonicalPitch {
            letter: Letter::D,
            sharp: true,
            octave: 2
        }));
        assert!(!catalog.contains(CanonicalPitch {
            letter: Letter::C,
            sharp: true,
            octave: 6
        }));
    }

    #[test]
    fn asset_naming_contract() {
        assert_eq!(
            asset_name(CanonicalPitch::natural(Letter::A, 2)),
            "notes/A2.mp3"
        );
        assert_eq!(
            asset_name(CanonicalPitch {
                letter: Letter::C,
                sharp: true,
                octave: 4
            }),
            "notes/C-sharp4.mp3"
        );
    }

    #[test]
    fn lookup_returns_the_asset() {
        let catalog = AudioCatalog::guitar_range();
        let g3 = CanonicalPitch::natural(Letter::G, 3);
        assert_eq!(catalog.asset(g3), Some("notes/G3.mp3"));
        assert_eq!(
            catalog.asset(CanonicalPitch::natural(Letter::C, 7)),
            None
        );
    }
}
