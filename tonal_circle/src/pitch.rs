// Pitch-class space: the 12-tone chromatic alphabet and its modular arithmetic.
//
// Every other module builds on `PitchClass`. A pitch class is stored as a
// `u8` in [0, 12) and the only way to move around the circle is through
// `pitch_class_at` / `PitchClass::transpose`, which use Euclidean remainder
// so negative offsets wrap (base 0, offset -1 gives 11, never -1).
//
// Names come in two tables:
// - `CHROMATIC_NAMES`: the single display spelling per pitch class, sharps
//   only ("C♯"). This is what derived notes print as.
// - `KEY_LABELS`: the enharmonic labels used for key selection ("C♯/D♭").
//   `index_of` accepts either half of a label, or the whole label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of pitch classes in the chromatic circle.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Sharp-only spelling of each pitch class, indexed by pitch class.
pub const CHROMATIC_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// Enharmonic key labels, indexed by pitch class.
pub const KEY_LABELS: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

/// A chromatic pitch class in [0, 12). C = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// All 12 pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::C_SHARP,
        PitchClass::D,
        PitchClass::D_SHARP,
        PitchClass::E,
        PitchClass::F,
        PitchClass::F_SHARP,
        PitchClass::G,
        PitchClass::G_SHARP,
        PitchClass::A,
        PitchClass::A_SHARP,
        PitchClass::B,
    ];

    /// Build a pitch class from any semitone count, reducing it into [0, 12).
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(PITCH_CLASS_COUNT as i32) as u8)
    }

    /// The raw index in [0, 12).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Move `offset` semitones around the circle (either direction).
    pub fn transpose(self, offset: i32) -> Self {
        // Reduce first: `self.0 + offset` can overflow near i32::MAX.
        PitchClass::new(self.0 as i32 + offset.rem_euclid(PITCH_CLASS_COUNT as i32))
    }

    /// Upward distance in semitones from `self` to `other`, in [0, 12).
    pub fn semitones_to(self, other: PitchClass) -> u8 {
        (other.0 + PITCH_CLASS_COUNT - self.0) % PITCH_CLASS_COUNT
    }

    /// Sharp-only display name ("C♯").
    pub fn name(self) -> &'static str {
        CHROMATIC_NAMES[self.0 as usize]
    }

    /// Enharmonic key label ("C♯/D♭").
    pub fn label(self) -> &'static str {
        KEY_LABELS[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < PITCH_CLASS_COUNT {
            Ok(PitchClass(value))
        } else {
            Err(format!("pitch class {value} is outside [0, 12)"))
        }
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        index_of(s)
    }
}

/// `(base + offset) mod 12`, always normalized into [0, 12).
pub fn pitch_class_at(base: PitchClass, offset: i32) -> PitchClass {
    base.transpose(offset)
}

/// Resolve a display name to its pitch class.
///
/// Accepts a chromatic name ("F♯"), either half of an enharmonic key label
/// ("G♭"), or the full label ("F♯/G♭"). Surrounding whitespace is ignored;
/// anything else fails with `UnknownNote`.
pub fn index_of(name: &str) -> Result<PitchClass, TheoryError> {
    let name = name.trim();
    KEY_LABELS
        .iter()
        .position(|label| *label == name || label.split('/').any(|half| half == name))
        .map(|i| PitchClass(i as u8))
        .ok_or_else(|| TheoryError::UnknownNote(name.to_string()))
}
