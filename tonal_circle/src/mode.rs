// Modal scale generation for the mode explorer.
//
// The seven classical modes are rotations of the major scale: each mode
// starts the major-scale pattern from a different degree (Ionian from the
// 1st, Dorian from the 2nd, ... Locrian from the 7th) and re-measures every
// degree from that new starting point. Deriving a scale is then just adding
// the rotated offsets to the key, mod 12.
//
// This module provides:
// - `Mode` and its static metadata table (`ModeInfo`: names, character,
//   mood, display color)
// - `derive_scale` (key + mode -> 7 pitch classes)
// - `interval_pattern` (the fixed whole/half step sequence per mode)
// - `Scale`, a derived key+mode instance with membership and degree queries
//
// Independent of chord.rs: roman-numeral analysis always uses the major
// scale, whatever mode the explorer has selected.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Semitone offsets of the major scale degrees from the tonic (W-W-H-W-W-W-H).
pub const MAJOR_SCALE_PATTERN: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The seven modes of the major scale, in starting-degree order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// C D E F G A B: the major scale itself.
    Ionian,
    /// Minor with a raised 6th.
    Dorian,
    /// Minor with the half step from 1 to 2.
    Phrygian,
    /// Major with a raised 4th.
    Lydian,
    /// Major with a lowered 7th.
    Mixolydian,
    /// Natural minor.
    Aeolian,
    /// Diminished 5th above the final; the unstable one.
    Locrian,
}

/// Static display metadata for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    pub mode: Mode,
    /// Lowercase id used for selection ("dorian").
    pub id: &'static str,
    /// Display name ("Aeolian (Natural Minor)").
    pub name: &'static str,
    pub greek_name: &'static str,
    /// 0-based major-scale degree the mode starts from.
    pub starting_degree: usize,
    pub character: &'static str,
    pub mood: &'static str,
    /// Hex display color.
    pub color: &'static str,
}

static MODE_TABLE: [ModeInfo; 7] = [
    ModeInfo {
        mode: Mode::Ionian,
        id: "ionian",
        name: "Ionian (Major)",
        greek_name: "Ionian",
        starting_degree: 0,
        character: "Happy, stable, resolved",
        mood: "Joyful & Bright",
        color: "#FFD700",
    },
    ModeInfo {
        mode: Mode::Dorian,
        id: "dorian",
        name: "Dorian",
        greek_name: "Dorian",
        starting_degree: 1,
        character: "Sophisticated minor, jazzy",
        mood: "Contemplative",
        color: "#8A2BE2",
    },
    ModeInfo {
        mode: Mode::Phrygian,
        id: "phrygian",
        name: "Phrygian",
        greek_name: "Phrygian",
        starting_degree: 2,
        character: "Exotic, Spanish flavor",
        mood: "Mysterious & Dark",
        color: "#DC143C",
    },
    ModeInfo {
        mode: Mode::Lydian,
        id: "lydian",
        name: "Lydian",
        greek_name: "Lydian",
        starting_degree: 3,
        character: "Dreamy, floating, ethereal",
        mood: "Mystical & Floating",
        color: "#00CED1",
    },
    ModeInfo {
        mode: Mode::Mixolydian,
        id: "mixolydian",
        name: "Mixolydian",
        greek_name: "Mixolydian",
        starting_degree: 4,
        character: "Bluesy, rock, dominant",
        mood: "Confident & Groovy",
        color: "#FF8C00",
    },
    ModeInfo {
        mode: Mode::Aeolian,
        id: "aeolian",
        name: "Aeolian (Natural Minor)",
        greek_name: "Aeolian",
        starting_degree: 5,
        character: "Sad, melancholic, natural",
        mood: "Melancholic",
        color: "#4682B4",
    },
    ModeInfo {
        mode: Mode::Locrian,
        id: "locrian",
        name: "Locrian",
        greek_name: "Locrian",
        starting_degree: 6,
        character: "Unstable, theoretical",
        mood: "Unsettling & Rare",
        color: "#8B0000",
    },
];

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

    /// Static metadata for this mode.
    pub fn info(self) -> &'static ModeInfo {
        &MODE_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn starting_degree(self) -> usize {
        self.info().starting_degree
    }

    /// Look a mode up by its id. Case-insensitive; the display name
    /// ("Aeolian (Natural Minor)") is accepted too.
    pub fn from_id(id: &str) -> Result<Mode, TheoryError> {
        let wanted = id.trim();
        MODE_TABLE
            .iter()
            .find(|info| info.id.eq_ignore_ascii_case(wanted) || info.name.eq_ignore_ascii_case(wanted))
            .map(|info| info.mode)
            .ok_or_else(|| TheoryError::InvalidMode(id.to_string()))
    }

    /// Semitone offsets of each degree from the final, in degree order.
    ///
    /// Rotates `MAJOR_SCALE_PATTERN` to start at `starting_degree` and
    /// re-measures from there, e.g. Dorian gives [0, 2, 3, 5, 7, 9, 10].
    pub fn offsets(self) -> [u8; 7] {
        let start = self.starting_degree();
        let base = MAJOR_SCALE_PATTERN[start];
        let mut offsets = [0u8; 7];
        for (i, slot) in offsets.iter_mut().enumerate() {
            let degree = MAJOR_SCALE_PATTERN[(i + start) % 7];
            *slot = (degree + 12 - base) % 12;
        }
        offsets
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.info().name)
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_id(s)
    }
}

/// All mode metadata records, in starting-degree order.
pub fn list_modes() -> &'static [ModeInfo] {
    &MODE_TABLE
}

/// One step between adjacent scale degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Two semitones.
    Whole,
    /// One semitone.
    Half,
}

impl Step {
    pub fn semitones(self) -> u8 {
        match self {
            Step::Whole => 2,
            Step::Half => 1,
        }
    }

    /// "W" or "H".
    pub fn symbol(self) -> &'static str {
        match self {
            Step::Whole => "W",
            Step::Half => "H",
        }
    }
}

/// The whole/half step sequence of a mode, from the final up to its octave.
///
/// Always 7 steps summing to 12 semitones; the last step closes the octave.
pub fn interval_pattern(mode: Mode) -> [Step; 7] {
    use crate::mode::Step::{Half as H, Whole as W};
    match mode {
        Mode::Ionian => [W, W, H, W, W, W, H],
        Mode::Dorian => [W, H, W, W, W, H, W],
        Mode::Phrygian => [H, W, W, W, H, W, W],
        Mode::Lydian => [W, W, W, H, W, W, H],
        Mode::Mixolydian => [W, W, H, W, W, H, W],
        Mode::Aeolian => [W, H, W, W, H, W, W],
        Mode::Locrian => [H, W, W, H, W, W, W],
    }
}

/// The seven pitch classes of `mode` built on `key`, degree 1 first.
pub fn derive_scale(key: PitchClass, mode: Mode) -> [PitchClass; 7] {
    let notes = mode.offsets().map(|offset| key.transpose(offset as i32));
    debug!("derived {} {:?}: {:?}", key, mode, notes.map(PitchClass::name));
    notes
}

/// A mode rooted on a key, with its notes derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub key: PitchClass,
    pub mode: Mode,
    /// Degree 1..=7 notes, in order.
    pub notes: [PitchClass; 7],
}

impl Scale {
    pub fn new(key: PitchClass, mode: Mode) -> Self {
        Scale {
            key,
            mode,
            notes: derive_scale(key, mode),
        }
    }

    /// The 12 pitch classes that are in the scale, as a mask indexed by
    /// pitch class.
    pub fn pitch_class_mask(&self) -> [bool; 12] {
        let mut mask = [false; 12];
        for note in self.notes {
            mask[note.index() as usize] = true;
        }
        mask
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    /// 1-based scale degree of `pc`, or None if not in the scale.
    pub fn degree_of(&self, pc: PitchClass) -> Option<usize> {
        self.notes.iter().position(|&n| n == pc).map(|i| i + 1)
    }

    /// Note at a 1-based scale degree. Degrees past 7 wrap into the next
    /// octave (degree 8 is the final again); 0 has no note.
    pub fn note_at_degree(&self, degree: usize) -> Option<PitchClass> {
        if degree == 0 {
            return None;
        }
        Some(self.notes[(degree - 1) % 7])
    }
}
