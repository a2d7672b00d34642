// The twelve simple intervals, unison through major seventh.
//
// Ratios are just-intonation display strings only; nothing computes with
// them. Semitone counts index the table directly.

use serde::Serialize;

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Kebab-case id ("perfect-fifth").
    pub id: &'static str,
    pub name: &'static str,
    pub semitones: u8,
    /// Frequency ratio for display ("3:2").
    pub ratio: &'static str,
    pub character: &'static str,
}

static INTERVALS: [Interval; 12] = [
    Interval { id: "unison", name: "Unison", semitones: 0, ratio: "1:1", character: "Identity" },
    Interval { id: "minor-second", name: "Minor 2nd", semitones: 1, ratio: "16:15", character: "Dissonant tension" },
    Interval { id: "major-second", name: "Major 2nd", semitones: 2, ratio: "9:8", character: "Gentle step" },
    Interval { id: "minor-third", name: "Minor 3rd", semitones: 3, ratio: "6:5", character: "Melancholy sweetness" },
    Interval { id: "major-third", name: "Major 3rd", semitones: 4, ratio: "5:4", character: "Bright joy" },
    Interval { id: "perfect-fourth", name: "Perfect 4th", semitones: 5, ratio: "4:3", character: "Stable strength" },
    Interval { id: "tritone", name: "Tritone", semitones: 6, ratio: "45:32", character: "Diabolic tension" },
    Interval { id: "perfect-fifth", name: "Perfect 5th", semitones: 7, ratio: "3:2", character: "Perfect harmony" },
    Interval { id: "minor-sixth", name: "Minor 6th", semitones: 8, ratio: "8:5", character: "Nostalgic longing" },
    Interval { id: "major-sixth", name: "Major 6th", semitones: 9, ratio: "5:3", character: "Open brightness" },
    Interval { id: "minor-seventh", name: "Minor 7th", semitones: 10, ratio: "16:9", character: "Bluesy resolution" },
    Interval { id: "major-seventh", name: "Major 7th", semitones: 11, ratio: "15:8", character: "Leading tension" },
];

/// The interval the geometry view starts on.
pub const DEFAULT_INTERVAL_ID: &str = "perfect-fifth";

/// All twelve intervals, ordered by semitones.
pub fn list_intervals() -> &'static [Interval] {
    &INTERVALS
}

impl Interval {
    pub fn by_id(id: &str) -> Result<&'static Interval, TheoryError> {
        INTERVALS
            .iter()
            .find(|i| i.id == id.trim())
            .ok_or_else(|| TheoryError::UnknownInterval(id.to_string()))
    }

    /// The interval spanning `semitones` mod 12 (an octave is a unison).
    pub fn by_semitones(semitones: u8) -> &'static Interval {
        &INTERVALS[(semitones % 12) as usize]
    }
}
