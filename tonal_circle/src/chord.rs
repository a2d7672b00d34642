// Triads and roman-numeral harmonic analysis.
//
// A roman numeral names a diatonic triad by its degree in the *major* scale
// of the key: I, ii, iii, IV, V, vi, vii°. The mapping is fixed and ignores
// whatever mode is selected elsewhere; the mode explorer and the chord
// analyzer are separate views over the same 12-tone circle.
//
// Analysis is atomic. `analyze_progression` takes typed numerals and cannot
// fail; `analyze_numerals` parses strings first and returns either every
// chord or an `UnknownNumeral` error, never a partial list.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::mode::MAJOR_SCALE_PATTERN;
use crate::pitch::PitchClass;

/// Triad quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 3] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
    ];

    /// Semitones from the root to the third and to the fifth.
    pub fn intervals(self) -> (u8, u8) {
        match self {
            ChordQuality::Major => (4, 7),
            ChordQuality::Minor => (3, 7),
            ChordQuality::Diminished => (3, 6),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordQuality::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::InvalidChordQuality(s.to_string()))
    }
}

/// Root, third and fifth of a triad on `root`.
pub fn build_triad(root: PitchClass, quality: ChordQuality) -> [PitchClass; 3] {
    let (third, fifth) = quality.intervals();
    [root, root.transpose(third as i32), root.transpose(fifth as i32)]
}

/// Harmonic role of a diatonic triad, as shown next to each chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicFunction {
    #[serde(rename = "Tonic (Home)")]
    Tonic,
    Subdominant,
    Mediant,
    Dominant,
    #[serde(rename = "Relative Minor")]
    RelativeMinor,
    #[serde(rename = "Leading Tone")]
    LeadingTone,
}

impl HarmonicFunction {
    pub fn label(self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "Tonic (Home)",
            HarmonicFunction::Subdominant => "Subdominant",
            HarmonicFunction::Mediant => "Mediant",
            HarmonicFunction::Dominant => "Dominant",
            HarmonicFunction::RelativeMinor => "Relative Minor",
            HarmonicFunction::LeadingTone => "Leading Tone",
        }
    }
}

/// The seven diatonic triads of a major key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RomanNumeral {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "ii")]
    Ii,
    #[serde(rename = "iii")]
    Iii,
    #[serde(rename = "IV")]
    Iv,
    #[serde(rename = "V")]
    V,
    #[serde(rename = "vi")]
    Vi,
    #[serde(rename = "vii°")]
    ViiDim,
}

impl RomanNumeral {
    pub const ALL: [RomanNumeral; 7] = [
        RomanNumeral::I,
        RomanNumeral::Ii,
        RomanNumeral::Iii,
        RomanNumeral::Iv,
        RomanNumeral::V,
        RomanNumeral::Vi,
        RomanNumeral::ViiDim,
    ];

    /// Conventional spelling: upper case major, lower case minor, ° diminished.
    pub fn symbol(self) -> &'static str {
        match self {
            RomanNumeral::I => "I",
            RomanNumeral::Ii => "ii",
            RomanNumeral::Iii => "iii",
            RomanNumeral::Iv => "IV",
            RomanNumeral::V => "V",
            RomanNumeral::Vi => "vi",
            RomanNumeral::ViiDim => "vii°",
        }
    }

    /// 0-based degree in the major scale.
    pub fn degree(self) -> usize {
        self as usize
    }

    pub fn quality(self) -> ChordQuality {
        match self {
            RomanNumeral::I | RomanNumeral::Iv | RomanNumeral::V => ChordQuality::Major,
            RomanNumeral::Ii | RomanNumeral::Iii | RomanNumeral::Vi => ChordQuality::Minor,
            RomanNumeral::ViiDim => ChordQuality::Diminished,
        }
    }

    pub fn function(self) -> HarmonicFunction {
        match self {
            RomanNumeral::I => HarmonicFunction::Tonic,
            RomanNumeral::Ii | RomanNumeral::Iv => HarmonicFunction::Subdominant,
            RomanNumeral::Iii => HarmonicFunction::Mediant,
            RomanNumeral::V => HarmonicFunction::Dominant,
            RomanNumeral::Vi => HarmonicFunction::RelativeMinor,
            RomanNumeral::ViiDim => HarmonicFunction::LeadingTone,
        }
    }

    /// Hex display color.
    pub fn color(self) -> &'static str {
        match self {
            RomanNumeral::I => "#FFD700",
            RomanNumeral::Ii => "#98FB98",
            RomanNumeral::Iii => "#87CEEB",
            RomanNumeral::Iv => "#DDA0DD",
            RomanNumeral::V => "#F0E68C",
            RomanNumeral::Vi => "#FFB6C1",
            RomanNumeral::ViiDim => "#FFA07A",
        }
    }

    /// Root of this numeral's triad in the major key on `key`.
    pub fn root_in(self, key: PitchClass) -> PitchClass {
        key.transpose(MAJOR_SCALE_PATTERN[self.degree()] as i32)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for RomanNumeral {
    type Err = TheoryError;

    /// Exact symbol match. Case matters (ii is not II); "vii" and "viio"
    /// are accepted for the diminished vii°.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "vii" | "viio" => Ok(RomanNumeral::ViiDim),
            _ => RomanNumeral::ALL
                .into_iter()
                .find(|n| n.symbol() == s)
                .ok_or_else(|| TheoryError::UnknownNumeral(s.to_string())),
        }
    }
}

/// A triad derived from a numeral in a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub numeral: RomanNumeral,
    pub root: PitchClass,
    pub quality: ChordQuality,
    /// Root, third, fifth.
    pub notes: [PitchClass; 3],
    pub function: HarmonicFunction,
    pub color: &'static str,
}

impl Chord {
    pub fn new(key: PitchClass, numeral: RomanNumeral) -> Self {
        let root = numeral.root_in(key);
        let quality = numeral.quality();
        Chord {
            numeral,
            root,
            quality,
            notes: build_triad(root, quality),
            function: numeral.function(),
            color: numeral.color(),
        }
    }

    /// Whether `pc` is one of the chord tones.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }
}

/// Chords for `numerals` in the major key on `key`, in input order.
pub fn analyze_progression(key: PitchClass, numerals: &[RomanNumeral]) -> Vec<Chord> {
    let chords: Vec<Chord> = numerals
        .iter()
        .map(|&numeral| {
            let chord = Chord::new(key, numeral);
            trace!("{} in {}: {:?}", numeral, key, chord.notes);
            chord
        })
        .collect();
    debug!("analyzed {} numerals in {}", chords.len(), key);
    chords
}

/// Parse every numeral, then analyze. Fails as a whole on the first
/// unknown numeral.
pub fn analyze_numerals<S: AsRef<str>>(
    key: PitchClass,
    numerals: &[S],
) -> Result<Vec<Chord>, TheoryError> {
    let parsed = numerals
        .iter()
        .map(|s| s.as_ref().parse::<RomanNumeral>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(analyze_progression(key, &parsed))
}
