// Built-in chord progressions for the harmonic analyzer.
//
// A fixed, read-only table. Each entry is a named numeral sequence with a
// short description and a few well-known songs that use it. Lookup is by id
// (the hyphenated numeral string, e.g. "ii-V-I").

use serde::Serialize;

use crate::chord::RomanNumeral::{I, Ii, Iv, V, Vi};
use crate::chord::{Chord, RomanNumeral, analyze_progression};
use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// A named progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub id: &'static str,
    pub name: &'static str,
    pub numerals: &'static [RomanNumeral],
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

static PROGRESSIONS: [Progression; 6] = [
    Progression {
        id: "I-V-vi-IV",
        name: "I-V-vi-IV (Pop Progression)",
        numerals: &[I, V, Vi, Iv],
        description: "The most popular progression in modern music",
        examples: &["Let It Be", "Don't Stop Believin'", "Someone Like You"],
    },
    Progression {
        id: "vi-IV-I-V",
        name: "vi-IV-I-V (Pop Variations)",
        numerals: &[Vi, Iv, I, V],
        description: "Emotional variant starting on the relative minor",
        examples: &["Zombie", "Complicated", "What's Up?"],
    },
    Progression {
        id: "I-vi-IV-V",
        name: "I-vi-IV-V (50s Progression)",
        numerals: &[I, Vi, Iv, V],
        description: "Classic doo-wop and early rock progression",
        examples: &["Stand By Me", "Blue Moon", "Heart and Soul"],
    },
    Progression {
        id: "ii-V-I",
        name: "ii-V-I (Jazz Standard)",
        numerals: &[Ii, V, I],
        description: "The fundamental unit of jazz harmony",
        examples: &["All The Things You Are", "Autumn Leaves", "Fly Me to the Moon"],
    },
    Progression {
        id: "I-IV-V",
        name: "I-IV-V (Blues/Rock)",
        numerals: &[I, Iv, V],
        description: "The foundation of blues and rock music",
        examples: &["Wild Thing", "Louie Louie", "Twist and Shout"],
    },
    Progression {
        id: "vi-ii-V-I",
        name: "vi-ii-V-I (Circle of Fifths)",
        numerals: &[Vi, Ii, V, I],
        description: "Complete circle of fifths progression",
        examples: &["Fly Me to the Moon", "All of Me", "Georgia On My Mind"],
    },
];

/// The id the analyzer starts on when nothing is selected.
pub const DEFAULT_PROGRESSION_ID: &str = "vi-IV-I-V";

/// All built-in progressions, in display order.
pub fn list_progressions() -> &'static [Progression] {
    &PROGRESSIONS
}

impl Progression {
    /// Find a built-in progression by id.
    pub fn by_id(id: &str) -> Result<&'static Progression, TheoryError> {
        PROGRESSIONS
            .iter()
            .find(|p| p.id == id.trim())
            .ok_or_else(|| TheoryError::UnknownProgression(id.to_string()))
    }

    /// The progression's chords in the major key on `key`.
    pub fn analyze(&self, key: PitchClass) -> Vec<Chord> {
        analyze_progression(key, self.numerals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_numerals() {
        for p in list_progressions() {
            let joined: Vec<&str> = p.numerals.iter().map(|n| n.symbol()).collect();
            assert_eq!(joined.join("-"), p.id);
            assert_eq!(p.examples.len(), 3);
        }
    }

    #[test]
    fn test_jazz_ii_v_i_in_b_flat() {
        let p = Progression::by_id("ii-V-I").unwrap();
        let roots: Vec<_> = p.analyze(PitchClass::A_SHARP).iter().map(|c| c.root).collect();
        // Cm F Bb
        assert_eq!(roots, [PitchClass::C, PitchClass::F, PitchClass::A_SHARP]);
    }

    #[test]
    fn test_unknown_progression() {
        assert_eq!(
            Progression::by_id("I-bVII-IV"),
            Err(TheoryError::UnknownProgression("I-bVII-IV".into()))
        );
    }

    #[test]
    fn test_default_exists() {
        assert!(Progression::by_id(DEFAULT_PROGRESSION_ID).is_ok());
    }
}
