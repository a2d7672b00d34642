// Circle of fifths: the chromatic circle reordered by perfect fifths.
//
// Clockwise each step adds a sharp to the key signature, counter-clockwise a
// flat. Adjacent keys share six of their seven notes, which is why the two
// neighbours (dominant and subdominant) are shown as the related keys.

use crate::geometry::interval_orbit;
use crate::pitch::PitchClass;

/// Semitones in a perfect fifth.
pub const FIFTH: u8 = 7;

/// Pitch classes in fifths order from C: C G D A E B F♯ C♯ G♯ D♯ A♯ F.
pub const CIRCLE_OF_FIFTHS: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
    PitchClass::B,
    PitchClass::F_SHARP,
    PitchClass::C_SHARP,
    PitchClass::G_SHARP,
    PitchClass::D_SHARP,
    PitchClass::A_SHARP,
    PitchClass::F,
];

/// Clock position (0 at the top) of `pc` on the circle of fifths.
pub fn fifths_position(pc: PitchClass) -> usize {
    // Multiplying by 7 is its own inverse mod 12.
    (pc.index() as usize * FIFTH as usize) % 12
}

/// The counter-clockwise (subdominant) and clockwise (dominant) neighbours
/// of `pc`, wrapping around the top of the circle.
pub fn related_keys(pc: PitchClass) -> [PitchClass; 2] {
    let pos = fifths_position(pc);
    [CIRCLE_OF_FIFTHS[(pos + 11) % 12], CIRCLE_OF_FIFTHS[(pos + 1) % 12]]
}

/// The circle of fifths starting from an arbitrary key.
pub fn fifths_from(start: PitchClass) -> Vec<PitchClass> {
    interval_orbit(start, FIFTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_fifths_orbit() {
        assert_eq!(fifths_from(PitchClass::C), CIRCLE_OF_FIFTHS);
    }

    #[test]
    fn test_positions() {
        for (i, pc) in CIRCLE_OF_FIFTHS.iter().enumerate() {
            assert_eq!(fifths_position(*pc), i);
        }
    }

    #[test]
    fn test_related_keys_wrap() {
        assert_eq!(related_keys(PitchClass::C), [PitchClass::F, PitchClass::G]);
        assert_eq!(related_keys(PitchClass::F), [PitchClass::A_SHARP, PitchClass::C]);
        assert_eq!(related_keys(PitchClass::E), [PitchClass::A, PitchClass::B]);
    }
}
