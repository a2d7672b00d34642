// Interval geometry: the polygon traced by stepping a fixed interval around
// the 12-tone circle.
//
// Stepping by `s` semitones from any pitch class returns home after
// 12 / gcd(12, s) steps, so the figure has that many sides, and there are
// gcd(12, s) disjoint copies of it around the circle (its symmetry order).
// Major thirds give 4 triangles, minor thirds 3 squares, the tritone 6
// diameters. Intervals coprime with 12 (1, 5, 7, 11) visit every pitch class
// in one 12-sided figure.
//
// Unison is special-cased as a point; it does not go through the gcd.

use serde::Serialize;

use crate::pitch::{PITCH_CLASS_COUNT, PitchClass};

/// The figure an interval traces around the circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeometricPattern {
    /// Semitones actually classified, in [0, 12).
    pub semitones: u8,
    /// Vertices of one traced figure.
    pub sides: u8,
    /// Number of disjoint copies of the figure (rotational symmetry order).
    pub symmetry: u8,
    pub description: String,
}

/// Greatest common divisor by Euclid's algorithm. `gcd(n, 0) == n`.
pub fn gcd(a: u8, b: u8) -> u8 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Shape name for a side count. Only the small regular figures are named;
/// everything else (including the 12-pointed figures) gets a generic label.
fn shape_name(sides: u8) -> String {
    match sides {
        1 => "Circle".to_string(),
        2 => "Line".to_string(),
        3 => "Triangle".to_string(),
        4 => "Square".to_string(),
        6 => "Hexagon".to_string(),
        n => format!("{n}-sided polygon"),
    }
}

/// Classify the figure traced by repeatedly stepping `semitones` (mod 12).
pub fn classify_interval(semitones: u8) -> GeometricPattern {
    let semitones = semitones % PITCH_CLASS_COUNT;
    if semitones == 0 {
        return GeometricPattern {
            semitones,
            sides: 1,
            symmetry: PITCH_CLASS_COUNT,
            description: "Point (no movement)".to_string(),
        };
    }

    let common = gcd(PITCH_CLASS_COUNT, semitones);
    let sides = PITCH_CLASS_COUNT / common;
    GeometricPattern {
        semitones,
        sides,
        symmetry: common,
        description: shape_name(sides),
    }
}

/// One chord per pitch class: `(i, i + semitones)` for every i in order.
///
/// Duplicate and degenerate edges are kept, e.g. the tritone yields each
/// diameter twice and unison yields 12 self-loops.
pub fn connection_edges(semitones: u8) -> [(PitchClass, PitchClass); 12] {
    PitchClass::ALL.map(|pc| (pc, pc.transpose(semitones as i32)))
}

/// The cycle of pitch classes visited from `start` by repeatedly stepping
/// `semitones`, stopping before returning to `start`. Its length equals the
/// pattern's side count.
pub fn interval_orbit(start: PitchClass, semitones: u8) -> Vec<PitchClass> {
    let mut orbit = vec![start];
    let mut current = start.transpose(semitones as i32);
    while current != start {
        orbit.push(current);
        current = current.transpose(semitones as i32);
    }
    orbit
}
