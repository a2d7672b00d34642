// Tonal Circle: pitch-class arithmetic for music-theory visualizers.
//
// Computes the semantic data behind four views of the 12-tone circle (circle
// of fifths, interval geometry, modal scales, chord progressions). Everything
// is pure modular arithmetic over small static tables: no I/O, no shared
// state, and identical inputs always give identical outputs. A presentation
// layer owns the selections and all drawing; this crate never produces
// coordinates or styling beyond the fixed display colors in its tables.
//
// Architecture:
// - pitch.rs: `PitchClass`, mod-12 arithmetic, note name lookup
// - mode.rs: the seven modes, scale derivation, whole/half step patterns
// - chord.rs: triads, roman numerals, progression analysis (major-key only)
// - progression.rs: built-in named progressions
// - interval.rs: the twelve simple intervals and their display metadata
// - geometry.rs: gcd-based polygon classification and circle edges
// - fifths.rs: fifths ordering and related keys
// - playback.rs: timeline for the simulated "Play" highlight
// - error.rs: `TheoryError`
//
// The library logs derivations through the `log` facade at debug/trace
// level and never installs a logger itself.

pub mod chord;
pub mod error;
pub mod fifths;
pub mod geometry;
pub mod interval;
pub mod mode;
pub mod pitch;
pub mod playback;
pub mod progression;

// Re-export the call surface at crate root for convenience.
pub use chord::{
    Chord, ChordQuality, HarmonicFunction, RomanNumeral, analyze_numerals, analyze_progression,
    build_triad,
};
pub use error::TheoryError;
pub use fifths::{CIRCLE_OF_FIFTHS, related_keys};
pub use geometry::{GeometricPattern, classify_interval, connection_edges};
pub use interval::{Interval, list_intervals};
pub use mode::{Mode, ModeInfo, Scale, Step, derive_scale, interval_pattern, list_modes};
pub use pitch::{PitchClass, index_of, pitch_class_at};
pub use playback::PlaybackPlan;
pub use progression::{Progression, list_progressions};
