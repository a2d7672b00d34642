// Error taxonomy for the theory core.
//
// Every failure is a local validation failure on caller input: a name, id or
// numeral that is not in one of the fixed tables. Nothing here is retryable
// since the core does no I/O. Derivations that take typed enums cannot fail;
// these errors surface at the string boundary (`FromStr`, `from_id`,
// `analyze_numerals`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Name is not one of the 12 chromatic spellings (or half of an
    /// enharmonic pair such as "C♯/D♭").
    #[error("unknown note name: {0:?}")]
    UnknownNote(String),

    #[error("unknown roman numeral: {0:?}")]
    UnknownNumeral(String),

    #[error("invalid chord quality: {0:?} (expected Major, Minor or Diminished)")]
    InvalidChordQuality(String),

    #[error("invalid mode: {0:?}")]
    InvalidMode(String),

    #[error("unknown progression id: {0:?}")]
    UnknownProgression(String),

    #[error("unknown interval id: {0:?}")]
    UnknownInterval(String),
}
