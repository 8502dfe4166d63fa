//! Error types for the enigma-machine library.

use thiserror::Error;

/// Errors produced while building or re-keying a machine.
///
/// Every variant is raised at construction or re-key time. Message
/// processing itself never fails: symbols outside the alphabet are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No wiring source was supplied (or more than one was).
    #[error("No wiring system provided: supply exactly one wiring source")]
    MissingWiring,

    /// The wiring table does not contain the expected number of entries.
    #[error("Wiring must contain {expected} entries, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// A symbol outside the alphabet appeared where a wiring entry was expected.
    #[error("Symbol {symbol:?} at offset {offset} is not in the alphabet")]
    InvalidSymbol { symbol: char, offset: usize },

    /// A pre-resolved numeric entry lies outside [0, 25].
    #[error("Index {index} is outside the alphabet range 0..=25")]
    IndexOutOfRange { index: usize },

    /// The wiring maps two inputs to the same output.
    #[error("Index {index} appears more than once; wiring is not a permutation")]
    DuplicateIndex { index: usize },

    /// A letter was found where the rotor notch separator was expected.
    #[error("Expected a separator before the notch, found letter {symbol:?}")]
    InvalidSeparator { symbol: char },

    /// A rotor description carries no notch.
    #[error("Rotor description has no notch")]
    MissingNotch,

    /// A rotor description carries more than two notches.
    #[error("Rotor description has {found} notches; at most 2 are allowed")]
    TooManyNotches { found: usize },

    /// Non-whitespace data follows a complete wiring table.
    #[error("Unexpected trailing data at offset {offset}")]
    TrailingData { offset: usize },

    /// A reflector maps a letter onto itself.
    #[error("Reflector maps {letter} onto itself")]
    FixedPoint { letter: char },

    /// A reflector wiring is not its own inverse.
    #[error("Reflector wiring is not an involution at {letter}")]
    NotAnInvolution { letter: char },

    /// The number of positions does not match the number of rotors.
    #[error("Expected {expected} rotor positions, found {found}")]
    PositionCountMismatch { expected: usize, found: usize },

    /// A rotor position lies outside [0, 25].
    #[error("Position {position} is outside the range 0..=25")]
    PositionOutOfRange { position: usize },

    /// A plugboard letter is used by more than one cable.
    #[error("Plugboard letter {letter} is plugged more than once")]
    DuplicatePlug { letter: char },

    /// No built-in rotor or reflector with this name.
    #[error("Unknown preset {name:?}")]
    UnknownPreset { name: String },

    /// A wiring or config file could not be read.
    #[error("Unable to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// A config file could not be parsed.
    #[error("Unable to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}
