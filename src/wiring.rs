//! Wiring tables: validated permutations of the alphabet.
//!
//! A [`Wiring`] is the fixed internal cabling of a substitution stage. It is
//! built once from a textual or pre-resolved description and never changes
//! afterwards. The inverse permutation is computed at construction so that
//! both directions of the signal path are O(1) table lookups.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// One entry of a wiring description.
///
/// Loaders may hand the core either raw letters or indices they have
/// already resolved; both may be mixed in one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringSymbol {
    /// An alphabet letter, resolved case-insensitively.
    Letter(char),
    /// A pre-resolved alphabet index.
    Index(usize),
}

impl WiringSymbol {
    /// Resolves the symbol to an alphabet index.
    ///
    /// # Parameters
    /// - `offset`: Position of the symbol in its description, for error reporting.
    ///
    /// # Errors
    /// - [`ConfigurationError::InvalidSymbol`] for a character outside the alphabet.
    /// - [`ConfigurationError::IndexOutOfRange`] for an index above 25.
    pub fn resolve(self, offset: usize) -> Result<u8, ConfigurationError> {
        match self {
            WiringSymbol::Letter(symbol) => {
                letter_to_index(symbol).ok_or(ConfigurationError::InvalidSymbol { symbol, offset })
            }
            WiringSymbol::Index(index) if index < ALPHABET_LEN => Ok(index as u8),
            WiringSymbol::Index(index) => Err(ConfigurationError::IndexOutOfRange { index }),
        }
    }
}

impl From<char> for WiringSymbol {
    fn from(c: char) -> Self {
        WiringSymbol::Letter(c)
    }
}

impl From<usize> for WiringSymbol {
    fn from(index: usize) -> Self {
        WiringSymbol::Index(index)
    }
}

/// A bijective mapping over alphabet indices, with its inverse.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Returns the identity wiring (every letter maps to itself).
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Wiring {
            forward,
            inverse: forward,
        }
    }

    /// Builds a wiring from 26 alphabet indices in input order.
    ///
    /// # Errors
    /// - [`ConfigurationError::WrongLength`] if `indices.len() != 26`.
    /// - [`ConfigurationError::IndexOutOfRange`] for an index above 25.
    /// - [`ConfigurationError::DuplicateIndex`] if the indices are not a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Wiring;
    ///
    /// let shifted: Vec<usize> = (0..26).map(|i| (i + 1) % 26).collect();
    /// let wiring = Wiring::from_indices(&shifted).unwrap();
    /// assert_eq!(wiring.forward(25), 0);
    /// assert_eq!(wiring.inverse(0), 25);
    /// ```
    pub fn from_indices(indices: &[usize]) -> Result<Self, ConfigurationError> {
        let symbols: Vec<WiringSymbol> = indices.iter().map(|&i| WiringSymbol::Index(i)).collect();
        Self::from_symbols(&symbols)
    }

    /// Builds a wiring from exactly 26 symbols (letters and/or indices).
    ///
    /// # Errors
    /// Same as [`from_indices`](Self::from_indices), plus
    /// [`ConfigurationError::InvalidSymbol`] for a letter outside the alphabet.
    pub fn from_symbols(symbols: &[WiringSymbol]) -> Result<Self, ConfigurationError> {
        if symbols.len() != ALPHABET_LEN {
            return Err(ConfigurationError::WrongLength {
                expected: ALPHABET_LEN,
                found: symbols.len(),
            });
        }

        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (offset, symbol) in symbols.iter().enumerate() {
            let target = symbol.resolve(offset)?;
            if seen[target as usize] {
                return Err(ConfigurationError::DuplicateIndex {
                    index: target as usize,
                });
            }
            seen[target as usize] = true;
            forward[offset] = target;
            inverse[target as usize] = offset as u8;
        }

        Ok(Wiring { forward, inverse })
    }

    /// Parses a 26-letter wiring table such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// Letters are case-insensitive. Trailing whitespace (a file's final
    /// newline) is ignored; any other trailing data is rejected.
    ///
    /// # Errors
    /// - [`ConfigurationError::WrongLength`] if fewer than 26 symbols are present.
    /// - [`ConfigurationError::TrailingData`] if anything but whitespace follows them.
    /// - [`ConfigurationError::InvalidSymbol`] / [`ConfigurationError::DuplicateIndex`]
    ///   for a table that is not a permutation of the alphabet.
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        let symbols: Vec<WiringSymbol> = text.trim_end().chars().map(WiringSymbol::Letter).collect();
        if symbols.len() > ALPHABET_LEN {
            return Err(ConfigurationError::TrailingData {
                offset: ALPHABET_LEN,
            });
        }
        Self::from_symbols(&symbols)
    }

    /// Reads and parses a wiring table from a file.
    ///
    /// # Errors
    /// [`ConfigurationError::Io`] if the file cannot be read, otherwise as
    /// [`parse`](Self::parse).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::parse(&read_wiring_file(path.as_ref())?)
    }

    /// Output index for input `index` (no rotational offset).
    #[inline]
    pub fn forward(&self, index: u8) -> u8 {
        self.forward[index as usize % ALPHABET_LEN]
    }

    /// Input index whose output is `index` (no rotational offset).
    #[inline]
    pub fn inverse(&self, index: u8) -> u8 {
        self.inverse[index as usize % ALPHABET_LEN]
    }

    /// Returns `true` if the wiring is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Returns the indices that map onto themselves.
    pub fn fixed_points(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_LEN as u8).filter(move |&i| self.forward(i) == i)
    }

    /// Returns the forward table as 26 uppercase letters.
    pub fn to_letters(&self) -> String {
        self.forward.iter().map(|&i| index_to_letter(i)).collect()
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for Wiring {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl fmt::Debug for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wiring({})", self.to_letters())
    }
}

/// Reads a wiring file into a string, mapping IO failures to configuration errors.
pub(crate) fn read_wiring_file(path: &Path) -> Result<String, ConfigurationError> {
    fs::read_to_string(path).map_err(|e| ConfigurationError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
