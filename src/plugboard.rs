//! Plugboard: the substitution applied on entry to and exit from the rotor stack.

use std::path::Path;

use crate::error::ConfigurationError;
use crate::substitution::Substitution;
use crate::utils::alphabet::{check_position, index_to_letter, letter_to_index, ALPHABET_LEN};
use crate::wiring::{read_wiring_file, Wiring};

/// Plugboard (Steckerbrett).
///
/// Conventionally an involution built from cable pairs, with unplugged
/// letters mapping to themselves. The engine does not rely on that: it
/// enters with [`translate`](Substitution::translate) and leaves with
/// [`inverse_translate`](Substitution::inverse_translate), so any
/// permutation round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Wiring,
    position: u8,
}

impl Plugboard {
    /// Wraps a wiring table as a plugboard at position 0.
    pub fn new(wiring: Wiring) -> Self {
        if !wiring.is_involution() {
            tracing::warn!(
                wiring = %wiring,
                "plugboard wiring is not an involution; pairs are not symmetric"
            );
        }
        Plugboard {
            wiring,
            position: 0,
        }
    }

    /// A plugboard with no cables.
    pub fn identity() -> Self {
        Self::new(Wiring::identity())
    }

    /// Parses a full 26-letter plugboard table.
    ///
    /// # Errors
    /// As [`Wiring::parse`].
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::new(Wiring::parse(text)?))
    }

    /// Reads a 26-letter plugboard table from a file.
    ///
    /// # Errors
    /// [`ConfigurationError::Io`] if the file cannot be read, otherwise as
    /// [`Wiring::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::parse(&read_wiring_file(path.as_ref())?)
    }

    /// Builds a plugboard from cable pairs such as `"AM FI NV"`.
    ///
    /// Pairs are separated by whitespace or commas. An empty string gives
    /// the identity plugboard.
    ///
    /// # Errors
    /// - [`ConfigurationError::WrongLength`] for a pair that is not two letters.
    /// - [`ConfigurationError::InvalidSymbol`] for a character outside the alphabet.
    /// - [`ConfigurationError::DuplicatePlug`] if a letter is used twice or
    ///   plugged to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Plugboard, Substitution};
    ///
    /// let board = Plugboard::from_pairs("AM FI").unwrap();
    /// assert_eq!(board.translate_letter('A'), Some('M'));
    /// assert_eq!(board.translate_letter('M'), Some('A'));
    /// assert_eq!(board.translate_letter('B'), Some('B'));
    /// ```
    pub fn from_pairs(pairs: &str) -> Result<Self, ConfigurationError> {
        let mut table: Vec<usize> = (0..ALPHABET_LEN).collect();
        let mut plugged = [false; ALPHABET_LEN];

        let mut offset = 0;
        for token in pairs.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                offset += 1;
                continue;
            }
            let letters: Vec<char> = token.chars().collect();
            if letters.len() != 2 {
                return Err(ConfigurationError::WrongLength {
                    expected: 2,
                    found: letters.len(),
                });
            }
            let mut ends = [0usize; 2];
            for (k, &symbol) in letters.iter().enumerate() {
                let index = letter_to_index(symbol).ok_or(ConfigurationError::InvalidSymbol {
                    symbol,
                    offset: offset + k,
                })? as usize;
                if plugged[index] {
                    return Err(ConfigurationError::DuplicatePlug {
                        letter: index_to_letter(index as u8),
                    });
                }
                plugged[index] = true;
                ends[k] = index;
            }
            table.swap(ends[0], ends[1]);
            offset += token.len() + 1;
        }

        Ok(Self::new(Wiring::from_indices(&table)?))
    }

    /// Re-keys the plugboard's rotational offset.
    ///
    /// # Errors
    /// [`ConfigurationError::PositionOutOfRange`] if `position > 25`.
    pub fn set_position(&mut self, position: usize) -> Result<(), ConfigurationError> {
        self.position = check_position(position)?;
        Ok(())
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Substitution for Plugboard {
    fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    fn position(&self) -> u8 {
        self.position
    }
}
