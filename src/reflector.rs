//! Reflector: the fixed involution that turns the signal back through the rotors.

use std::path::Path;

use crate::catalog;
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::substitution::Substitution;
use crate::utils::alphabet::{check_position, index_to_letter};
use crate::wiring::{read_wiring_file, Wiring};

/// Reflector (Umkehrwalze).
///
/// The wiring must be a fixed-point-free involution: no letter maps to
/// itself and every pair is symmetric. This is checked at construction, so
/// the engine only ever calls [`translate`](Substitution::translate) on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
    position: u8,
}

impl Reflector {
    /// Wraps a wiring table as a reflector at position 0.
    ///
    /// # Errors
    /// - [`ConfigurationError::FixedPoint`] if a letter maps to itself.
    /// - [`ConfigurationError::NotAnInvolution`] if the wiring is not its own inverse.
    pub fn new(wiring: Wiring) -> Result<Self, ConfigurationError> {
        if let Some(letter) = wiring.fixed_points().next() {
            return Err(ConfigurationError::FixedPoint {
                letter: index_to_letter(letter),
            });
        }
        if let Some(letter) = (0..26u8).find(|&i| wiring.forward(wiring.forward(i)) != i) {
            return Err(ConfigurationError::NotAnInvolution {
                letter: index_to_letter(letter),
            });
        }
        Ok(Reflector {
            wiring,
            position: 0,
        })
    }

    /// Parses a 26-letter reflector table.
    ///
    /// # Errors
    /// As [`Wiring::parse`] and [`new`](Self::new).
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        Self::new(Wiring::parse(text)?)
    }

    /// Reads a 26-letter reflector table from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::parse(&read_wiring_file(path.as_ref())?)
    }

    /// Builds a reflector from 13 letter pairs, e.g. `"AY BR CU ..."`.
    ///
    /// # Errors
    /// As [`Plugboard::from_pairs`], plus [`ConfigurationError::FixedPoint`]
    /// when fewer than 13 pairs leave letters unpaired.
    pub fn from_pairs(pairs: &str) -> Result<Self, ConfigurationError> {
        let board = Plugboard::from_pairs(pairs)?;
        Self::new(board.wiring().clone())
    }

    /// Returns a historical reflector by name (`"B"` or `"C"`).
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownPreset`] for an unknown name.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Reflector, Substitution};
    ///
    /// let ukw_b = Reflector::preset("B").unwrap();
    /// assert_eq!(ukw_b.translate_letter('A'), Some('Y'));
    /// assert!(Reflector::preset("Z").is_err());
    /// ```
    pub fn preset(name: &str) -> Result<Self, ConfigurationError> {
        let preset = catalog::reflector(name).ok_or_else(|| ConfigurationError::UnknownPreset {
            name: name.to_string(),
        })?;
        Self::parse(preset.wiring)
    }

    /// Re-keys the reflector's rotational offset.
    ///
    /// A rotated involution is still an involution, so reversibility holds
    /// at any position.
    ///
    /// # Errors
    /// [`ConfigurationError::PositionOutOfRange`] if `position > 25`.
    pub fn set_position(&mut self, position: usize) -> Result<(), ConfigurationError> {
        self.position = check_position(position)?;
        Ok(())
    }
}

impl Substitution for Reflector {
    fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    fn position(&self) -> u8 {
        self.position
    }
}
