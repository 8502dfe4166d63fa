//! RotorStack: ordered rotors, fastest first.
//!
//! The stack owns its rotors and drives the per-keystroke stepping pass and
//! the two chained signal passes through them.

use crate::error::ConfigurationError;
use crate::rotor::Rotor;
use crate::substitution::Substitution;
use crate::utils::alphabet::{check_position, positions_to_letters};

/// Rotors ordered from fastest (index 0) to slowest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotorStack {
    rotors: Vec<Rotor>,
}

impl RotorStack {
    /// Creates a stack from rotors given fastest first.
    pub fn new(rotors: Vec<Rotor>) -> Self {
        RotorStack { rotors }
    }

    /// Number of rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Returns `true` for a stack without rotors.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Rotors, fastest first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Current positions, fastest first.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(|r| r.position()).collect()
    }

    /// Current positions as window letters, fastest first.
    pub fn window(&self) -> String {
        positions_to_letters(&self.positions())
    }

    /// Re-keys every rotor and disengages every ratchet.
    ///
    /// All positions are validated before any rotor is touched, so a
    /// failed call leaves the stack unchanged.
    ///
    /// # Parameters
    /// - `positions`: One position per rotor, fastest first.
    ///
    /// # Errors
    /// - [`ConfigurationError::PositionCountMismatch`] if the length differs
    ///   from the number of rotors.
    /// - [`ConfigurationError::PositionOutOfRange`] for a value above 25.
    pub fn set_positions(&mut self, positions: &[u8]) -> Result<(), ConfigurationError> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigurationError::PositionCountMismatch {
                expected: self.rotors.len(),
                found: positions.len(),
            });
        }
        for &p in positions {
            check_position(p as usize)?;
        }
        for (rotor, &p) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(p as usize)?;
        }
        Ok(())
    }

    /// Runs one stepping pass: each rotor, fastest to slowest, steps with its
    /// faster neighbour.
    pub fn step(&mut self) {
        for i in 0..self.rotors.len() {
            let (faster, rest) = self.rotors.split_at_mut(i);
            rest[0].step(faster.last_mut());
        }
    }

    /// Chains [`translate`](Substitution::translate) from fastest to slowest.
    pub fn forward(&self, index: u8) -> u8 {
        self.rotors.iter().fold(index, |signal, r| r.translate(signal))
    }

    /// Chains [`inverse_translate`](Substitution::inverse_translate) from
    /// slowest to fastest.
    pub fn backward(&self, index: u8) -> u8 {
        self.rotors
            .iter()
            .rev()
            .fold(index, |signal, r| r.inverse_translate(signal))
    }

    /// Like [`forward`](Self::forward), recording the signal after each rotor.
    pub(crate) fn forward_traced(&self, index: u8, taps: &mut Vec<u8>) -> u8 {
        self.rotors.iter().fold(index, |signal, r| {
            let out = r.translate(signal);
            taps.push(out);
            out
        })
    }

    /// Like [`backward`](Self::backward), recording the signal after each rotor.
    pub(crate) fn backward_traced(&self, index: u8, taps: &mut Vec<u8>) -> u8 {
        self.rotors.iter().rev().fold(index, |signal, r| {
            let out = r.inverse_translate(signal);
            taps.push(out);
            out
        })
    }
}

impl From<Vec<Rotor>> for RotorStack {
    fn from(rotors: Vec<Rotor>) -> Self {
        Self::new(rotors)
    }
}
