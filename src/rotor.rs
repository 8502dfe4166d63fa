//! Rotor: a substitution stage with a ratchet-and-pawl stepping state machine.
//!
//! Each rotor carries one or two notch positions and a `ratchet_engaged`
//! flag. On every keystroke the stack calls [`Rotor::step`] on each rotor
//! from fastest to slowest, handing it a mutable reference to its faster
//! neighbour so the pawl linkage can be modelled without shared state.
//!
//! The two checks in `step` reproduce the mechanical double-step anomaly:
//! a rotor that steps re-arms its faster neighbour for the following cycle,
//! and a rotor whose faster neighbour sits on its first notch arms itself.

use std::fmt;
use std::path::Path;

use crate::catalog;
use crate::error::ConfigurationError;
use crate::substitution::Substitution;
use crate::utils::alphabet::{check_position, index_to_letter, rotate_in, ALPHABET_LEN};
use crate::wiring::{read_wiring_file, Wiring, WiringSymbol};

/// Maximum number of notches on a rotor.
const MAX_NOTCHES: usize = 2;

/// One or two notch positions.
///
/// Only [`first`](Self::first) participates in the stepping decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notch {
    first: u8,
    second: Option<u8>,
}

impl Notch {
    /// A single notch.
    ///
    /// # Errors
    /// [`ConfigurationError::IndexOutOfRange`] if `position > 25`.
    pub fn single(position: usize) -> Result<Self, ConfigurationError> {
        Self::from_symbols(&[WiringSymbol::Index(position)])
    }

    /// Builds a notch set from 1–2 symbols.
    ///
    /// # Errors
    /// - [`ConfigurationError::MissingNotch`] for an empty slice.
    /// - [`ConfigurationError::TooManyNotches`] for more than two symbols.
    /// - [`ConfigurationError::InvalidSymbol`] / [`ConfigurationError::IndexOutOfRange`]
    ///   for a symbol outside the alphabet.
    pub fn from_symbols(symbols: &[WiringSymbol]) -> Result<Self, ConfigurationError> {
        match symbols.len() {
            0 => return Err(ConfigurationError::MissingNotch),
            n if n > MAX_NOTCHES => return Err(ConfigurationError::TooManyNotches { found: n }),
            _ => {}
        }
        let first = symbols[0].resolve(ALPHABET_LEN)?;
        let second = match symbols.get(1) {
            Some(symbol) => Some(symbol.resolve(ALPHABET_LEN + 1)?),
            None => None,
        };
        Ok(Notch { first, second })
    }

    /// Parses notch letters, e.g. `"Q"` or `"ZM"`.
    pub fn parse(letters: &str) -> Result<Self, ConfigurationError> {
        let symbols: Vec<WiringSymbol> = letters.chars().map(WiringSymbol::Letter).collect();
        Self::from_symbols(&symbols)
    }

    /// The notch that drives the stepping decision.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// All notch positions.
    pub fn positions(&self) -> impl Iterator<Item = u8> {
        std::iter::once(self.first).chain(self.second)
    }
}

impl fmt::Display for Notch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.positions() {
            write!(f, "{}", index_to_letter(p))?;
        }
        Ok(())
    }
}

/// A stepping rotor (Walze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notch: Notch,
    position: u8,
    ratchet_engaged: bool,
}

impl Rotor {
    /// Builds a rotor at position 0 with its ratchet disengaged.
    pub fn new(wiring: Wiring, notch: Notch) -> Self {
        Rotor {
            wiring,
            notch,
            position: 0,
            ratchet_engaged: false,
        }
    }

    /// Parses the textual rotor layout.
    ///
    /// ```text
    /// EKMFLGDQVZNTOWYHXUSPAIBRCJ Q
    /// ^ 26 wiring letters       ^ ^ 1-2 notch letters
    ///                           separator (any non-letter)
    /// ```
    ///
    /// Trailing whitespace is ignored.
    ///
    /// # Errors
    /// - As [`Wiring::from_symbols`] for the first 26 symbols.
    /// - [`ConfigurationError::MissingNotch`] if nothing follows the wiring.
    /// - [`ConfigurationError::InvalidSeparator`] if symbol 26 is a letter.
    /// - [`ConfigurationError::TooManyNotches`] for more than two notch letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Rotor;
    ///
    /// let rotor = Rotor::parse("EKMFLGDQVZNTOWYHXUSPAIBRCJ:Q").unwrap();
    /// assert_eq!(rotor.notch().first(), 16);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        let chars: Vec<char> = text.trim_end().chars().collect();
        if chars.len() < ALPHABET_LEN {
            return Err(ConfigurationError::WrongLength {
                expected: ALPHABET_LEN,
                found: chars.len(),
            });
        }

        let wiring_symbols: Vec<WiringSymbol> = chars[..ALPHABET_LEN]
            .iter()
            .map(|&c| WiringSymbol::Letter(c))
            .collect();
        let wiring = Wiring::from_symbols(&wiring_symbols)?;

        let separator = match chars.get(ALPHABET_LEN) {
            Some(&c) => c,
            None => return Err(ConfigurationError::MissingNotch),
        };
        if separator.is_alphabetic() {
            return Err(ConfigurationError::InvalidSeparator { symbol: separator });
        }

        let mut notch_symbols = Vec::with_capacity(MAX_NOTCHES);
        for (k, &symbol) in chars[ALPHABET_LEN + 1..].iter().enumerate() {
            let offset = ALPHABET_LEN + 1 + k;
            if !symbol.is_ascii_alphabetic() {
                return Err(ConfigurationError::InvalidSymbol { symbol, offset });
            }
            notch_symbols.push(WiringSymbol::Letter(symbol));
        }
        let notch = Notch::from_symbols(&notch_symbols)?;

        Ok(Self::new(wiring, notch))
    }

    /// Builds a rotor from pre-tokenized symbols: 26 wiring entries followed
    /// directly by 1–2 notch entries.
    ///
    /// # Errors
    /// - [`ConfigurationError::MissingNotch`] for exactly 26 symbols.
    /// - [`ConfigurationError::WrongLength`] for fewer than 26.
    /// - As [`Wiring::from_symbols`] and [`Notch::from_symbols`].
    pub fn from_symbols(symbols: &[WiringSymbol]) -> Result<Self, ConfigurationError> {
        if symbols.len() < ALPHABET_LEN {
            return Err(ConfigurationError::WrongLength {
                expected: ALPHABET_LEN,
                found: symbols.len(),
            });
        }
        let (wiring, notch) = symbols.split_at(ALPHABET_LEN);
        Ok(Self::new(
            Wiring::from_symbols(wiring)?,
            Notch::from_symbols(notch)?,
        ))
    }

    /// Reads a rotor in the textual layout from a file.
    ///
    /// # Errors
    /// [`ConfigurationError::Io`] if the file cannot be read, otherwise as
    /// [`parse`](Self::parse).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::parse(&read_wiring_file(path.as_ref())?)
    }

    /// Returns a historical rotor by name (`"I"` through `"VIII"`).
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownPreset`] for an unknown name.
    pub fn preset(name: &str) -> Result<Self, ConfigurationError> {
        let preset = catalog::rotor(name).ok_or_else(|| ConfigurationError::UnknownPreset {
            name: name.to_string(),
        })?;
        Ok(Self::new(
            Wiring::parse(preset.wiring)?,
            Notch::parse(preset.notches)?,
        ))
    }

    /// The rotor's notch set.
    pub fn notch(&self) -> &Notch {
        &self.notch
    }

    /// Returns `true` if the rotor will advance on the next stepping pass.
    pub fn is_engaged(&self) -> bool {
        self.ratchet_engaged
    }

    /// Returns `true` if the rotor sits on its first notch.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch.first
    }

    /// Sets the rotor position and disengages its ratchet.
    ///
    /// # Errors
    /// [`ConfigurationError::PositionOutOfRange`] if `position > 25`.
    pub fn set_position(&mut self, position: usize) -> Result<(), ConfigurationError> {
        self.position = check_position(position)?;
        self.ratchet_engaged = false;
        Ok(())
    }

    /// Runs one stepping pass for this rotor.
    ///
    /// # Parameters
    /// - `preceding`: The next-faster rotor, or `None` if this is the fastest.
    ///
    /// The fastest rotor always arms itself. An armed rotor disarms,
    /// advances by one, and arms its faster neighbour for the following
    /// pass. Independently, if the faster neighbour sits on its first notch,
    /// this rotor arms itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::Rotor;
    ///
    /// let mut fast = Rotor::preset("III").unwrap();
    /// for _ in 0..30 {
    ///     fast.step(None);
    /// }
    /// assert_eq!(fast.position_letter(), 'E');
    /// ```
    pub fn step(&mut self, mut preceding: Option<&mut Rotor>) {
        if preceding.is_none() {
            self.ratchet_engaged = true;
        }
        if self.ratchet_engaged {
            self.ratchet_engaged = false;
            self.position = rotate_in(self.position, 1);
            if let Some(prev) = preceding.as_deref_mut() {
                prev.ratchet_engaged = true;
            }
        }
        if let Some(prev) = preceding {
            if prev.at_notch() {
                self.ratchet_engaged = true;
            }
        }
    }

    /// Current position as the letter shown in the rotor window.
    pub fn position_letter(&self) -> char {
        index_to_letter(self.position)
    }
}

impl Substitution for Rotor {
    fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    fn position(&self) -> u8 {
        self.position
    }
}
