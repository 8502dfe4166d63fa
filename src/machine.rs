//! EnigmaMachine: the per-symbol cipher pipeline.
//!
//! For every accepted symbol:
//!
//! ```text
//! step rotors → plugboard → rotors (fast→slow) → reflector
//!             → rotors⁻¹ (slow→fast) → plugboard⁻¹ → output
//! ```
//!
//! Because every stage satisfies the translate/inverse-translate law and the
//! reflector is an involution, the pipeline is its own inverse: a machine
//! re-keyed to the same positions turns ciphertext back into plaintext.

use std::fmt;

use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_stack::RotorStack;
use crate::substitution::Substitution;
use crate::utils::alphabet::{index_to_letter, letter_to_index, positions_to_letters, ALPHABET_LEN};

/// A complete rotor cipher machine.
///
/// The machine is stateful: every processed symbol steps the rotors. One
/// instance represents one conversation and needs `&mut self` to advance,
/// so concurrent callers must each own a machine or serialize access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    plugboard: Plugboard,
    rotors: RotorStack,
    reflector: Reflector,
}

impl EnigmaMachine {
    /// Assembles a machine from its stages. Rotors are given fastest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaMachine, Plugboard, Reflector, Rotor};
    ///
    /// let rotors = vec![
    ///     Rotor::preset("III").unwrap(),
    ///     Rotor::preset("II").unwrap(),
    ///     Rotor::preset("I").unwrap(),
    /// ];
    /// let mut machine = EnigmaMachine::new(
    ///     Plugboard::identity(),
    ///     rotors,
    ///     Reflector::preset("B").unwrap(),
    /// );
    /// machine.set_positions(&[0, 0, 0]).unwrap();
    /// assert_eq!(machine.encrypt_or_decrypt("AAAAA"), "BDZGO");
    /// ```
    pub fn new(plugboard: Plugboard, rotors: impl Into<RotorStack>, reflector: Reflector) -> Self {
        EnigmaMachine {
            plugboard,
            rotors: rotors.into(),
            reflector,
        }
    }

    /// The plugboard stage.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The rotor stack.
    pub fn rotors(&self) -> &RotorStack {
        &self.rotors
    }

    /// The reflector stage.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Current rotor positions, fastest first.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.positions()
    }

    /// Re-keys the rotor stack before a message.
    ///
    /// # Parameters
    /// - `positions`: One position in `0..=25` per rotor, fastest first.
    ///
    /// # Errors
    /// - [`ConfigurationError::PositionCountMismatch`] if the length differs
    ///   from the number of rotors.
    /// - [`ConfigurationError::PositionOutOfRange`] for a value above 25.
    ///
    /// On error the machine is left unchanged.
    pub fn set_positions(&mut self, positions: &[u8]) -> Result<(), ConfigurationError> {
        self.rotors.set_positions(positions)?;
        tracing::debug!(window = %positions_to_letters(positions), "rotor stack re-keyed");
        Ok(())
    }

    /// Processes one symbol through the full reflector pipeline.
    ///
    /// # Returns
    /// The output letter, or `None` if `symbol` is not a letter. Skipped
    /// symbols leave the machine untouched.
    pub fn press_key(&mut self, symbol: char) -> Option<char> {
        let index = letter_to_index(symbol)?;
        self.rotors.step();
        let out = self.reflect_path(index);
        tracing::trace!(
            input = %symbol,
            output = %index_to_letter(out),
            window = %self.rotors.window(),
            "keystroke"
        );
        Some(index_to_letter(out))
    }

    /// Encrypts or decrypts `text` from the current rotor positions.
    ///
    /// Letters are case-normalized; everything else is dropped. The
    /// operation is its own inverse under matching positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::enigma_i(["I", "II", "III"], "B").unwrap();
    /// machine.set_positions(&[0, 0, 0]).unwrap();
    /// let cipher = machine.encrypt_or_decrypt("Hello, World!");
    ///
    /// machine.set_positions(&[0, 0, 0]).unwrap();
    /// assert_eq!(machine.encrypt_or_decrypt(&cipher), "HELLOWORLD");
    /// ```
    pub fn encrypt_or_decrypt(&mut self, text: &str) -> String {
        tracing::debug!(
            len = text.len(),
            window = %self.rotors.window(),
            "converting message"
        );
        let out: String = text.chars().filter_map(|c| self.press_key(c)).collect();
        tracing::debug!(
            converted = out.len(),
            window = %self.rotors.window(),
            "message converted"
        );
        out
    }

    /// Re-keys to `positions`, then runs [`encrypt_or_decrypt`](Self::encrypt_or_decrypt).
    ///
    /// # Errors
    /// As [`set_positions`](Self::set_positions).
    pub fn convert_message(&mut self, positions: &[u8], text: &str) -> Result<String, ConfigurationError> {
        self.set_positions(positions)?;
        Ok(self.encrypt_or_decrypt(text))
    }

    /// Runs the pipeline without the reflector: stepping, plugboard and the
    /// forward rotor pass only.
    ///
    /// Diagnostic use; the output is not guaranteed to be reversible.
    pub fn forward_only(&mut self, text: &str) -> String {
        text.chars()
            .filter_map(letter_to_index)
            .map(|index| {
                self.rotors.step();
                let signal = self.plugboard.translate(index);
                index_to_letter(self.rotors.forward(signal))
            })
            .collect()
    }

    /// Processes one symbol, recording the signal after every stage.
    ///
    /// Steps the machine exactly as [`press_key`](Self::press_key) does.
    pub fn press_traced(&mut self, symbol: char) -> Option<SignalTrace> {
        let index = letter_to_index(symbol)?;
        self.rotors.step();

        let plugboard_in = self.plugboard.translate(index);
        let mut rotors_forward = Vec::with_capacity(self.rotors.len());
        let to_reflector = self.rotors.forward_traced(plugboard_in, &mut rotors_forward);
        let reflected = self.reflector.translate(to_reflector);
        let mut rotors_backward = Vec::with_capacity(self.rotors.len());
        let from_rotors = self.rotors.backward_traced(reflected, &mut rotors_backward);
        let output = self.plugboard.inverse_translate(from_rotors);

        let as_letters =
            |taps: Vec<u8>| -> Vec<char> { taps.into_iter().map(index_to_letter).collect() };
        Some(SignalTrace {
            input: index_to_letter(index),
            window: self.rotors.window(),
            plugboard_in: index_to_letter(plugboard_in),
            rotors_forward: as_letters(rotors_forward),
            reflector: index_to_letter(reflected),
            rotors_backward: as_letters(rotors_backward),
            output: index_to_letter(output),
        })
    }

    /// Steps once and pushes the whole alphabet through every stage.
    ///
    /// This is the machine's wiring at one keystroke: each row lists where
    /// every input letter has travelled after that stage.
    pub fn lampboard(&mut self) -> Lampboard {
        self.rotors.step();

        let mut rows = Vec::with_capacity(2 * self.rotors.len() + 4);
        let mut signals: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
        rows.push(LampRow::new(Stage::Input, &signals));

        signals.iter_mut().for_each(|s| *s = self.plugboard.translate(*s));
        rows.push(LampRow::new(Stage::Plugboard, &signals));

        for rotor in self.rotors.rotors() {
            signals.iter_mut().for_each(|s| *s = rotor.translate(*s));
            rows.push(LampRow::new(Stage::Rotor, &signals));
        }

        signals.iter_mut().for_each(|s| *s = self.reflector.translate(*s));
        rows.push(LampRow::new(Stage::Reflector, &signals));

        for rotor in self.rotors.rotors().iter().rev() {
            signals.iter_mut().for_each(|s| *s = rotor.inverse_translate(*s));
            rows.push(LampRow::new(Stage::Rotor, &signals));
        }

        signals.iter_mut().for_each(|s| *s = self.plugboard.inverse_translate(*s));
        rows.push(LampRow::new(Stage::Plugboard, &signals));

        Lampboard {
            rows,
            window: self.rotors.window(),
        }
    }

    /// Plugboard, rotors, reflector and back, without stepping.
    fn reflect_path(&self, index: u8) -> u8 {
        let signal = self.plugboard.translate(index);
        let signal = self.rotors.forward(signal);
        let signal = self.reflector.translate(signal);
        let signal = self.rotors.backward(signal);
        self.plugboard.inverse_translate(signal)
    }

    /// Builds a historical machine from catalog names.
    ///
    /// # Parameters
    /// - `rotors`: Rotor names in window order, slowest (left) first, as an
    ///   operator would read them: `["I", "II", "III"]`.
    /// - `reflector`: Reflector name, `"B"` or `"C"`.
    ///
    /// The machine starts with an empty plugboard and all rotors at `A`.
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownPreset`] for an unknown name.
    pub fn enigma_i<'a>(
        rotors: impl IntoIterator<Item = &'a str>,
        reflector: &str,
    ) -> Result<Self, ConfigurationError> {
        let mut stack = rotors
            .into_iter()
            .map(Rotor::preset)
            .collect::<Result<Vec<_>, _>>()?;
        stack.reverse();
        Ok(Self::new(
            Plugboard::identity(),
            stack,
            Reflector::preset(reflector)?,
        ))
    }
}

/// The path of a single keystroke through the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalTrace {
    /// Normalized input letter.
    pub input: char,
    /// Rotor window after stepping, fastest first.
    pub window: String,
    /// Signal after the plugboard.
    pub plugboard_in: char,
    /// Signal after each rotor on the way in, fastest first.
    pub rotors_forward: Vec<char>,
    /// Signal after the reflector.
    pub reflector: char,
    /// Signal after each rotor on the way out, slowest first.
    pub rotors_backward: Vec<char>,
    /// Output letter.
    pub output: char,
}

impl fmt::Display for SignalTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} > {}", self.window, self.input, self.plugboard_in)?;
        for c in &self.rotors_forward {
            write!(f, " > {}", c)?;
        }
        write!(f, " | {}", self.reflector)?;
        for c in &self.rotors_backward {
            write!(f, " > {}", c)?;
        }
        write!(f, " > {}", self.output)
    }
}

/// Stage label of a [`LampRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Plugboard,
    Rotor,
    Reflector,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Input => "Input",
            Stage::Plugboard => "Plugboard",
            Stage::Rotor => "Rotors",
            Stage::Reflector => "Reflector",
        };
        f.write_str(label)
    }
}

/// Where each of the 26 input letters stands after one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampRow {
    pub stage: Stage,
    pub letters: String,
}

impl LampRow {
    fn new(stage: Stage, signals: &[u8]) -> Self {
        LampRow {
            stage,
            letters: signals.iter().map(|&s| index_to_letter(s)).collect(),
        }
    }
}

/// Full-alphabet view of one keystroke, as produced by [`EnigmaMachine::lampboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lampboard {
    pub rows: Vec<LampRow>,
    /// Rotor window after stepping, fastest first.
    pub window: String,
}

impl Lampboard {
    /// The final row: the letter lit for each key.
    pub fn output(&self) -> &str {
        self.rows.last().map(|r| r.letters.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for Lampboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(ALPHABET_LEN * 2);
        for (i, row) in self.rows.iter().enumerate() {
            let spaced: Vec<String> = row.letters.chars().map(String::from).collect();
            writeln!(f, "{} {}", spaced.join(" "), row.stage)?;
            let next_is_rotor = self.rows.get(i + 1).map(|r| r.stage) == Some(Stage::Rotor);
            if !(row.stage == Stage::Rotor && next_is_rotor) {
                writeln!(f, "{}", rule)?;
            }
        }
        write!(f, "window {}", self.window)
    }
}
