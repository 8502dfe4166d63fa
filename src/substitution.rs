//! Substitution: the capability shared by every stage of the machine.
//!
//! A substitution stage is a [`Wiring`] seen through a rotated contact ring.
//! The signal enters at `(i + position) mod 26`, crosses the wiring, and
//! leaves at `(k - position) mod 26`. [`Plugboard`](crate::Plugboard),
//! [`Reflector`](crate::Reflector) and [`Rotor`](crate::Rotor) implement this
//! trait by exposing their wiring and position; the translation itself lives
//! here in the provided methods.

use crate::utils::alphabet::{index_to_letter, letter_to_index, rotate_in, rotate_out};
use crate::wiring::Wiring;

/// A reversible letter substitution with a rotational offset.
///
/// For any position `p` and letter index `x`:
///
/// ```text
/// inverse_translate(translate(x)) == x
/// translate(inverse_translate(x)) == x
/// ```
pub trait Substitution {
    /// The fixed permutation of this stage.
    fn wiring(&self) -> &Wiring;

    /// Current rotational offset, in `0..=25`.
    fn position(&self) -> u8;

    /// Passes a signal through the stage in the forward direction.
    ///
    /// # Parameters
    /// - `index`: Alphabet index of the incoming signal (`0..=25`).
    ///
    /// # Returns
    /// Alphabet index of the outgoing signal.
    #[inline]
    fn translate(&self, index: u8) -> u8 {
        let position = self.position();
        let contact = rotate_in(index, position);
        rotate_out(self.wiring().forward(contact), position)
    }

    /// Passes a signal through the stage in the reverse direction.
    ///
    /// Exact inverse of [`translate`](Self::translate) at the same position.
    #[inline]
    fn inverse_translate(&self, index: u8) -> u8 {
        let position = self.position();
        let contact = rotate_in(index, position);
        rotate_out(self.wiring().inverse(contact), position)
    }

    /// Letter-level convenience around [`translate`](Self::translate).
    ///
    /// Returns `None` for characters outside the alphabet.
    fn translate_letter(&self, c: char) -> Option<char> {
        letter_to_index(c).map(|i| index_to_letter(self.translate(i)))
    }

    /// Letter-level convenience around [`inverse_translate`](Self::inverse_translate).
    fn inverse_translate_letter(&self, c: char) -> Option<char> {
        letter_to_index(c).map(|i| index_to_letter(self.inverse_translate(i)))
    }
}
