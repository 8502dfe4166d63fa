//! Rotor cipher machine engine.
//!
//! Simulates an Enigma-class electromechanical cipher: a plugboard, a stack
//! of stepping rotors and a reflector, each a reversible substitution over
//! the 26-letter alphabet. Stepping happens before every keystroke and
//! reproduces the mechanical double-step anomaly, so encryption under
//! matching settings is its own inverse.
//!
//! # Architecture
//!
//! ```text
//! Wiring        (validated permutation + precomputed inverse)
//!     ↓ wrapped by
//! Substitution  (trait: translate / inverse_translate through a rotated contact ring)
//!     ↓ implemented by
//! Plugboard · Rotor (+ notch, ratchet) · Reflector (fixed-point-free involution)
//!     ↓ fastest → slowest
//! RotorStack    (stepping pass, forward pass, backward pass)
//!     ↓
//! EnigmaMachine (step → plugboard → rotors → reflector → rotors⁻¹ → plugboard⁻¹)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a historical Enigma I:
//!
//! ```
//! use enigma_machine::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::enigma_i(["I", "II", "III"], "B").unwrap();
//!
//! machine.set_positions(&[0, 0, 0]).unwrap();
//! let cipher = machine.encrypt_or_decrypt("HELLO WORLD");
//! assert_eq!(cipher, "ILBDAAMTAZ");
//!
//! machine.set_positions(&[0, 0, 0]).unwrap();
//! assert_eq!(machine.encrypt_or_decrypt(&cipher), "HELLOWORLD");
//! ```
//!
//! Build a machine from a TOML description:
//!
//! ```
//! use enigma_machine::config::MachineConfig;
//!
//! let config = MachineConfig::from_toml_str(
//!     r#"
//!     plugboard = { pairs = "AM FI NV PS TU WZ" }
//!     reflector = { preset = "B" }
//!     rotors = [{ preset = "III" }, { preset = "II" }, { preset = "I" }]
//!     positions = "AAA"
//!     "#,
//!     ".",
//! )
//! .unwrap();
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.encrypt_or_decrypt("HELLOWORLD"), "FLBDMGAUMW");
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod utils;

mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_stack;
mod substitution;
mod wiring;

pub use error::ConfigurationError;
pub use machine::{EnigmaMachine, LampRow, Lampboard, SignalTrace, Stage};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Notch, Rotor};
pub use rotor_stack::RotorStack;
pub use substitution::Substitution;
pub use wiring::{Wiring, WiringSymbol};
