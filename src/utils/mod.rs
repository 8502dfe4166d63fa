//! Alphabet helpers shared by every stage.

pub mod alphabet;
