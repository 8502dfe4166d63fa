//! Built-in wirings of the historical Enigma I / M3 / M4 components.
//!
//! Notch letters are the window letters shown when the rotor is about to
//! carry its neighbour (Q for rotor I, E for rotor II, and so on).

/// Wiring and notch(es) of a historical rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorPreset {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notches: &'static str,
}

/// Wiring of a historical reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorPreset {
    pub name: &'static str,
    pub wiring: &'static str,
}

pub static ROTORS: [RotorPreset; 8] = [
    RotorPreset {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notches: "Q",
    },
    RotorPreset {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notches: "E",
    },
    RotorPreset {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notches: "V",
    },
    RotorPreset {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notches: "J",
    },
    RotorPreset {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notches: "Z",
    },
    RotorPreset {
        name: "VI",
        wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
        notches: "ZM",
    },
    RotorPreset {
        name: "VII",
        wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
        notches: "ZM",
    },
    RotorPreset {
        name: "VIII",
        wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        notches: "ZM",
    },
];

pub static REFLECTORS: [ReflectorPreset; 2] = [
    ReflectorPreset {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorPreset {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Looks up a rotor by name, ignoring case (`"iii"` finds rotor III).
pub fn rotor(name: &str) -> Option<&'static RotorPreset> {
    ROTORS.iter().find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}

/// Looks up a reflector by name, ignoring case.
pub fn reflector(name: &str) -> Option<&'static ReflectorPreset> {
    REFLECTORS
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}
