//! Regression tests for the public machine API.
//!
//! Expected ciphertexts are frozen snapshots: Enigma I vectors that agree
//! with the historical machine, plus vectors captured across rotor turnover,
//! the double step, double-notch rotors and degenerate stacks. Any change in
//! output indicates a regression in stepping or in the signal path.

use enigma_machine::{
    ConfigurationError, EnigmaMachine, Notch, Plugboard, Reflector, Rotor, Substitution, Wiring,
    WiringSymbol,
};

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A↔Y, B↔X, C↔W ... L↔N, M↔Z.
const MIRROR_REFLECTOR: &str = "YXWVUTSRQPONZLKJIHGFEDCBAM";

fn machine(rotors_fastest_first: &[&str], reflector: &str, plugs: &str) -> EnigmaMachine {
    EnigmaMachine::new(
        Plugboard::from_pairs(plugs).unwrap(),
        rotors_fastest_first
            .iter()
            .map(|name| Rotor::preset(name).unwrap())
            .collect::<Vec<_>>(),
        Reflector::preset(reflector).unwrap(),
    )
}

fn enigma_i() -> EnigmaMachine {
    machine(&["III", "II", "I"], "B", "")
}

fn identity_rotor() -> Rotor {
    Rotor::new(Wiring::identity(), Notch::single(0).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════
// Historical Enigma I vectors
// ═══════════════════════════════════════════════════════════════════════

/// Rotors I-II-III, reflector B, window AAA, no plugs.
#[test]
fn enigma_i_aaaaa() {
    let mut m = enigma_i();
    assert_eq!(m.convert_message(&[0, 0, 0], "AAAAA").unwrap(), "BDZGO");
}

#[test]
fn enigma_i_hello_world() {
    let mut m = enigma_i();
    assert_eq!(
        m.convert_message(&[0, 0, 0], "HELLOWORLD").unwrap(),
        "ILBDAAMTAZ"
    );
}

/// Thirty keystrokes carry the fastest rotor through a full revolution.
#[test]
fn enigma_i_thirty_keystrokes() {
    let mut m = enigma_i();
    assert_eq!(
        m.convert_message(&[0, 0, 0], &"A".repeat(30)).unwrap(),
        "BDZGOWCXLTKSBTMCDLPBMUQOFXYHCX"
    );
    assert_eq!(m.positions(), vec![4, 1, 0]);
}

#[test]
fn enigma_i_with_plugboard() {
    let mut m = machine(&["III", "II", "I"], "B", "AM FI NV PS TU WZ");
    assert_eq!(
        m.convert_message(&[0, 0, 0], "HELLOWORLD").unwrap(),
        "FLBDMGAUMW"
    );
}

#[test]
fn enigma_i_offset_positions() {
    let mut m = enigma_i();
    assert_eq!(
        m.convert_message(&[5, 12, 20], "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG")
            .unwrap(),
        "BKCLWVQMUXQXXGNPUERDMRKUDIQSIWPGJHQ"
    );
}

/// Message that crosses the middle rotor's turnover and double step.
#[test]
fn enigma_i_across_double_step() {
    let mut m = enigma_i();
    assert_eq!(
        m.convert_message(&[19, 3, 0], "AAAAAAAAAA").unwrap(),
        "EEQPQROUVK"
    );
}

#[test]
fn rotors_v_iv_i_reflector_c() {
    let mut m = machine(&["V", "IV", "I"], "C", "");
    assert_eq!(
        m.convert_message(&[2, 17, 8], "ROTORCIPHERMACHINE").unwrap(),
        "MRRPKMCDXXKCMSAMBD"
    );
}

#[test]
fn double_notch_rotors() {
    let mut m = machine(&["VIII", "VI"], "C", "");
    assert_eq!(m.convert_message(&[0, 0], "ENIGMA").unwrap(), "RCTCBT");
}

#[test]
fn single_rotor_stack() {
    let mut m = machine(&["I"], "B", "");
    assert_eq!(
        m.convert_message(&[0], LETTERS).unwrap(),
        "NXYOKBMOKOGOILWBKQESERBGBQ"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Engine properties
// ═══════════════════════════════════════════════════════════════════════

/// Identity plugboard and rotors contribute nothing: only the reflector acts.
#[test]
fn identity_stages_reduce_to_reflector() {
    let mut m = EnigmaMachine::new(
        Plugboard::identity(),
        vec![identity_rotor(), identity_rotor(), identity_rotor()],
        Reflector::parse(MIRROR_REFLECTOR).unwrap(),
    );
    assert_eq!(m.convert_message(&[0, 0, 0], "A").unwrap(), "Y");
    assert_eq!(
        m.convert_message(&[0, 0, 0], LETTERS).unwrap(),
        MIRROR_REFLECTOR
    );
}

#[test]
fn punctuation_and_case_are_ignored() {
    let mut a = enigma_i();
    let mut b = enigma_i();
    assert_eq!(
        a.convert_message(&[0, 0, 0], "Hello, World!").unwrap(),
        b.convert_message(&[0, 0, 0], "HELLOWORLD").unwrap()
    );
}

#[test]
fn output_never_longer_than_input() {
    let mut m = enigma_i();
    let input = "12 monkeys & 3 cats.";
    let out = m.convert_message(&[0, 0, 0], input).unwrap();
    assert_eq!(out.len(), input.chars().filter(|c| c.is_ascii_alphabetic()).count());
    assert!(out.chars().all(|c| c.is_ascii_uppercase()));
}

#[test]
fn round_trip_reuses_rotor_objects() {
    let mut m = machine(&["III", "II", "I"], "B", "AM FI NV PS TU WZ");
    let plain = "THEREISNOSUCHTHINGASASECURECIPHERONLYANUNBROKENONE";
    let settings = [17, 4, 9];
    let cipher = m.convert_message(&settings, plain).unwrap();
    assert_eq!(m.convert_message(&settings, &cipher).unwrap(), plain);
}

/// A re-key mid-stream discards pending ratchets, so a replay from the
/// same settings sees exactly the same stepping.
#[test]
fn rekey_after_partial_message_is_clean() {
    let mut m = enigma_i();
    let fresh = m.convert_message(&[20, 4, 0], "ABCDEFGH").unwrap();
    m.convert_message(&[20, 4, 0], "ABC").unwrap();
    assert_eq!(m.convert_message(&[20, 4, 0], "ABCDEFGH").unwrap(), fresh);
}

#[test]
fn forward_only_is_not_reflected() {
    let mut m = enigma_i();
    m.set_positions(&[0, 0, 0]).unwrap();
    assert_eq!(m.forward_only("AAAAA"), "FNSVU");
    m.set_positions(&[0, 0, 0]).unwrap();
    assert_eq!(m.forward_only("HELLO WORLD"), "XECECLVUZN");
}

#[test]
fn reflector_is_fixed_point_free_involution() {
    let r = Reflector::preset("B").unwrap();
    for x in 0..26u8 {
        assert_ne!(r.translate(x), x);
        assert_eq!(r.translate(r.translate(x)), x);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping state machine
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn middle_rotor_on_notch_double_steps() {
    let stack = || {
        vec![
            Rotor::new(Wiring::identity(), Notch::single(25).unwrap()),
            Rotor::new(Wiring::identity(), Notch::single(4).unwrap()),
            Rotor::new(Wiring::identity(), Notch::single(0).unwrap()),
        ]
    };
    let mut m = EnigmaMachine::new(
        Plugboard::identity(),
        stack(),
        Reflector::preset("B").unwrap(),
    );
    m.set_positions(&[0, 4, 0]).unwrap();

    let mut history = vec![m.positions()];
    for _ in 0..5 {
        m.press_key('A');
        history.push(m.positions());
    }

    // Keystroke 3 moves all three rotors at once.
    assert_eq!(history[2], vec![2, 4, 1]);
    assert_eq!(history[3], vec![3, 5, 2]);
    // The middle rotor then steps again on the very next keystroke.
    assert_eq!(history[4], vec![4, 6, 2]);
    assert_eq!(history[5], vec![5, 6, 2]);
}

#[test]
fn middle_rotor_off_notch_leaves_others_still() {
    let mut m = enigma_i();
    m.set_positions(&[0, 10, 0]).unwrap();
    for n in 1..=10u8 {
        m.press_key('X');
        assert_eq!(m.positions(), vec![n, 10, 0]);
    }
}

#[test]
fn historical_window_sequence() {
    // Operator view ADT (slow-middle-fast); stack order is fastest first.
    let mut m = enigma_i();
    m.set_positions(&[19, 3, 0]).unwrap();
    let windows: Vec<String> = (0..6)
        .map(|_| {
            m.press_key('A');
            m.rotors().window()
        })
        .collect();
    assert_eq!(windows, ["UDA", "VDA", "WEA", "XEB", "YFC", "ZGC"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn set_positions_validates_before_applying() {
    let mut m = enigma_i();
    m.set_positions(&[1, 2, 3]).unwrap();
    assert_eq!(
        m.set_positions(&[1, 2]),
        Err(ConfigurationError::PositionCountMismatch {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        m.set_positions(&[0, 26, 0]),
        Err(ConfigurationError::PositionOutOfRange { position: 26 })
    );
    assert_eq!(m.positions(), vec![1, 2, 3]);
}

#[test]
fn wiring_must_be_a_permutation() {
    assert_eq!(
        Wiring::parse("ABCDEFGHIJKLMNOPQRSTUVWXYA"),
        Err(ConfigurationError::DuplicateIndex { index: 0 })
    );
    assert_eq!(
        Wiring::parse("ABCDEFGHIJKLMNOPQRSTUVWXY"),
        Err(ConfigurationError::WrongLength {
            expected: 26,
            found: 25
        })
    );
}

#[test]
fn pre_resolved_rotor_matches_textual_rotor() {
    let symbols: Vec<WiringSymbol> = (0..26usize)
        .map(|i| WiringSymbol::Index((i + 3) % 26))
        .chain([WiringSymbol::Letter('Z'), WiringSymbol::Index(12)])
        .collect();
    let from_symbols = Rotor::from_symbols(&symbols).unwrap();
    let from_text = Rotor::parse("DEFGHIJKLMNOPQRSTUVWXYZABC|ZM").unwrap();
    assert_eq!(from_symbols, from_text);
}

#[test]
fn reflector_rejects_non_involution() {
    assert!(matches!(
        Reflector::parse("EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        Err(ConfigurationError::FixedPoint { .. }) | Err(ConfigurationError::NotAnInvolution { .. })
    ));
}
