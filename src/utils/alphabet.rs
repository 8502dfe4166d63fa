//! Letter/index conversion and modular arithmetic over the 26-letter alphabet.
//!
//! Every stage of the machine works on indices 0..=25. These helpers are the
//! only place where characters are turned into indices and back.

use crate::error::ConfigurationError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a letter to its alphabet index, ignoring case.
///
/// # Parameters
/// - `c`: The character to convert.
///
/// # Returns
/// `Some(0..=25)` for `A..=Z` / `a..=z`, `None` for anything else.
pub fn letter_to_index(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u8 - b'A')
    } else {
        None
    }
}

/// Converts an alphabet index to its uppercase letter.
///
/// Indices are reduced mod 26 first, so any `u8` yields a letter.
pub fn index_to_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN as u8) as char
}

/// Applies a rotational offset: `(index + position) mod 26`.
#[inline]
pub fn rotate_in(index: u8, position: u8) -> u8 {
    ((index as usize + position as usize) % ALPHABET_LEN) as u8
}

/// Removes a rotational offset: `(index - position) mod 26`.
#[inline]
pub fn rotate_out(index: u8, position: u8) -> u8 {
    ((index as usize + ALPHABET_LEN - position as usize % ALPHABET_LEN) % ALPHABET_LEN) as u8
}

/// Validates a single rotor position.
///
/// # Errors
/// Returns [`ConfigurationError::PositionOutOfRange`] if `position > 25`.
pub fn check_position(position: usize) -> Result<u8, ConfigurationError> {
    if position < ALPHABET_LEN {
        Ok(position as u8)
    } else {
        Err(ConfigurationError::PositionOutOfRange { position })
    }
}

/// Parses a settings string into rotor positions.
///
/// Two forms are accepted:
/// - letters, one per rotor: `"AAA"`, `"a-d-z"`;
/// - decimal numbers separated by commas, dashes or whitespace: `"0,3,25"`.
///
/// Positions are returned in the order they appear; the caller decides
/// which rotor each belongs to.
///
/// # Errors
/// - [`ConfigurationError::PositionOutOfRange`] for a number above 25.
/// - [`ConfigurationError::InvalidSymbol`] for a character that is neither a
///   letter, a digit nor a separator, or for letters and digits mixed together.
///
/// # Examples
///
/// ```
/// use enigma_machine::utils::alphabet::parse_positions;
///
/// assert_eq!(parse_positions("ADZ").unwrap(), vec![0, 3, 25]);
/// assert_eq!(parse_positions("0, 3, 25").unwrap(), vec![0, 3, 25]);
/// ```
pub fn parse_positions(settings: &str) -> Result<Vec<u8>, ConfigurationError> {
    let is_separator = |c: char| c == ',' || c == '-' || c.is_whitespace();
    let numeric = settings.chars().any(|c| c.is_ascii_digit());

    if numeric {
        let mut positions = Vec::new();
        let mut offset = 0;
        for token in settings.split(is_separator) {
            if token.is_empty() {
                offset += 1;
                continue;
            }
            let value: usize = token.parse().map_err(|_| {
                let (bad_at, symbol) = token
                    .char_indices()
                    .find(|(_, c)| !c.is_ascii_digit())
                    .unwrap_or((0, ' '));
                ConfigurationError::InvalidSymbol {
                    symbol,
                    offset: offset + bad_at,
                }
            })?;
            positions.push(check_position(value)?);
            offset += token.len() + 1;
        }
        return Ok(positions);
    }

    settings
        .char_indices()
        .filter(|(_, c)| !is_separator(*c))
        .map(|(offset, symbol)| {
            letter_to_index(symbol).ok_or(ConfigurationError::InvalidSymbol { symbol, offset })
        })
        .collect()
}

/// Formats positions as letters, e.g. `[0, 3, 25]` → `"ADZ"`.
pub fn positions_to_letters(positions: &[u8]) -> String {
    positions.iter().map(|&p| index_to_letter(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_to_index_bounds() {
        assert_eq!(letter_to_index('A'), Some(0));
        assert_eq!(letter_to_index('Z'), Some(25));
        assert_eq!(letter_to_index('m'), Some(12));
    }

    #[test]
    fn test_letter_to_index_rejects_non_letters() {
        for c in [' ', ',', '!', '0', 'é', 'ß', '\n'] {
            assert_eq!(letter_to_index(c), None, "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(0), 'A');
        assert_eq!(index_to_letter(25), 'Z');
        assert_eq!(index_to_letter(26), 'A');
    }

    #[test]
    fn test_letters_table_matches_conversion() {
        for (i, c) in LETTERS.chars().enumerate() {
            assert_eq!(letter_to_index(c), Some(i as u8));
            assert_eq!(index_to_letter(i as u8), c);
        }
    }

    #[test]
    fn test_rotate_in_out_inverse() {
        for position in 0..26u8 {
            for index in 0..26u8 {
                let rotated = rotate_in(index, position);
                assert!(rotated < 26);
                assert_eq!(rotate_out(rotated, position), index);
            }
        }
    }

    #[test]
    fn test_rotate_out_wraps_below_zero() {
        assert_eq!(rotate_out(0, 1), 25);
        assert_eq!(rotate_out(3, 5), 24);
    }

    #[test]
    fn test_parse_positions_letters() {
        assert_eq!(parse_positions("AAA").unwrap(), vec![0, 0, 0]);
        assert_eq!(parse_positions("q-e-v").unwrap(), vec![16, 4, 21]);
    }

    #[test]
    fn test_parse_positions_numbers() {
        assert_eq!(parse_positions("0,12,25").unwrap(), vec![0, 12, 25]);
        assert_eq!(parse_positions("1 2").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_positions_out_of_range() {
        assert_eq!(
            parse_positions("0,26"),
            Err(ConfigurationError::PositionOutOfRange { position: 26 })
        );
    }

    #[test]
    fn test_parse_positions_invalid_symbol() {
        assert!(matches!(
            parse_positions("A?C"),
            Err(ConfigurationError::InvalidSymbol { symbol: '?', .. })
        ));
        assert!(matches!(
            parse_positions("1,B"),
            Err(ConfigurationError::InvalidSymbol { symbol: 'B', .. })
        ));
    }

    #[test]
    fn test_parse_positions_empty() {
        assert!(parse_positions("").unwrap().is_empty());
    }

    #[test]
    fn test_positions_to_letters() {
        assert_eq!(positions_to_letters(&[0, 3, 25]), "ADZ");
    }
}
