//! Character-class validation policy.
//!
//! Accepts a submission only when every character is a Spanish letter
//! (ASCII letters plus the accented vowels, `ñ` and `ü`) or whitespace.
//! Anything else — digits, punctuation, other scripts — is collected and
//! reported back to the user.

use super::ValidationError;

/// Letters used in Spanish beyond the ASCII alphabet.
const SPANISH_EXTRA: &[char] = &[
    'á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ü', 'Ñ',
];

/// Returns `true` if `c` belongs to the Spanish alphabet.
#[inline]
pub fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || SPANISH_EXTRA.contains(&c)
}

/// Accept `text` only if it consists solely of Spanish letters and
/// whitespace.
///
/// On rejection the distinct offending characters are reported in
/// first-seen order.
///
/// # Examples
///
/// ```
/// use spanish_text_analyser::validate::check_charset;
///
/// assert!(check_charset("el niño pequeño").is_ok());
/// assert!(check_charset("hola 123").is_err());
/// ```
pub fn check_charset(text: &str) -> Result<(), ValidationError> {
    let mut offending: Vec<char> = Vec::new();
    for c in text.chars() {
        if !is_spanish_letter(c) && !c.is_whitespace() && !offending.contains(&c) {
            offending.push(c);
        }
    }

    if offending.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters(offending))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
