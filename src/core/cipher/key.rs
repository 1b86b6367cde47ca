/*!
Cipher keys.

The shift cipher takes a number, the running-key cipher takes a string of
alphabet letters. Both arrive through the same [`Key`] type.
*/

use std::fmt;

use crate::core::error::{Error, Result};

/// Key material for a single encrypt or decrypt call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Numeric shift
    Numeric(i64),
    /// Textual key, or a shift still in its textual form
    Textual(String),
}

impl Key {
    /// Interpret the key as a shift reduced into `0..modulus`.
    ///
    /// Textual keys are trimmed and must be an optional sign followed by
    /// base-10 digits. They are reduced one digit at a time, so integers of
    /// any length are accepted.
    pub fn shift_modulo(&self, modulus: usize) -> Result<usize> {
        if modulus == 0 {
            return crate::invalid_key_err!("shift cannot be reduced modulo zero");
        }
        let modulus = modulus as u64;

        match self {
            Key::Numeric(shift) => Ok(i128::from(*shift).rem_euclid(i128::from(modulus)) as usize),
            Key::Textual(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return crate::invalid_key_err!("shift must not be empty");
                }

                let (negative, digits) = match trimmed.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
                };
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidKey(format!("shift {:?} is not an integer", raw)));
                }

                let magnitude = digits
                    .bytes()
                    .fold(0u64, |acc, b| (acc * 10 + u64::from(b - b'0')) % modulus);
                let reduced = if negative {
                    (modulus - magnitude) % modulus
                } else {
                    magnitude
                };
                Ok(reduced as usize)
            }
        }
    }

    /// Interpret the key as a non-empty running key
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Key::Textual(raw) if raw.is_empty() => {
                crate::invalid_key_err!("running key must not be empty")
            }
            Key::Textual(raw) => Ok(raw.as_str()),
            Key::Numeric(shift) => {
                crate::invalid_key_err!("running key must be text, got number {}", shift)
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Numeric(shift) => write!(f, "{}", shift),
            Key::Textual(raw) => f.write_str(raw),
        }
    }
}

impl From<i64> for Key {
    fn from(shift: i64) -> Self {
        Key::Numeric(shift)
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Key::Textual(raw.to_string())
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Key::Textual(raw)
    }
}
