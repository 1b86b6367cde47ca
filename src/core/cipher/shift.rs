/*!
Shift (Caesar) cipher.

Every letter moves a fixed number of places through the selected alphabet
and every digit moves the same shift (reduced modulo 10) through the digit
ring. Encryption moves backwards, decryption forwards. Anything outside
both rings is copied through.
*/

use tracing::debug;

use crate::core::alphabet::{digits, Alphabet, Ring};
use crate::core::cipher::config::{CipherKind, IndexMode};
use crate::core::cipher::key::Key;
use crate::core::cipher::traits::{Direction, SubstitutionCipher};
use crate::core::error::{Error, Result};

/// Fixed-offset substitution cipher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftCipher {
    index_mode: IndexMode,
}

impl ShiftCipher {
    /// Create a shift cipher with wrapping index arithmetic
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shift cipher with the given index resolution
    pub fn with_index_mode(index_mode: IndexMode) -> Self {
        Self { index_mode }
    }

    /// Index resolution in use
    pub fn index_mode(&self) -> IndexMode {
        self.index_mode
    }

    fn process(&self, text: &str, key: &Key, alphabet: Alphabet, direction: Direction) -> Result<String> {
        let letters = alphabet.ring();
        let digit_ring = digits();
        let letter_offset = key.shift_modulo(letters.len())?;
        let digit_offset = key.shift_modulo(digit_ring.len())?;

        let text = self.normalize(text);
        debug!(
            cipher = self.kind().name(),
            alphabet = alphabet.name(),
            direction = direction.name(),
            chars = text.chars().count(),
            "shifting text"
        );

        text.chars()
            .map(|c| {
                if digit_ring.contains(c) {
                    self.rotate(digit_ring, c, digit_offset, direction)
                } else if letters.contains(c) {
                    self.rotate(letters, c, letter_offset, direction)
                } else {
                    Ok(c)
                }
            })
            .collect()
    }

    fn rotate(&self, ring: &Ring, c: char, offset: usize, direction: Direction) -> Result<char> {
        let offset = offset as i64;
        let idx = match ring.position(c) {
            Some(idx) => idx as i64,
            None => return Ok(c),
        };
        let raw = match direction {
            Direction::Encrypt => idx - offset,
            Direction::Decrypt => idx + offset,
        };
        let resolved = self.index_mode.resolve(raw, ring.len())?;

        ring.symbol(resolved)
            .ok_or(Error::IndexOutOfRange { index: raw, len: ring.len() })
    }
}

impl SubstitutionCipher for ShiftCipher {
    fn encrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String> {
        self.process(text, key, alphabet, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String> {
        self.process(text, key, alphabet, Direction::Decrypt)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Shift
    }
}
