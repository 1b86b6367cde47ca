/*!
Traits for substitution ciphers.

This module defines the interface both ciphers implement.
*/

use crate::core::alphabet::Alphabet;
use crate::core::cipher::config::CipherKind;
use crate::core::cipher::key::Key;
use crate::core::error::Result;

/// Which way a cipher moves through its rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Direction {
    /// Get the name of the direction as a string
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Trait for substitution cipher operations
pub trait SubstitutionCipher: Send + Sync {
    /// Encrypt text with the cipher
    fn encrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String>;

    /// Decrypt text with the cipher
    fn decrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String>;

    /// Get the cipher variant
    fn kind(&self) -> CipherKind;

    /// Lowercase the input before it is transformed.
    ///
    /// Output is always lowercase, the original casing is not restored.
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }
}
