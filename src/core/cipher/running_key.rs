/*!
Running-key (Vigenère) cipher.

The character at position `i` moves by the ring position of key character
`i mod key_len`. Positions count every character of the normalized text,
so spaces and punctuation still consume a key character. Only letters of
the selected alphabet are transformed; digits are copied through as-is.
*/

use tracing::debug;

use crate::core::alphabet::Alphabet;
use crate::core::cipher::config::CipherKind;
use crate::core::cipher::key::Key;
use crate::core::cipher::traits::{Direction, SubstitutionCipher};
use crate::core::error::{Error, Result};

/// Polyalphabetic cipher driven by a repeating key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningKeyCipher;

impl RunningKeyCipher {
    /// Create a running-key cipher
    pub fn new() -> Self {
        Self
    }

    fn process(&self, text: &str, key: &Key, alphabet: Alphabet, direction: Direction) -> Result<String> {
        let key: Vec<char> = key.as_text()?.chars().collect();
        let text = self.normalize(text);
        debug!(
            cipher = self.kind().name(),
            alphabet = alphabet.name(),
            direction = direction.name(),
            chars = text.chars().count(),
            key_len = key.len(),
            "running key over text"
        );

        let ring = alphabet.ring();
        let len = ring.len();

        text.chars()
            .enumerate()
            .map(|(i, c)| -> Result<char> {
                let key_char = key[i % key.len()];
                let shift = ring.position(key_char).ok_or(Error::CharacterNotInAlphabet {
                    character: key_char,
                    alphabet: alphabet.name(),
                })?;

                let Some(idx) = ring.position(c) else {
                    return Ok(c);
                };
                let new_idx = match direction {
                    Direction::Encrypt => (idx + len - shift) % len,
                    Direction::Decrypt => (idx + shift) % len,
                };

                ring.symbol(new_idx)
                    .ok_or(Error::IndexOutOfRange { index: new_idx as i64, len })
            })
            .collect()
    }
}

impl SubstitutionCipher for RunningKeyCipher {
    fn encrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String> {
        self.process(text, key, alphabet, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str, key: &Key, alphabet: Alphabet) -> Result<String> {
        self.process(text, key, alphabet, Direction::Decrypt)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::RunningKey
    }
}
