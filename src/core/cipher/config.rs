/*!
Cipher configuration.

This module provides the options for choosing a cipher, the alphabet it
runs over, and how the shift cipher resolves ring indices.
*/

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::core::alphabet::Alphabet;
use crate::core::cipher::key::Key;
use crate::core::cipher::running_key::RunningKeyCipher;
use crate::core::cipher::shift::ShiftCipher;
use crate::core::cipher::traits::SubstitutionCipher;
use crate::core::error::{Error, Result};
use crate::core::registry;

/// Supported cipher variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Caesar-style fixed shift
    Shift,
    /// Vigenère-style repeating key
    RunningKey,
}

impl Default for CipherKind {
    fn default() -> Self {
        CipherKind::RunningKey
    }
}

impl CipherKind {
    /// Get the name of the cipher as a string
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Shift => "caesar",
            CipherKind::RunningKey => "vigenere",
        }
    }

    /// Create a cipher of this kind
    pub fn instantiate(&self, index_mode: IndexMode) -> Box<dyn SubstitutionCipher> {
        match self {
            CipherKind::Shift => Box::new(ShiftCipher::with_index_mode(index_mode)),
            CipherKind::RunningKey => Box::new(RunningKeyCipher::new()),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        registry::get_cipher_kind(s).ok_or_else(|| Error::UnknownCipher(s.to_string()))
    }
}

/// How the shift cipher turns a shifted position back into a ring index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexMode {
    /// Reduce modulo the ring length
    Wrapping,
    /// Negative positions count from the end of the ring, positions past
    /// the end fail with `IndexOutOfRange`
    Strict,
}

impl Default for IndexMode {
    fn default() -> Self {
        IndexMode::Wrapping
    }
}

impl IndexMode {
    /// Get the name of the mode as a string
    pub fn name(&self) -> &'static str {
        match self {
            IndexMode::Wrapping => "wrapping",
            IndexMode::Strict => "strict",
        }
    }

    /// Map a raw shifted position into `0..len`
    pub fn resolve(&self, raw: i64, len: usize) -> Result<usize> {
        let ring_len = len as i64;
        match self {
            IndexMode::Wrapping if ring_len > 0 => Ok(raw.rem_euclid(ring_len) as usize),
            IndexMode::Strict if (0..ring_len).contains(&raw) => Ok(raw as usize),
            IndexMode::Strict if (-ring_len..0).contains(&raw) => Ok((raw + ring_len) as usize),
            _ => {
                trace!(index = raw, len, mode = self.name(), "index outside ring");
                Err(Error::IndexOutOfRange { index: raw, len })
            }
        }
    }
}

/// Cipher configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    /// Cipher variant
    pub kind: CipherKind,
    /// Alphabet letters rotate through
    pub alphabet: Alphabet,
    /// Index resolution for the shift cipher
    pub index_mode: IndexMode,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            kind: CipherKind::RunningKey,
            alphabet: Alphabet::Latin,
            index_mode: IndexMode::Wrapping,
        }
    }
}

impl CipherConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift cipher over the given alphabet
    pub fn caesar(alphabet: Alphabet) -> Self {
        Self {
            kind: CipherKind::Shift,
            alphabet,
            index_mode: IndexMode::Wrapping,
        }
    }

    /// Running-key cipher over the given alphabet
    pub fn vigenere(alphabet: Alphabet) -> Self {
        Self {
            kind: CipherKind::RunningKey,
            alphabet,
            index_mode: IndexMode::Wrapping,
        }
    }

    /// Strict index resolution, shifting past the end of a ring fails
    /// instead of wrapping
    pub fn reference_parity(kind: CipherKind, alphabet: Alphabet) -> Self {
        Self {
            kind,
            alphabet,
            index_mode: IndexMode::Strict,
        }
    }

    /// Set the cipher variant
    pub fn with_kind(mut self, kind: CipherKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the index resolution
    pub fn with_index_mode(mut self, index_mode: IndexMode) -> Self {
        self.index_mode = index_mode;
        self
    }

    /// Build a cipher bound to this configuration's alphabet
    pub fn build(&self) -> BoundCipher {
        BoundCipher {
            config: *self,
            cipher: self.kind.instantiate(self.index_mode),
        }
    }
}

/// A cipher paired with the alphabet it runs over
pub struct BoundCipher {
    config: CipherConfig,
    cipher: Box<dyn SubstitutionCipher>,
}

impl BoundCipher {
    /// Encrypt text
    pub fn encrypt(&self, text: &str, key: &Key) -> Result<String> {
        self.cipher.encrypt(text, key, self.config.alphabet)
    }

    /// Decrypt text
    pub fn decrypt(&self, text: &str, key: &Key) -> Result<String> {
        self.cipher.decrypt(text, key, self.config.alphabet)
    }

    /// The configuration this cipher was built from
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// The underlying cipher
    pub fn cipher(&self) -> &dyn SubstitutionCipher {
        self.cipher.as_ref()
    }
}

impl fmt::Debug for BoundCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCipher")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CipherConfig::default();
        assert_eq!(config.kind, CipherKind::RunningKey);
        assert_eq!(config.alphabet, Alphabet::Latin);
        assert_eq!(config.index_mode, IndexMode::Wrapping);

        // The configuration picks Latin even though the bare alphabet default is Cyrillic
        assert_ne!(config.alphabet, Alphabet::default());
    }

    #[test]
    fn test_builders() {
        let config = CipherConfig::new()
            .with_kind(CipherKind::Shift)
            .with_alphabet(Alphabet::Cyrillic)
            .with_index_mode(IndexMode::Strict);

        assert_eq!(config, CipherConfig::reference_parity(CipherKind::Shift, Alphabet::Cyrillic));
        assert_eq!(CipherConfig::caesar(Alphabet::Latin).kind, CipherKind::Shift);
        assert_eq!(CipherConfig::vigenere(Alphabet::Cyrillic).alphabet, Alphabet::Cyrillic);
    }

    #[test]
    fn test_build_dispatches_to_kind() {
        let caesar = CipherConfig::caesar(Alphabet::Latin).build();
        assert_eq!(caesar.cipher().kind(), CipherKind::Shift);
        assert_eq!(caesar.encrypt("hello", &Key::from(3)).unwrap(), "ebiil");

        let vigenere = CipherConfig::vigenere(Alphabet::Latin).build();
        assert_eq!(vigenere.cipher().kind(), CipherKind::RunningKey);
        assert_eq!(vigenere.encrypt("hello", &Key::from("key")).unwrap(), "xanbk");
    }

    #[test]
    fn test_wrapping_resolve() {
        let mode = IndexMode::Wrapping;
        assert_eq!(mode.resolve(-1, 26).unwrap(), 25);
        assert_eq!(mode.resolve(26, 26).unwrap(), 0);
        assert_eq!(mode.resolve(51, 26).unwrap(), 25);
    }

    #[test]
    fn test_strict_resolve() {
        let mode = IndexMode::Strict;
        assert_eq!(mode.resolve(0, 10).unwrap(), 0);
        assert_eq!(mode.resolve(-10, 10).unwrap(), 0);
        assert_eq!(mode.resolve(-1, 10).unwrap(), 9);
        assert!(matches!(mode.resolve(10, 10), Err(Error::IndexOutOfRange { index: 10, len: 10 })));
        assert!(matches!(mode.resolve(-11, 10), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("caesar".parse::<CipherKind>().unwrap(), CipherKind::Shift);
        assert_eq!("Vigenere".parse::<CipherKind>().unwrap(), CipherKind::RunningKey);
        assert!(matches!("enigma".parse::<CipherKind>(), Err(Error::UnknownCipher(_))));
    }
}
