/*!
Serialization support for the cipher library.

This module provides serialization and deserialization support for cipher
configuration types using Serde. It's only built when the `serde-support`
feature is enabled.
*/

use crate::core::{
    alphabet::Alphabet,
    cipher::{CipherConfig, CipherKind, IndexMode, Key},
    error::{Error, Result},
};
use serde::{Serialize, Deserialize};

/// Serializable version of Alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerdeAlphabet {
    /// Lowercase Cyrillic
    Cyrillic,
    /// Lowercase Latin
    Latin,
}

impl From<Alphabet> for SerdeAlphabet {
    fn from(alphabet: Alphabet) -> Self {
        match alphabet {
            Alphabet::Cyrillic => SerdeAlphabet::Cyrillic,
            Alphabet::Latin => SerdeAlphabet::Latin,
        }
    }
}

impl From<SerdeAlphabet> for Alphabet {
    fn from(alphabet: SerdeAlphabet) -> Self {
        match alphabet {
            SerdeAlphabet::Cyrillic => Alphabet::Cyrillic,
            SerdeAlphabet::Latin => Alphabet::Latin,
        }
    }
}

/// Serializable version of CipherKind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SerdeCipherKind {
    /// Caesar-style fixed shift
    Shift,
    /// Vigenère-style repeating key
    RunningKey,
}

impl From<CipherKind> for SerdeCipherKind {
    fn from(kind: CipherKind) -> Self {
        match kind {
            CipherKind::Shift => SerdeCipherKind::Shift,
            CipherKind::RunningKey => SerdeCipherKind::RunningKey,
        }
    }
}

impl From<SerdeCipherKind> for CipherKind {
    fn from(kind: SerdeCipherKind) -> Self {
        match kind {
            SerdeCipherKind::Shift => CipherKind::Shift,
            SerdeCipherKind::RunningKey => CipherKind::RunningKey,
        }
    }
}

/// Serializable version of IndexMode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerdeIndexMode {
    /// Reduce modulo the ring length
    Wrapping,
    /// Fail past the end of the ring
    Strict,
}

impl From<IndexMode> for SerdeIndexMode {
    fn from(mode: IndexMode) -> Self {
        match mode {
            IndexMode::Wrapping => SerdeIndexMode::Wrapping,
            IndexMode::Strict => SerdeIndexMode::Strict,
        }
    }
}

impl From<SerdeIndexMode> for IndexMode {
    fn from(mode: SerdeIndexMode) -> Self {
        match mode {
            SerdeIndexMode::Wrapping => IndexMode::Wrapping,
            SerdeIndexMode::Strict => IndexMode::Strict,
        }
    }
}

/// Serializable version of Key, a JSON number or string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerdeKey {
    /// Numeric shift
    Numeric(i64),
    /// Textual key
    Textual(String),
}

impl From<Key> for SerdeKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Numeric(shift) => SerdeKey::Numeric(shift),
            Key::Textual(raw) => SerdeKey::Textual(raw),
        }
    }
}

impl From<SerdeKey> for Key {
    fn from(key: SerdeKey) -> Self {
        match key {
            SerdeKey::Numeric(shift) => Key::Numeric(shift),
            SerdeKey::Textual(raw) => Key::Textual(raw),
        }
    }
}

/// Serializable version of CipherConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeCipherConfig {
    /// Cipher variant
    pub kind: SerdeCipherKind,
    /// Alphabet
    pub alphabet: SerdeAlphabet,
    /// Index resolution, wrapping when absent
    #[serde(default = "default_index_mode")]
    pub index_mode: SerdeIndexMode,
}

fn default_index_mode() -> SerdeIndexMode {
    IndexMode::default().into()
}

impl From<CipherConfig> for SerdeCipherConfig {
    fn from(config: CipherConfig) -> Self {
        Self {
            kind: config.kind.into(),
            alphabet: config.alphabet.into(),
            index_mode: config.index_mode.into(),
        }
    }
}

impl From<SerdeCipherConfig> for CipherConfig {
    fn from(config: SerdeCipherConfig) -> Self {
        Self {
            kind: config.kind.into(),
            alphabet: config.alphabet.into(),
            index_mode: config.index_mode.into(),
        }
    }
}

/// Serializes a value to JSON
pub fn serialize_to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(format!("JSON serialization error: {}", e)))
}

/// Deserializes a value from JSON
pub fn deserialize_from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| Error::Serialization(format!("JSON deserialization error: {}", e)))
}
