/*!
Name registry for alphabets and ciphers.

Maps the names callers type (case-insensitive) onto the closed set of
alphabets and cipher variants. The table is built once and never changes.
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::alphabet::Alphabet;
use crate::core::cipher::config::CipherKind;

/// Registry of names for alphabets and cipher variants
pub struct NameRegistry {
    /// Alphabet names and aliases
    alphabets: HashMap<&'static str, Alphabet>,

    /// Cipher names and aliases
    ciphers: HashMap<&'static str, CipherKind>,
}

impl NameRegistry {
    fn new() -> Self {
        let mut registry = Self {
            alphabets: HashMap::new(),
            ciphers: HashMap::new(),
        };

        for name in ["latin", "eng", "en"] {
            registry.alphabets.insert(name, Alphabet::Latin);
        }
        for name in ["cyrillic", "rus", "ru"] {
            registry.alphabets.insert(name, Alphabet::Cyrillic);
        }

        for name in ["caesar", "shift"] {
            registry.ciphers.insert(name, CipherKind::Shift);
        }
        for name in ["vigenere", "running-key"] {
            registry.ciphers.insert(name, CipherKind::RunningKey);
        }

        registry
    }

    /// Look up an alphabet by name
    pub fn get_alphabet(&self, name: &str) -> Option<Alphabet> {
        self.alphabets.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Look up a cipher variant by name
    pub fn get_cipher_kind(&self, name: &str) -> Option<CipherKind> {
        self.ciphers.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Registered alphabet names, sorted
    pub fn list_alphabets(&self) -> Vec<String> {
        sorted(self.alphabets.keys())
    }

    /// Registered cipher names, sorted
    pub fn list_cipher_kinds(&self) -> Vec<String> {
        sorted(self.ciphers.keys())
    }
}

fn sorted<'a>(names: impl Iterator<Item = &'a &'static str>) -> Vec<String> {
    let mut names: Vec<String> = names.map(|name| name.to_string()).collect();
    names.sort();
    names
}

// Global registry instance
static REGISTRY: Lazy<NameRegistry> = Lazy::new(NameRegistry::new);

// Public API

/// Get a reference to the global registry
pub fn get_registry() -> &'static NameRegistry {
    &REGISTRY
}

/// Get an alphabet by name
pub fn get_alphabet(name: &str) -> Option<Alphabet> {
    get_registry().get_alphabet(name)
}

/// Get a cipher variant by name
pub fn get_cipher_kind(name: &str) -> Option<CipherKind> {
    get_registry().get_cipher_kind(name)
}

/// List all registered alphabet names
pub fn list_alphabets() -> Vec<String> {
    get_registry().list_alphabets()
}

/// List all registered cipher names
pub fn list_cipher_kinds() -> Vec<String> {
    get_registry().list_cipher_kinds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_aliases() {
        assert_eq!(get_alphabet("eng"), Some(Alphabet::Latin));
        assert_eq!(get_alphabet(" Latin "), Some(Alphabet::Latin));
        assert_eq!(get_alphabet("RU"), Some(Alphabet::Cyrillic));
        assert_eq!(get_alphabet("klingon"), None);
    }

    #[test]
    fn test_cipher_aliases() {
        assert_eq!(get_cipher_kind("shift"), Some(CipherKind::Shift));
        assert_eq!(get_cipher_kind("running-key"), Some(CipherKind::RunningKey));
        assert_eq!(get_cipher_kind("rot13"), None);
    }

    #[test]
    fn test_listing_is_sorted() {
        assert_eq!(list_alphabets(), vec!["cyrillic", "en", "eng", "latin", "ru", "rus"]);
        assert_eq!(list_cipher_kinds(), vec!["caesar", "running-key", "shift", "vigenere"]);
    }

    #[test]
    fn test_canonical_names_resolve() {
        for alphabet in Alphabet::ALL {
            assert_eq!(get_alphabet(alphabet.name()), Some(alphabet));
        }
        for kind in [CipherKind::Shift, CipherKind::RunningKey] {
            assert_eq!(get_cipher_kind(kind.name()), Some(kind));
        }
    }
}
