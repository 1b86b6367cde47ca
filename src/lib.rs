/*!
# Classic Ciphers

Classical substitution ciphers over configurable alphabets.

## Overview

This library provides two pedagogical ciphers. Neither offers any security.

- A shift (Caesar) cipher that rotates letters through the selected
  alphabet and digits through the digit ring `1234567890`
- A running-key (Vigenère) cipher that rotates letters by a repeating key
  and copies digits through unchanged
- Latin and Cyrillic lowercase alphabets
- Input is lowercased before it is transformed, so output is always
  lowercase

```
use classic_ciphers::{Alphabet, CipherConfig, Key, ShiftCipher, SubstitutionCipher};

let caesar = ShiftCipher::new();
let encrypted = caesar.encrypt("Hello", &Key::from(3), Alphabet::Latin)?;
assert_eq!(encrypted, "ebiil");

let vigenere = CipherConfig::vigenere(Alphabet::Latin).build();
let encrypted = vigenere.encrypt("hello", &Key::from("key"))?;
assert_eq!(vigenere.decrypt(&encrypted, &Key::from("key"))?, "hello");
# Ok::<(), classic_ciphers::Error>(())
```
*/

// Core cipher components
pub mod core;

// Language bindings
pub mod bindings;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Short paths used by the exported macros
pub use crate::core::error;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result};
pub use crate::core::alphabet::{digits, Alphabet, Ring};
pub use crate::core::cipher::{
    BoundCipher, CipherConfig, CipherKind, Direction, IndexMode, Key, RunningKeyCipher,
    ShiftCipher, SubstitutionCipher,
};
pub use crate::core::constants::{VERSION, symbols};
pub use crate::core::registry::{get_alphabet, get_cipher_kind, list_alphabets, list_cipher_kinds};
