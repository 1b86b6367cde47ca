/*!
Substitution ciphers.

This module provides the cipher trait, its two implementations, the key
type they share and the configuration used to pick between them.
*/

// Cipher interface
pub mod traits;

// Key material
pub mod key;

// Caesar
pub mod shift;

// Vigenère
pub mod running_key;

// Config
pub mod config;

pub use config::{BoundCipher, CipherConfig, CipherKind, IndexMode};
pub use key::Key;
pub use running_key::RunningKeyCipher;
pub use shift::ShiftCipher;
pub use traits::{Direction, SubstitutionCipher};
