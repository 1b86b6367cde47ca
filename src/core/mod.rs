//! Core components for the cipher library.
//!
//! This module contains the alphabet rings, the ciphers that rotate text
//! through them, the name registry, and error handling.

// Alphabet rings
pub mod alphabet;

// Cipher implementations
pub mod cipher;

// Name lookup for alphabets and ciphers
pub mod registry;

// Library constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::alphabet::Alphabet;
pub use self::cipher::{CipherConfig, CipherKind, Key, SubstitutionCipher};
pub use self::constants::VERSION;
