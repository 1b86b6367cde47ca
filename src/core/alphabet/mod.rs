/*!
Alphabets the ciphers operate over.

Letters rotate inside the ring of the selected [`Alphabet`]; digits use the
shared [`digits`] ring regardless of which alphabet is selected.
*/

pub mod ring;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::core::constants::symbols;
use crate::core::error::{Error, Result};
use crate::core::registry;

pub use ring::Ring;

static LATIN: Lazy<Ring> = Lazy::new(|| Ring::new(symbols::LATIN_LOWERCASE));
static CYRILLIC: Lazy<Ring> = Lazy::new(|| Ring::new(symbols::CYRILLIC_LOWERCASE));
static DIGITS: Lazy<Ring> = Lazy::new(|| Ring::new(symbols::DIGITS));

/// Supported letter alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// Lowercase Cyrillic, 33 letters
    Cyrillic,
    /// Lowercase Latin, 26 letters
    Latin,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::Cyrillic
    }
}

impl Alphabet {
    /// Every alphabet, in declaration order
    pub const ALL: [Alphabet; 2] = [Alphabet::Cyrillic, Alphabet::Latin];

    /// Get the name of the alphabet as a string
    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Cyrillic => "cyrillic",
            Alphabet::Latin => "latin",
        }
    }

    /// The letter ring for this alphabet
    pub fn ring(&self) -> &'static Ring {
        match self {
            Alphabet::Cyrillic => &*CYRILLIC,
            Alphabet::Latin => &*LATIN,
        }
    }

    /// Symbols of the letter ring
    pub fn symbols(&self) -> &'static str {
        match self {
            Alphabet::Cyrillic => symbols::CYRILLIC_LOWERCASE,
            Alphabet::Latin => symbols::LATIN_LOWERCASE,
        }
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.ring().len()
    }

    /// Always false, every alphabet has letters
    pub fn is_empty(&self) -> bool {
        self.ring().is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        registry::get_alphabet(s).ok_or_else(|| Error::UnknownAlphabet(s.to_string()))
    }
}

/// The digit ring, `1234567890`
pub fn digits() -> &'static Ring {
    &*DIGITS
}
