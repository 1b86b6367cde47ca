/*!
Error handling for the cipher library.

Every failure surfaces immediately to the caller of `encrypt`/`decrypt`;
a call either produces the whole output string or an error, never a
partial result.
*/

use std::io;
use thiserror::Error;

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cipher operations
#[derive(Error, Debug)]
pub enum Error {
    /// Key is empty, has the wrong shape for the cipher, or is not a number
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A running-key character is missing from the selected alphabet
    #[error("Character {character:?} is not in the {alphabet} alphabet")]
    CharacterNotInAlphabet {
        character: char,
        alphabet: &'static str,
    },

    /// Strict index resolution walked past the end of a ring
    #[error("Index {index} is out of range for a ring of length {len}")]
    IndexOutOfRange {
        index: i64,
        len: usize,
    },

    /// No alphabet registered under this name
    #[error("Unknown alphabet: {0}")]
    UnknownAlphabet(String),

    /// No cipher registered under this name
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build an `InvalidKey` error from any message
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Error::InvalidKey(reason.into())
    }
}

/// Create an invalid key error
#[macro_export]
macro_rules! invalid_key_err {
    ($msg:expr) => {
        Err($crate::error::Error::InvalidKey($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error::InvalidKey(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_key("key must not be empty");
        assert_eq!(format!("{}", err), "Invalid key: key must not be empty");

        let err = Error::CharacterNotInAlphabet { character: '7', alphabet: "latin" };
        assert_eq!(format!("{}", err), "Character '7' is not in the latin alphabet");

        let err = Error::IndexOutOfRange { index: 27, len: 26 };
        assert_eq!(format!("{}", err), "Index 27 is out of range for a ring of length 26");

        let err = Error::UnknownAlphabet("greek".to_string());
        assert_eq!(format!("{}", err), "Unknown alphabet: greek");
    }

    #[test]
    fn test_invalid_key_macro() {
        fn parse(raw: &str) -> Result<i64> {
            invalid_key_err!("shift {:?} is not an integer", raw)
        }

        match parse("abc") {
            Err(Error::InvalidKey(msg)) => assert_eq!(msg, "shift \"abc\" is not an integer"),
            other => panic!("Expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("stdin closed"));
    }
}
