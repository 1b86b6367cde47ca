/*!
Constants for the cipher library.

The symbol sets below are the rings every cipher indexes into. Their order
is part of the cipher output and must never change.
*/

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbol sets backing the alphabet rings
pub mod symbols {
    /// Lowercase Latin letters
    pub const LATIN_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

    /// Lowercase Cyrillic letters, `ё` sits right after `е`
    pub const CYRILLIC_LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

    /// Digit ring shared by every alphabet. Starts at `1`, `0` comes last.
    pub const DIGITS: &str = "1234567890";
}
