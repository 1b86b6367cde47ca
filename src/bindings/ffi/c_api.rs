/*!
C API for the cipher library.

Strings cross the boundary as NUL-terminated UTF-8. Results are written to
a newly allocated string that the caller releases with `cc_string_free`.
Keys always travel as text; the shift cipher parses its shift from it.
*/

use std::ffi::{CStr, CString};
use std::ptr;

use libc::{c_char, c_int};

use crate::core::alphabet::Alphabet;
use crate::core::cipher::{CipherConfig, CipherKind, Direction, Key};
use crate::core::error::{Error, Result};

/// Shift (Caesar) cipher selector
pub const CC_CIPHER_SHIFT: c_int = 0;
/// Running-key (Vigenère) cipher selector
pub const CC_CIPHER_RUNNING_KEY: c_int = 1;

/// Cyrillic alphabet selector
pub const CC_ALPHABET_CYRILLIC: c_int = 0;
/// Latin alphabet selector
pub const CC_ALPHABET_LATIN: c_int = 1;

// Error codes for the C API
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcErrorCode {
    Success = 0,
    InvalidArgument = -1,
    InvalidKey = -2,
    CharacterNotInAlphabet = -3,
    IndexOutOfRange = -4,
    UnknownAlphabet = -5,
    UnknownCipher = -6,
    InternalError = -7,
}

impl From<&Error> for CcErrorCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidKey(_) => CcErrorCode::InvalidKey,
            Error::CharacterNotInAlphabet { .. } => CcErrorCode::CharacterNotInAlphabet,
            Error::IndexOutOfRange { .. } => CcErrorCode::IndexOutOfRange,
            Error::UnknownAlphabet(_) => CcErrorCode::UnknownAlphabet,
            Error::UnknownCipher(_) => CcErrorCode::UnknownCipher,
            Error::Io(_) | Error::Serialization(_) => CcErrorCode::InternalError,
        }
    }
}

fn cipher_kind(kind: c_int) -> Result<CipherKind> {
    match kind {
        CC_CIPHER_SHIFT => Ok(CipherKind::Shift),
        CC_CIPHER_RUNNING_KEY => Ok(CipherKind::RunningKey),
        other => Err(Error::UnknownCipher(other.to_string())),
    }
}

fn alphabet(alphabet: c_int) -> Result<Alphabet> {
    match alphabet {
        CC_ALPHABET_CYRILLIC => Ok(Alphabet::Cyrillic),
        CC_ALPHABET_LATIN => Ok(Alphabet::Latin),
        other => Err(Error::UnknownAlphabet(other.to_string())),
    }
}

/// Borrow a C string as UTF-8, `None` for null or invalid input.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Shared body of `cc_encrypt` and `cc_decrypt`
///
/// # Safety
/// Same contract as the exported functions.
unsafe fn transform(
    direction: Direction,
    kind: c_int,
    alphabet_id: c_int,
    text: *const c_char,
    key: *const c_char,
    out: *mut *mut c_char,
) -> c_int {
    if out.is_null() {
        return CcErrorCode::InvalidArgument as c_int;
    }
    unsafe { *out = ptr::null_mut() };

    let (Some(text), Some(key)) = (unsafe { borrow_str(text) }, unsafe { borrow_str(key) }) else {
        return CcErrorCode::InvalidArgument as c_int;
    };

    let result = cipher_kind(kind).and_then(|kind| {
        let cipher = CipherConfig::new()
            .with_kind(kind)
            .with_alphabet(alphabet(alphabet_id)?)
            .build();
        let key = Key::from(key);
        match direction {
            Direction::Encrypt => cipher.encrypt(text, &key),
            Direction::Decrypt => cipher.decrypt(text, &key),
        }
    });

    match result {
        Ok(output) => match CString::new(output) {
            Ok(output) => {
                unsafe { *out = output.into_raw() };
                CcErrorCode::Success as c_int
            }
            Err(_) => CcErrorCode::InternalError as c_int,
        },
        Err(err) => CcErrorCode::from(&err) as c_int,
    }
}

/// Encrypt a string
///
/// @param kind Cipher selector (`CC_CIPHER_*`)
/// @param alphabet Alphabet selector (`CC_ALPHABET_*`)
/// @param text NUL-terminated UTF-8 input
/// @param key NUL-terminated UTF-8 key, a decimal shift for the shift cipher
/// @param out Receives the output string, free it with `cc_string_free`
/// @return 0 on success, negative error code on failure
///
/// # Safety
/// `text` and `key` must be null or valid NUL-terminated strings, `out` must
/// be null or valid for a pointer write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cc_encrypt(
    kind: c_int,
    alphabet: c_int,
    text: *const c_char,
    key: *const c_char,
    out: *mut *mut c_char,
) -> c_int {
    unsafe { transform(Direction::Encrypt, kind, alphabet, text, key, out) }
}

/// Decrypt a string
///
/// Parameters and return value as for `cc_encrypt`.
///
/// # Safety
/// Same contract as `cc_encrypt`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cc_decrypt(
    kind: c_int,
    alphabet: c_int,
    text: *const c_char,
    key: *const c_char,
    out: *mut *mut c_char,
) -> c_int {
    unsafe { transform(Direction::Decrypt, kind, alphabet, text, key, out) }
}

/// Free a string returned by `cc_encrypt` or `cc_decrypt`
///
/// # Safety
/// `ptr` must be null or a pointer produced by this library that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cc_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}
