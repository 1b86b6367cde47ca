/*!
WebAssembly bindings for the cipher library.
*/

use wasm_bindgen::prelude::*;
use js_sys::Error as JsError;

use crate::core::{
    alphabet::Alphabet,
    cipher::{BoundCipher, CipherConfig, CipherKind, Key},
    error::Result,
};

fn to_js<T>(result: Result<T>, context: &str) -> std::result::Result<T, JsValue> {
    result.map_err(|e| JsError::new(&format!("{}: {}", context, e)).into())
}

/// WebAssembly wrapper around a cipher bound to an alphabet
#[wasm_bindgen]
pub struct WasmCipher {
    cipher: BoundCipher,
}

#[wasm_bindgen]
impl WasmCipher {
    /// Create a cipher from its name (`caesar`, `vigenere`, ...) and an
    /// alphabet name (`latin`, `cyrillic`, ...)
    #[wasm_bindgen(constructor)]
    pub fn new(cipher: &str, alphabet: &str) -> std::result::Result<WasmCipher, JsValue> {
        // Set up panic hook for better error messages
        console_error_panic_hook::set_once();

        let kind = to_js(cipher.parse::<CipherKind>(), "Failed to create cipher")?;
        let alphabet = to_js(alphabet.parse::<Alphabet>(), "Failed to create cipher")?;
        let cipher = CipherConfig::new().with_kind(kind).with_alphabet(alphabet).build();

        Ok(Self { cipher })
    }

    /// Name of the cipher
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.cipher.config().kind.name().to_string()
    }

    /// Name of the alphabet
    #[wasm_bindgen(getter)]
    pub fn alphabet(&self) -> String {
        self.cipher.config().alphabet.name().to_string()
    }

    /// Encrypt with a textual key
    #[wasm_bindgen]
    pub fn encrypt(&self, text: &str, key: &str) -> std::result::Result<String, JsValue> {
        to_js(self.cipher.encrypt(text, &Key::from(key)), "Encryption failed")
    }

    /// Decrypt with a textual key
    #[wasm_bindgen]
    pub fn decrypt(&self, text: &str, key: &str) -> std::result::Result<String, JsValue> {
        to_js(self.cipher.decrypt(text, &Key::from(key)), "Decryption failed")
    }

    /// Encrypt with a numeric shift
    #[wasm_bindgen(js_name = encryptShift)]
    pub fn encrypt_shift(&self, text: &str, shift: i32) -> std::result::Result<String, JsValue> {
        to_js(self.cipher.encrypt(text, &Key::from(i64::from(shift))), "Encryption failed")
    }

    /// Decrypt with a numeric shift
    #[wasm_bindgen(js_name = decryptShift)]
    pub fn decrypt_shift(&self, text: &str, shift: i32) -> std::result::Result<String, JsValue> {
        to_js(self.cipher.decrypt(text, &Key::from(i64::from(shift))), "Decryption failed")
    }
}
