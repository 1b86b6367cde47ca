/*!
Foreign Function Interface (FFI) module for the cipher library.

This module provides C-compatible bindings, allowing the ciphers to be
used from C, C++, C#, and other languages that support C FFI.
*/

mod c_api;

pub use c_api::*;
