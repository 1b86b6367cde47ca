/*!
WebAssembly bindings for the cipher library.

This module provides WebAssembly bindings for using the ciphers in browsers.
*/

pub mod bindings;

pub use bindings::*;
