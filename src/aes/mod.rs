//! AES key material for the GCM stream ciphers
//!
//! This module provides the key types for the two supported AES-GCM
//! variants (128-bit and 256-bit keys).

pub mod keys;

// Re-export key types
pub use keys::{Aes128Key, Aes256Key};
