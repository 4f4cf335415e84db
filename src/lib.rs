//! Chunked streaming AES-GCM encryption for the DCRYPT library
//!
//! This crate seals plaintext into fixed-size framed chunks, each encrypted
//! with AES-GCM under a fresh random nonce, so arbitrarily large inputs can be
//! encrypted and decrypted through `std::io` streams without ever holding the
//! whole message in memory.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod aes;
pub mod aead;
pub mod cipher;
pub mod error;
pub mod params;
#[cfg(feature = "std")]
pub mod streaming;

// Re-export main types for convenience
pub use aes::{Aes128Key, Aes256Key};
pub use aead::gcm::{Aes128Gcm, Aes256Gcm, GcmNonce};
pub use cipher::{Aead, SymmetricCipher};
pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use streaming::{
    decrypt_file, encrypt_file, Aes128GcmDecryptStream, Aes128GcmEncryptStream,
    Aes256GcmDecryptStream, Aes256GcmEncryptStream, GcmDecryptStream, GcmEncryptStream,
    StreamingDecrypt, StreamingEncrypt,
};
