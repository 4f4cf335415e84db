//! Streaming encryption APIs for the chunked wire format
//!
//! This module provides streaming interfaces for encrypting and decrypting
//! unbounded data without holding whole messages in memory, plus the
//! sizing and framing rules of the wire format itself.

use std::io::{Read, Write};

use crate::error::Result;

/// Trait for streaming encryption
pub trait StreamingEncrypt<W: Write> {
    /// Writes plaintext data to the stream
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the stream, encrypting any remaining data
    fn finalize(self) -> Result<W>;
}

/// Trait for streaming decryption
pub trait StreamingDecrypt<R: Read> {
    /// Reads and decrypts data from the stream
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

pub mod chunk;
pub mod gcm;


// Re-export streaming implementations
pub use gcm::{
    decrypt_file, encrypt_file, Aes128GcmDecryptStream, Aes128GcmEncryptStream,
    Aes256GcmDecryptStream, Aes256GcmEncryptStream, GcmDecryptStream, GcmEncryptStream,
};
