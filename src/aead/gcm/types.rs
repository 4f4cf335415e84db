//! Value types for the AES-GCM ciphers

use rand::{rngs::OsRng, RngCore};

use crate::error::{validate, Result};
use crate::params::GCM_NONCE_SIZE;

/// A GCM nonce
///
/// Nonces travel in the clear as the prefix of every wire chunk. A fresh
/// random nonce must be drawn for every chunk sealed under a given key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcmNonce([u8; GCM_NONCE_SIZE]);

impl GcmNonce {
    /// Creates a nonce from raw bytes
    pub fn new(bytes: [u8; GCM_NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Generates a fresh random nonce
    pub fn generate() -> Self {
        let mut nonce = [0u8; GCM_NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);
        Self(nonce)
    }

    /// Creates a nonce from a byte slice, validating its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("GCM nonce", bytes.len(), GCM_NONCE_SIZE)?;
        let mut nonce = [0u8; GCM_NONCE_SIZE];
        nonce.copy_from_slice(bytes);
        Ok(Self(nonce))
    }

    /// Returns a reference to the raw nonce bytes
    pub fn as_bytes(&self) -> &[u8; GCM_NONCE_SIZE] {
        &self.0
    }
}
