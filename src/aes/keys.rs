//! Key types for the AES-GCM stream ciphers

use core::fmt;

use rand::{rngs::OsRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::params::{AES128_KEY_SIZE, AES256_KEY_SIZE};

/// AES-128 key type
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Aes128Key([u8; AES128_KEY_SIZE]);

impl Aes128Key {
    /// Creates a new key from raw bytes
    pub fn new(bytes: [u8; AES128_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a new random key
    pub fn generate() -> Self {
        let mut key = [0u8; AES128_KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Creates a key from a byte slice, validating its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", bytes.len(), AES128_KEY_SIZE)?;
        let mut key = [0u8; AES128_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns a reference to the raw key bytes
    pub fn as_bytes(&self) -> &[u8; AES128_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes128Key([REDACTED])")
    }
}

impl PartialEq for Aes128Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Aes128Key {}

/// AES-256 key type
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Aes256Key([u8; AES256_KEY_SIZE]);

impl Aes256Key {
    /// Creates a new key from raw bytes
    pub fn new(bytes: [u8; AES256_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a new random key
    pub fn generate() -> Self {
        let mut key = [0u8; AES256_KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Creates a key from a byte slice, validating its length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", bytes.len(), AES256_KEY_SIZE)?;
        let mut key = [0u8; AES256_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns a reference to the raw key bytes
    pub fn as_bytes(&self) -> &[u8; AES256_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes256Key([REDACTED])")
    }
}

impl PartialEq for Aes256Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Aes256Key {}
