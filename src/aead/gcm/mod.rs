//! AES-GCM authenticated encryption
//!
//! This module adapts the RustCrypto `aes-gcm` implementation to the
//! crate's [`SymmetricCipher`] and [`Aead`] traits. The chunked streams
//! drive the primitive exclusively through this adapter.
//!
//! # Examples
//!
//! ```
//! use dcrypt_gcmstream::{Aes256Gcm, Aes256Key, SymmetricCipher, Aead};
//!
//! let key = Aes256Key::generate();
//! let cipher = Aes256Gcm::new(&key).unwrap();
//!
//! let nonce = Aes256Gcm::generate_nonce();
//! let ciphertext = cipher.encrypt(&nonce, b"Secret message", None).unwrap();
//!
//! let decrypted = cipher.decrypt(&nonce, &ciphertext, None).unwrap();
//! assert_eq!(decrypted, b"Secret message");
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use aes_gcm::aead::{Aead as AeadCipher, KeyInit, Payload};
use aes_gcm::{Aes128Gcm as Aes128GcmImpl, Aes256Gcm as Aes256GcmImpl, Nonce};

use crate::aes::{Aes128Key, Aes256Key};
use crate::cipher::{Aead, SymmetricCipher};
use crate::error::{Error, Result};

pub mod types;


pub use types::GcmNonce;

/// AES-128-GCM authenticated encryption
pub struct Aes128Gcm {
    cipher: Aes128GcmImpl,
}

/// AES-256-GCM authenticated encryption
pub struct Aes256Gcm {
    cipher: Aes256GcmImpl,
}

impl SymmetricCipher for Aes128Gcm {
    type Key = Aes128Key;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            cipher: Aes128GcmImpl::new(key.as_bytes().into()),
        })
    }

    fn name() -> &'static str {
        "AES-128-GCM"
    }
}

impl Aead for Aes128Gcm {
    type Nonce = GcmNonce;

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let payload = Payload {
            msg: plaintext,
            aad: aad.unwrap_or(&[]),
        };
        self.cipher
            .encrypt(Nonce::from_slice(nonce.as_bytes()), payload)
            .map_err(|_| Error::Configuration {
                context: "AES-128-GCM",
                details: "plaintext too large to seal",
            })
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let payload = Payload {
            msg: ciphertext,
            aad: aad.unwrap_or(&[]),
        };
        self.cipher
            .decrypt(Nonce::from_slice(nonce.as_bytes()), payload)
            .map_err(|_| Error::Authentication {
                algorithm: "AES-128-GCM",
            })
    }

    fn generate_nonce() -> Self::Nonce {
        GcmNonce::generate()
    }
}

impl SymmetricCipher for Aes256Gcm {
    type Key = Aes256Key;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            cipher: Aes256GcmImpl::new(key.as_bytes().into()),
        })
    }

    fn name() -> &'static str {
        "AES-256-GCM"
    }
}

impl Aead for Aes256Gcm {
    type Nonce = GcmNonce;

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let payload = Payload {
            msg: plaintext,
            aad: aad.unwrap_or(&[]),
        };
        self.cipher
            .encrypt(Nonce::from_slice(nonce.as_bytes()), payload)
            .map_err(|_| Error::Configuration {
                context: "AES-256-GCM",
                details: "plaintext too large to seal",
            })
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let payload = Payload {
            msg: ciphertext,
            aad: aad.unwrap_or(&[]),
        };
        self.cipher
            .decrypt(Nonce::from_slice(nonce.as_bytes()), payload)
            .map_err(|_| Error::Authentication {
                algorithm: "AES-256-GCM",
            })
    }

    fn generate_nonce() -> Self::Nonce {
        GcmNonce::generate()
    }
}
