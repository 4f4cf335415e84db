//! Authenticated encryption with associated data (AEAD) adapters

pub mod gcm;

// Re-export the GCM types
pub use gcm::{Aes128Gcm, Aes256Gcm, GcmNonce};
