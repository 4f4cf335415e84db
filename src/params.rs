//! Constants for the chunked AES-GCM stream format

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Default wire chunk size in bytes, used when the caller requests size zero
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Byte length of the stream header carrying the wire chunk size
pub const CHUNK_HEADER_SIZE: usize = 4;
