//! Wire chunk sizing and stream header framing
//!
//! A stream is `header || chunk*` where the 4-byte little-endian header
//! records the exact byte length of every full wire chunk. Each chunk is
//! `nonce || ciphertext || tag`; the usable plaintext per chunk is the
//! chunk length minus that overhead, rounded down to the AES block size.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{validate, Error, Result};
use crate::params::{AES_BLOCK_SIZE, DEFAULT_CHUNK_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};

/// Nonce and tag overhead carried by every wire chunk
pub const CHUNK_OVERHEAD: usize = GCM_NONCE_SIZE + GCM_TAG_SIZE;

/// Computes the usable plaintext bytes per chunk for a chunk size
///
/// Chunk sizes too small to carry a single aligned payload byte after nonce
/// and tag overhead are a configuration error, surfaced here so stream
/// construction fails instead of looping on zero-length payload units.
pub fn payload_size_for(chunk_size: usize) -> Result<usize> {
    let payload = (chunk_size.saturating_sub(CHUNK_OVERHEAD) / AES_BLOCK_SIZE) * AES_BLOCK_SIZE;
    validate::configuration(
        payload > 0,
        "wire chunk size",
        "too small to carry an aligned payload",
    )?;
    Ok(payload)
}

/// Resolves a caller-requested chunk size, treating zero as the default
pub(crate) fn requested_or_default(chunk_size: usize) -> usize {
    if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    }
}

/// Computes the exact on-wire length of a full chunk for a chunk size
///
/// This is the value written to the stream header: the aligned payload plus
/// nonce and tag overhead. It is at most the given size, and equals it only
/// when the size minus overhead is already block-aligned.
pub fn wire_chunk_size_for(chunk_size: usize) -> Result<usize> {
    Ok(payload_size_for(chunk_size)? + CHUNK_OVERHEAD)
}

/// Writes the stream header recording the wire chunk size
pub(crate) fn write_header<W: Write>(writer: &mut W, wire_chunk_size: usize) -> Result<()> {
    let value = u32::try_from(wire_chunk_size).map_err(|_| Error::Configuration {
        context: "wire chunk size",
        details: "does not fit the 32-bit stream header",
    })?;
    writer.write_u32::<LittleEndian>(value)?;
    Ok(())
}

/// Reads the stream header and validates the recovered wire chunk size
///
/// A short read here is fatal: without the header the chunk boundaries of
/// the rest of the stream are unknowable.
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<usize> {
    let wire_chunk_size = reader.read_u32::<LittleEndian>()? as usize;
    payload_size_for(wire_chunk_size)?;
    Ok(wire_chunk_size)
}

/// Rounds a read request down to whole wire chunks, with a one-chunk floor
///
/// The decoder pulls ciphertext in whole-chunk units; a request smaller
/// than one chunk still pulls a single chunk and banks the surplus
/// plaintext for later reads.
pub(crate) fn pull_budget(requested: usize, wire_chunk_size: usize) -> usize {
    let budget = (requested / wire_chunk_size) * wire_chunk_size;
    if budget == 0 {
        wire_chunk_size
    } else {
        budget
    }
}
