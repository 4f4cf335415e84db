//! Chunked streaming AES-GCM implementations
//!
//! The encrypt stream accumulates plaintext and seals one wire chunk per
//! payload-size unit; the decrypt stream pulls whole wire chunks, opens
//! them, and serves plaintext from an internal buffer. Instances are
//! single-pass and single-message: create a fresh stream per message.
//!
//! # Examples
//!
//! ```
//! use dcrypt_gcmstream::{
//!     Aes256GcmEncryptStream, Aes256GcmDecryptStream, Aes256Key,
//!     StreamingEncrypt, StreamingDecrypt,
//! };
//!
//! let key = Aes256Key::generate();
//!
//! let mut stream = Aes256GcmEncryptStream::new(Vec::new(), &key, 0, None).unwrap();
//! stream.write(b"Secret message").unwrap();
//! let ciphertext = stream.finalize().unwrap();
//!
//! let mut stream = Aes256GcmDecryptStream::new(&ciphertext[..], &key, None).unwrap();
//! let mut plaintext = Vec::new();
//! let mut buf = [0u8; 64];
//! loop {
//!     let n = stream.read(&mut buf).unwrap();
//!     if n == 0 {
//!         break;
//!     }
//!     plaintext.extend_from_slice(&buf[..n]);
//! }
//! assert_eq!(plaintext, b"Secret message");
//! ```

use std::io::{Read, Write};

use crate::aead::gcm::{Aes128Gcm, Aes256Gcm, GcmNonce};
use crate::aes::Aes256Key;
use crate::cipher::Aead;
use crate::error::{validate, Result};
use crate::params::GCM_NONCE_SIZE;

use super::chunk::{self, CHUNK_OVERHEAD};
use super::{StreamingDecrypt, StreamingEncrypt};

/// Streaming encryption producing the chunked wire format
///
/// Generic over any [`Aead`] cipher using GCM nonces; the provided type
/// aliases cover the two AES variants.
pub struct GcmEncryptStream<W: Write, C: Aead<Nonce = GcmNonce>> {
    writer: W,
    cipher: C,
    buffer: Vec<u8>,
    payload_size: usize,
    aad: Option<Vec<u8>>,
}

impl<W: Write, C: Aead<Nonce = GcmNonce>> GcmEncryptStream<W, C> {
    /// Creates a new encryption stream bound to a sink
    ///
    /// A `chunk_size` of zero selects the default (512). Construction
    /// validates the derived payload size and immediately writes the
    /// 4-byte little-endian header carrying the exact wire chunk length.
    pub fn new(writer: W, key: &C::Key, chunk_size: usize, aad: Option<&[u8]>) -> Result<Self> {
        let cipher = C::new(key)?;

        let chunk_size = chunk::requested_or_default(chunk_size);
        let payload_size = chunk::payload_size_for(chunk_size)?;
        let wire_chunk_size = payload_size + CHUNK_OVERHEAD;

        let mut writer = writer;
        chunk::write_header(&mut writer, wire_chunk_size)?;

        Ok(Self {
            writer,
            cipher,
            buffer: Vec::with_capacity(payload_size),
            payload_size,
            aad: aad.map(|a| a.to_vec()),
        })
    }

    /// Seals one plaintext unit as a wire chunk
    fn seal_unit(&mut self, plaintext: &[u8]) -> Result<()> {
        let nonce = C::generate_nonce();
        let ciphertext = self.cipher.encrypt(&nonce, plaintext, self.aad.as_deref())?;

        self.writer.write_all(nonce.as_bytes())?;
        self.writer.write_all(&ciphertext)?;
        Ok(())
    }

    /// Seals the staged remainder as one wire chunk and clears it
    fn seal_staged(&mut self) -> Result<()> {
        let nonce = C::generate_nonce();
        let ciphertext = self
            .cipher
            .encrypt(&nonce, &self.buffer, self.aad.as_deref())?;

        self.writer.write_all(nonce.as_bytes())?;
        self.writer.write_all(&ciphertext)?;

        self.buffer.clear();
        Ok(())
    }
}

impl<W: Write, C: Aead<Nonce = GcmNonce>> StreamingEncrypt<W> for GcmEncryptStream<W, C> {
    /// Buffers plaintext and seals every full payload-size unit
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut data = data;

        // Top up a staged partial unit before sealing from the input.
        if !self.buffer.is_empty() {
            let take = (self.payload_size - self.buffer.len()).min(data.len());
            self.buffer.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.buffer.len() == self.payload_size {
                self.seal_staged()?;
            }
        }

        // Full units are sealed straight from the input slice; the buffer
        // never holds a full payload unit across calls.
        while data.len() >= self.payload_size {
            self.seal_unit(&data[..self.payload_size])?;
            data = &data[self.payload_size..];
        }

        self.buffer.extend_from_slice(data);
        Ok(())
    }

    /// Seals any remaining buffered plaintext as the final short chunk
    ///
    /// Consumes the stream and returns the sink with every chunk written.
    /// Dropping a stream without calling this loses the buffered tail of
    /// the message.
    fn finalize(mut self) -> Result<W> {
        if !self.buffer.is_empty() {
            self.seal_staged()?;
        }
        Ok(self.writer)
    }
}

/// Streaming decryption consuming the chunked wire format
pub struct GcmDecryptStream<R: Read, C: Aead<Nonce = GcmNonce>> {
    reader: R,
    cipher: C,
    buffer: Vec<u8>,
    wire_chunk_size: usize,
    source_exhausted: bool,
    aad: Option<Vec<u8>>,
}

impl<R: Read, C: Aead<Nonce = GcmNonce>> GcmDecryptStream<R, C> {
    /// Creates a new decryption stream bound to a source
    ///
    /// Construction reads the 4-byte header to recover the wire chunk
    /// size; a source holding fewer than 4 bytes is a fatal error, as is a
    /// recovered size too small to carry any payload.
    pub fn new(reader: R, key: &C::Key, aad: Option<&[u8]>) -> Result<Self> {
        let cipher = C::new(key)?;

        let mut reader = reader;
        let wire_chunk_size = chunk::read_header(&mut reader)?;

        Ok(Self {
            reader,
            cipher,
            buffer: Vec::new(),
            wire_chunk_size,
            source_exhausted: false,
            aad: aad.map(|a| a.to_vec()),
        })
    }

    /// Pulls and opens one wire chunk, banking its plaintext
    ///
    /// Fills up to one chunk from the source, reading repeatedly so that
    /// short reads mid-chunk (pipes, sockets) do not break framing; only
    /// end-of-source yields a short final chunk. Returns the number of
    /// wire bytes consumed, zero when the source is already exhausted.
    fn pull_chunk(&mut self) -> Result<usize> {
        let mut chunk_buf = vec![0u8; self.wire_chunk_size];
        let mut filled = 0;
        while filled < chunk_buf.len() {
            let n = self.reader.read(&mut chunk_buf[filled..])?;
            if n == 0 {
                self.source_exhausted = true;
                break;
            }
            filled += n;
        }

        if filled == 0 {
            return Ok(0);
        }
        validate::format(
            filled >= CHUNK_OVERHEAD,
            "wire chunk",
            "truncated chunk shorter than nonce and tag",
        )?;

        let mut nonce_bytes = [0u8; GCM_NONCE_SIZE];
        nonce_bytes.copy_from_slice(&chunk_buf[..GCM_NONCE_SIZE]);
        let nonce = GcmNonce::new(nonce_bytes);

        let plaintext =
            self.cipher
                .decrypt(&nonce, &chunk_buf[GCM_NONCE_SIZE..filled], self.aad.as_deref())?;
        self.buffer.extend_from_slice(&plaintext);

        Ok(filled)
    }
}

impl<R: Read, C: Aead<Nonce = GcmNonce>> StreamingDecrypt<R> for GcmDecryptStream<R, C> {
    /// Serves decrypted plaintext, pulling chunks to cover the request
    ///
    /// Pulls are budgeted in whole chunks (minimum one); surplus plaintext
    /// stays buffered for later reads. Returns `Ok(0)` once the source is
    /// exhausted and the buffer is empty.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut todo = chunk::pull_budget(buf.len(), self.wire_chunk_size);
        while !self.source_exhausted && todo >= self.wire_chunk_size {
            let consumed = self.pull_chunk()?;
            if consumed == 0 {
                break;
            }
            todo -= consumed;
        }

        let served = self.buffer.len().min(buf.len());
        buf[..served].copy_from_slice(&self.buffer[..served]);
        self.buffer.drain(..served);
        Ok(served)
    }
}

/// Streaming encryption over AES-128-GCM
pub type Aes128GcmEncryptStream<W> = GcmEncryptStream<W, Aes128Gcm>;

/// Streaming decryption over AES-128-GCM
pub type Aes128GcmDecryptStream<R> = GcmDecryptStream<R, Aes128Gcm>;

/// Streaming encryption over AES-256-GCM
pub type Aes256GcmEncryptStream<W> = GcmEncryptStream<W, Aes256Gcm>;

/// Streaming decryption over AES-256-GCM
pub type Aes256GcmDecryptStream<R> = GcmDecryptStream<R, Aes256Gcm>;

/// Encrypts a whole file or reader into a chunked AES-256-GCM stream
pub fn encrypt_file<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    key: &Aes256Key,
    chunk_size: usize,
    aad: Option<&[u8]>,
) -> Result<W> {
    let mut stream = Aes256GcmEncryptStream::new(writer, key, chunk_size, aad)?;

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        stream.write(&buffer[..bytes_read])?;
    }

    stream.finalize()
}

/// Decrypts a whole chunked AES-256-GCM stream into a file or writer
pub fn decrypt_file<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    key: &Aes256Key,
    aad: Option<&[u8]>,
) -> Result<W> {
    let mut stream = Aes256GcmDecryptStream::new(reader, key, aad)?;

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = stream.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
    }

    Ok(writer)
}
