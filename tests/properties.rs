//! Property-based tests for chunked streaming AES-GCM

use dcrypt_gcmstream::{
    Aes256GcmDecryptStream, Aes256GcmEncryptStream, Aes256Key, Error, StreamingDecrypt,
    StreamingEncrypt,
};
use proptest::prelude::*;

/// Chunk sizes large enough to carry at least one cipher block
fn legal_chunk_size() -> impl Strategy<Value = usize> {
    44usize..=2048
}

fn encrypt_in_splits(key: &Aes256Key, plaintext: &[u8], chunk_size: usize, split: usize) -> Vec<u8> {
    let mut stream = Aes256GcmEncryptStream::new(Vec::new(), key, chunk_size, None).unwrap();
    for part in plaintext.chunks(split) {
        stream.write(part).unwrap();
    }
    stream.finalize().unwrap()
}

fn decrypt_in_splits(key: &Aes256Key, ciphertext: &[u8], split: usize) -> Vec<u8> {
    let mut stream = Aes256GcmDecryptStream::new(ciphertext, key, None).unwrap();
    let mut plaintext = Vec::new();
    let mut buf = vec![0u8; split];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        plaintext.extend_from_slice(&buf[..n]);
    }
    plaintext
}

proptest! {
    #[test]
    fn roundtrip_any_length_chunking_and_granularity(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=2048),
        chunk_size in legal_chunk_size(),
        write_split in 1usize..=256,
        read_split in 1usize..=256
    ) {
        let key = Aes256Key::new(key);

        let ciphertext = encrypt_in_splits(&key, &data, chunk_size, write_split);
        let decrypted = decrypt_in_splits(&key, &ciphertext, read_split);

        prop_assert_eq!(decrypted, data);
    }

    #[test]
    fn ciphertext_length_is_determined_by_sizing(
        key in any::<[u8; 32]>(),
        data_len in 0usize..=2048,
        chunk_size in legal_chunk_size()
    ) {
        let key = Aes256Key::new(key);
        let data = vec![0u8; data_len];

        let ciphertext = encrypt_in_splits(&key, &data, chunk_size, 97);

        // Header, whole payload units, then the remainder if any,
        // each unit carrying 28 bytes of nonce and tag.
        let payload = ((chunk_size - 28) / 16) * 16;
        let full_chunks = data_len / payload;
        let remainder = data_len % payload;
        let mut expected = 4 + full_chunks * (payload + 28);
        if remainder > 0 {
            expected += remainder + 28;
        }

        prop_assert_eq!(ciphertext.len(), expected);
    }

    #[test]
    fn repeated_encryption_never_repeats_chunks(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 1..=512)
    ) {
        let key = Aes256Key::new(key);

        let first = encrypt_in_splits(&key, &data, 64, 64);
        let second = encrypt_in_splits(&key, &data, 64, 64);

        // Fresh random nonces make the chunk bytes differ even for
        // identical plaintext; only the header repeats.
        prop_assert_eq!(&first[..4], &second[..4]);
        prop_assert_ne!(&first[4..], &second[4..]);
    }

    #[test]
    fn undersized_chunk_sizes_are_rejected(
        key in any::<[u8; 32]>(),
        chunk_size in 1usize..44
    ) {
        let key = Aes256Key::new(key);
        let result = Aes256GcmEncryptStream::new(Vec::new(), &key, chunk_size, None);
        let rejected = matches!(result, Err(Error::Configuration { .. }));
        prop_assert!(rejected, "chunk size {} must be rejected", chunk_size);
    }
}
