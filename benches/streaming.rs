//! Benchmarks for chunked streaming AES-GCM
//!
//! Measures stream encryption and decryption throughput for various message
//! sizes and chunk sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dcrypt_gcmstream::{
    Aes256GcmDecryptStream, Aes256GcmEncryptStream, Aes256Key, StreamingDecrypt, StreamingEncrypt,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn encrypt_all(key: &Aes256Key, plaintext: &[u8], chunk_size: usize) -> Vec<u8> {
    let mut stream = Aes256GcmEncryptStream::new(Vec::new(), key, chunk_size, None).unwrap();
    stream.write(plaintext).unwrap();
    stream.finalize().unwrap()
}

fn decrypt_all(key: &Aes256Key, ciphertext: &[u8]) -> Vec<u8> {
    let mut stream = Aes256GcmDecryptStream::new(ciphertext, key, None).unwrap();
    let mut plaintext = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        plaintext.extend_from_slice(&buf[..n]);
    }
    plaintext
}

/// Benchmark stream encryption with various message sizes
fn bench_stream_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcm_stream_encrypt");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key_bytes = [0u8; 32];
    rng.fill(&mut key_bytes);
    let key = Aes256Key::new(key_bytes);

    let sizes = [1024, 16384, 262144, 1048576];
    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("aes256", size), size, |b, &size| {
            let mut plaintext = vec![0u8; size];
            rng.fill(&mut plaintext[..]);

            b.iter(|| {
                let ciphertext = encrypt_all(&key, black_box(&plaintext), 0);
                black_box(ciphertext);
            });
        });
    }

    group.finish();
}

/// Benchmark stream decryption with various message sizes
fn bench_stream_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcm_stream_decrypt");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key_bytes = [0u8; 32];
    rng.fill(&mut key_bytes);
    let key = Aes256Key::new(key_bytes);

    let sizes = [1024, 16384, 262144, 1048576];
    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("aes256", size), size, |b, &size| {
            let mut plaintext = vec![0u8; size];
            rng.fill(&mut plaintext[..]);
            let ciphertext = encrypt_all(&key, &plaintext, 0);

            b.iter(|| {
                let decrypted = decrypt_all(&key, black_box(&ciphertext));
                black_box(decrypted);
            });
        });
    }

    group.finish();
}

/// Benchmark the effect of chunk size on a fixed-size message
fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcm_stream_chunk_size");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key_bytes = [0u8; 32];
    rng.fill(&mut key_bytes);
    let key = Aes256Key::new(key_bytes);

    let mut plaintext = vec![0u8; 65536];
    rng.fill(&mut plaintext[..]);

    let chunk_sizes = [64, 512, 4096, 16384];
    for chunk_size in &chunk_sizes {
        group.throughput(Throughput::Bytes(plaintext.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("encrypt_64KiB", chunk_size),
            chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let ciphertext = encrypt_all(&key, black_box(&plaintext), chunk_size);
                    black_box(ciphertext);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_stream_encrypt,
    bench_stream_decrypt,
    bench_chunk_sizes
);
criterion_main!(benches);
