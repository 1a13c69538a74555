#![allow(dead_code)]

use rand::Rng;

/// Memory throughput in GiB/s.
pub fn throughput_gibs(bytes: usize, duration_secs: f64) -> f64 {
    bytes as f64 / duration_secs / (1024.0 * 1024.0 * 1024.0)
}

/// Bytes moved by a binary lane-wise op: two inputs plus one output.
pub fn binary_rw_bytes<T>(n: usize) -> u64 {
    3 * (n * std::mem::size_of::<T>()) as u64
}

/// Random f32 vector in [-1.0, 1.0).
pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn random_f64_vec(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Random i32 vector with no zeros, usable as divisors.
pub fn random_nonzero_i32_vec(n: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(1..=1000) * if rng.gen::<bool>() { 1 } else { -1 }).collect()
}

/// Random in-bounds gather offsets for a base of `len` elements.
pub fn random_offsets(n: usize, len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..len as i32)).collect()
}
