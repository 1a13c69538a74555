//! Pack operators against the plain scalar loops in `scalar-ops`.
//!
//! Sizes: 1K, 16K, 256K elements. Throughput is reported in bytes moved.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

#[path = "utils.rs"]
mod utils;

use lanepack::{memory, Lanes, Pack};

const ELEM_SIZES: &[usize] = &[1024, 16384, 262144];

fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        16384 => "16K".into(),
        262144 => "256K".into(),
        _ => format!("{n}"),
    }
}

/// `out = a op b` in `W`-lane chunks. Lengths are multiples of every width
/// benchmarked here, and `Vec` data is only element-aligned, so this goes
/// through `from_array` rather than the aligned loads.
#[inline(never)]
fn pack_loop<T, const W: usize>(a: &[T], b: &[T], out: &mut [T], op: fn(Pack<T, W>, Pack<T, W>) -> Pack<T, W>)
where
    T: Lanes<W>,
{
    for ((x, y), o) in a.chunks_exact(W).zip(b.chunks_exact(W)).zip(out.chunks_exact_mut(W)) {
        let (Ok(x), Ok(y)) = (<[T; W]>::try_from(x), <[T; W]>::try_from(y)) else {
            continue;
        };
        let r = op(Pack::from_array(x), Pack::from_array(y));
        o.copy_from_slice(&r.to_array());
    }
}

fn bench_add_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_f32");
    group.measurement_time(Duration::from_secs(3));
    for &n in ELEM_SIZES {
        let a = utils::random_f32_vec(n);
        let b = utils::random_f32_vec(n);
        let mut out = vec![0.0f32; n];
        group.throughput(Throughput::Bytes(utils::binary_rw_bytes::<f32>(n)));
        group.bench_with_input(BenchmarkId::new("scalar", size_label(n)), &n, |bench, &n| {
            bench.iter(|| unsafe { scalar_ops::scalar_vec_add_f32(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), n) })
        });
        group.bench_with_input(BenchmarkId::new("pack_w8", size_label(n)), &n, |bench, _| {
            bench.iter(|| pack_loop::<f32, 8>(black_box(&a), black_box(&b), &mut out, |x, y| x + y))
        });
        group.bench_with_input(BenchmarkId::new("pack_w16", size_label(n)), &n, |bench, _| {
            bench.iter(|| pack_loop::<f32, 16>(black_box(&a), black_box(&b), &mut out, |x, y| x + y))
        });
    }
    group.finish();
}

fn bench_mul_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_f64");
    group.measurement_time(Duration::from_secs(3));
    for &n in ELEM_SIZES {
        let a = utils::random_f64_vec(n);
        let b = utils::random_f64_vec(n);
        let mut out = vec![0.0f64; n];
        group.throughput(Throughput::Bytes(utils::binary_rw_bytes::<f64>(n)));
        group.bench_with_input(BenchmarkId::new("scalar", size_label(n)), &n, |bench, &n| {
            bench.iter(|| unsafe { scalar_ops::scalar_vec_mul_f64(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), n) })
        });
        group.bench_with_input(BenchmarkId::new("pack_w4", size_label(n)), &n, |bench, _| {
            bench.iter(|| pack_loop::<f64, 4>(black_box(&a), black_box(&b), &mut out, |x, y| x * y))
        });
        group.bench_with_input(BenchmarkId::new("pack_w16", size_label(n)), &n, |bench, _| {
            bench.iter(|| pack_loop::<f64, 16>(black_box(&a), black_box(&b), &mut out, |x, y| x * y))
        });
    }
    group.finish();
}

fn bench_rem_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("rem_i32");
    group.measurement_time(Duration::from_secs(3));
    for &n in ELEM_SIZES {
        let a = utils::random_nonzero_i32_vec(n);
        let b = utils::random_nonzero_i32_vec(n);
        let mut out = vec![0i32; n];
        group.throughput(Throughput::Bytes(utils::binary_rw_bytes::<i32>(n)));
        group.bench_with_input(BenchmarkId::new("scalar", size_label(n)), &n, |bench, &n| {
            bench.iter(|| unsafe { scalar_ops::scalar_vec_rem_i32(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), n) })
        });
        group.bench_with_input(BenchmarkId::new("pack_w8", size_label(n)), &n, |bench, _| {
            bench.iter(|| pack_loop::<i32, 8>(black_box(&a), black_box(&b), &mut out, |x, y| x % y))
        });
    }
    group.finish();
}

fn bench_gather_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("gather_f32");
    let base = utils::random_f32_vec(4096);
    for &n in ELEM_SIZES {
        let offsets = utils::random_offsets(n, base.len());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("indexing", size_label(n)), &n, |bench, _| {
            bench.iter(|| offsets.iter().map(|&o| base[o as usize]).sum::<f32>())
        });
        group.bench_with_input(BenchmarkId::new("pack_w8", size_label(n)), &n, |bench, _| {
            bench.iter(|| {
                let mut acc = Pack::<f32, 8>::zero();
                for chunk in offsets.chunks_exact(8) {
                    let Ok(idx) = <[i32; 8]>::try_from(chunk) else { continue };
                    // SAFETY: offsets are drawn from 0..base.len().
                    acc += unsafe { memory::gather(base.as_ptr(), &Pack::<i32, 8>::from_array(idx)) };
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(
    name = pack_benches;
    config = Criterion::default();
    targets = bench_add_f32, bench_mul_f64, bench_rem_i32, bench_gather_f32
);
criterion_main!(pack_benches);
