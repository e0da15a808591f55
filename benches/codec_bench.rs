//! Benchmark: bit-parallel Morton codec vs a per-bit loop, plus the
//! higher-level geohash operations built on it.
//!
//! Run with: `cargo bench --bench codec_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geohash_int::bits::{deinterleave, interleave};
use geohash_int::GeoHash;

fn interleave_per_bit(x: u32, y: u32) -> u64 {
    let mut z = 0u64;
    for i in 0..32 {
        z |= ((x as u64 >> i) & 1) << (2 * i);
        z |= ((y as u64 >> i) & 1) << (2 * i + 1);
    }
    z
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.bench_function("interleave", |b| {
        b.iter(|| interleave(black_box(0xDEAD_BEEF), black_box(0x1234_5678)))
    });
    group.bench_function("interleave_per_bit", |b| {
        b.iter(|| interleave_per_bit(black_box(0xDEAD_BEEF), black_box(0x1234_5678)))
    });
    group.bench_function("deinterleave", |b| {
        b.iter(|| deinterleave(black_box(0xC0FF_EE00_DEAD_BEEF)))
    });
    group.finish();
}

fn bench_geohash(c: &mut Criterion) {
    let mut group = c.benchmark_group("geohash");
    group.bench_function("encode", |b| {
        b.iter(|| GeoHash::from_coords(black_box(52.52), black_box(13.405)).hash())
    });
    group.bench_function("neighbors", |b| {
        let cell = GeoHash::from_coords(52.52, 13.405).with_precision(40).unwrap();
        b.iter(|| black_box(&cell).neighbors())
    });
    group.bench_function("ranges_within_1km", |b| {
        let hash = GeoHash::from_coords(52.52, 13.405);
        b.iter(|| black_box(&hash).ranges_within(black_box(1_000.0)))
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_geohash);
criterion_main!(benches);
