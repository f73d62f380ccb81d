use std::collections::HashMap;
use std::time::Duration;

use bytemap::{ByteMap, KeyMode};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, distr::Alphanumeric};
use rustc_hash::FxBuildHasher;

/// Generates a vector of key-value pairs for benchmarking. Alphanumeric
/// key bytes are never zero, so a single trailing terminator delimits the
/// span in nul-terminated mode.
fn generate_data(size: usize) -> Vec<(Vec<u8>, u64)> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let key_len = rng.random_range(1..=24);
            let mut key: Vec<u8> = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(key_len)
                .collect();
            key.push(0);
            (key, i as u64)
        })
        .collect()
}

fn fill_fnv(data: &[(Vec<u8>, u64)]) -> ByteMap<'_, u64> {
    let mut map = ByteMap::new(16, KeyMode::NulTerminated, false);
    for (key, value) in data {
        map.insert(black_box(key), *value);
    }
    map
}

fn fill_fx(data: &[(Vec<u8>, u64)]) -> ByteMap<'_, u64, FxBuildHasher> {
    let mut map = ByteMap::with_hasher(16, KeyMode::NulTerminated, false, FxBuildHasher);
    for (key, value) in data {
        map.insert(black_box(key), *value);
    }
    map
}

fn fill_std(data: &[(Vec<u8>, u64)]) -> HashMap<&[u8], u64> {
    let mut map = HashMap::new();
    for (key, value) in data {
        map.insert(black_box(key.as_slice()), *value);
    }
    map
}

fn benchmark_map_comparisons(c: &mut Criterion) {
    for &size in &[10_000, 100_000] {
        let mut group = c.benchmark_group(format!("size={size}"));
        if size >= 100_000 {
            group.sample_size(20);
            group.measurement_time(Duration::from_secs(20));
        }

        let data = generate_data(size);

        group.bench_function("ByteMap<Fnv> - insert", |b| b.iter(|| fill_fnv(&data)));
        group.bench_function("ByteMap<Fx> - insert", |b| b.iter(|| fill_fx(&data)));
        group.bench_function("std HashMap - insert", |b| b.iter(|| fill_std(&data)));

        let fnv_map = fill_fnv(&data);
        group.bench_function("ByteMap<Fnv> - get", |b| {
            b.iter(|| {
                for (key, _) in data.iter() {
                    black_box(fnv_map.get(black_box(key)));
                }
            })
        });

        let fx_map = fill_fx(&data);
        group.bench_function("ByteMap<Fx> - get", |b| {
            b.iter(|| {
                for (key, _) in data.iter() {
                    black_box(fx_map.get(black_box(key)));
                }
            })
        });

        let std_map = fill_std(&data);
        group.bench_function("std HashMap - get", |b| {
            b.iter(|| {
                for (key, _) in data.iter() {
                    black_box(std_map.get(black_box(key.as_slice())));
                }
            })
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_map_comparisons);
criterion_main!(benches);
