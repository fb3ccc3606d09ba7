use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use ubst::BSTreeSet;

const N: usize = 10_000;

/// Sorted input degenerates the tree into a chain, so those cases run at a smaller size.
const N_CHAIN: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

/// Random keys squeezed into a narrow range, so most of them repeat.
fn duplicate_heavy_keys(n: usize) -> Vec<i64> {
    random_keys(n).into_iter().map(|k| k % 64).collect()
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("BSTreeSet", keys.len()), |b| {
        b.iter(|| {
            let mut set = BSTreeSet::new();
            for &k in keys {
                set.insert(k);
            }
            set
        });
    });

    // `BTreeSet` merges duplicates; the comparison is only about descent and placement cost.
    group.bench_function(BenchmarkId::new("BTreeSet", keys.len()), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_set_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "set_insert_ordered", &ordered_keys(N_CHAIN));
}

fn bench_set_insert_random(c: &mut Criterion) {
    bench_insert(c, "set_insert_random", &random_keys(N));
}

fn bench_set_insert_duplicates(c: &mut Criterion) {
    let keys = duplicate_heavy_keys(N_CHAIN);
    let mut group = c.benchmark_group("set_insert_duplicates");

    group.bench_function(BenchmarkId::new("BSTreeSet", keys.len()), |b| {
        b.iter(|| {
            let mut set = BSTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("SortedVec", keys.len()), |b| {
        b.iter(|| {
            let mut sorted: Vec<i64> = Vec::with_capacity(keys.len());
            for &k in &keys {
                let at = sorted.partition_point(|&v| v <= k);
                sorted.insert(at, k);
            }
            sorted
        });
    });

    group.finish();
}

// ─── Contains ───────────────────────────────────────────────────────────────

fn bench_set_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BSTreeSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("BSTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bst.contains(*k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt.contains(*k)).count());
    });

    group.finish();
}

fn bench_set_contains_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N_CHAIN);
    let bst: BSTreeSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_ordered");

    group.bench_function(BenchmarkId::new("BSTreeSet", N_CHAIN), |b| {
        b.iter(|| keys.iter().filter(|k| bst.contains(*k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N_CHAIN), |b| {
        b.iter(|| keys.iter().filter(|k| bt.contains(*k)).count());
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_set_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BSTreeSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_remove_random");

    group.bench_function(BenchmarkId::new("BSTreeSet", N), |b| {
        b.iter_batched(
            || bst.clone(),
            |mut set| {
                for k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || bt.clone(),
            |mut set| {
                for k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Extraction ─────────────────────────────────────────────────────────────

fn bench_set_to_sorted_vec(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BSTreeSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_to_sorted_vec");

    group.bench_function(BenchmarkId::new("BSTreeSet", N), |b| {
        b.iter(|| bst.to_sorted_vec());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt.iter().copied().collect::<Vec<_>>());
    });

    group.finish();
}

criterion_group!(set_insert_benches, bench_set_insert_ordered, bench_set_insert_random, bench_set_insert_duplicates,);

criterion_group!(set_contains_benches, bench_set_contains_ordered, bench_set_contains_random,);

criterion_group!(set_remove_benches, bench_set_remove_random,);

criterion_group!(set_extract_benches, bench_set_to_sorted_vec,);

criterion_main!(set_insert_benches, set_contains_benches, set_remove_benches, set_extract_benches,);
