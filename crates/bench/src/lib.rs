use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const LARGE_RUNTIME_THRESHOLD: usize = 16_384;
const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeOp {
    Fold { start: usize, end: usize },
    Update { start: usize, end: usize, delta: i64 },
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= LARGE_RUNTIME_THRESHOLD {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Non-empty `[start, end)` with `end <= n`. Requires `n > 0`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (usize, usize) {
    debug_assert!(n > 0);
    let start = rng.random_range(0..n);
    let end = rng.random_range((start + 1)..=n);
    (start, end)
}

/// Mixed fold/update workload where `update_percent` of the ops are updates.
pub fn random_ops<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
    update_percent: u32,
    delta_range: RangeInclusive<i64>,
) -> Vec<RangeOp> {
    (0..count)
        .map(|_| {
            let (start, end) = random_range(rng, n);
            if rng.random_range(0..100) < update_percent {
                let delta = rng.random_range(delta_range.clone());
                RangeOp::Update { start, end, delta }
            } else {
                RangeOp::Fold { start, end }
            }
        })
        .collect()
}
