use bench::RangeOp;
use bench::apply_runtime_config_for_size;
use bench::default_rng;
use bench::random_ops;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use lazy_segtree::LazySegmentTree;
use lazy_segtree::RangeMaxRangeAdd;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const DELTA_RANGE: std::ops::RangeInclusive<i64> = -1_000..=1_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    FoldOnly,
    Mixed,
    UpdateHeavy,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::FoldOnly => "fold_only",
            Self::Mixed => "mixed",
            Self::UpdateHeavy => "update_heavy",
        }
    }

    fn update_percent(self) -> u32 {
        match self {
            Self::FoldOnly => 0,
            Self::Mixed => 50,
            Self::UpdateHeavy => 90,
        }
    }
}

fn naive_run(values: &[i64], ops: &[RangeOp]) -> i64 {
    let mut values = values.to_vec();
    let mut acc = 0_i64;
    for &op in ops {
        match op {
            RangeOp::Fold { start, end } => {
                let max = values[start..end].iter().copied().max().unwrap_or(i64::MIN);
                acc ^= max;
            }
            RangeOp::Update { start, end, delta } => {
                for value in &mut values[start..end] {
                    *value += delta;
                }
            }
        }
    }
    acc
}

fn tree_run(values: &[i64], ops: &[RangeOp]) -> i64 {
    let mut tree = LazySegmentTree::<RangeMaxRangeAdd>::new(values);
    let mut acc = 0_i64;
    for &op in ops {
        match op {
            RangeOp::Fold { start, end } => acc ^= tree.fold(start..end),
            RangeOp::Update { start, end, delta } => tree.update(start..end, delta),
        }
    }
    acc
}

fn bench_impl<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &[i64],
    ops: &[RangeOp],
    run: fn(&[i64], &[RangeOp]) -> i64,
) {
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| black_box(run(black_box(values), black_box(ops))))
    });
}

fn bench_lazy_segtree(c: &mut Criterion) {
    let workloads = [Workload::FoldOnly, Workload::Mixed, Workload::UpdateHeavy];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("lazy_segtree/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let values = random_values(&mut rng, size, VALUE_RANGE);
            let ops = random_ops(&mut rng, size, size, workload.update_percent(), DELTA_RANGE);

            bench_impl(&mut group, "segtree", size, &values, &ops, tree_run);
            if size <= 4_096 {
                bench_impl(&mut group, "naive", size, &values, &ops, naive_run);
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_lazy_segtree);
criterion_main!(benches);
