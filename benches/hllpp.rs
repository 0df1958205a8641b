use std::hash::BuildHasherDefault;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use hllpp::serialization::HEADER_LEN;
use hllpp::{Config, HyperLogLogPlus, RepresentationKind};
use hyperloglogplus::HyperLogLog as _;
use pprof::criterion::{Output, PProfProfiler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};
use wyhash::WyHash;

/// Operations are benchmarked against cardinalities ranging from 0 to `DEFAULT_MAX_CARDINALITY`
/// or environment variable `N` (if defined), doubled with every iteration as [0, 1, 2, ..., N].
/// The range covers both sides of the sparse to dense promotion at the default precision.
const DEFAULT_MAX_CARDINALITY: usize = 65536;

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Protobuf));
    targets = benchmark
}
criterion_main!(benches);

fn benchmark(c: &mut Criterion) {
    let bench_results_path =
        std::env::var("BENCH_RESULTS_PATH").unwrap_or_else(|_| "target".to_string());
    let max_cardinality = std::env::var("N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CARDINALITY);

    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= max_cardinality)
        .collect();

    let mut group = c.benchmark_group("add");
    for &cardinality in &cardinalities {
        group.throughput(Throughput::Elements(cardinality.max(1) as u64));
        bench_add(&mut group, cardinality);
        bench_peer_insert(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("count");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities {
        bench_count(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("merge");
    for &cardinality in &cardinalities {
        bench_merge(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("marshal");
    for &cardinality in &cardinalities {
        bench_marshal(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("unmarshal");
    for &cardinality in &cardinalities {
        bench_unmarshal(&mut group, cardinality);
    }
    group.finish();

    let results: Vec<StatRecord> = cardinalities
        .iter()
        .map(|&cardinality| measure(cardinality))
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    std::fs::write(
        format!("{}/representation.md", bench_results_path),
        Table::new(results).with(table_config).to_string(),
    )
    .unwrap();
}

/// Default estimator filled with `0..cardinality` (or `offset..offset + cardinality`)
fn filled(offset: usize, cardinality: usize) -> HyperLogLogPlus {
    let mut estimator = HyperLogLogPlus::new();
    for i in offset..offset + cardinality {
        estimator.add(&i.to_le_bytes());
    }
    estimator
}

fn bench_add(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new("hllpp", cardinality),
        &cardinality,
        |b, &cardinality| {
            b.iter(|| {
                let mut estimator = HyperLogLogPlus::new();
                for i in 0..black_box(cardinality) {
                    estimator.add(black_box(&i.to_le_bytes()));
                }
                estimator
            });
        },
    );
}

/// Same workload on the `hyperloglogplus` crate configured with the same precision
fn bench_peer_insert(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new("hyperloglogplus", cardinality),
        &cardinality,
        |b, &cardinality| {
            b.iter(|| {
                let mut estimator = hyperloglogplus::HyperLogLogPlus::<[u8; 8], _>::new(
                    14,
                    BuildHasherDefault::<WyHash>::default(),
                )
                .unwrap();
                for i in 0..black_box(cardinality) {
                    estimator.insert(black_box(&i.to_le_bytes()));
                }
                estimator.count()
            });
        },
    );
}

fn bench_count(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new("hllpp", cardinality),
        &cardinality,
        |b, &cardinality| {
            let mut estimator = filled(0, cardinality);
            b.iter(|| estimator.count());
        },
    );
}

/// Merge an estimator of `cardinality` items into a half-filled one, so both sides of the
/// promotion point meet sparse and dense operands
fn bench_merge(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    let lhs = filled(0, cardinality / 2);
    let rhs = filled(cardinality, cardinality);
    let id = format!("{}+{}", lhs.representation(), rhs.representation());
    group.bench_with_input(BenchmarkId::new(id, cardinality), &cardinality, |b, _| {
        b.iter(|| {
            let mut lhs = lhs.clone();
            lhs.merge(black_box(&rhs)).unwrap();
            lhs
        });
    });
}

fn bench_marshal(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    let mut estimator = filled(0, cardinality);
    group.throughput(Throughput::Bytes(estimator.marshal().len() as u64));
    group.bench_with_input(
        BenchmarkId::new("hllpp", cardinality),
        &cardinality,
        |b, _| b.iter(|| estimator.marshal()),
    );
}

fn bench_unmarshal(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    let data = filled(0, cardinality).marshal();
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("hllpp", cardinality),
        &cardinality,
        |b, _| b.iter(|| HyperLogLogPlus::unmarshal(black_box(&data)).unwrap()),
    );
}

/// Representation, footprint and accuracy of the default estimator at `cardinality`
fn measure(cardinality: usize) -> StatRecord {
    let config = Config::default();
    let dense_budget = (6usize << config.precision) / 8;

    let mut estimator = filled(0, cardinality);
    estimator.count();
    let marshaled = estimator.marshal().len();

    StatRecord {
        cardinality,
        representation: estimator.representation(),
        bits_per_register: estimator.bits_per_register(),
        size_of: estimator.size_of(),
        marshaled,
        dense_budget_ratio: format!("{:.3}", (marshaled - HEADER_LEN) as f64 / dense_budget as f64),
        relative_error: measure_error(cardinality),
    }
}

/// Average relative error over 100 random streams of `cardinality` items
fn measure_error(cardinality: usize) -> String {
    let n = 100;
    let mut total_relative_error: f64 = 0.0;
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..n {
        let mut estimator = HyperLogLogPlus::new();
        for _ in 0..cardinality {
            estimator.add_hash(rng.gen());
        }
        let relative_error = if cardinality == 0 {
            0.0
        } else {
            (estimator.count() as f64 - cardinality as f64).abs() / cardinality as f64
        };
        total_relative_error += relative_error;
    }
    let avg_relative_error = total_relative_error / (n as f64);

    if avg_relative_error < 1.0 {
        format!("{:.4}", avg_relative_error)
    } else {
        format!("{:.2e}", avg_relative_error)
    }
}

#[derive(Tabled)]
struct StatRecord {
    cardinality: usize,
    representation: RepresentationKind,
    bits_per_register: u8,
    size_of: usize,
    marshaled: usize,
    dense_budget_ratio: String,
    relative_error: String,
}
