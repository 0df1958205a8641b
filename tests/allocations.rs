#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hllpp::serialization::HEADER_LEN;
use hllpp::{Config, HyperLogLogPlus, RepresentationKind};
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};

/// Heap usage of an estimator after `cardinality` distinct adds and a `count`
#[derive(Tabled)]
struct Record {
    precision: u8,
    cardinality: usize,
    representation: RepresentationKind,
    bits_per_register: u8,
    size_of: usize,
    marshaled: usize,
    curr_bytes: usize,
    max_bytes: usize,
    total_blocks: u64,
}

fn measure(config: Config, cardinality: usize) -> Record {
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = HyperLogLogPlus::with_config(config).unwrap();
    for i in 0..cardinality {
        estimator.add(&i.to_le_bytes());
    }
    estimator.count();
    let stats = dhat::HeapStats::get();

    Record {
        precision: config.precision,
        cardinality,
        representation: estimator.representation(),
        bits_per_register: estimator.bits_per_register(),
        size_of: estimator.size_of(),
        marshaled: estimator.marshal().len(),
        curr_bytes: stats.curr_bytes,
        max_bytes: stats.max_bytes,
        total_blocks: stats.total_blocks,
    }
}

fn check(record: &Record) {
    let m = 1usize << record.precision;
    let narrow_len = 5 * m / 8;
    let dense_budget = 6 * m / 8;

    match record.representation {
        RepresentationKind::Sparse => {
            // a flushed sparse list never reaches the dense budget
            assert!(record.marshaled < HEADER_LEN + dense_budget, "{:?}", record.cardinality);
            if record.cardinality <= m / 64 {
                assert!(record.max_bytes < narrow_len, "{:?}", record.cardinality);
            }
        }
        RepresentationKind::Dense => {
            assert_eq!(record.bits_per_register, 5);
            assert_eq!(record.marshaled, HEADER_LEN + narrow_len);
            // only the register array outlives the promotion
            assert_eq!(record.curr_bytes, narrow_len);
            assert!(record.size_of >= narrow_len);
        }
    }
}

#[test]
fn test_allocations() {
    let mut results = Vec::new();
    for precision in [10, 12, 14] {
        let config = Config::new(precision, 20);
        let records: Vec<Record> = std::iter::once(0)
            .chain((0..).map(|c| 1 << c))
            .take_while(|&c| c <= 1 << 16)
            .map(|cardinality| measure(config, cardinality))
            .collect();

        records.iter().for_each(check);
        for kind in [RepresentationKind::Sparse, RepresentationKind::Dense] {
            assert!(records.iter().any(|r| r.representation == kind));
        }
        assert_eq!(records[0].curr_bytes, 0);
        results.extend(records);
    }

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    std::fs::write(
        format!("{}/target/memory_allocations.md", env!("CARGO_MANIFEST_DIR")),
        &markdown,
    )
    .unwrap();
    println!("{}", markdown);
}
