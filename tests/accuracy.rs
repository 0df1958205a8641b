use hllpp::{Config, HyperLogLogPlus, RepresentationKind};
use test_case::test_case;

fn relative_error(estimate: u64, n: usize) -> f64 {
    (estimate as f64 - n as f64).abs() / n as f64
}

#[test]
fn test_accuracy_across_representation_switch() {
    let mut e = HyperLogLogPlus::new();
    let mut last_sparse = None;
    let mut first_dense = None;

    for i in 0..150_000usize {
        e.add(&i.to_le_bytes());
        let n = i + 1;
        if n % 1000 != 0 && (n >= 1000 || n % 50 != 0) {
            continue;
        }

        let estimate = e.count();
        let error = relative_error(estimate, n);
        assert!(error < 0.03, "n = {n}, estimate = {estimate}, error = {error:.4}");

        match e.representation() {
            RepresentationKind::Sparse => {
                last_sparse = Some((n, estimate));
                // sparse list never outgrows the dense registers
                assert!(e.marshal().len() < 15 + 6 * (1 << 14) / 8);
            }
            RepresentationKind::Dense if first_dense.is_none() => {
                first_dense = Some((n, estimate))
            }
            RepresentationKind::Dense => {}
        }
    }

    let (sparse_n, sparse_estimate) = last_sparse.unwrap();
    let (dense_n, dense_estimate) = first_dense.unwrap();
    assert!(sparse_n < dense_n);
    // relative growth of the estimate matches relative growth of the cardinality
    let growth = dense_estimate as f64 / sparse_estimate as f64;
    let expected = dense_n as f64 / sparse_n as f64;
    assert!(
        (growth - expected).abs() / expected < 0.03,
        "sparse {sparse_estimate} at {sparse_n}, dense {dense_estimate} at {dense_n}"
    );
}

#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
#[test_case(9)]
#[test_case(10)]
#[test_case(11)]
#[test_case(12)]
#[test_case(13)]
#[test_case(14)]
#[test_case(15)]
#[test_case(16)]
fn test_accuracy_by_precision(precision: u8) {
    let m = 1usize << precision;
    // four standard errors
    let bound = 4.0 * 1.04 / (m as f64).sqrt();

    for n in [3 * m, 10 * m] {
        let config = Config::new(precision, (precision + 6).min(25));
        let mut e = HyperLogLogPlus::with_config(config).unwrap();
        let mut buf = [0, 0, 0, 0, 0, 0, 0, 0, b'p'];
        for i in 0..n {
            buf[..8].copy_from_slice(&i.to_le_bytes());
            e.add(&buf);
        }
        let estimate = e.count();
        let error = relative_error(estimate, n);
        assert!(error < bound, "p = {precision}, n = {n}, estimate = {estimate}");
    }
}

#[test]
fn test_duplicates_do_not_change_count() {
    let mut e = HyperLogLogPlus::new();
    e.extend((0..20_000u32).map(|i| i.to_le_bytes()));
    let count = e.count();
    for _ in 0..3 {
        e.extend((0..20_000u32).map(|i| i.to_le_bytes()));
        assert_eq!(e.count(), count);
    }
}

#[test]
fn test_count_is_monotone() {
    let mut e = HyperLogLogPlus::with_config(Config::new(10, 20)).unwrap();
    let mut last = 0;
    for i in 0..20_000u32 {
        e.add(&i.to_le_bytes());
        if i % 97 == 0 {
            let count = e.count();
            assert!(count + count / 20 >= last, "{count} after {last} at {i}");
            last = last.max(count);
        }
    }
}
