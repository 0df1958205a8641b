use hllpp::serialization::{HEADER_LEN, VERSION};
use hllpp::{Config, Error, HyperLogLogPlus, RepresentationKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

fn estimator(config: Config, n: u32) -> HyperLogLogPlus {
    let mut e = HyperLogLogPlus::with_config(config).unwrap();
    e.extend((0..n).map(|i| i.to_le_bytes()));
    e
}

#[test_case(Config::default(), 0 => RepresentationKind::Sparse; "empty")]
#[test_case(Config::default(), 1_000 => RepresentationKind::Sparse; "sparse")]
#[test_case(Config::default(), 100_000 => RepresentationKind::Dense; "dense")]
#[test_case(Config::new(4, 25), 10 => RepresentationKind::Dense; "smallest precision")]
#[test_case(Config::new(16, 16), 500 => RepresentationKind::Sparse; "largest precision")]
fn test_round_trip(config: Config, n: u32) -> RepresentationKind {
    let mut e = estimator(config, n);
    let data = e.marshal();
    assert_eq!(u16::from_be_bytes([data[0], data[1]]), VERSION);
    assert_eq!(data[8], config.precision);
    assert_eq!(data[9], config.sparse_precision);

    let mut decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
    assert_eq!(decoded.config(), config);
    assert_eq!(decoded.bits_per_register(), e.bits_per_register());
    assert_eq!(decoded.count(), e.count());
    assert_eq!(decoded.marshal(), data);
    decoded.representation()
}

#[test]
fn test_round_trip_widened() {
    let mut e = estimator(Config::default(), 100_000);
    // register 0, rank 40
    e.add_hash(1 << (64 - 14 - 40));
    assert_eq!(e.bits_per_register(), 6);

    let data = e.marshal();
    assert_eq!(data.len(), HEADER_LEN + 6 * (1 << 14) / 8);
    let decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
    assert_eq!(decoded.bits_per_register(), 6);
    assert_eq!(decoded, e);
}

#[test]
fn test_decoded_estimator_keeps_working() {
    let mut e = estimator(Config::default(), 2_000);
    let mut decoded = HyperLogLogPlus::unmarshal(&e.marshal()).unwrap();

    let more = (2_000..50_000u32).map(|i| i.to_le_bytes());
    e.extend(more.clone());
    decoded.extend(more);
    assert_eq!(decoded.count(), e.count());
    assert_eq!(decoded, e);
}

#[test]
fn test_unmarshal_rejects_garbage() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [0, 1, 14, 15, 16, 100, 10_255] {
        for _ in 0..20 {
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert!(matches!(
                HyperLogLogPlus::unmarshal(&data),
                Err(Error::Format(_))
            ));
        }
    }
}

#[test]
fn test_unmarshal_survives_corruption() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [3, 300, 30_000] {
        let data = estimator(Config::new(10, 20), n).marshal();
        for _ in 0..500 {
            let mut corrupted = data.clone();
            let idx = rng.gen_range(HEADER_LEN..corrupted.len());
            corrupted[idx] ^= 1 << rng.gen_range(0..8);
            if let Ok(mut e) = HyperLogLogPlus::unmarshal(&corrupted) {
                e.add(b"kirk");
                e.count();
                e.marshal();
            }
        }
    }
}
