use hllpp::{Config, HyperLogLogPlus};

fn main() {
    let mut estimator1 = HyperLogLogPlus::new();
    for i in 0..10usize {
        estimator1.add(&i.to_le_bytes());
    }
    println!("estimator1 estimate = {}", estimator1.count());

    let mut estimator2 = HyperLogLogPlus::new();
    for i in 10..15usize {
        estimator2.add(&i.to_le_bytes());
    }
    println!("estimator2 estimate = {}", estimator2.count());

    estimator1.merge(&estimator2).unwrap();
    println!("merged estimate = {}", estimator1.count());

    let bytes = estimator1.marshal();
    let mut restored = HyperLogLogPlus::unmarshal(&bytes).unwrap();
    println!(
        "restored estimate = {} ({} bytes, {:?})",
        restored.count(),
        bytes.len(),
        restored.representation()
    );

    let mut estimator3 = HyperLogLogPlus::with_config(Config::new(10, 20)).unwrap();
    estimator3.extend((0..100_000usize).map(|i| i.to_le_bytes()));
    let estimate3 = estimator3.count();
    println!("estimator3 = {:?}, estimate = {}", estimator3, estimate3);
}
