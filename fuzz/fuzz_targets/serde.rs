#![no_main]

use hllpp::HyperLogLogPlus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut estimator) = serde_json::from_slice::<HyperLogLogPlus>(data) {
        estimator.add(b"picard");
        assert!(estimator.count() > 0);
    }
});
