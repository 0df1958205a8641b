#![no_main]

use hllpp::HyperLogLogPlus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut estimator) = HyperLogLogPlus::unmarshal(data) {
        estimator.add(b"picard");
        estimator.count();
        let bytes = estimator.marshal();
        assert!(HyperLogLogPlus::unmarshal(&bytes).is_ok());
    }
});
