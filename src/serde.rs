//! # Serde module for HyperLogLogPlus
//!
//! This module provides serde-based (serialization and deserialization) features for
//! `HyperLogLogPlus`. The estimator is serialized as the bytes produced by `marshal`, so every
//! serde format shares the versioned binary format, and deserialized through `unmarshal`,
//! which rejects malformed input instead of producing a partial estimator.
//!
//! Refer to the serde documentation for more details on custom serialization and deserialization:
//! - [Serialization](https://serde.rs/impl-serialize.html)
//! - [Deserialization](https://serde.rs/impl-deserialize.html)
use serde::de::Error;
use serde::{Deserialize, Serialize};

use crate::estimator::HyperLogLogPlus;

impl Serialize for HyperLogLogPlus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Marshaling merges buffered values, so it works on a copy.
        let bytes = self.clone().marshal();
        serializer.serialize_bytes(&bytes)
    }
}

impl<'de> Deserialize<'de> for HyperLogLogPlus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        HyperLogLogPlus::unmarshal(&bytes).map_err(Error::custom)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::config::Config;
    use test_case::test_case;

    #[test_case(0; "empty set")]
    #[test_case(1; "single element")]
    #[test_case(2; "two distinct elements")]
    #[test_case(100; "hundred distinct elements")]
    #[test_case(10000; "ten thousand distinct elements")]
    fn test_serde(n: usize) {
        let mut original_estimator = HyperLogLogPlus::new();

        for i in 0..n {
            let item = format!("item{}", i);
            original_estimator.add(item.as_bytes());
        }

        let serialized = serde_json::to_string(&original_estimator).expect("serialization failed");
        assert!(
            !serialized.is_empty(),
            "serialized string should not be empty"
        );

        let mut deserialized_estimator: HyperLogLogPlus =
            serde_json::from_str(&serialized).expect("deserialization failed");

        assert_eq!(
            original_estimator.representation(),
            deserialized_estimator.representation()
        );
        assert_eq!(original_estimator.count(), deserialized_estimator.count());
        assert_eq!(original_estimator, deserialized_estimator);
    }

    #[test]
    fn test_config_serde() {
        let config = Config::new(12, 18);
        let serialized = serde_json::to_string(&config).unwrap();
        assert_eq!(serialized, r#"{"precision":12,"sparse_precision":18}"#);
        assert_eq!(serde_json::from_str::<Config>(&serialized).unwrap(), config);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let invalid_json = "{ invalid_json_string }";
        let result: Result<HyperLogLogPlus, _> = serde_json::from_str(invalid_json);

        assert!(
            result.is_err(),
            "Deserialization should fail for invalid JSON"
        );
    }

    #[test_case("[12345,null]".as_bytes(); "case 1")]
    #[test_case("[0,1,0,0,0,15,0,1,14,20,0,0,0]".as_bytes(); "short header")]
    #[test_case("[0,2,0,0,0,15,0,1,14,20,0,0,0,0,5]".as_bytes(); "bumped version")]
    #[test_case("[0,1,0,0,0,15,0,1,3,20,0,0,0,0,5]".as_bytes(); "invalid precision")]
    #[test_case(&[91, 51, 44, 10, 110, 117, 108, 108, 93]; "case 4")]
    fn test_failed_deserialization(input: &[u8]) {
        let result: Result<HyperLogLogPlus, _> = serde_json::from_slice(input);
        assert!(result.is_err());
    }
}
