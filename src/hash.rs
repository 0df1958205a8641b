//! ## Hash primitive
//! MurmurHash3 x64/128 (seed 0) reduced to its first 64-bit lane.
//!
//! Backed by the `murmur3` crate, which decodes blocks as little-endian words, so the same
//! bytes hash to the same value on every host regardless of its native byte order.

use std::io::Cursor;

/// Hash `bytes` into the 64-bit value used for bucket assignment.
#[inline]
pub fn hash(bytes: &[u8]) -> u64 {
    murmur3_x64_128(bytes, 0).0
}

/// Compute both 64-bit lanes `(h1, h2)` of MurmurHash3 x64/128 for `bytes` with `seed`.
pub fn murmur3_x64_128(bytes: &[u8], seed: u32) -> (u64, u64) {
    // reading from an in-memory slice cannot fail
    let h = murmur3::murmur3_x64_128(&mut Cursor::new(bytes), seed).unwrap_or_default();
    (h as u64, (h >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(""; "empty")]
    #[test_case("a"; "one byte")]
    #[test_case("abcdefgh"; "one word")]
    #[test_case("The quick brown fox jumps over the lazy dog"; "long")]
    fn test_hash_is_first_lane(input: &str) {
        assert_eq!(hash(input.as_bytes()), murmur3_x64_128(input.as_bytes(), 0).0);
    }

    #[test_case("" => 0x0000_0000_0000_0000; "empty")]
    #[test_case("a" => 0x8555_5565_f659_7889; "single byte tail")]
    #[test_case("abcdefgh" => 0xcc8a_0ab0_37ef_8c02; "eight byte tail")]
    #[test_case("hello" => 0xcbd8_a7b3_41bd_9b02; "hello")]
    #[test_case("barclay" => 0xc0f9_b1ed_f9c9_db2e; "barclay")]
    fn test_hash_vectors(input: &str) -> u64 {
        hash(input.as_bytes())
    }

    #[test]
    fn test_remainder() {
        // remainder > 8
        let key = "The quick brown fox jumps over the lazy dog";
        assert_eq!(
            murmur3_x64_128(key.as_bytes(), 0),
            (0xe34bbc7bbc071b6c, 0x7a433ca9c49a9347)
        );

        // change one bit
        let key = "The quick brown fox jumps over the lazy eog";
        assert_eq!(
            murmur3_x64_128(key.as_bytes(), 0),
            (0x362108102c62d1c9, 0x3285cd100292b305)
        );

        // remainder < 8
        let key = "The quick brown fox jumps over the lazy dogdogdog";
        assert_eq!(
            murmur3_x64_128(key.as_bytes(), 0),
            (0x9c8205300e612fc4, 0xcbc0af6136aa3df9)
        );

        // remainder = 8
        let key = "The quick brown fox jumps over the lazy1";
        assert_eq!(
            murmur3_x64_128(key.as_bytes(), 0),
            (0xe3301a827e5cdfe3, 0xbdbf05f8da0f0392)
        );

        // remainder = 0
        let key = "The quick brown fox jumps over t";
        assert_eq!(
            murmur3_x64_128(key.as_bytes(), 0),
            (0xdf6af91bb29bdacf, 0x91a341c58df1f3a6)
        );
    }

    #[test]
    fn test_ones_and_zeros_bytes() {
        let key = [
            0x54, 0x68, 0x65, 0x20, 0x71, 0x75, 0x69, 0x63, 0x6b, 0x20, 0x62, 0x72, 0x6f, 0x77,
            0x6e, 0x20, 0x66, 0x6f, 0x78, 0x20, 0x6a, 0x75, 0x6d, 0x70, 0x73, 0x20, 0x6f, 0x76,
            0x65, 0x72, 0x20, 0x74, 0x68, 0x65, 0x20, 0x6c, 0x61, 0x7a, 0x79, 0x20, 0x64, 0x6f,
            0x67, 0xff, 0x64, 0x6f, 0x67, 0x00,
        ];
        assert_eq!(
            murmur3_x64_128(&key, 0),
            (0xe88abda785929c9e, 0x96b98587cacc83d6)
        );
    }
}
