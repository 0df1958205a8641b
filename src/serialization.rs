//! ## Binary format
//! Stable, big-endian encoding of `HyperLogLogPlus` used for persistence and replication.
//!
//! Header (15 bytes):
//! - 0..2 bytes    - format version (`1`)
//! - 2..6 bytes    - total length in bytes, header included
//! - 6..8 bytes    - flags (bit 0 is set for sparse representation)
//! - 8 byte        - precision
//! - 9 byte        - sparse precision
//! - 10..14 bytes  - number of sparse list entries (`0` for dense representation)
//! - 14 byte       - bits per register (`5` for sparse representation)
//!
//! Followed by the payload: delta-varint encoded sparse list, or packed dense registers.

use byteorder::{ByteOrder, BE};
use tracing::debug;

use crate::config::Config;
use crate::dense::{Dense, NARROW_BITS, WIDE_BITS};
use crate::error::{format_err, Result};
use crate::estimator::HyperLogLogPlus;
use crate::representation::Representation;
use crate::sparse::{Sparse, SparseCodec};
use crate::sparse_list::{validate, SparseList};

pub const VERSION: u16 = 1;
pub const HEADER_LEN: usize = 15;
const FLAG_SPARSE: u16 = 1;

impl HyperLogLogPlus {
    /// Serialize estimator into its binary format.
    ///
    /// Buffered values are merged into the sparse list first, which may promote the estimator
    /// to dense representation.
    pub fn marshal(&mut self) -> Vec<u8> {
        self.flush();

        let (flags, sparse_length, bits, payload) = match &self.repr {
            Representation::Sparse(sparse) => (
                FLAG_SPARSE,
                sparse.list().len(),
                NARROW_BITS,
                sparse.list().as_bytes(),
            ),
            Representation::Dense(dense) => (0, 0, dense.bits(), dense.registers()),
        };

        let total = HEADER_LEN + payload.len();
        let mut buf = vec![0; HEADER_LEN];
        buf.reserve_exact(payload.len());
        BE::write_u16(&mut buf[0..2], VERSION);
        BE::write_u32(&mut buf[2..6], total as u32);
        BE::write_u16(&mut buf[6..8], flags);
        buf[8] = self.config.precision;
        buf[9] = self.config.sparse_precision;
        BE::write_u32(&mut buf[10..14], sparse_length);
        buf[14] = bits;
        buf.extend_from_slice(payload);
        buf
    }

    /// Deserialize estimator from its binary format.
    ///
    /// Returns `Error::Format` for truncated, malformed, or unsupported data.
    pub fn unmarshal(data: &[u8]) -> Result<Self> {
        Self::decode(data).map_err(|err| {
            debug!(%err, len = data.len(), "rejected serialized estimator");
            err
        })
    }

    fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(format_err!(
                "{} bytes is shorter than {HEADER_LEN} bytes header",
                data.len()
            ));
        }

        let version = BE::read_u16(&data[0..2]);
        if version != VERSION {
            return Err(format_err!("unsupported version {version}"));
        }
        let total = BE::read_u32(&data[2..6]);
        if total as usize != data.len() {
            return Err(format_err!(
                "header length {total} does not match buffer length {}",
                data.len()
            ));
        }
        let flags = BE::read_u16(&data[6..8]);
        if flags & !FLAG_SPARSE != 0 {
            return Err(format_err!("unknown flags {flags:#06x}"));
        }
        let config = Config::new(data[8], data[9]);
        config
            .validate()
            .map_err(|err| format_err!("invalid header: {err}"))?;
        let sparse_length = BE::read_u32(&data[10..14]);
        let bits = data[14];
        if bits != NARROW_BITS && bits != WIDE_BITS {
            return Err(format_err!("unsupported register width {bits}"));
        }

        let payload = &data[HEADER_LEN..];
        let mut estimator = Self::with_config(config)?;
        estimator.repr = if flags & FLAG_SPARSE != 0 {
            let codec = SparseCodec::new(config.precision, config.sparse_precision);
            validate(codec, payload, sparse_length)?;
            let list = SparseList::from_parts(payload.to_vec(), sparse_length);
            Representation::Sparse(Sparse::from_list(codec, list))
        } else {
            Representation::Dense(decode_dense(config.precision, bits, sparse_length, payload)?)
        };
        Ok(estimator)
    }
}

fn decode_dense(p: u8, bits: u8, sparse_length: u32, payload: &[u8]) -> Result<Dense> {
    if sparse_length != 0 {
        return Err(format_err!(
            "dense payload with sparse length {sparse_length}"
        ));
    }
    let expected = Dense::registers_len(p, bits);
    if payload.len() != expected {
        return Err(format_err!(
            "dense payload of {} bytes, expected {expected}",
            payload.len()
        ));
    }

    let dense = Dense::from_registers(p, bits, payload.to_vec());
    let max_rank = 65 - p;
    if let Some(idx) = (0..1u32 << p).find(|&idx| dense.get(idx) > max_rank) {
        return Err(format_err!(
            "register {idx} holds rank {} above {max_rank}",
            dense.get(idx)
        ));
    }
    Ok(dense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::representation::RepresentationKind;
    use test_case::test_case;

    fn estimator(precision: u8, sparse_precision: u8, n: u32) -> HyperLogLogPlus {
        let mut e =
            HyperLogLogPlus::with_config(Config::new(precision, sparse_precision)).unwrap();
        e.extend((0..n).map(|i| i.to_le_bytes()));
        e
    }

    #[test]
    fn test_marshal_empty() {
        let mut e = HyperLogLogPlus::new();
        assert_eq!(
            e.marshal(),
            [0x00, 0x01, 0x00, 0x00, 0x00, 0x0f, 0x00, 0x01, 14, 20, 0x00, 0x00, 0x00, 0x00, 5]
        );
    }

    #[test]
    fn test_marshal_sparse() {
        let mut e = HyperLogLogPlus::new();
        e.extend(["barclay", "reginald", "barclay", "broccoli"]);
        let data = e.marshal();

        assert_eq!(BE::read_u32(&data[2..6]) as usize, data.len());
        assert_eq!(BE::read_u16(&data[6..8]), FLAG_SPARSE);
        assert_eq!(BE::read_u32(&data[10..14]), 3);
        assert_eq!(data[14], NARROW_BITS);

        let mut decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
        assert_eq!(decoded, e);
        assert_eq!(decoded.count(), 3);
        assert_eq!(decoded.marshal(), data);
    }

    #[test]
    fn test_marshal_dense() {
        let mut e = estimator(4, 20, 100);
        let data = e.marshal();

        assert_eq!(data.len(), HEADER_LEN + 10);
        assert_eq!(BE::read_u16(&data[6..8]), 0);
        assert_eq!(data[8..10], [4, 20]);
        assert_eq!(BE::read_u32(&data[10..14]), 0);
        assert_eq!(data[14], NARROW_BITS);

        let mut decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
        assert_eq!(decoded.representation(), RepresentationKind::Dense);
        assert_eq!(decoded, e);
        assert_eq!(decoded.count(), e.count());
    }

    #[test]
    fn test_marshal_widened() {
        let mut e = estimator(4, 20, 100);
        e.add_hash(0x0000_0000_0100_0000);
        assert_eq!(e.bits_per_register(), WIDE_BITS);

        let data = e.marshal();
        assert_eq!(data.len(), HEADER_LEN + 12);
        assert_eq!(data[14], WIDE_BITS);

        let decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
        assert_eq!(decoded.bits_per_register(), WIDE_BITS);
        assert_eq!(decoded, e);
    }

    #[test]
    fn test_marshal_flushes_pending() {
        let mut e = estimator(14, 20, 10);
        let data = e.marshal();
        assert_eq!(BE::read_u32(&data[10..14]), 10);
        assert_eq!(HyperLogLogPlus::unmarshal(&data).unwrap().count(), 10);
    }

    #[test_case(14, 20, 0; "empty")]
    #[test_case(14, 20, 3000; "sparse")]
    #[test_case(14, 20, 100_000; "dense")]
    #[test_case(4, 4, 1000; "equal precisions")]
    #[test_case(16, 25, 50_000; "largest precisions")]
    fn test_round_trip(precision: u8, sparse_precision: u8, n: u32) {
        let mut e = estimator(precision, sparse_precision, n);
        let data = e.marshal();
        let mut decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
        assert_eq!(decoded, e);
        assert_eq!(decoded.count(), e.count());
        assert_eq!(decoded.marshal(), data);
    }

    fn corrupt(data: &[u8], f: impl FnOnce(&mut Vec<u8>)) -> Vec<u8> {
        let mut data = data.to_vec();
        f(&mut data);
        data
    }

    fn set_length(data: &mut Vec<u8>) {
        let len = data.len() as u32;
        BE::write_u32(&mut data[2..6], len);
    }

    #[test_case(|d: &mut Vec<u8>| d.truncate(0); "empty buffer")]
    #[test_case(|d: &mut Vec<u8>| d.truncate(HEADER_LEN - 1); "short header")]
    #[test_case(|d: &mut Vec<u8>| d[1] = 2; "bumped version")]
    #[test_case(|d: &mut Vec<u8>| d.truncate(d.len() - 1); "truncated payload")]
    #[test_case(|d: &mut Vec<u8>| d.push(0); "trailing byte")]
    #[test_case(|d: &mut Vec<u8>| d[7] = 3; "unknown flag")]
    #[test_case(|d: &mut Vec<u8>| d[8] = 3; "precision too small")]
    #[test_case(|d: &mut Vec<u8>| d[8] = 17; "precision too large")]
    #[test_case(|d: &mut Vec<u8>| d[9] = 13; "sparse precision below precision")]
    #[test_case(|d: &mut Vec<u8>| d[9] = 26; "sparse precision too large")]
    #[test_case(|d: &mut Vec<u8>| d[14] = 4; "register width too small")]
    #[test_case(|d: &mut Vec<u8>| d[14] = 7; "register width too large")]
    #[test_case(|d: &mut Vec<u8>| d[13] = 9; "sparse length mismatch")]
    #[test_case(|d: &mut Vec<u8>| { d.truncate(HEADER_LEN + 8); d.push(0); set_length(d); }; "repeated sparse value")]
    #[test_case(|d: &mut Vec<u8>| { d.pop(); d.push(0x80); set_length(d); }; "truncated varint")]
    fn test_unmarshal_rejects_sparse(f: fn(&mut Vec<u8>)) {
        let mut e = HyperLogLogPlus::new();
        e.extend(["picard", "janeway", "kirk"]);
        let data = corrupt(&e.marshal(), f);
        assert!(matches!(
            HyperLogLogPlus::unmarshal(&data),
            Err(Error::Format(_))
        ));
    }

    #[test_case(|d: &mut Vec<u8>| d[14] = 6; "register width mismatch")]
    #[test_case(|d: &mut Vec<u8>| { d.push(0); set_length(d); }; "payload too long")]
    #[test_case(|d: &mut Vec<u8>| d[13] = 1; "dense with sparse length")]
    fn test_unmarshal_rejects_dense(f: fn(&mut Vec<u8>)) {
        let mut e = estimator(4, 20, 100);
        let data = corrupt(&e.marshal(), f);
        assert!(matches!(
            HyperLogLogPlus::unmarshal(&data),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_unmarshal_largest_rank() {
        let mut e = estimator(4, 20, 0);
        e.add_hash(0);
        e.count();
        let data = e.marshal();
        let mut decoded = HyperLogLogPlus::unmarshal(&data).unwrap();
        assert_eq!(decoded.count(), e.count());

        // widened register 0 holds rank 61, the largest one for precision 4
        let mut dense = estimator(4, 20, 100);
        dense.add_hash(0);
        let data = dense.marshal();
        assert_eq!(data[HEADER_LEN] >> 2, 61);
        assert!(HyperLogLogPlus::unmarshal(&data).is_ok());

        let data = corrupt(&data, |d| d[HEADER_LEN] = 62 << 2);
        assert!(HyperLogLogPlus::unmarshal(&data).is_err());
    }
}
