//! ## Sparse list
//! Ascending, duplicate-free sequence of sparse values stored as unsigned LEB128 varints of
//! the delta from the previous value.
//!
//! Encoding of `[2, 3, 5, 300]`:
//! - deltas        - `[2, 1, 2, 295]`
//! - bytes         - `[0x02, 0x01, 0x02, 0xa7, 0x02]`

use std::mem::size_of;

use crate::error::{format_err, Result};
use crate::sparse::SparseCodec;

/// Delta-varint encoded sparse values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SparseList {
    /// Encoded deltas
    data: Vec<u8>,
    /// Number of values stored in `data`
    len: u32,
}

impl SparseList {
    /// Create sparse list from an already validated payload
    pub(crate) fn from_parts(data: Vec<u8>, len: u32) -> Self {
        Self { data, len }
    }

    /// Number of values in the list
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.len
    }

    /// Encoded size of the list in bytes
    #[inline]
    pub(crate) fn byte_len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn iter(&self) -> SparseReader<'_> {
        SparseReader::new(&self.data)
    }

    /// Return memory size of the list
    pub(crate) fn size_of(&self) -> usize {
        size_of::<Self>() + self.data.len()
    }
}

/// Streaming encoder of ascending sparse values.
///
/// Values sharing a sparse index are collapsed to the one with the largest rank. The last
/// value seen is held back until a value with a different index (or `finish`) commits it.
pub(crate) struct SparseWriter {
    codec: SparseCodec,
    data: Vec<u8>,
    /// Last committed value, the base of the next delta
    last: u32,
    /// Value waiting for its index to be closed
    pending: Option<u32>,
    len: u32,
}

impl SparseWriter {
    pub(crate) fn with_capacity(codec: SparseCodec, capacity: usize) -> Self {
        Self {
            codec,
            data: Vec::with_capacity(capacity),
            last: 0,
            pending: None,
            len: 0,
        }
    }

    /// Append value `k`, which must not be smaller than any value appended before.
    #[inline]
    pub(crate) fn append(&mut self, k: u32) {
        match self.pending {
            Some(prev) if self.codec.sparse_index(prev) == self.codec.sparse_index(k) => {
                if self.codec.rank(k) > self.codec.rank(prev) {
                    self.pending = Some(k);
                }
            }
            Some(prev) => {
                self.commit(prev);
                self.pending = Some(k);
            }
            None => self.pending = Some(k),
        }
    }

    #[inline]
    fn commit(&mut self, k: u32) {
        debug_assert!(self.len == 0 || k > self.last);
        write_varint(&mut self.data, k - self.last);
        self.last = k;
        self.len += 1;
    }

    /// Commit pending value and return the encoded list
    pub(crate) fn finish(mut self) -> SparseList {
        if let Some(k) = self.pending.take() {
            self.commit(k);
        }
        SparseList {
            data: self.data,
            len: self.len,
        }
    }
}

/// Streaming decoder of a sparse list
#[derive(Clone)]
pub(crate) struct SparseReader<'a> {
    data: &'a [u8],
    pos: usize,
    current: Option<u32>,
}

impl<'a> SparseReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        let mut reader = Self {
            data,
            pos: 0,
            current: None,
        };
        reader.current = read_varint(data, &mut reader.pos);
        reader
    }

    /// Return current value without consuming it
    #[inline]
    pub(crate) fn peek(&self) -> Option<u32> {
        self.current
    }

    /// Move to the next value
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(current) = self.current {
            self.current =
                read_varint(self.data, &mut self.pos).map(|delta| current.wrapping_add(delta));
        }
    }

    #[inline]
    pub(crate) fn done(&self) -> bool {
        self.current.is_none()
    }
}

impl Iterator for SparseReader<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let current = self.current?;
        self.advance();
        Some(current)
    }
}

/// Check that `data` holds exactly `len` well-formed, strictly ascending values valid for
/// `codec`, with at most one value per sparse index.
pub(crate) fn validate(codec: SparseCodec, data: &[u8], len: u32) -> Result<()> {
    let mut pos = 0;
    let mut count = 0u32;
    let mut last: Option<u32> = None;

    while pos < data.len() {
        let delta = read_varint(data, &mut pos)
            .ok_or_else(|| format_err!("truncated varint at offset {pos}"))?;
        let k = match last {
            None => delta,
            Some(_) if delta == 0 => {
                return Err(format_err!("duplicate sparse value at entry {count}"))
            }
            Some(prev) => prev
                .checked_add(delta)
                .ok_or_else(|| format_err!("sparse value overflow at entry {count}"))?,
        };
        if !codec.is_valid(k) {
            return Err(format_err!("invalid sparse value {k:#x}"));
        }
        if last.is_some_and(|prev| codec.sparse_index(prev) == codec.sparse_index(k)) {
            return Err(format_err!("repeated sparse index at entry {count}"));
        }
        last = Some(k);
        count += 1;
    }

    if count != len {
        return Err(format_err!(
            "sparse length mismatch: header says {len}, payload holds {count}"
        ));
    }
    Ok(())
}

/// Append `v` to `buf` as unsigned LEB128
#[inline]
fn write_varint(buf: &mut Vec<u8>, mut v: u32) {
    while v >= 0x80 {
        buf.push((v as u8) | 0x80);
        v >>= 7;
    }
    buf.push(v as u8);
}

/// Read unsigned LEB128 value starting at `pos`, advancing `pos` past it.
/// Returns `None` on truncated input or a value that does not fit `u32`.
#[inline]
fn read_varint(data: &[u8], pos: &mut usize) -> Option<u32> {
    let mut v = 0u32;
    for shift in (0..32).step_by(7) {
        let byte = *data.get(*pos)?;
        *pos += 1;
        if shift == 28 && byte > 0x0f {
            return None;
        }
        v |= u32::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Some(v);
        }
    }
    None
}
