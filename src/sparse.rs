//! ## Sparse representation
//! Allows to estimate low cardinality with memory proportional to the number of distinct
//! elements seen, using `M' = 2^P'` virtual registers of the finer sparse precision `P'`.
//!
//! Every hash is kept as a 32-bit sparse value:
//! - 0 bit         - flag, set when the rank is stored explicitly
//! - 1..6 bits     - rank at precision `P'` (only when flag is set)
//! - 7.. bits      - top `P'` bits of the hash (sparse index)
//!
//! The rank at the dense precision `P` is either derivable from the `P' - P` low bits of the
//! sparse index (flag clear), or, when those bits are all zero, stored explicitly (flag set).
//! The flag is a function of the sparse index, so sorting sparse values orders them by index
//! first and rank second.
//!
//! New values are buffered unsorted in `tmp` and periodically merged into the delta-varint
//! encoded sparse list.

use std::mem::size_of;

use tracing::trace;

use crate::bias::linear_counting;
use crate::bits::{rho, slice_bits32, slice_bits64};
use crate::representation::{RepresentationKind, RepresentationTrait};
use crate::sparse_list::{SparseList, SparseReader, SparseWriter};

/// Number of low bits holding flag and explicit rank
const RANK_SHIFT: u8 = 7;

/// Encoder and decoder of sparse values for a given pair of precisions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SparseCodec {
    /// Dense precision `P`
    pub(crate) p: u8,
    /// Sparse precision `P'`
    pub(crate) sp: u8,
}

impl SparseCodec {
    pub(crate) fn new(p: u8, sp: u8) -> Self {
        debug_assert!(p <= sp);
        Self { p, sp }
    }

    /// Number of index bits between the dense and the sparse precision
    #[inline]
    fn extra_bits(&self) -> u8 {
        self.sp - self.p
    }

    /// Encode 64-bit hash as a sparse value
    #[inline]
    pub(crate) fn encode(&self, hash: u64) -> u32 {
        let idx = slice_bits64(hash, 63, 64 - self.sp) as u32;
        if self.has_implicit_rank(idx) {
            return idx << RANK_SHIFT;
        }
        let rank = rho((hash << self.sp) | (1 << (self.sp - 1)));
        (idx << RANK_SHIFT) | (u32::from(rank) << 1) | 1
    }

    /// Return index at precision `p` and rank at the dense precision of sparse value `k`
    #[inline]
    pub(crate) fn decode(&self, k: u32, p: u8) -> (u32, u8) {
        (self.index(k, p), self.rank(k))
    }

    /// Return index of sparse value `k` at precision `p`, where `p <= P'`
    #[inline]
    pub(crate) fn index(&self, k: u32, p: u8) -> u32 {
        self.sparse_index(k) >> (self.sp - p)
    }

    /// Return index of sparse value `k` at the sparse precision
    #[inline]
    pub(crate) fn sparse_index(&self, k: u32) -> u32 {
        k >> RANK_SHIFT
    }

    /// Return rank of sparse value `k` at the dense precision
    #[inline]
    pub(crate) fn rank(&self, k: u32) -> u8 {
        if k & 1 == 1 {
            slice_bits32(k, 6, 1) as u8 + self.extra_bits()
        } else {
            // leading zeros of the extra index bits, which are known not to be all zero
            let extra = slice_bits32(self.sparse_index(k), self.extra_bits() - 1, 0);
            rho(u64::from(extra) << (64 - self.extra_bits()))
        }
    }

    /// Whether the rank at the dense precision can be recovered from sparse index `idx`
    #[inline]
    fn has_implicit_rank(&self, idx: u32) -> bool {
        self.extra_bits() > 0 && slice_bits32(idx, self.extra_bits() - 1, 0) != 0
    }

    /// Whether `k` could have been produced by `encode`
    pub(crate) fn is_valid(&self, k: u32) -> bool {
        let idx = self.sparse_index(k);
        if u64::from(idx) >> self.sp != 0 {
            return false;
        }
        if k & 1 == 0 {
            return self.has_implicit_rank(idx) && slice_bits32(k, 6, 0) == 0;
        }
        let rank = slice_bits32(k, 6, 1);
        !self.has_implicit_rank(idx) && rank >= 1 && rank <= 65 - u32::from(self.sp)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Sparse {
    codec: SparseCodec,
    /// Sorted, deduplicated values
    list: SparseList,
    /// Values not yet merged into `list`
    tmp: Vec<u32>,
}

impl Sparse {
    pub(crate) fn new(codec: SparseCodec) -> Self {
        Self::from_list(codec, SparseList::default())
    }

    pub(crate) fn from_list(codec: SparseCodec, list: SparseList) -> Self {
        Self {
            codec,
            list,
            tmp: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn codec(&self) -> SparseCodec {
        self.codec
    }

    /// Size of the dense representation this one is budgeted against, assuming 6-bit registers
    #[inline]
    fn dense_size(&self) -> usize {
        (6 << self.codec.p) / 8
    }

    /// Number of buffered values triggering a merge into the sparse list. Each buffered value
    /// is assumed to cost about one byte once delta encoded.
    #[inline]
    fn max_tmp_len(&self) -> usize {
        self.dense_size() / 4
    }

    /// Insert hash into `Sparse` representation.
    /// Returns false once the representation outgrew its budget and must be promoted.
    #[inline]
    pub(crate) fn insert_hash(&mut self, hash: u64) -> bool {
        self.tmp.push(self.codec.encode(hash));
        if self.tmp.len() >= self.max_tmp_len() {
            return self.flush();
        }
        true
    }

    /// Merge buffered values into the sparse list.
    /// Returns false once the representation outgrew its budget and must be promoted.
    pub(crate) fn flush(&mut self) -> bool {
        if !self.tmp.is_empty() {
            self.tmp.sort_unstable();
            let pending = self.tmp.len();
            let mut writer =
                SparseWriter::with_capacity(self.codec, self.list.byte_len() + pending * 2);
            merge_sorted(self.list.iter(), &self.tmp, |k| writer.append(k));
            self.list = writer.finish();
            self.tmp.clear();
            trace!(
                pending,
                sparse_length = self.list.len(),
                sparse_bytes = self.list.byte_len(),
                "flushed sparse buffer"
            );
        }
        self.list.byte_len() < self.dense_size()
    }

    /// Merge all values of `rhs` into `self`.
    /// Returns false once the representation outgrew its budget and must be promoted.
    pub(crate) fn merge(&mut self, rhs: &Sparse) -> bool {
        self.tmp.extend(rhs.entries());
        self.flush()
    }

    /// Iterate over all values, merged and buffered, in no particular order
    pub(crate) fn entries(&self) -> impl Iterator<Item = u32> + '_ {
        self.list.iter().chain(self.tmp.iter().copied())
    }

    #[inline]
    pub(crate) fn list(&self) -> &SparseList {
        &self.list
    }

    /// Number of buffered values not yet merged into the sparse list
    #[inline]
    pub(crate) fn pending(&self) -> usize {
        self.tmp.len()
    }

    #[inline]
    pub(crate) fn is_flushed(&self) -> bool {
        self.tmp.is_empty()
    }
}

impl RepresentationTrait for Sparse {
    /// Return linear counting estimate over `M'` registers, ignoring buffered values
    #[inline]
    fn estimate(&self) -> u64 {
        let m = f64::from(1u32 << self.codec.sp);
        // the list never holds one value per register, but a decoded foreign payload might
        let zeros = (m - f64::from(self.list.len())).max(1.0);
        (linear_counting(m, zeros) + 0.5) as u64
    }

    fn size_of(&self) -> usize {
        size_of::<Self>() + self.list.byte_len() + self.tmp.len() * size_of::<u32>()
    }

    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Sparse
    }
}

/// Feed the union of ascending `list` and ascending `tmp` into `sink` in ascending order
fn merge_sorted(mut list: SparseReader<'_>, tmp: &[u32], mut sink: impl FnMut(u32)) {
    let mut tmp = tmp.iter().copied().peekable();
    loop {
        match (list.peek(), tmp.peek().copied()) {
            (Some(a), Some(b)) if a <= b => {
                sink(a);
                list.advance();
            }
            (_, Some(b)) => {
                sink(b);
                tmp.next();
            }
            (Some(a), None) => {
                sink(a);
                list.advance();
            }
            (None, None) => break,
        }
    }
}
