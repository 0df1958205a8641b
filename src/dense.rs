//! ## Dense representation
//! Allows to estimate large cardinality using `M = 2^P` registers, each holding the largest
//! rank observed for the hashes routed to it.
//!
//! Registers are packed in big-endian bit order (see `bits`) and start `5` bits wide. The
//! first rank that does not fit widens every register to `6` bits, once and for good.
//!
//! [Original HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)

use std::mem::size_of;

use tracing::debug;

use crate::bias::{estimate_bias, linear_counting, THRESHOLDS};
use crate::bits::{get_register, rho, set_register, slice_bits64};
use crate::representation::{RepresentationKind, RepresentationTrait};
use crate::sparse::Sparse;

/// Initial register width
pub(crate) const NARROW_BITS: u8 = 5;
/// Register width once any rank exceeds what `NARROW_BITS` can hold
pub(crate) const WIDE_BITS: u8 = 6;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Dense {
    p: u8,
    bits: u8,
    registers: Vec<u8>,
}

impl Dense {
    /// Create empty dense representation with narrow registers
    pub(crate) fn new(p: u8) -> Self {
        Self::with_bits(p, NARROW_BITS)
    }

    fn with_bits(p: u8, bits: u8) -> Self {
        Self {
            p,
            bits,
            registers: vec![0; Self::registers_len(p, bits)],
        }
    }

    /// Create dense representation from packed registers of an already validated length
    pub(crate) fn from_registers(p: u8, bits: u8, registers: Vec<u8>) -> Self {
        debug_assert_eq!(registers.len(), Self::registers_len(p, bits));
        Self { p, bits, registers }
    }

    /// Number of bytes holding `2^p` registers of `bits` width
    #[inline]
    pub(crate) fn registers_len(p: u8, bits: u8) -> usize {
        (usize::from(bits) << p) / 8
    }

    /// Convert sparse representation into dense one.
    ///
    /// Starts with narrow registers and, if some rank does not fit, starts over with wide ones.
    pub(crate) fn from_sparse(sparse: &Sparse) -> Self {
        let p = sparse.codec().p;
        let mut dense = Self::new(p);
        if dense.fill_narrow(sparse) {
            return dense;
        }

        debug!(precision = p, "sparse rank overflows narrow registers, converting to wide");
        let mut dense = Self::with_bits(p, WIDE_BITS);
        dense.merge_sparse(sparse);
        dense
    }

    /// Apply all entries of `sparse` without widening.
    /// Returns false as soon as an entry does not fit.
    fn fill_narrow(&mut self, sparse: &Sparse) -> bool {
        let codec = sparse.codec();
        for k in sparse.entries() {
            let (idx, rank) = codec.decode(k, self.p);
            if rank > self.max_rank() {
                return false;
            }
            if rank > self.get(idx) {
                set_register(&mut self.registers, self.bits, idx, rank);
            }
        }
        true
    }

    #[inline]
    pub(crate) fn bits(&self) -> u8 {
        self.bits
    }

    #[inline]
    pub(crate) fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Number of registers
    #[inline]
    fn m(&self) -> u32 {
        1 << self.p
    }

    #[inline]
    fn max_rank(&self) -> u8 {
        (1 << self.bits) - 1
    }

    /// Get register `idx`
    #[inline]
    pub(crate) fn get(&self, idx: u32) -> u8 {
        get_register(&self.registers, self.bits, idx)
    }

    /// Insert hash into `Dense` representation
    #[inline]
    pub(crate) fn insert_hash(&mut self, hash: u64) {
        let idx = slice_bits64(hash, 63, 64 - self.p) as u32;
        let rank = rho((hash << self.p) | (1 << (self.p - 1)));
        self.update_rank(idx, rank);
    }

    /// Raise register `idx` to `rank`, widening registers first when needed
    #[inline]
    pub(crate) fn update_rank(&mut self, idx: u32, rank: u8) {
        if rank <= self.get(idx) {
            return;
        }
        if rank > self.max_rank() {
            self.widen();
        }
        set_register(&mut self.registers, self.bits, idx, rank);
    }

    /// Re-pack all registers with `WIDE_BITS` width
    fn widen(&mut self) {
        debug_assert_eq!(self.bits, NARROW_BITS);
        let mut registers = vec![0; Self::registers_len(self.p, WIDE_BITS)];
        for idx in 0..self.m() {
            set_register(&mut registers, WIDE_BITS, idx, self.get(idx));
        }
        debug!(
            precision = self.p,
            from = self.bits,
            to = WIDE_BITS,
            "widened dense registers"
        );
        self.bits = WIDE_BITS;
        self.registers = registers;
    }

    /// Merge two `Dense` representations of the same precision
    pub(crate) fn merge(&mut self, rhs: &Dense) {
        debug_assert_eq!(self.p, rhs.p);
        for idx in 0..self.m() {
            self.update_rank(idx, rhs.get(idx));
        }
    }

    /// Merge all entries of `Sparse` representation of the same precision
    pub(crate) fn merge_sparse(&mut self, rhs: &Sparse) {
        let codec = rhs.codec();
        debug_assert_eq!(self.p, codec.p);
        for k in rhs.entries() {
            let (idx, rank) = codec.decode(k, self.p);
            self.update_rank(idx, rank);
        }
    }
}

impl RepresentationTrait for Dense {
    /// Return bias corrected HyperLogLog estimate, falling back to linear counting at low
    /// cardinalities
    fn estimate(&self) -> u64 {
        let m = self.m();
        let mut sum = 0.0;
        let mut zeros = 0u32;
        for idx in 0..m {
            let rank = self.get(idx);
            sum += 1.0 / ((1u64 << rank) as f64);
            zeros += u32::from(rank == 0);
        }

        let alpha = alpha(m);
        let m = f64::from(m);
        let raw = alpha * m * m / sum;
        let corrected = if raw <= 5.0 * m {
            raw - estimate_bias(raw, self.p)
        } else {
            raw
        };

        let estimate = if zeros != 0 {
            let h = linear_counting(m, f64::from(zeros));
            if h <= THRESHOLDS[usize::from(self.p) - 4] {
                h
            } else {
                corrected
            }
        } else {
            corrected
        };
        (estimate.max(0.0) + 0.5) as u64
    }

    /// Return memory size of `Dense`
    fn size_of(&self) -> usize {
        size_of::<Self>() + self.registers.len()
    }

    fn kind(&self) -> RepresentationKind {
        RepresentationKind::Dense
    }
}

/// Parameter for bias correction
#[inline]
fn alpha(m: u32) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / f64::from(m)),
    }
}
