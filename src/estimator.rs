//! HyperLogLog++ estimator allows to estimate number of distinct elements in the stream or
//! dataset and is defined with two runtime parameters (see `Config`):
//! - `precision` (`P`): in [4..16] range, defines number of bits used for dense register
//!   indices, so the dense representation has `M = 2^P` registers.
//! - `sparse_precision` (`P'`): in [P..25] range, defines number of bits used for register
//!   indices while the estimator is sparse.
//!
//! # Data-structure design rationale
//!
//! ## Low memory footprint
//! Estimator starts with sparse representation whose size grows with the number of distinct
//! elements, and switches to dense representation once the sparse list would be as large as
//! `6 * M / 8` bytes. For `P = 14`:
//! - Cardinality in [0..~4000] range - up to 12 KiB (sparse representation)
//! - Cardinality in [~4000..] range - 10 KiB, or 12 KiB with 6-bit registers (dense representation)
//!
//! ## High accuracy
//! - For small cardinality range linear counting over `2^P'` virtual registers is used, which
//!   is accurate within hash collision chance.
//! - For large cardinality range HyperLogLog++ with empirical bias correction is used.
//!   - Expected error:
//!     P = 10: 1.04 / sqrt(2^10) = 3.25%
//!     P = 12: 1.04 / sqrt(2^12) = 1.62%
//!     P = 14: 1.04 / sqrt(2^14) = 0.81%
//!     P = 16: 1.04 / sqrt(2^16) = 0.41%
//!
//! # Representations
//!
//! ## Sparse representation
//! Delta-varint encoded list of sorted sparse values plus a small buffer of recently added
//! values (see `sparse` module).
//!
//! ## Dense representation
//! `M` registers packed with 5 bits each, widened to 6 bits once any rank exceeds 31 (see
//! `dense` module).
//!
//! Sparse to dense promotion is one-way.

use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use tracing::debug;

use crate::config::Config;
use crate::dense::{Dense, NARROW_BITS};
use crate::error::{Error, Result};
use crate::hash::hash;
use crate::representation::{Representation, RepresentationKind, RepresentationTrait};
use crate::sparse::{Sparse, SparseCodec};

/// Sparse list reached the size of the dense representation
const TRIGGER_SIZE: &str = "sparse list outgrew dense size";
/// Dense estimator was merged into sparse one
const TRIGGER_MERGE: &str = "merge with dense estimator";

#[derive(Clone, PartialEq)]
pub struct HyperLogLogPlus {
    pub(crate) config: Config,
    pub(crate) repr: Representation,
}

impl HyperLogLogPlus {
    /// Creates new empty `HyperLogLogPlus` with default parameters (`P = 14`, `P' = 20`)
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Creates new empty `HyperLogLogPlus` with given parameters
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        let codec = SparseCodec::new(config.precision, config.sparse_precision);
        Self {
            config,
            repr: Representation::Sparse(Sparse::new(codec)),
        }
    }

    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    #[inline]
    pub fn sparse_precision(&self) -> u8 {
        self.config.sparse_precision
    }

    /// Return register width of the dense representation, `5` while the estimator is sparse
    #[inline]
    pub fn bits_per_register(&self) -> u8 {
        match &self.repr {
            Representation::Sparse(_) => NARROW_BITS,
            Representation::Dense(dense) => dense.bits(),
        }
    }

    /// Return representation type of `HyperLogLogPlus`
    #[inline]
    pub fn representation(&self) -> RepresentationKind {
        self.repr.kind()
    }

    /// Add an element into `HyperLogLogPlus`
    #[inline]
    pub fn add(&mut self, item: &[u8]) {
        self.add_hash(hash(item));
    }

    /// Add already hashed element into `HyperLogLogPlus`.
    ///
    /// The hash must be uniformly distributed over all 64 bits for the estimate to hold.
    #[inline]
    pub fn add_hash(&mut self, hash: u64) {
        match &mut self.repr {
            Representation::Sparse(sparse) => {
                if !sparse.insert_hash(hash) {
                    self.promote(TRIGGER_SIZE);
                }
            }
            Representation::Dense(dense) => dense.insert_hash(hash),
        }
    }

    /// Return cardinality estimate.
    ///
    /// Merges buffered values into the sparse list first, which may promote the estimator to
    /// dense representation.
    pub fn count(&mut self) -> u64 {
        self.flush();
        self.repr.estimate()
    }

    /// Merge `rhs` into `self`, so that `self` estimates the cardinality of the union.
    ///
    /// Both estimators must have been created with the same parameters, otherwise neither is
    /// modified and `Error::ParamMismatch` is returned.
    pub fn merge(&mut self, rhs: &Self) -> Result<()> {
        if self.config != rhs.config {
            return Err(Error::ParamMismatch {
                lhs: self.config,
                rhs: rhs.config,
            });
        }

        match &rhs.repr {
            Representation::Dense(rhs) => {
                self.promote(TRIGGER_MERGE);
                if let Representation::Dense(lhs) = &mut self.repr {
                    lhs.merge(rhs);
                }
            }
            Representation::Sparse(rhs) => match &mut self.repr {
                Representation::Sparse(lhs) => {
                    if !lhs.merge(rhs) {
                        self.promote(TRIGGER_SIZE);
                    }
                }
                Representation::Dense(lhs) => lhs.merge_sparse(rhs),
            },
        }
        Ok(())
    }

    /// Merge buffered values of sparse representation into its sparse list, promoting to dense
    /// representation when the list got too large
    pub(crate) fn flush(&mut self) {
        if let Representation::Sparse(sparse) = &mut self.repr {
            if !sparse.flush() {
                self.promote(TRIGGER_SIZE);
            }
        }
    }

    /// Convert sparse representation into dense one, no-op for dense representation
    fn promote(&mut self, trigger: &'static str) {
        if let Representation::Sparse(sparse) = &self.repr {
            let dense = Dense::from_sparse(sparse);
            debug!(
                precision = self.config.precision,
                sparse_precision = self.config.sparse_precision,
                sparse_length = sparse.list().len(),
                pending = sparse.pending(),
                bits_per_register = dense.bits(),
                trigger,
                "promoted estimator to dense representation"
            );
            self.repr = Representation::Dense(dense);
        }
    }

    /// Return memory size of `HyperLogLogPlus`
    pub fn size_of(&self) -> usize {
        size_of::<Config>() + self.repr.size_of()
    }
}

impl Default for HyperLogLogPlus {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsRef<[u8]>> Extend<T> for HyperLogLogPlus {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add(item.as_ref()));
    }
}

impl Debug for HyperLogLogPlus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("HyperLogLogPlus");
        s.field("representation", &self.representation())
            .field("precision", &self.precision())
            .field("sparse_precision", &self.sparse_precision())
            .field("bits_per_register", &self.bits_per_register());
        match &self.repr {
            Representation::Sparse(sparse) => s
                .field("sparse_length", &sparse.list().len())
                .field("pending", &sparse.pending()),
            Representation::Dense(dense) => s.field("registers", &dense.registers().len()),
        };
        s.finish()
    }
}
