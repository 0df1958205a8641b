#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Smallest supported dense precision
pub const MIN_PRECISION: u8 = 4;
/// Largest supported dense precision
pub const MAX_PRECISION: u8 = 16;
/// Largest supported sparse precision
pub const MAX_SPARSE_PRECISION: u8 = 25;
pub const DEFAULT_PRECISION: u8 = 14;
pub const DEFAULT_SPARSE_PRECISION: u8 = 20;

/// Parameters of `HyperLogLogPlus`.
///
/// `precision` selects `2^precision` dense registers, trading memory for accuracy (relative
/// error is about `1.04 / sqrt(2^precision)`). `sparse_precision` is used while the estimator
/// is sparse and must lie in `[precision, 25]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub precision: u8,
    pub sparse_precision: u8,
}

impl Config {
    pub fn new(precision: u8, sparse_precision: u8) -> Self {
        Self {
            precision,
            sparse_precision,
        }
    }

    /// Check that both precisions are within their supported ranges
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(Error::InvalidPrecision {
                precision: self.precision,
            });
        }
        if !(self.precision..=MAX_SPARSE_PRECISION).contains(&self.sparse_precision) {
            return Err(Error::InvalidSparsePrecision {
                precision: self.precision,
                sparse_precision: self.sparse_precision,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, DEFAULT_SPARSE_PRECISION)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p={}, p'={}", self.precision, self.sparse_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(4, 4; "smallest")]
    #[test_case(14, 20; "default")]
    #[test_case(16, 25; "largest")]
    #[test_case(16, 16; "equal")]
    fn test_validate_accepts(p: u8, sp: u8) {
        assert!(Config::new(p, sp).validate().is_ok());
    }

    #[test_case(3, 20; "precision too small")]
    #[test_case(17, 20; "precision too large")]
    #[test_case(0, 0; "zero")]
    fn test_validate_rejects_precision(p: u8, sp: u8) {
        assert!(matches!(
            Config::new(p, sp).validate(),
            Err(Error::InvalidPrecision { precision }) if precision == p
        ));
    }

    #[test_case(14, 13; "below precision")]
    #[test_case(14, 26; "too large")]
    #[test_case(4, 255; "far too large")]
    fn test_validate_rejects_sparse_precision(p: u8, sp: u8) {
        assert!(matches!(
            Config::new(p, sp).validate(),
            Err(Error::InvalidSparsePrecision { .. })
        ));
    }

    #[test]
    fn test_default() {
        assert_eq!(Config::default(), Config::new(14, 20));
        assert_eq!(Config::default().to_string(), "p=14, p'=20");
    }
}
