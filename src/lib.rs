//! `hllpp` is a Rust crate implementing the HyperLogLog++ approximate distinct-count estimator
//! used by a sketch-data store.
//!
//! The estimator starts with a compact sparse representation for low cardinalities, switches
//! once and for good to a dense register array as cardinality grows, supports merging
//! (set union), and round-trips through a stable, versioned binary format.
//!
//! ```
//! use hllpp::HyperLogLogPlus;
//!
//! let mut lhs = HyperLogLogPlus::new();
//! lhs.extend(["picard", "janeway"]);
//! let mut rhs = HyperLogLogPlus::new();
//! rhs.extend(["picard", "kirk"]);
//!
//! lhs.merge(&rhs).unwrap();
//! assert_eq!(lhs.count(), 3);
//!
//! let bytes = lhs.marshal();
//! assert_eq!(HyperLogLogPlus::unmarshal(&bytes).unwrap(), lhs);
//! ```
mod bias;
mod bits;
pub mod config;
mod dense;
pub mod error;
pub mod estimator;
pub mod hash;
mod representation;
#[cfg(feature = "with_serde")]
mod serde;
pub mod serialization;
mod sparse;
mod sparse_list;

pub use config::Config;
pub use error::{Error, Result};
pub use estimator::HyperLogLogPlus;
pub use representation::RepresentationKind;
