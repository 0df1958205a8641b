use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::dense::Dense;
use crate::sparse::Sparse;

/// Representations supported by `HyperLogLogPlus`. Exactly one is live at a time and the
/// only transition is from `Sparse` to `Dense`.
#[derive(Clone, Debug, PartialEq)]
#[enum_dispatch]
pub(crate) enum Representation {
    Sparse(Sparse),
    Dense(Dense),
}

/// Representation trait which must be implemented by all representations.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationTrait {
    fn estimate(&self) -> u64;
    fn size_of(&self) -> usize;
    fn kind(&self) -> RepresentationKind;
    fn to_string(&self) -> String {
        format!(
            "{}, estimate: {}, size: {}",
            self.kind(),
            self.estimate(),
            self.size_of()
        )
    }
}

/// Kind of the representation currently used by `HyperLogLogPlus`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    Sparse,
    Dense,
}

impl Display for RepresentationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RepresentationKind::Sparse => f.write_str("sparse"),
            RepresentationKind::Dense => f.write_str("dense"),
        }
    }
}
