//! Strongly typed, zero-cost identifier wrapper for pups in a yard.
//!
//! The inner integer is `pub` to allow direct indexing via `id.0 as usize`,
//! but callers should prefer [`PupId::index`] for clarity.

use std::fmt;

/// Index of a pup (one independent behavior controller) in a yard.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PupId(pub u32);

impl PupId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PupId({})", self.0)
    }
}

impl From<PupId> for usize {
    #[inline(always)]
    fn from(id: PupId) -> usize {
        id.0 as usize
    }
}

/// Fails when `n` does not fit in `u32`, so yard indices never wrap.
impl TryFrom<usize> for PupId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PupId, Self::Error> {
        u32::try_from(n).map(PupId)
    }
}
