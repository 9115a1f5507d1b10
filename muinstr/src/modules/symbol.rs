//! Function symbol references.
//!
//! Functions live in a module-level table in discovery order; a `FuncId`
//! is a stable index into that table, valid for the lifetime of the
//! module it was minted for.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a function within its module's table.
///
/// Both defined functions and declaration-only functions are referenced
/// the same way; the target's `defined` flag tells them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncId(pub u32);

impl FuncId {
    /// Position of the referenced function in the module table.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FuncId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}
