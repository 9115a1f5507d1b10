//! Phi nodes and function calls.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;

use crate::modules::{
    Instruction,
    operand::{Label, Name, Operand},
    symbol::FuncId,
};

/// Phi instruction
///
/// Selects a value based on control flow, merging values coming from
/// different predecessor blocks. Phi nodes are block-setup instructions:
/// they must form a contiguous run at the beginning of a basic block, and
/// they sit before the block's first insertion point.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Phi {
    /// The destination SSA name for the result of the phi instruction.
    pub dest: Name,

    /// The incoming values and their corresponding predecessor blocks.
    pub values: Vec<(Label, Operand)>,
}

impl Instruction for Phi {
    fn is_block_setup(&self) -> bool {
        true
    }

    fn operands(&self) -> impl Iterator<Item = &Operand> {
        self.values.iter().map(|(_, op)| op)
    }

    fn operands_mut(&mut self) -> impl Iterator<Item = &mut Operand> {
        self.values.iter_mut().map(|(_, op)| op)
    }

    fn destination(&self) -> Option<Name> {
        Some(self.dest)
    }

    fn set_destination(&mut self, name: Name) {
        self.dest = name;
    }
}

/// Classification of a call's target, decided once when the module is
/// built and never re-derived during a scan.
///
/// A call with no resolvable target is classified `NonIntrinsic`: nothing
/// is known about it, so downstream consumers must treat it as an
/// ordinary call.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntrinsicKind {
    /// The target is an ordinary function, or the call is indirect.
    #[default]
    NonIntrinsic,

    /// `memcpy`-style memory copy builtin.
    MemCpy,

    /// `memmove`-style overlapping memory copy builtin.
    MemMove,

    /// Variadic argument setup builtin.
    VaStart,

    /// Variadic argument access builtin.
    VaArg,

    /// Variadic argument list copy builtin.
    VaCopy,

    /// Variadic argument teardown builtin.
    VaEnd,

    /// Any other toolchain builtin.
    OtherIntrinsic,
}

/// Function call instruction
///
/// Calls cannot raise exceptions; control always continues with the next
/// instruction after the call completes. Error reporting goes through
/// return codes or non-returning callees.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The resolved target within the module table. `None` when the call
    /// goes through a register or an unresolvable symbol.
    pub callee: Option<FuncId>,

    /// Target classification, fixed when the representation was built.
    pub intrinsic: IntrinsicKind,

    /// The argument operands to pass to the target.
    pub args: Vec<Operand>,

    /// The destination SSA name for the return value, if any.
    pub dest: Option<Name>,
}

impl Instruction for Call {
    fn operands(&self) -> impl Iterator<Item = &Operand> {
        self.args.iter()
    }

    fn operands_mut(&mut self) -> impl Iterator<Item = &mut Operand> {
        self.args.iter_mut()
    }

    fn destination(&self) -> Option<Name> {
        self.dest
    }

    fn set_destination(&mut self, name: Name) {
        // Cannot change a void return to a non-void return
        if self.dest.is_some() {
            self.dest = Some(name);
        }
    }
}
