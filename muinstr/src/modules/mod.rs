//! Instruction IR modules
//!
//! This module groups all instruction kinds exposed by the Mu instruction
//! IR. Each instruction is represented as a small data structure with public
//! fields, making it easy to construct and inspect. Submodules contain
//! families of operations:
//!
//! - `int`: integer arithmetic and comparisons
//! - `mem`: memory loads and stores
//! - `misc`: phi nodes and function calls
//! - `control_flow`: block terminators
//! - `operand`: shared operand and SSA name types
//! - `symbol`: function references
//!
//! You typically manipulate instructions via the `MuInstr` enum which is a
//! tagged union of all concrete instruction forms.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::modules::{
    control_flow::Terminator,
    instructions::MuInstr,
    operand::{Label, Name, Operand},
    symbol::FuncId,
};

pub mod control_flow;
pub mod instructions;
pub mod int;
pub mod mem;
pub mod misc;
pub mod operand;
pub mod symbol;

/// Common interface implemented by every instruction node.
///
/// This trait provides lightweight, zero-allocation iteration over an
/// instruction's input operands and exposes its optional destination SSA
/// name when present.
pub trait Instruction {
    /// Iterate over all input operands for this instruction.
    fn operands(&self) -> impl Iterator<Item = &Operand>;

    /// Return the destination SSA name if the instruction produces a result.
    fn destination(&self) -> Option<Name> {
        None
    }

    /// Update the destination SSA name for this instruction. No-op if the
    /// instruction does not produce a result.
    fn set_destination(&mut self, _name: Name) {}

    /// Mutably iterate over all input operands for this instruction.
    fn operands_mut(&mut self) -> impl Iterator<Item = &mut Operand>;

    /// True for block-setup nodes (phis) that are pinned to the start of
    /// their basic block, before the first insertion point.
    fn is_block_setup(&self) -> bool {
        false
    }

    /// Convenience iterator over referenced SSA names (i.e., register
    /// operands). Immediates and labels are ignored.
    fn name_dependencies(&self) -> impl Iterator<Item = Name> {
        self.operands().filter_map(|op| match op {
            Operand::Reg(reg) => Some(*reg),
            _ => None,
        })
    }
}

/// A basic block within a function, containing a sequence of instructions
/// and ending with a control flow terminator.
///
/// This structure allows to define a group of instructions that execute
/// sequentially, followed by a control flow instruction that determines
/// the next block to execute.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasicBlock {
    pub label: Label,
    pub instructions: Vec<MuInstr>,
    pub terminator: Terminator,
}

impl BasicBlock {
    /// Index of the first instruction after the leading block-setup run.
    ///
    /// Phi nodes must form a contiguous run at the start of a block;
    /// anything that walks a block for rewriting or reporting purposes
    /// starts here, never before.
    pub fn first_insertion_point(&self) -> usize {
        self.instructions
            .iter()
            .take_while(|instr| instr.is_block_setup())
            .count()
    }

    /// Iterate over the block's instructions from the first insertion
    /// point onward, in block order.
    pub fn scannable_instructions(&self) -> impl Iterator<Item = &MuInstr> {
        self.instructions[self.first_insertion_point()..].iter()
    }
}

/// A function made of basic blocks.
///
/// A `Function` owns its body (`blocks`, in layout order, entry first)
/// and carries its linker-visible `name`. Declaration-only functions have
/// `defined == false` and an empty body; they exist so calls can resolve
/// to them, but they carry nothing to execute or scan.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub name: String,
    pub defined: bool,
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    /// True for signature-only functions with no body.
    pub fn is_declaration(&self) -> bool {
        !self.defined
    }
}

/// A module containing functions, the compilation unit boundary.
///
/// The function table is ordered by discovery and immutable for the
/// duration of any analysis over it; `FuncId`s index into it.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    pub functions: Vec<Function>,
}

impl Module {
    /// Look up a function by its reference.
    pub fn function(&self, id: FuncId) -> Option<&Function> {
        self.functions.get(id.index())
    }

    /// Iterate over defined functions in discovery order, paired with
    /// their table references. Declaration-only functions are skipped.
    pub fn defined_functions(&self) -> impl Iterator<Item = (FuncId, &Function)> {
        self.functions
            .iter()
            .enumerate()
            .filter(|(_, function)| function.defined)
            .map(|(index, function)| (FuncId(index as u32), function))
    }
}
