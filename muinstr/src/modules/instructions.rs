use auto_enums::auto_enum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIs, EnumTryAs};

use crate::modules::{
    Instruction, int, mem,
    misc::{self, Call, Phi},
    operand::Operand,
};

/// Discriminated union covering all public instruction kinds.
///
/// Use this enum to store heterogeneous instruction streams and to
/// pattern-match on specific operations. The generated `MuInstrKind`
/// discriminant (via `strum`) can be helpful for fast classification.
#[derive(Debug, Clone, Hash, PartialEq, Eq, EnumIs, EnumTryAs, EnumDiscriminants)]
#[strum_discriminants(name(MuInstrKind))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MuInstr {
    // Integer instructions
    IAdd(int::IAdd),
    ICmp(int::ICmp),

    // Memory instructions
    MLoad(mem::MLoad),
    MStore(mem::MStore),

    // Block-setup and call instructions
    Phi(misc::Phi),
    Call(misc::Call),
}

macro_rules! define_instr_any_instr {
    (
        $($variant:ident),*
    ) => {
        impl Instruction for MuInstr {
            #[auto_enum(Iterator)]
            fn operands(&self) -> impl Iterator<Item = &Operand> {
                match self {
                    $(
                        MuInstr::$variant(instr) => instr.operands(),
                    )*
                }
            }

            fn destination(&self) -> Option<super::operand::Name> {
                match self {
                    $(
                        MuInstr::$variant(instr) => instr.destination(),
                    )*
                }
            }

            #[auto_enum(Iterator)]
            fn operands_mut(&mut self) -> impl Iterator<Item = &mut Operand> {
                match self {
                    $(
                        MuInstr::$variant(instr) => instr.operands_mut(),
                    )*
                }
            }

            fn set_destination(&mut self, name: super::operand::Name) {
                match self {
                    $(
                        MuInstr::$variant(instr) => instr.set_destination(name),
                    )*
                }
            }

            fn is_block_setup(&self) -> bool {
                match self {
                    $(
                        MuInstr::$variant(instr) => instr.is_block_setup(),
                    )*
                }
            }
        }
    };
}

define_instr_any_instr! {
    IAdd,
    ICmp,
    MLoad,
    MStore,
    Phi,
    Call
}

macro_rules! define_muinstr_from {
    ($typ:ty, $variant:ident) => {
        impl From<$typ> for MuInstr {
            fn from(inst: $typ) -> Self {
                MuInstr::$variant(inst)
            }
        }
    };
}

define_muinstr_from!(int::IAdd, IAdd);
define_muinstr_from!(int::ICmp, ICmp);
define_muinstr_from!(mem::MLoad, MLoad);
define_muinstr_from!(mem::MStore, MStore);
define_muinstr_from!(Phi, Phi);
define_muinstr_from!(Call, Call);
