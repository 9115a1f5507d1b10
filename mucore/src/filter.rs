//! Candidate filter deciding which instructions reach the oracle.
use muinstr::modules::{instructions::MuInstr, misc::IntrinsicKind};

/// Decide whether an instruction is handed to the pattern oracle.
///
/// Only calls are ever candidates. Calls to toolchain builtins are
/// dropped, except the memory-transfer and varargs kinds, which behave
/// like ordinary library calls. A call with no resolved target was
/// classified non-intrinsic when the module was built, so it is
/// forwarded.
pub fn is_candidate(instr: &MuInstr) -> bool {
    match instr {
        MuInstr::Call(call) => match call.intrinsic {
            IntrinsicKind::NonIntrinsic
            | IntrinsicKind::MemCpy
            | IntrinsicKind::MemMove
            | IntrinsicKind::VaStart
            | IntrinsicKind::VaArg
            | IntrinsicKind::VaCopy
            | IntrinsicKind::VaEnd => true,
            IntrinsicKind::OtherIntrinsic => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use muinstr::modules::{
        int::IAdd,
        misc::{Call, IntrinsicKind},
        operand::Operand,
        symbol::FuncId,
    };

    use super::*;

    fn call(callee: Option<FuncId>, intrinsic: IntrinsicKind) -> MuInstr {
        Call {
            callee,
            intrinsic,
            args: Vec::new(),
            dest: None,
        }
        .into()
    }

    #[test]
    fn non_call_instructions_are_dropped() {
        let add: MuInstr = IAdd {
            dest: 1,
            lhs: Operand::Imm(1),
            rhs: Operand::Imm(2),
        }
        .into();
        assert!(!is_candidate(&add));
    }

    #[test]
    fn exempt_intrinsics_and_plain_calls_are_forwarded() {
        assert!(is_candidate(&call(
            Some(FuncId(3)),
            IntrinsicKind::NonIntrinsic
        )));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::MemCpy)));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::MemMove)));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::VaStart)));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::VaArg)));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::VaCopy)));
        assert!(is_candidate(&call(Some(FuncId(3)), IntrinsicKind::VaEnd)));
    }

    #[test]
    fn other_intrinsics_are_dropped() {
        assert!(!is_candidate(&call(
            Some(FuncId(3)),
            IntrinsicKind::OtherIntrinsic
        )));
    }

    #[test]
    fn unresolved_callee_is_forwarded() {
        assert!(is_candidate(&call(None, IntrinsicKind::NonIntrinsic)));
    }
}
