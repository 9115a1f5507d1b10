//! Pattern oracle interface.
//!
//! The pattern-detection algorithm itself lives outside this crate; the
//! engine only cares about its calling contract.
use muinstr::modules::instructions::MuInstr;
use thiserror::Error;

/// Failure of a single oracle invocation.
///
/// Recoverable by contract: the engine logs the failure, skips the
/// instruction and carries on with the rest of the bucket.
#[derive(Debug, Error)]
#[error("pattern oracle failed: {0}")]
pub struct OracleError(pub String);

/// Decision procedure judging whether an instruction constitutes a
/// reportable mutation location.
///
/// An oracle is built once from loaded pattern definitions and shared by
/// reference with every worker, so implementations must tolerate
/// concurrent invocation and own whatever synchronization they need.
/// Returning no records is a normal outcome, not an error; the records
/// that are returned keep the order the oracle produced them in.
pub trait PatternOracle: Sync {
    fn look_for_pattern(&self, instr: &MuInstr) -> Result<Vec<String>, OracleError>;
}
