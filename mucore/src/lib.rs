//! Concurrent partition-scan-aggregate engine over a Mu instruction module.
//!
//! The crate walks every defined function of an immutable module, filters
//! call instructions through an exemption policy, hands candidates to an
//! externally supplied pattern oracle, and appends the oracle's match
//! records to one shared output file. Work is statically partitioned
//! round-robin across a fixed pool of OS threads; a shared counter reports
//! progress, and both mutable shared resources sit behind dedicated locks.
//! Most consumers will interact with [`scan::run_scan`] and the
//! [`oracle::PatternOracle`] trait.

pub mod config;
pub mod filter;
pub mod oracle;
pub mod partition;
pub mod progress;
pub mod scan;
pub mod sink;
pub mod utils;
pub mod worker;
