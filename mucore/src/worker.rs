//! Bucket workers.
use log::{debug, warn};
use muinstr::modules::instructions::MuInstr;

use crate::{
    filter,
    oracle::PatternOracle,
    partition::WorkUnit,
    progress::{ScanProgress, WorkerId},
    sink::ResultSink,
    utils::error::MuResult,
};

/// Per-worker tallies, merged into the run report after the join barrier.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerStats {
    pub records_emitted: usize,
    pub oracle_failures: usize,
}

/// Processes exactly one bucket of functions, sequentially, to completion.
///
/// A worker never mutates the module; its only writes go through the
/// shared progress counter and the result sink, each behind its own
/// lock. Neither lock is ever held across an oracle call.
pub struct Worker<'run> {
    id: WorkerId,
    bucket: Vec<WorkUnit<'run>>,
    oracle: &'run dyn PatternOracle,
    progress: &'run ScanProgress,
    sink: &'run ResultSink,
}

impl<'run> Worker<'run> {
    pub fn new(
        id: WorkerId,
        bucket: Vec<WorkUnit<'run>>,
        oracle: &'run dyn PatternOracle,
        progress: &'run ScanProgress,
        sink: &'run ResultSink,
    ) -> Self {
        Worker {
            id,
            bucket,
            oracle,
            progress,
            sink,
        }
    }

    /// Scan every function in the bucket.
    ///
    /// A sink failure aborts the worker and surfaces after the join
    /// barrier; an oracle failure only skips the current instruction.
    pub fn run(self) -> MuResult<WorkerStats> {
        let mut stats = WorkerStats::default();

        for unit in &self.bucket {
            self.progress.function_started(self.id, &unit.function.name);
            self.scan_function(unit, &mut stats)?;
        }

        Ok(stats)
    }

    fn scan_function(&self, unit: &WorkUnit<'run>, stats: &mut WorkerStats) -> MuResult<()> {
        // Flatten the body first; repeating this on the same function
        // always yields the identical list.
        let collected: Vec<&MuInstr> = unit
            .function
            .blocks
            .iter()
            .flat_map(|block| block.scannable_instructions())
            .collect();

        debug!(
            "worker {}: function `{}` has {} scannable instructions",
            self.id,
            unit.function.name,
            collected.len()
        );

        for instr in collected {
            if !filter::is_candidate(instr) {
                continue;
            }

            match self.oracle.look_for_pattern(instr) {
                Ok(records) => {
                    if !records.is_empty() {
                        self.sink.append_all(&records)?;
                        stats.records_emitted += records.len();
                    }
                }
                Err(error) => {
                    warn!(
                        "worker {}: skipping an instruction of `{}`: {}",
                        self.id, unit.function.name, error
                    );
                    stats.oracle_failures += 1;
                }
            }
        }

        Ok(())
    }
}
