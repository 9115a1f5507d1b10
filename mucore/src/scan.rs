//! Run orchestration: configure, partition, spawn, join, close.
use log::info;
use muinstr::modules::Module;

use crate::{
    config::ScanConfig,
    oracle::PatternOracle,
    partition,
    progress::ScanProgress,
    sink::ResultSink,
    utils::error::MuResult,
    worker::{Worker, WorkerStats},
};

/// Summary of one completed scan run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanReport {
    pub eligible_functions: usize,
    pub workers_spawned: usize,
    pub records_emitted: usize,
    pub oracle_failures: usize,
}

/// Scan `module` end to end and write every match record to the
/// configured sink.
///
/// One-shot: configuration resolves and the sink opens before anything
/// else (a failure there is fatal and spawns no worker), the defined
/// functions are partitioned round-robin, one OS thread runs per
/// non-empty bucket, and the sink closes only after every worker has
/// been joined. A worker's fatal error surfaces here once the barrier
/// has passed.
pub fn run_scan(
    module: &Module,
    oracle: &dyn PatternOracle,
    config: &ScanConfig,
) -> MuResult<ScanReport> {
    let worker_count = config.worker_count()?;
    let sink = ResultSink::create(&config.output, config.eager_flush)?;

    let eligible = module.defined_functions().count();
    let progress = ScanProgress::new(eligible);
    let buckets = partition::round_robin(module, worker_count);

    info!("number of threads: {}", worker_count);

    let mut report = ScanReport {
        eligible_functions: eligible,
        ..Default::default()
    };

    let results: Vec<MuResult<WorkerStats>> = std::thread::scope(|scope| {
        let handles: Vec<_> = buckets
            .into_iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(id, bucket)| {
                let worker = Worker::new(id, bucket, oracle, &progress, &sink);
                scope.spawn(move || worker.run())
            })
            .collect();

        report.workers_spawned = handles.len();

        // Join barrier: the sink must not close while any worker lives.
        handles
            .into_iter()
            .map(|handle| handle.join().expect("scan worker panicked"))
            .collect()
    });

    let finish_result = sink.finish();
    for result in results {
        let stats = result?;
        report.records_emitted += stats.records_emitted;
        report.oracle_failures += stats.oracle_failures;
    }
    finish_result?;

    info!(
        "scan complete: {} functions, {} records, {} oracle failures",
        report.eligible_functions, report.records_emitted, report.oracle_failures
    );

    Ok(report)
}
