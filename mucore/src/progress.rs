//! Run-wide progress reporting.
use log::info;
use parking_lot::Mutex;

/// Identifier of a worker within one scan run.
pub type WorkerId = usize;

/// Monotonic function-start counter shared by all workers.
///
/// The ordinal assignment and the status line are produced under one
/// lock, so ordinals are unique and strictly increasing across the whole
/// run no matter how workers interleave. The counter never exceeds the
/// fixed total recorded at construction.
pub struct ScanProgress {
    total: usize,
    counter: Mutex<usize>,
}

impl ScanProgress {
    /// `total` is the fixed number of eligible functions, known before
    /// any worker starts.
    pub fn new(total: usize) -> Self {
        ScanProgress {
            total,
            counter: Mutex::new(0),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Record the start of one function scan and emit the status line.
    ///
    /// Returns the ordinal assigned to this function-start event. The
    /// line itself is observability output, not a machine interface.
    pub fn function_started(&self, worker: WorkerId, name: &str) -> usize {
        let mut counter = self.counter.lock();
        *counter += 1;
        debug_assert!(*counter <= self.total);
        info!(
            "worker {}: instrumenting function {} of {}: {}",
            worker, *counter, self.total, name
        );
        *counter
    }

    /// Number of function-start events recorded so far.
    pub fn started(&self) -> usize {
        *self.counter.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_exactly_one_to_n_across_threads() {
        let progress = ScanProgress::new(100);
        let observed = Mutex::new(Vec::new());

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let progress = &progress;
                let observed = &observed;
                scope.spawn(move || {
                    for index in 0..25 {
                        let name = format!("f_{}_{}", worker, index);
                        let ordinal = progress.function_started(worker, &name);
                        observed.lock().push(ordinal);
                    }
                });
            }
        });

        let mut ordinals = observed.into_inner();
        ordinals.sort_unstable();
        assert_eq!(ordinals, (1..=100).collect::<Vec<_>>());
        assert_eq!(progress.started(), progress.total());
    }

    #[test]
    fn empty_run_reports_zero() {
        let progress = ScanProgress::new(0);
        assert_eq!(progress.total(), 0);
        assert_eq!(progress.started(), 0);
    }
}
