//! Static work partitioning.
use muinstr::modules::{Function, Module, symbol::FuncId};

/// One unit of scan work: a defined function and its table reference.
///
/// Units borrow from the module and belong to exactly one bucket.
#[derive(Debug, Clone, Copy)]
pub struct WorkUnit<'m> {
    pub id: FuncId,
    pub function: &'m Function,
}

/// Split the module's defined functions into `count` ordered buckets.
///
/// The i-th defined function (in discovery order) lands in bucket
/// `i % count`, so identical input always produces identical buckets and
/// the buckets exactly partition the eligible set. When there are fewer
/// functions than buckets the excess buckets stay empty. `count` is
/// clamped to at least one.
pub fn round_robin(module: &Module, count: usize) -> Vec<Vec<WorkUnit<'_>>> {
    let count = count.max(1);
    let mut buckets: Vec<Vec<WorkUnit<'_>>> = vec![Vec::new(); count];

    for (index, (id, function)) in module.defined_functions().enumerate() {
        buckets[index % count].push(WorkUnit { id, function });
    }

    buckets
}
