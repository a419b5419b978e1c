//! Heap usage counters.

use serde::Serialize;

/// Counters maintained by the heap across its lifetime.
///
/// Purely observational: the values never influence allocation
/// behavior. The heap is single-threaded, so plain integers suffice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeapStats {
    /// Successful allocations.
    pub allocations: u64,
    /// Allocation requests that returned an error.
    pub failed_allocations: u64,
    /// Successful frees.
    pub frees: u64,
    /// Siblings peeled off by the splitter.
    pub split_peels: u64,
    /// Adjacent free pairs fused by the merger.
    pub merge_fusions: u64,
}
