//! Merger: coalesce adjacent free Fibonacci-buddy blocks to a fixed point.

use tracing::trace;

use crate::chain::BlockChain;
use crate::fib;

/// Fuse adjacent free blocks whose sizes are consecutive Fibonacci
/// numbers until no eligible pair remains. Returns the number of fusions.
///
/// After every fusion the scan restarts from the head: a fusion can
/// create a new eligible pair anywhere in the chain, including earlier
/// than the current position. Each fusion strictly shrinks the chain,
/// so the pass terminates; the restart strategy is O(n²) worst case.
pub(crate) fn merge_to_fixed_point(chain: &mut BlockChain) -> u64 {
    let mut fusions = 0;
    let mut index = 0;
    while index + 1 < chain.len() {
        let left = &chain.blocks()[index];
        let right = &chain.blocks()[index + 1];
        if left.is_free && right.is_free && fib::is_consecutive_pair(left.size, right.size) {
            let absorbed = chain.remove(index + 1);
            let merged_size = {
                let block = chain.block_mut(index);
                block.size += absorbed.size;
                block.name.clear();
                block.requested_size = 0;
                block.size
            };
            fusions += 1;
            trace!(size = merged_size, "merged adjacent free blocks");
            index = 0;
            continue;
        }
        index += 1;
    }
    fusions
}
