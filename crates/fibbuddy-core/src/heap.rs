//! The owning heap object: allocation, deallocation, and listing.

use tracing::debug;

use crate::block::{BlockDescriptor, BlockHandle};
use crate::chain::BlockChain;
use crate::constants::{MAX_BLOCK_SIZE, MAX_NAME_LEN};
use crate::error::{AllocError, FreeError};
use crate::fib;
use crate::merge::merge_to_fixed_point;
use crate::split::split_to_target;
use crate::stats::HeapStats;

/// A simulated Fibonacci buddy-system heap.
///
/// Blocks are bookkeeping records; no real memory backs them. The heap
/// is created once with a capacity bound and mutated only through its
/// own operations. Operations take `&mut self` and run to completion;
/// a concurrent adaptation must hold one exclusive lock for the whole
/// of each operation, since merging can touch arbitrary parts of the
/// chain.
///
/// # Example
/// ```
/// use fibbuddy_core::FibHeap;
///
/// let mut heap = FibHeap::with_capacity(10);
/// let handle = heap.allocate("x", 7).unwrap();
/// assert_eq!(handle.size(), 8);
/// heap.free("x").unwrap();
/// assert_eq!(heap.total_size(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct FibHeap {
    chain: BlockChain,
    capacity: u64,
    stats: HeapStats,
}

impl FibHeap {
    /// Create a heap whose initial chain holds one free block per
    /// Fibonacci number not exceeding `bound`, in ascending size order.
    #[must_use]
    pub fn with_capacity(bound: u64) -> Self {
        let chain = BlockChain::from_capacity(bound);
        debug!(
            bound,
            blocks = chain.len(),
            total = chain.total_size(),
            "initialized heap"
        );
        Self {
            chain,
            capacity: bound,
            stats: HeapStats::default(),
        }
    }

    /// The configured capacity bound.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of all tracked block sizes. Invariant across every operation.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.chain.total_size()
    }

    /// Counters accumulated since creation.
    #[must_use]
    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Read-only snapshots of all blocks, in current chain order.
    #[must_use]
    pub fn list(&self) -> Vec<BlockDescriptor> {
        self.chain.descriptors()
    }

    /// Allocate a block for `name`, rounding `size` up to the nearest
    /// Fibonacci number.
    ///
    /// Best-fit search over the free blocks; if none fits, the chain is
    /// coalesced and the search retried exactly once. The chosen block
    /// is split down toward the rounded size before being marked
    /// allocated. On failure nothing allocation-visible changes, except
    /// that the coalescing performed while probing for space is kept.
    pub fn allocate(&mut self, name: &str, size: u64) -> Result<BlockHandle, AllocError> {
        if name.len() > MAX_NAME_LEN {
            self.stats.failed_allocations += 1;
            return Err(AllocError::NameTooLong);
        }
        if self.find_allocated(name).is_some() {
            self.stats.failed_allocations += 1;
            return Err(AllocError::DuplicateName(name.to_string()));
        }
        if size > MAX_BLOCK_SIZE {
            // No Fibonacci block can satisfy this; follow the same
            // coalesce-then-fail path as an ordinary exhausted search.
            self.stats.merge_fusions += merge_to_fixed_point(&mut self.chain);
            self.stats.failed_allocations += 1;
            debug!(name, size, "allocation failed: request beyond largest block");
            return Err(AllocError::OutOfMemory);
        }

        let target = fib::closest_fibonacci(size);
        let index = match self.find_best_fit(target) {
            Some(index) => index,
            None => {
                self.stats.merge_fusions += merge_to_fixed_point(&mut self.chain);
                match self.find_best_fit(target) {
                    Some(index) => index,
                    None => {
                        self.stats.failed_allocations += 1;
                        debug!(name, size, target, "allocation failed: out of memory");
                        return Err(AllocError::OutOfMemory);
                    }
                }
            }
        };

        self.stats.split_peels += split_to_target(&mut self.chain, index, target);

        let block = self.chain.block_mut(index);
        block.is_free = false;
        block.name = name.to_string();
        block.requested_size = size;
        let block_size = block.size;

        self.stats.allocations += 1;
        debug!(name, size, block_size, "allocated block");
        Ok(BlockHandle::new(name, block_size))
    }

    /// Free the allocated block carrying `name`, then coalesce the
    /// whole chain to its fixed point.
    pub fn free(&mut self, name: &str) -> Result<(), FreeError> {
        let Some(index) = self.find_allocated(name) else {
            return Err(FreeError::BlockNotFound(name.to_string()));
        };

        let block = self.chain.block_mut(index);
        let size = block.size;
        block.release();
        self.stats.frees += 1;
        self.stats.merge_fusions += merge_to_fixed_point(&mut self.chain);
        debug!(name, size, "freed block");
        Ok(())
    }

    /// Look up the block a handle refers to, if it is still allocated.
    #[must_use]
    pub fn lookup(&self, handle: &BlockHandle) -> Option<BlockDescriptor> {
        self.lookup_name(handle.name())
    }

    /// Look up a live allocation by owner name.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<BlockDescriptor> {
        self.find_allocated(name)
            .map(|index| self.chain.blocks()[index].descriptor())
    }

    fn find_allocated(&self, name: &str) -> Option<usize> {
        self.chain
            .blocks()
            .iter()
            .position(|b| !b.is_free && b.name == name)
    }

    /// Smallest free block with `size >= target`; first encountered in
    /// chain order on ties.
    fn find_best_fit(&self, target: u64) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, block) in self.chain.blocks().iter().enumerate() {
            if block.is_free && block.size >= target {
                let better = match best {
                    Some(b) => block.size < self.chain.blocks()[b].size,
                    None => true,
                };
                if better {
                    best = Some(index);
                }
            }
        }
        best
    }
}
