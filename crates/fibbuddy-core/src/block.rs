//! Block records, read-only descriptors, and allocation handles.

use serde::Serialize;

/// A node in the block chain.
///
/// `size` is always a value that originated from the Fibonacci oracle,
/// either an initial decomposition element or a split-produced
/// predecessor (Fibonacci remainders are themselves Fibonacci numbers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Tracked capacity of this block.
    pub size: u64,
    /// Whether the block is currently free.
    pub is_free: bool,
    /// Owner tag; empty while the block is free.
    pub name: String,
    /// The caller's originally requested size; 0 while free. Distinct
    /// from `size`, which is rounded up to a Fibonacci number.
    pub requested_size: u64,
}

impl Block {
    /// Create a free block of the given size.
    #[must_use]
    pub fn free(size: u64) -> Self {
        Self {
            size,
            is_free: true,
            name: String::new(),
            requested_size: 0,
        }
    }

    /// Clear ownership fields, returning the block to the free state.
    pub(crate) fn release(&mut self) {
        self.is_free = true;
        self.name.clear();
        self.requested_size = 0;
    }

    /// Read-only snapshot of this block.
    #[must_use]
    pub fn descriptor(&self) -> BlockDescriptor {
        BlockDescriptor {
            size: self.size,
            is_free: self.is_free,
            name: self.name.clone(),
            requested_size: self.requested_size,
        }
    }
}

/// Read-only view of a block, as returned by `FibHeap::list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDescriptor {
    /// Tracked capacity of the block.
    pub size: u64,
    /// Whether the block is free.
    pub is_free: bool,
    /// Owner tag; empty for free blocks.
    pub name: String,
    /// Originally requested size; 0 for free blocks.
    pub requested_size: u64,
}

/// Stable external reference to an allocated block.
///
/// Keyed by the owner name, the externally-visible identity of an
/// allocation, rather than by position, so the handle stays valid
/// across later splits and merges that restructure the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHandle {
    name: String,
    size: u64,
}

impl BlockHandle {
    pub(crate) fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The owner name this handle refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the block at allocation time.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}
