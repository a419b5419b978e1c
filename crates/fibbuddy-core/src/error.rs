//! Typed errors for heap operations.
//!
//! Every variant is an ordinary recoverable outcome for callers to
//! branch on, never fatal to the process.

use crate::constants::MAX_NAME_LEN;

/// Error type for allocation requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The owner name exceeds the maximum length.
    #[error("name exceeds {MAX_NAME_LEN} bytes")]
    NameTooLong,

    /// A live allocation already carries this name.
    #[error("duplicate name '{0}'")]
    DuplicateName(String),

    /// No free block can satisfy the request, even after coalescing.
    #[error("no suitable free block, even after coalescing")]
    OutOfMemory,
}

/// Error type for free requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreeError {
    /// No allocated block carries this name.
    #[error("no allocated block named '{0}'")]
    BlockNotFound(String),
}
