//! Store implementations.

pub mod memory;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use memory::{MemoryPrimaryStore, MemorySecondaryStore};
