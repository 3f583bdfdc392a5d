//! Duplicate-signature check interface.

use async_trait::async_trait;

use crate::record::UserKey;

/// Result type for dedup operations.
pub type Result<T> = std::result::Result<T, DedupError>;

/// Errors from the duplicate check backend.
#[derive(Debug, thiserror::Error)]
pub enum DedupError {
    #[error("Dedup query failed: {0}")]
    Query(String),
}

/// Interface for detecting an existing signature for a (petition, user) pair.
///
/// The check is a point-in-time read treated as authoritative; the
/// coordinator holds no lock across the check and the subsequent writes,
/// so two concurrent saves for the same pair can both observe `false`
/// (see `WriteCoordinator`).
///
/// Implementations:
/// - `MemoryPrimaryStore`: scan over in-memory records
/// - `MockDedupChecker`: configurable mock for testing
#[async_trait]
pub trait DedupChecker: Send + Sync {
    /// True when a signature already exists for this petition and user.
    async fn exists(&self, petition_id: &str, user: &UserKey) -> Result<bool>;
}
