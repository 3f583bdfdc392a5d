//! Store writer interfaces for the two signature backends.

use async_trait::async_trait;

use crate::record::SignatureRecord;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from either backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Signature not found: id={0}")]
    NotFound(u64),

    #[error("Store rejected record: {0}")]
    Rejected(String),

    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Writer for the secondary (legacy) store.
///
/// When both stores are enabled the secondary write runs first: the primary
/// write path may depend on the legacy identifier assigned here, or on the
/// legacy-to-native petition id translation this store's records back.
///
/// Implementations:
/// - `MemorySecondaryStore`: in-memory standalone backend
/// - `MockSecondaryWriter`: configurable mock for testing
#[async_trait]
pub trait SecondaryStoreWriter: Send + Sync {
    /// Persist the record, returning the store-assigned legacy identifier.
    async fn write(&self, record: &SignatureRecord) -> Result<String>;
}

/// Writer for the primary store.
///
/// Implementations:
/// - `MemoryPrimaryStore`: in-memory standalone backend
/// - `MockPrimaryWriter`: configurable mock for testing
#[async_trait]
pub trait PrimaryStoreWriter: Send + Sync {
    /// Persist the record, returning the store-assigned identifier.
    async fn write(&self, record: &SignatureRecord) -> Result<u64>;
}
