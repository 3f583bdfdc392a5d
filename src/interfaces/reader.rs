//! Read access through the primary store's query path.

use async_trait::async_trait;

use super::signature_store::Result;
use crate::record::SignatureRecord;

/// Read preference for signature loads.
///
/// The primary store may serve reads from replicas that lag the write path;
/// `Realtime` forces the most recently written data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// Must reflect the most recent writes.
    Realtime,
    /// May tolerate replica staleness.
    Eventual,
}

/// Interface for loading persisted signatures by primary identifier.
#[async_trait]
pub trait SignatureReader: Send + Sync {
    /// Load one signature.
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    async fn load(&self, id: u64, consistency: Consistency) -> Result<SignatureRecord>;

    /// Load several signatures, in input order, skipping unknown ids.
    async fn load_many(&self, ids: &[u64], consistency: Consistency)
        -> Result<Vec<SignatureRecord>>;
}
