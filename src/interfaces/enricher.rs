//! Zip-code location enrichment interface.

use async_trait::async_trait;

use crate::record::Location;

/// Result type for enrichment lookups.
pub type Result<T> = std::result::Result<T, EnrichError>;

/// Errors from the location backend.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Location lookup failed: {0}")]
    Lookup(String),
}

/// Interface for resolving a postal code to candidate locations.
///
/// Enrichment is best-effort: the write path takes the first candidate when
/// any are returned and carries on untouched when the lookup fails or comes
/// back empty.
#[async_trait]
pub trait LocationEnricher: Send + Sync {
    /// Candidate locations for a postal code, best match first.
    async fn lookup(&self, zip_code: &str) -> Result<Vec<Location>>;
}
