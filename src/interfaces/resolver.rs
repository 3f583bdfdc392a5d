//! Petition resolution interface.

use async_trait::async_trait;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Errors from the petition backend.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Petition lookup failed: {0}")]
    Lookup(String),
}

/// Interface for confirming petitions and translating between the two
/// identity schemes.
///
/// The translation path is only exercised when primary-store reads operate
/// against the legacy scheme; callers treat a missing or zero native id as
/// "no mapping" and keep the identifier they already have.
#[async_trait]
pub trait PetitionResolver: Send + Sync {
    /// True when the petition exists.
    async fn exists(&self, petition_id: &str) -> Result<bool>;

    /// Translate a legacy petition identifier into the native scheme.
    ///
    /// Returns `None` when no mapping exists.
    async fn translate_legacy_to_native(&self, legacy_id: &str) -> Result<Option<u64>>;
}
