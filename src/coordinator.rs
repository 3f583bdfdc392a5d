//! Dual-store write coordinator.
//!
//! Orchestrates validation, the dedup precondition, location enrichment,
//! and the ordered two-store write for signature records.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::interfaces::{
    DedupChecker, DedupError, LocationEnricher, PetitionResolver, PrimaryStoreWriter,
    ResolverError, SecondaryStoreWriter,
};
use crate::record::{SignatureRecord, UserKey};

/// Result type for save operations.
pub type Result<T> = std::result::Result<T, SaveError>;

/// Hard errors from `WriteCoordinator::save`.
///
/// Validation variants signal a caller mistake. Lookup variants surface a
/// failed precondition read (resolver or dedup backend). Both occur strictly
/// before any write is attempted, so a hard error means no side effects.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Record has no petition id")]
    MissingPetitionId,

    #[error("Record has neither a user reference nor a user token")]
    MissingUserIdentity,

    #[error("Petition resolution failed: {0}")]
    Resolver(#[from] ResolverError),

    #[error("Duplicate check failed: {0}")]
    Dedup(#[from] DedupError),
}

/// Business outcome of a save.
///
/// The rejection variants are normal control flow, not faults: nothing was
/// written and nothing should be reported as a system error.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The record passed all preconditions and each enabled store was
    /// attempted. Presence of `legacy_id`/`primary_id` on the returned
    /// record tells the caller which stores actually captured it.
    Saved(SignatureRecord),
    /// The referenced petition does not exist.
    PetitionNotFound,
    /// A signature for this (petition, user) pair already exists.
    Duplicate,
}

/// Which store writes run, fixed at construction time.
#[derive(Debug, Clone, Copy)]
pub struct WriteToggles {
    /// Attempt the secondary (legacy) store write.
    pub secondary_writes: bool,
    /// Attempt the primary store write.
    pub primary_writes: bool,
    /// Primary-store petition reads use the legacy identity scheme, so the
    /// petition id is translated to the native scheme before the primary
    /// write when a mapping exists.
    pub primary_reads_use_legacy_ids: bool,
}

impl Default for WriteToggles {
    fn default() -> Self {
        Self {
            secondary_writes: true,
            primary_writes: true,
            primary_reads_use_legacy_ids: false,
        }
    }
}

/// Coordinates the ordered two-store write for signature records.
///
/// Stateless; one instance is safe to share across concurrent `save` calls
/// for independent records. The dedup check is a point-in-time read with no
/// lock held through the writes, so two concurrent saves for the same
/// (petition, user) pair can both pass it and persist two records. Closing
/// that race belongs in the primary store as a uniqueness constraint, not
/// here.
pub struct WriteCoordinator {
    resolver: Arc<dyn PetitionResolver>,
    dedup: Arc<dyn DedupChecker>,
    enricher: Arc<dyn LocationEnricher>,
    secondary: Arc<dyn SecondaryStoreWriter>,
    primary: Arc<dyn PrimaryStoreWriter>,
    toggles: WriteToggles,
}

impl WriteCoordinator {
    /// Create a coordinator over the given collaborators.
    pub fn new(
        resolver: Arc<dyn PetitionResolver>,
        dedup: Arc<dyn DedupChecker>,
        enricher: Arc<dyn LocationEnricher>,
        secondary: Arc<dyn SecondaryStoreWriter>,
        primary: Arc<dyn PrimaryStoreWriter>,
        toggles: WriteToggles,
    ) -> Self {
        Self {
            resolver,
            dedup,
            enricher,
            secondary,
            primary,
            toggles,
        }
    }

    /// Validate, check preconditions, enrich, and write to each enabled
    /// store in order (secondary first, then primary).
    ///
    /// Store write failures are logged and do not fail the save; the
    /// corresponding id field on the returned record stays `None`. The
    /// overall durability policy is best-effort per store, not
    /// all-or-nothing.
    pub async fn save(&self, record: SignatureRecord) -> Result<SaveOutcome> {
        if record.petition_id.is_empty() {
            return Err(SaveError::MissingPetitionId);
        }
        let user = record.user_key().ok_or(SaveError::MissingUserIdentity)?;

        if !self.resolver.exists(&record.petition_id).await? {
            return Ok(SaveOutcome::PetitionNotFound);
        }

        if self.dedup.exists(&record.petition_id, &user).await? {
            return Ok(SaveOutcome::Duplicate);
        }

        let record = self.enrich(record).await;
        let record = self.write_secondary(record, &user).await;
        let record = self.write_primary(record, &user).await;

        Ok(SaveOutcome::Saved(record))
    }

    /// Fill city/state/country from the zip code when any of them is
    /// missing. First candidate wins; a failed or empty lookup leaves the
    /// record as supplied.
    async fn enrich(&self, mut record: SignatureRecord) -> SignatureRecord {
        if record.has_location() {
            return record;
        }
        let Some(zip) = record.zip_code.clone() else {
            return record;
        };
        match self.enricher.lookup(&zip).await {
            Ok(candidates) => {
                if let Some(location) = candidates.into_iter().next() {
                    record.city = Some(location.city);
                    record.state = Some(location.state);
                    record.country = Some(location.country);
                }
            }
            Err(e) => {
                debug!(zip = %zip, error = %e, "Location lookup failed, leaving record as supplied");
            }
        }
        record
    }

    /// Attempt the secondary store write, attaching the assigned legacy id.
    async fn write_secondary(
        &self,
        mut record: SignatureRecord,
        user: &UserKey,
    ) -> SignatureRecord {
        if !self.toggles.secondary_writes {
            return record;
        }
        match self.secondary.write(&record).await {
            Ok(legacy_id) => {
                record.legacy_id = Some(legacy_id);
            }
            Err(e) => {
                warn!(
                    petition = %record.petition_id,
                    user = %user,
                    ip = ?record.ip_address,
                    error = %e,
                    "Secondary store write failed, continuing without legacy id"
                );
            }
        }
        record
    }

    /// Attempt the primary store write, attaching the assigned id.
    ///
    /// When primary reads go through the legacy identity scheme, the
    /// petition id is first translated to the native scheme.
    async fn write_primary(&self, mut record: SignatureRecord, user: &UserKey) -> SignatureRecord {
        if !self.toggles.primary_writes {
            return record;
        }
        if self.toggles.primary_reads_use_legacy_ids {
            record = self.translate_petition_id(record).await;
        }
        match self.primary.write(&record).await {
            Ok(id) => {
                record.primary_id = Some(id);
            }
            Err(e) => {
                warn!(
                    petition = %record.petition_id,
                    user = %user,
                    legacy_id = ?record.legacy_id,
                    error = %e,
                    "Primary store write failed, continuing without primary id"
                );
            }
        }
        record
    }

    /// Overwrite the petition id with its native-scheme translation.
    ///
    /// A missing mapping, a zero native id, or a resolver failure leaves
    /// the supplied id in place.
    async fn translate_petition_id(&self, mut record: SignatureRecord) -> SignatureRecord {
        match self
            .resolver
            .translate_legacy_to_native(&record.petition_id)
            .await
        {
            Ok(Some(native)) if native != 0 => {
                record.petition_id = native.to_string();
            }
            Ok(_) => {}
            Err(e) => {
                debug!(
                    petition = %record.petition_id,
                    error = %e,
                    "Legacy petition id translation failed, keeping supplied id"
                );
            }
        }
        record
    }
}
