//! Configurable mocks for the write-path collaborator interfaces.
//!
//! Each mock records its calls so tests can assert on invocation and
//! ordering, and exposes async setters to steer results. Writer mocks share
//! a `CallLog` so tests can observe the order of store writes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::interfaces::dedup::{self, DedupChecker, DedupError};
use crate::interfaces::enricher::{self, EnrichError, LocationEnricher};
use crate::interfaces::resolver::{self, PetitionResolver, ResolverError};
use crate::interfaces::signature_store::{
    self, PrimaryStoreWriter, SecondaryStoreWriter, StoreError,
};
use crate::record::{Location, SignatureRecord, UserKey};

/// Shared call-order log appended to by the writer mocks.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, label: &str) {
        self.0.lock().await.push(label.to_string());
    }

    pub async fn calls(&self) -> Vec<String> {
        self.0.lock().await.clone()
    }
}

/// Mock petition resolver.
#[derive(Default)]
pub struct MockPetitionResolver {
    exists: RwLock<bool>,
    translation: RwLock<Option<u64>>,
    fail: RwLock<bool>,
    translation_requests: RwLock<Vec<String>>,
}

impl MockPetitionResolver {
    /// Resolver that knows every petition and has no legacy mappings.
    pub fn new() -> Self {
        Self {
            exists: RwLock::new(true),
            ..Self::default()
        }
    }

    pub async fn set_exists(&self, exists: bool) {
        *self.exists.write().await = exists;
    }

    pub async fn set_translation(&self, native: Option<u64>) {
        *self.translation.write().await = native;
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// Legacy ids passed to `translate_legacy_to_native`.
    pub async fn translation_requests(&self) -> Vec<String> {
        self.translation_requests.read().await.clone()
    }
}

#[async_trait]
impl PetitionResolver for MockPetitionResolver {
    async fn exists(&self, _petition_id: &str) -> resolver::Result<bool> {
        if *self.fail.read().await {
            return Err(ResolverError::Lookup("mock resolver down".to_string()));
        }
        Ok(*self.exists.read().await)
    }

    async fn translate_legacy_to_native(&self, legacy_id: &str) -> resolver::Result<Option<u64>> {
        self.translation_requests
            .write()
            .await
            .push(legacy_id.to_string());
        if *self.fail.read().await {
            return Err(ResolverError::Lookup("mock resolver down".to_string()));
        }
        Ok(*self.translation.read().await)
    }
}

/// Mock duplicate checker.
#[derive(Default)]
pub struct MockDedupChecker {
    exists: RwLock<bool>,
    fail: RwLock<bool>,
    checks: RwLock<Vec<(String, UserKey)>>,
}

impl MockDedupChecker {
    /// Checker that reports no duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_exists(&self, exists: bool) {
        *self.exists.write().await = exists;
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// (petition, user) pairs this checker was queried with.
    pub async fn checks(&self) -> Vec<(String, UserKey)> {
        self.checks.read().await.clone()
    }
}

#[async_trait]
impl DedupChecker for MockDedupChecker {
    async fn exists(&self, petition_id: &str, user: &UserKey) -> dedup::Result<bool> {
        self.checks
            .write()
            .await
            .push((petition_id.to_string(), user.clone()));
        if *self.fail.read().await {
            return Err(DedupError::Query("mock dedup down".to_string()));
        }
        Ok(*self.exists.read().await)
    }
}

/// Mock location enricher.
#[derive(Default)]
pub struct MockLocationEnricher {
    candidates: RwLock<Vec<Location>>,
    fail: RwLock<bool>,
    lookups: RwLock<Vec<String>>,
}

impl MockLocationEnricher {
    /// Enricher that knows no postal codes.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_candidates(&self, candidates: Vec<Location>) {
        *self.candidates.write().await = candidates;
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// Postal codes this enricher was queried with.
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl LocationEnricher for MockLocationEnricher {
    async fn lookup(&self, zip_code: &str) -> enricher::Result<Vec<Location>> {
        self.lookups.write().await.push(zip_code.to_string());
        if *self.fail.read().await {
            return Err(EnrichError::Lookup("mock enricher down".to_string()));
        }
        Ok(self.candidates.read().await.clone())
    }
}

/// Mock secondary store writer.
pub struct MockSecondaryWriter {
    legacy_id: RwLock<String>,
    fail: RwLock<bool>,
    writes: RwLock<Vec<SignatureRecord>>,
    log: CallLog,
}

impl MockSecondaryWriter {
    pub fn new(legacy_id: impl Into<String>, log: CallLog) -> Self {
        Self {
            legacy_id: RwLock::new(legacy_id.into()),
            fail: RwLock::new(false),
            writes: RwLock::new(Vec::new()),
            log,
        }
    }

    pub async fn set_legacy_id(&self, legacy_id: impl Into<String>) {
        *self.legacy_id.write().await = legacy_id.into();
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// Snapshots of every record passed to `write`.
    pub async fn writes(&self) -> Vec<SignatureRecord> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl SecondaryStoreWriter for MockSecondaryWriter {
    async fn write(&self, record: &SignatureRecord) -> signature_store::Result<String> {
        self.log.push("secondary").await;
        self.writes.write().await.push(record.clone());
        if *self.fail.read().await {
            return Err(StoreError::Rejected("mock secondary failure".to_string()));
        }
        Ok(self.legacy_id.read().await.clone())
    }
}

/// Mock primary store writer.
pub struct MockPrimaryWriter {
    id: RwLock<u64>,
    fail: RwLock<bool>,
    writes: RwLock<Vec<SignatureRecord>>,
    log: CallLog,
}

impl MockPrimaryWriter {
    pub fn new(id: u64, log: CallLog) -> Self {
        Self {
            id: RwLock::new(id),
            fail: RwLock::new(false),
            writes: RwLock::new(Vec::new()),
            log,
        }
    }

    pub async fn set_id(&self, id: u64) {
        *self.id.write().await = id;
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// Snapshots of every record passed to `write`.
    pub async fn writes(&self) -> Vec<SignatureRecord> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl PrimaryStoreWriter for MockPrimaryWriter {
    async fn write(&self, record: &SignatureRecord) -> signature_store::Result<u64> {
        self.log.push("primary").await;
        self.writes.write().await.push(record.clone());
        if *self.fail.read().await {
            return Err(StoreError::Rejected("mock primary failure".to_string()));
        }
        Ok(*self.id.read().await)
    }
}
