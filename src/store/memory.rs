//! In-memory signature stores.
//!
//! Standalone backend pair used for local development and tests: no external
//! services, same contracts as the production adapters. The primary store
//! also backs the duplicate check and the read path over its own records.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::interfaces::dedup::{self, DedupChecker};
use crate::interfaces::reader::{Consistency, SignatureReader};
use crate::interfaces::signature_store::{
    self, PrimaryStoreWriter, SecondaryStoreWriter, StoreError,
};
use crate::record::{SignatureRecord, UserKey};

/// In-memory secondary (legacy) store.
///
/// Assigns sequential string identifiers in the legacy scheme.
#[derive(Default)]
pub struct MemorySecondaryStore {
    records: RwLock<HashMap<String, SignatureRecord>>,
    next_id: RwLock<u64>,
}

impl MemorySecondaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records captured.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Fetch a record by its legacy identifier.
    pub async fn get(&self, legacy_id: &str) -> Option<SignatureRecord> {
        self.records.read().await.get(legacy_id).cloned()
    }
}

#[async_trait]
impl SecondaryStoreWriter for MemorySecondaryStore {
    async fn write(&self, record: &SignatureRecord) -> signature_store::Result<String> {
        let mut next = self.next_id.write().await;
        *next += 1;
        let legacy_id = format!("sig-{}", *next);

        let mut stored = record.clone();
        stored.legacy_id = Some(legacy_id.clone());
        self.records.write().await.insert(legacy_id.clone(), stored);
        Ok(legacy_id)
    }
}

/// In-memory primary store.
///
/// Implements the writer, the read path, and the duplicate check over the
/// same record set. Reads are always current here, so both consistency
/// preferences serve identical data.
#[derive(Default)]
pub struct MemoryPrimaryStore {
    records: RwLock<HashMap<u64, SignatureRecord>>,
    next_id: RwLock<u64>,
}

impl MemoryPrimaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records captured.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PrimaryStoreWriter for MemoryPrimaryStore {
    async fn write(&self, record: &SignatureRecord) -> signature_store::Result<u64> {
        let mut next = self.next_id.write().await;
        *next += 1;
        let id = *next;

        let mut stored = record.clone();
        stored.primary_id = Some(id);
        self.records.write().await.insert(id, stored);
        Ok(id)
    }
}

#[async_trait]
impl SignatureReader for MemoryPrimaryStore {
    async fn load(
        &self,
        id: u64,
        _consistency: Consistency,
    ) -> signature_store::Result<SignatureRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn load_many(
        &self,
        ids: &[u64],
        _consistency: Consistency,
    ) -> signature_store::Result<Vec<SignatureRecord>> {
        let records = self.records.read().await;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }
}

#[async_trait]
impl DedupChecker for MemoryPrimaryStore {
    async fn exists(&self, petition_id: &str, user: &UserKey) -> dedup::Result<bool> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .any(|r| r.petition_id == petition_id && r.user_key().as_ref() == Some(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(petition: &str, token: &str) -> SignatureRecord {
        SignatureRecord {
            user_token: Some(token.to_string()),
            ..SignatureRecord::new(petition)
        }
    }

    #[tokio::test]
    async fn test_secondary_store_assigns_sequential_legacy_ids() {
        let store = MemorySecondaryStore::new();

        let first = store.write(&record("P1", "U1")).await.unwrap();
        let second = store.write(&record("P1", "U2")).await.unwrap();

        assert_eq!(first, "sig-1");
        assert_eq!(second, "sig-2");
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_secondary_store_get_returns_stored_record() {
        let store = MemorySecondaryStore::new();

        let legacy_id = store.write(&record("P1", "U1")).await.unwrap();
        let stored = store.get(&legacy_id).await.unwrap();

        assert_eq!(stored.petition_id, "P1");
        assert_eq!(stored.legacy_id, Some(legacy_id));
    }

    #[tokio::test]
    async fn test_primary_store_assigns_sequential_ids() {
        let store = MemoryPrimaryStore::new();

        let first = store.write(&record("P1", "U1")).await.unwrap();
        let second = store.write(&record("P1", "U2")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_load_returns_not_found_for_unknown_id() {
        let store = MemoryPrimaryStore::new();

        let result = store.load(99, Consistency::Realtime).await;

        assert!(matches!(result, Err(StoreError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_load_returns_record_with_primary_id_set() {
        let store = MemoryPrimaryStore::new();

        let id = store.write(&record("P1", "U1")).await.unwrap();
        let loaded = store.load(id, Consistency::Realtime).await.unwrap();

        assert_eq!(loaded.petition_id, "P1");
        assert_eq!(loaded.primary_id, Some(id));
    }

    #[tokio::test]
    async fn test_load_many_skips_unknown_ids_and_keeps_input_order() {
        let store = MemoryPrimaryStore::new();

        let first = store.write(&record("P1", "U1")).await.unwrap();
        let second = store.write(&record("P2", "U2")).await.unwrap();

        let loaded = store
            .load_many(&[second, 99, first], Consistency::Eventual)
            .await
            .unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].petition_id, "P2");
        assert_eq!(loaded[1].petition_id, "P1");
    }

    #[tokio::test]
    async fn test_dedup_matches_on_petition_and_user() {
        let store = MemoryPrimaryStore::new();
        store.write(&record("P1", "U1")).await.unwrap();

        let same_pair = UserKey::Token("U1".to_string());
        let other_user = UserKey::Token("U2".to_string());

        assert!(store.exists("P1", &same_pair).await.unwrap());
        assert!(!store.exists("P1", &other_user).await.unwrap());
        assert!(!store.exists("P2", &same_pair).await.unwrap());
    }

    #[tokio::test]
    async fn test_dedup_matches_user_reference_identity() {
        let store = MemoryPrimaryStore::new();
        let user = uuid::Uuid::new_v4();
        let signed = SignatureRecord {
            user_ref: Some(user),
            ..SignatureRecord::new("P1")
        };
        store.write(&signed).await.unwrap();

        assert!(store.exists("P1", &UserKey::Reference(user)).await.unwrap());
    }
}
