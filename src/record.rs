//! Signature record and supporting value types.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One user's endorsement of a petition.
///
/// Constructed by the caller with at least `petition_id` and one of
/// `user_ref`/`user_token`. The write path fills in `city`/`state`/`country`
/// via enrichment and `legacy_id`/`primary_id` as each backing store accepts
/// the record; a missing id after a save means that store did not capture it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureRecord {
    /// Petition being signed, in either the legacy or the native scheme.
    pub petition_id: String,
    /// Full user reference.
    pub user_ref: Option<Uuid>,
    /// Raw unique-user token for signers without a full reference.
    pub user_token: Option<String>,
    /// Submitter address, kept for audit in the secondary store.
    pub ip_address: Option<IpAddr>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    /// Assigned by the secondary store on a successful write.
    pub legacy_id: Option<String>,
    /// Assigned by the primary store on a successful write.
    pub primary_id: Option<u64>,
    /// Submission time as reported by the caller; passed through untouched.
    pub submitted_at: Option<DateTime<Utc>>,
}

impl SignatureRecord {
    /// Create a record for a petition with no user identity attached yet.
    pub fn new(petition_id: impl Into<String>) -> Self {
        Self {
            petition_id: petition_id.into(),
            ..Self::default()
        }
    }

    /// The identity used for duplicate detection.
    ///
    /// A full user reference wins over a raw token when both are present.
    pub fn user_key(&self) -> Option<UserKey> {
        if let Some(user) = self.user_ref {
            return Some(UserKey::Reference(user));
        }
        self.user_token.clone().map(UserKey::Token)
    }

    /// True when all three of city/state/country are set.
    pub fn has_location(&self) -> bool {
        self.city.is_some() && self.state.is_some() && self.country.is_some()
    }
}

/// Dedup identity for a signer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserKey {
    /// Full user reference.
    Reference(Uuid),
    /// Raw unique-user token.
    Token(String),
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Reference(user) => write!(f, "user:{user}"),
            UserKey::Token(token) => write!(f, "token:{token}"),
        }
    }
}

/// One location candidate from a zip-code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_prefers_reference_over_token() {
        let user = Uuid::new_v4();
        let record = SignatureRecord {
            user_ref: Some(user),
            user_token: Some("tok-1".to_string()),
            ..SignatureRecord::new("P1")
        };

        assert_eq!(record.user_key(), Some(UserKey::Reference(user)));
    }

    #[test]
    fn test_user_key_falls_back_to_token() {
        let record = SignatureRecord {
            user_token: Some("tok-1".to_string()),
            ..SignatureRecord::new("P1")
        };

        assert_eq!(
            record.user_key(),
            Some(UserKey::Token("tok-1".to_string()))
        );
    }

    #[test]
    fn test_user_key_none_without_identity() {
        assert_eq!(SignatureRecord::new("P1").user_key(), None);
    }

    #[test]
    fn test_has_location_requires_all_three_fields() {
        let mut record = SignatureRecord::new("P1");
        assert!(!record.has_location());

        record.city = Some("Springfield".to_string());
        record.state = Some("IL".to_string());
        assert!(!record.has_location());

        record.country = Some("US".to_string());
        assert!(record.has_location());
    }
}
