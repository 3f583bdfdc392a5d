//! Abstract interfaces for the signature write and read paths.
//!
//! These traits define the contracts for:
//! - Duplicate detection (dedup precondition)
//! - Petition resolution (existence + identity-scheme translation)
//! - Location enrichment (zip-code lookup)
//! - Store writers (secondary/legacy and primary backends)
//! - Read access (primary-store query path)

pub mod dedup;
pub mod enricher;
pub mod reader;
pub mod resolver;
pub mod signature_store;

pub use dedup::{DedupChecker, DedupError};
pub use enricher::{EnrichError, LocationEnricher};
pub use reader::{Consistency, SignatureReader};
pub use resolver::{PetitionResolver, ResolverError};
pub use signature_store::{PrimaryStoreWriter, SecondaryStoreWriter, StoreError};
