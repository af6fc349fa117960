//! Metadata derivation and drift detection
//!
//! A record is built in two phases. [`MetadataBuilder`] collects what the
//! README and the folder layout say; [`DerivedMetadata::reconcile`] takes the
//! stored pass-through fields and applies the two leniency rules, producing
//! an immutable [`MetadataRecord`]. The comparison itself is strict text
//! equality of the canonical serializations.

pub mod canonical;
pub mod compare;
pub mod record;
pub mod stored;

pub use canonical::to_canonical_json;
pub use compare::{compare, unified_diff};
pub use record::{DerivedMetadata, MetadataBuilder, MetadataRecord, Override};
pub use stored::StoredMetadata;
