//! Core functionality for sample-lint
//!
//! This crate checks one sample folder at a time: it derives the metadata a
//! README and its folder layout imply, compares it with the stored
//! `README.metadata.json`, and enforces the README style rules.

pub mod category;
pub mod checker;
pub mod config;
pub mod error;
pub mod format;
pub mod metadata;
pub mod normalize;
pub mod paths;
pub mod readme;


pub use checker::{MetadataChecker, ReadmeChecker};
pub use config::{CheckerConfig, HeadingRules};
pub use error::{CheckError, Result};
pub use format::{CheckOutcome, FormatCheck, FormatReport};
pub use metadata::{MetadataRecord, StoredMetadata};
pub use readme::{ParsedReadme, ReadmeDocument};
