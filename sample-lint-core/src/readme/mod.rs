//! README parsing
//!
//! Parsing happens in two steps. [`ReadmeDocument`] splits the markdown into
//! a head block and level-2 sections and never fails; [`ParsedReadme`]
//! extracts typed fields from it and fails when a required block is absent.
//! The format checks work from the document alone, so a README that cannot
//! be fully extracted still gets every style violation reported.

pub mod document;
pub mod parsed;

pub use document::{API_SECTION, ReadmeDocument, Section, TAGS_SECTION};
pub use parsed::ParsedReadme;
