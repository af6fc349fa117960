//! Strict textual comparison of derived and stored metadata

use similar::TextDiff;

use crate::error::{CheckError, Result};
use crate::metadata::record::MetadataRecord;
use crate::metadata::stored::StoredMetadata;

/// Require the canonical record text to equal the canonical stored text
pub fn compare(record: &MetadataRecord, stored: &StoredMetadata) -> Result<()> {
    let expected = record.flush_to_json_string()?;
    let actual = stored.to_canonical_json()?;
    if expected == actual {
        return Ok(());
    }
    Err(CheckError::MetadataMismatch {
        path: record.folder_path().to_string(),
        diff: unified_diff(&expected, &actual),
    })
}

/// Unified line diff of expected vs actual
pub fn unified_diff(expected: &str, actual: &str) -> String {
    // Terminate both sides so a differing last line is not reported as a
    // missing newline.
    let expected = format!("{expected}\n");
    let actual = format!("{actual}\n");
    TextDiff::from_lines(&expected, &actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}
