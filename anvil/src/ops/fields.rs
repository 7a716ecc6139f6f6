//! Fields operation - compact notation preview.

use anvil_core::{FieldSet, FieldSpecError};

use crate::reports::FieldsReport;

/// Parse a compact field list and write it back normalized.
pub fn fields(spec: &str) -> Result<FieldsReport, FieldSpecError> {
    let set = FieldSet::parse(spec)?;
    Ok(FieldsReport {
        compact: set.to_compact_string(),
        fields: set.iter().cloned().collect(),
    })
}
