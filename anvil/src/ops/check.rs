//! Check operation - schema validation.

use anvil_schema::{SchemaFile, SettingLookup};

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(file: &SchemaFile) -> CheckReport {
    let schema = file.schema();
    let disabled = schema
        .generators()
        .iter()
        .filter(|key| schema.config_value(key) == SettingLookup::Disabled)
        .map(|key| key.to_string())
        .collect();

    CheckReport {
        config_name: file.name(),
        config_type: schema.config_type.clone(),
        issues: schema.issues().iter().map(ToString::to_string).collect(),
        generators: schema.generators().len(),
        disabled,
        aggregates: schema
            .aggregates
            .iter()
            .map(|(name, members)| (name.clone(), members.len()))
            .collect(),
    }
}
