//! List operation - generation targets.

use anvil_schema::{SchemaFile, SettingLookup};

use crate::reports::{GeneratorLine, ListReport};

/// Execute the list operation.
pub fn list(file: &SchemaFile) -> ListReport {
    let schema = file.schema();
    let generators = schema
        .generators()
        .iter()
        .map(|key| GeneratorLine {
            key: key.to_string(),
            status: match schema.config_value(key) {
                SettingLookup::Enabled(setting) => format!(
                    "{} -> {}/{}",
                    setting.template, setting.directory, setting.filename
                ),
                SettingLookup::Disabled => "disabled".to_string(),
                SettingLookup::Incomplete => "incomplete".to_string(),
                SettingLookup::Unknown => "unknown".to_string(),
            },
        })
        .collect();

    ListReport {
        generators,
        aggregates: schema
            .aggregates
            .iter()
            .map(|(name, members)| (name.clone(), members.clone()))
            .collect(),
    }
}
