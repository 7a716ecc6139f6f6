//! Registry of schema types and the generation keys each one requires.

use std::{fmt, str::FromStr};

const HEXAGONAL_KEYS: &[&str] = &[
    "model",
    "controller",
    "seed",
    "migration_create",
    "view_create",
    "view_edit",
    "view_show",
    "view_index",
    "form",
    "unit_test",
    "functional_test",
    "service_creator",
    "service_creator_test",
    "service_updater",
    "service_updater_test",
    "service_destroyer",
    "service_destroyer_test",
    "validator",
    "repository_interface",
    "db_repository",
];

const HEXAGONAL_AGGREGATES: &[(&str, &[&str])] = &[("scaffold", HEXAGONAL_KEYS)];

/// The `config_type` discriminator of a generation schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigType {
    Hexagonal,
}

impl ConfigType {
    /// Every registered type.
    pub const ALL: &'static [ConfigType] = &[ConfigType::Hexagonal];

    /// Look up a type by its document name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Hexagonal => "hexagonal",
        }
    }

    /// Generation keys a schema of this type must declare, in declared order.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            ConfigType::Hexagonal => HEXAGONAL_KEYS,
        }
    }

    /// Aggregates used when the document does not declare its own.
    pub fn default_aggregates(&self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            ConfigType::Hexagonal => HEXAGONAL_AGGREGATES,
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.required_keys().contains(&key)
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(ConfigType::as_str).collect();
            format!("unknown config type '{}', expected one of: {}", s, known.join(", "))
        })
    }
}
