//! The generation schema document.

mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
use serde::Deserialize;

pub use file::SchemaFile;
pub use parse::{SchemaFormat, parse_str};
pub use validate::SchemaIssue;

use crate::{ConfigType, DatabaseConfig, ModelLoaderConfig, RouteConfig};

/// Sub-setting holding the template path.
pub const TEMPLATE: &str = "template";
/// Sub-setting holding the destination directory.
pub const DIRECTORY: &str = "directory";
/// Sub-setting holding the destination filename.
pub const FILENAME: &str = "filename";

/// Root of a generation schema document.
///
/// Every top-level key that is not one of the named sections is a
/// generation key mapping to a setting object or `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationSchema {
    #[serde(default)]
    pub config_type: Option<String>,

    /// Aggregate name -> ordered generation keys. Filled from the config
    /// type's defaults when the document declares none.
    #[serde(default)]
    pub aggregates: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub routes: RouteConfig,

    #[serde(default)]
    pub model_loader: ModelLoaderConfig,

    #[serde(flatten)]
    pub generators: IndexMap<String, GeneratorEntry>,
}

/// The value of a generation key as written in the document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeneratorEntry {
    /// `false` disables the key; `true` is not meaningful and fails validation.
    Toggle(bool),
    Setting(RawSetting),
    Other(serde_json::Value),
}

impl GeneratorEntry {
    pub fn is_disabled(&self) -> bool {
        matches!(self, GeneratorEntry::Toggle(false))
    }
}

/// A setting object whose sub-settings may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawSetting {
    pub template: Option<String>,
    pub directory: Option<String>,
    pub filename: Option<String>,
}

impl RawSetting {
    /// Names of the required sub-settings that are absent.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.template.is_none() {
            missing.push(TEMPLATE);
        }
        if self.directory.is_none() {
            missing.push(DIRECTORY);
        }
        if self.filename.is_none() {
            missing.push(FILENAME);
        }
        missing
    }

    fn complete(&self) -> Option<GeneratorSetting> {
        Some(GeneratorSetting {
            template: self.template.clone()?,
            directory: self.directory.clone()?,
            filename: self.filename.clone()?,
        })
    }
}

/// A complete generation target: which template to render and where.
///
/// `directory` and `filename` may contain the same tokens as templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSetting {
    pub template: String,
    pub directory: String,
    pub filename: String,
}

/// Outcome of looking up a generation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingLookup {
    Enabled(GeneratorSetting),
    /// The key is set to `false` and must be skipped.
    Disabled,
    /// The key is not defined for the schema's config type.
    Unknown,
    /// The key is known but absent or missing sub-settings.
    Incomplete,
}

impl GenerationSchema {
    /// Parse a JSON document.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(content).map(Self::with_defaults)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(content).map(Self::with_defaults)
    }

    fn with_defaults(mut self) -> Self {
        if self.aggregates.is_empty() {
            if let Some(config_type) = self.config_type() {
                self.aggregates = config_type
                    .default_aggregates()
                    .iter()
                    .map(|(name, keys)| {
                        (name.to_string(), keys.iter().map(|k| k.to_string()).collect())
                    })
                    .collect();
            }
        }
        self
    }

    /// The declared type, if present and registered.
    pub fn config_type(&self) -> Option<ConfigType> {
        self.config_type.as_deref().and_then(ConfigType::from_name)
    }

    /// Generation keys for a config type name, or `None` for unknown types.
    pub fn available_generators(config_type: &str) -> Option<&'static [&'static str]> {
        ConfigType::from_name(config_type).map(|t| t.required_keys())
    }

    /// Generation keys for this schema's own type; empty when the type is unknown.
    pub fn generators(&self) -> &'static [&'static str] {
        self.config_type().map(|t| t.required_keys()).unwrap_or(&[])
    }

    /// Members of an aggregate, in declared order.
    pub fn aggregate_values(&self, name: &str) -> Option<&[String]> {
        self.aggregates.get(name).map(Vec::as_slice)
    }

    /// Names of all aggregates, in declared order.
    pub fn available_aggregates(&self) -> Vec<&str> {
        self.aggregates.keys().map(String::as_str).collect()
    }

    /// Look up a generation key's setting.
    pub fn config_value(&self, key: &str) -> SettingLookup {
        let known = self.config_type().is_some_and(|t| t.has_key(key));
        if !known {
            return SettingLookup::Unknown;
        }

        match self.generators.get(key) {
            Some(GeneratorEntry::Toggle(false)) => SettingLookup::Disabled,
            Some(GeneratorEntry::Setting(raw)) => raw
                .complete()
                .map_or(SettingLookup::Incomplete, SettingLookup::Enabled),
            _ => SettingLookup::Incomplete,
        }
    }
}
