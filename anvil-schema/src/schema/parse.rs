use std::path::Path;

use super::GenerationSchema;
use crate::{Error, Result};

/// Document syntax of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SchemaFormat::Toml,
            _ => SchemaFormat::Json,
        }
    }
}

/// Parse a schema document, attaching the source to any error.
pub fn parse_str(content: &str, format: SchemaFormat, filename: &str) -> Result<GenerationSchema> {
    match format {
        SchemaFormat::Json => {
            GenerationSchema::from_json(content).map_err(|e| Error::json(e, content, filename))
        }
        SchemaFormat::Toml => {
            GenerationSchema::from_toml(content).map_err(|e| Error::toml(e, content, filename))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SchemaFormat::from_path(Path::new("anvil.toml")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("a/b/ANVIL.TOML")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("config.json")), SchemaFormat::Json);
        assert_eq!(SchemaFormat::from_path(Path::new("config")), SchemaFormat::Json);
    }

    #[test]
    fn test_parse_error_variants() {
        let err = parse_str("{ nope", SchemaFormat::Json, "config.json").unwrap_err();
        assert!(matches!(*err, Error::ParseJson { .. }));
        assert_eq!(err.to_string(), "failed to parse config.json");

        let err = parse_str("= nope", SchemaFormat::Toml, "anvil.toml").unwrap_err();
        assert!(matches!(*err, Error::ParseToml { .. }));
    }

    #[test]
    fn test_config_type_must_be_a_string() {
        assert!(parse_str(r#"{ "config_type": 3 }"#, SchemaFormat::Json, "c.json").is_err());
    }
}
