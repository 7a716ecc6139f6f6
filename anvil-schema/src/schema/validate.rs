//! Structural validation of a generation schema.

use std::fmt;

use super::{GenerationSchema, GeneratorEntry};
use crate::ConfigType;

/// A reason a schema is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    MissingConfigType,
    UnknownConfigType(String),
    MissingKey(String),
    /// The value is neither `false` nor a setting object.
    InvalidEntry(String),
    MissingSetting {
        key: String,
        setting: &'static str,
    },
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::MissingConfigType => write!(f, "'config_type' is missing"),
            SchemaIssue::UnknownConfigType(name) => {
                let known: Vec<_> = ConfigType::ALL.iter().map(ConfigType::as_str).collect();
                write!(
                    f,
                    "config type '{}' is not supported (expected one of: {})",
                    name,
                    known.join(", ")
                )
            }
            SchemaIssue::MissingKey(key) => write!(f, "generation key '{}' is missing", key),
            SchemaIssue::InvalidEntry(key) => {
                write!(f, "'{}' must be a setting object or false", key)
            }
            SchemaIssue::MissingSetting { key, setting } => {
                write!(f, "'{}' is missing '{}'", key, setting)
            }
        }
    }
}

impl GenerationSchema {
    /// Whether every generation key required by the config type is present
    /// and either `false` or a complete setting.
    pub fn validate(&self) -> bool {
        self.issues().is_empty()
    }

    /// Every problem that makes [`validate`](Self::validate) fail, in
    /// declared key order.
    pub fn issues(&self) -> Vec<SchemaIssue> {
        let Some(name) = self.config_type.as_deref() else {
            return vec![SchemaIssue::MissingConfigType];
        };
        let Some(config_type) = ConfigType::from_name(name) else {
            return vec![SchemaIssue::UnknownConfigType(name.to_string())];
        };

        let mut issues = Vec::new();
        for key in config_type.required_keys() {
            match self.generators.get(*key) {
                None => issues.push(SchemaIssue::MissingKey(key.to_string())),
                Some(GeneratorEntry::Toggle(false)) => {}
                Some(GeneratorEntry::Setting(raw)) => {
                    issues.extend(raw.missing().into_iter().map(|setting| {
                        SchemaIssue::MissingSetting {
                            key: key.to_string(),
                            setting,
                        }
                    }));
                }
                Some(_) => issues.push(SchemaIssue::InvalidEntry(key.to_string())),
            }
        }

        tracing::debug!(
            config_type = %config_type,
            issues = issues.len(),
            "validated generation schema"
        );
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tests::hexagonal_json;

    fn parse(json: &str) -> GenerationSchema {
        GenerationSchema::from_json(json).expect("schema should parse")
    }

    #[test]
    fn test_valid_schema() {
        let schema = parse(&hexagonal_json(&[]));
        assert!(schema.validate());
        assert!(schema.issues().is_empty());
    }

    #[test]
    fn test_missing_config_type() {
        let json = hexagonal_json(&[]).replace(r#""config_type": "hexagonal", "#, "");
        let schema = parse(&json);
        assert!(!schema.validate());
        assert_eq!(schema.issues(), vec![SchemaIssue::MissingConfigType]);
    }

    #[test]
    fn test_unknown_config_type() {
        let json = hexagonal_json(&[]).replace("\"hexagonal\"", "\"layered\"");
        let schema = parse(&json);
        assert!(!schema.validate());
        assert_eq!(
            schema.issues(),
            vec![SchemaIssue::UnknownConfigType("layered".to_string())]
        );
    }

    #[test]
    fn test_disabled_key_is_satisfied() {
        let schema = parse(&hexagonal_json(&[("view_show", "false")]));
        assert!(schema.validate());
    }

    #[test]
    fn test_true_is_not_a_setting() {
        let schema = parse(&hexagonal_json(&[("view_show", "true")]));
        assert_eq!(
            schema.issues(),
            vec![SchemaIssue::InvalidEntry("view_show".to_string())]
        );
    }

    #[test]
    fn test_missing_required_key() {
        let schema = parse(r#"{ "config_type": "hexagonal" }"#);
        assert!(!schema.validate());
        let issues = schema.issues();
        assert_eq!(issues.len(), 20);
        assert_eq!(issues[0], SchemaIssue::MissingKey("model".to_string()));
    }

    #[test]
    fn test_missing_each_sub_setting() {
        for (value, missing) in [
            (r#"{ "directory": "d", "filename": "f" }"#, "template"),
            (r#"{ "template": "t", "filename": "f" }"#, "directory"),
            (r#"{ "template": "t", "directory": "d" }"#, "filename"),
        ] {
            let schema = parse(&hexagonal_json(&[("controller", value)]));
            assert!(!schema.validate(), "missing {missing} should be invalid");
            assert_eq!(
                schema.issues(),
                vec![SchemaIssue::MissingSetting {
                    key: "controller".to_string(),
                    setting: missing,
                }]
            );
        }
    }

    #[test]
    fn test_non_object_entry() {
        let schema = parse(&hexagonal_json(&[("seed", r#""seed.txt""#)]));
        assert_eq!(
            schema.issues(),
            vec![SchemaIssue::InvalidEntry("seed".to_string())]
        );
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            SchemaIssue::MissingSetting {
                key: "model".to_string(),
                setting: "filename",
            }
            .to_string(),
            "'model' is missing 'filename'"
        );
        assert!(
            SchemaIssue::UnknownConfigType("x".to_string())
                .to_string()
                .contains("hexagonal")
        );
    }
}
