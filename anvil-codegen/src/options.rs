//! Generation options and their mutual-exclusion rules.

use std::path::PathBuf;

use anvil_core::Overwrite;
use anvil_schema::GenerationSchema;
use thiserror::Error;

use crate::{GenerateError, source::FieldSource};

/// More than one field source was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionConflict {
    #[error("You cannot specify --fields, --database, and --model. Please use just one.")]
    FieldsDatabaseModel,

    #[error("You cannot specify both --fields and --model. Please use one or the other.")]
    FieldsModel,

    #[error("You cannot specify both --fields and --database. Please use one or the other.")]
    FieldsDatabase,

    #[error("You cannot specify both --database and --model. Please use one or the other.")]
    DatabaseModel,
}

/// Options of one generation request, already parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Compact field notation
    pub fields: Option<String>,
    /// Introspect the database configured in the schema
    pub database: bool,
    /// Introspect this model
    pub model: Option<PathBuf>,
    /// Replace existing files
    pub force: bool,
}

impl GenerateOptions {
    /// Reject requests naming more than one field source.
    pub fn validate(&self) -> Result<(), OptionConflict> {
        match (self.fields.is_some(), self.database, self.model.is_some()) {
            (true, true, true) => Err(OptionConflict::FieldsDatabaseModel),
            (true, false, true) => Err(OptionConflict::FieldsModel),
            (true, true, false) => Err(OptionConflict::FieldsDatabase),
            (false, true, true) => Err(OptionConflict::DatabaseModel),
            _ => Ok(()),
        }
    }

    pub fn overwrite(&self) -> Overwrite {
        if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        }
    }

    /// The field source these options select.
    ///
    /// `--database` takes its connection parameters from the schema's
    /// `database` section, which must be present.
    pub fn field_source(&self, schema: &GenerationSchema) -> Result<FieldSource, GenerateError> {
        if let Some(fields) = &self.fields {
            return Ok(FieldSource::Explicit(fields.clone()));
        }
        if self.database {
            return schema
                .database
                .clone()
                .map(FieldSource::Database)
                .ok_or(GenerateError::FieldSourceMissingConfig);
        }
        if let Some(model) = &self.model {
            return Ok(FieldSource::Model(model.clone()));
        }
        Ok(FieldSource::None)
    }
}

#[cfg(test)]
mod tests {
    use anvil_schema::DatabaseConfig;

    use super::*;

    fn options(fields: bool, database: bool, model: bool) -> GenerateOptions {
        GenerateOptions {
            fields: fields.then(|| "name:string".to_string()),
            database,
            model: model.then(|| PathBuf::from("app/models/Order.php")),
            force: false,
        }
    }

    #[test]
    fn test_conflicts() {
        assert_eq!(
            options(true, true, true).validate(),
            Err(OptionConflict::FieldsDatabaseModel)
        );
        assert_eq!(
            options(true, false, true).validate(),
            Err(OptionConflict::FieldsModel)
        );
        assert_eq!(
            options(true, true, false).validate(),
            Err(OptionConflict::FieldsDatabase)
        );
        assert_eq!(
            options(false, true, true).validate(),
            Err(OptionConflict::DatabaseModel)
        );
        for (f, d, m) in [(false, false, false), (true, false, false), (false, true, false), (false, false, true)] {
            assert!(options(f, d, m).validate().is_ok());
        }
    }

    #[test]
    fn test_conflict_messages() {
        assert_eq!(
            OptionConflict::FieldsDatabaseModel.to_string(),
            "You cannot specify --fields, --database, and --model. Please use just one."
        );
        assert_eq!(
            OptionConflict::FieldsModel.to_string(),
            "You cannot specify both --fields and --model. Please use one or the other."
        );
    }

    #[test]
    fn test_overwrite() {
        assert_eq!(GenerateOptions::default().overwrite(), Overwrite::IfMissing);
        let force = GenerateOptions {
            force: true,
            ..Default::default()
        };
        assert_eq!(force.overwrite(), Overwrite::Always);
    }

    #[test]
    fn test_field_source() {
        let schema = GenerationSchema::default();
        assert_eq!(
            GenerateOptions::default().field_source(&schema).unwrap(),
            FieldSource::None
        );
        assert_eq!(
            options(true, false, false).field_source(&schema).unwrap(),
            FieldSource::Explicit("name:string".into())
        );
        assert_eq!(
            options(false, false, true).field_source(&schema).unwrap(),
            FieldSource::Model(PathBuf::from("app/models/Order.php"))
        );
    }

    #[test]
    fn test_database_requires_section() {
        let err = options(false, true, false)
            .field_source(&GenerationSchema::default())
            .unwrap_err();
        assert!(matches!(err, GenerateError::FieldSourceMissingConfig));

        let db = DatabaseConfig {
            driver: Some("mysql".into()),
            ..Default::default()
        };
        let mut schema = GenerationSchema::default();
        schema.database = Some(db.clone());
        assert_eq!(
            options(false, true, false).field_source(&schema).unwrap(),
            FieldSource::Database(db)
        );
    }
}
