//! Field source providers built into the binary.

use std::path::Path;

use anvil_codegen::source::{DatabaseIntrospector, ModelIntrospector};
use anvil_core::{FieldDescriptor, FieldSet};
use anvil_schema::DatabaseConfig;
use eyre::{Result, WrapErr, eyre};
use indexmap::IndexMap;
use serde::Deserialize;

/// Database introspector for builds without a database driver.
///
/// It accepts the connection parameters but never connects.
#[derive(Debug, Default)]
pub struct NoDriverDatabase {
    driver: Option<String>,
}

impl DatabaseIntrospector for NoDriverDatabase {
    fn configure(&mut self, config: &DatabaseConfig) {
        self.driver = config.driver.clone();
    }

    fn connect(&mut self) -> bool {
        tracing::warn!(
            driver = self.driver.as_deref().unwrap_or("unspecified"),
            "no database driver is available in this build"
        );
        false
    }

    fn fields(&mut self, entity: &str) -> Result<FieldSet> {
        Err(eyre!("cannot introspect '{}' without a database driver", entity))
    }
}

/// A declarative model description.
///
/// ```toml
/// [fields]
/// name = "string"
/// created_at = { type = "datetime", required = false }
/// ```
#[derive(Debug, Deserialize)]
struct ModelDocument {
    fields: IndexMap<String, ModelField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModelField {
    Type(String),
    Detailed {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default = "yes")]
        required: bool,
        #[serde(default = "yes")]
        readable: bool,
        #[serde(default = "yes")]
        writable: bool,
        #[serde(default)]
        decorators: Vec<String>,
    },
}

fn yes() -> bool {
    true
}

impl ModelField {
    fn into_descriptor(self, name: String) -> FieldDescriptor {
        match self {
            ModelField::Type(ty) => FieldDescriptor::new(name, ty),
            ModelField::Detailed {
                ty,
                required,
                readable,
                writable,
                decorators,
            } => {
                let mut field = FieldDescriptor::new(name, ty).with_access(readable, writable);
                field.required = required;
                field.decorators = decorators;
                field
            }
        }
    }
}

/// Model introspector reading `.json` or `.toml` model descriptions.
#[derive(Debug, Default)]
pub struct ModelFile {
    fields: Option<FieldSet>,
}

impl ModelFile {
    fn read(path: &Path) -> Result<FieldSet> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read model '{}'", path.display()))?;
        let document: ModelDocument = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).wrap_err("invalid TOML model")?,
            _ => serde_json::from_str(&content).wrap_err("invalid JSON model")?,
        };

        let mut fields = FieldSet::new();
        for (name, field) in document.fields {
            fields.try_insert(field.into_descriptor(name))?;
        }
        Ok(fields)
    }
}

impl ModelIntrospector for ModelFile {
    fn load(&mut self, path: &Path, loader: &Path) -> bool {
        tracing::debug!(model = %path.display(), loader = %loader.display(), "loading model");
        match Self::read(path) {
            Ok(fields) => {
                self.fields = Some(fields);
                true
            }
            Err(e) => {
                tracing::debug!(error = ?e, "model could not be loaded");
                false
            }
        }
    }

    fn fields(&self) -> Result<FieldSet> {
        self.fields.clone().ok_or_else(|| eyre!("no model has been loaded"))
    }
}

#[cfg(test)]
mod tests {
    use anvil_codegen::{
        Delegate, GenerateOptions, GenerateRequest,
        testing::{ProjectFixture, RecordingSink},
    };
    use anvil_schema::SchemaFile;

    use super::*;

    #[test]
    fn test_no_driver_never_connects() {
        let mut db = NoDriverDatabase::default();
        db.configure(&DatabaseConfig {
            driver: Some("mysql".into()),
            ..Default::default()
        });
        assert!(!db.connect());
        assert!(db.fields("orders").is_err());
    }

    #[test]
    fn test_model_file_toml() {
        let fixture = ProjectFixture::new().unwrap();
        let path = fixture
            .write(
                "models/order.toml",
                r#"
[fields]
name = "string"
paid_at = { type = "datetime", required = false }
secret = { type = "string", readable = false, decorators = ["hidden"] }
"#,
            )
            .unwrap();

        let mut model = ModelFile::default();
        assert!(model.load(&path, Path::new("vendor/autoload.php")));
        assert_eq!(
            model.fields().unwrap().to_compact_string(),
            "name:string, paid_at:timestamp:nullable, secret:string:hidden:writeonly"
        );
    }

    #[test]
    fn test_model_file_json() {
        let fixture = ProjectFixture::new().unwrap();
        let path = fixture
            .write("order.json", r#"{ "fields": { "total": "decimal", "id": "integer" } }"#)
            .unwrap();

        let mut model = ModelFile::default();
        assert!(model.load(&path, Path::new("vendor/autoload.php")));
        let fields = model.fields().unwrap();
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["total", "id"]);
    }

    #[test]
    fn test_model_file_invalid() {
        let fixture = ProjectFixture::new().unwrap();
        let path = fixture.write("order.json", r#"{ "columns": [] }"#).unwrap();

        let mut model = ModelFile::default();
        assert!(!model.load(&path, Path::new("vendor/autoload.php")));
        assert!(!model.load(&fixture.path().join("missing.json"), Path::new("x")));
        assert!(model.fields().is_err());
    }

    #[test]
    fn test_scaffold_from_model_file() {
        let fixture = ProjectFixture::new().unwrap();
        fixture.write("vendor/autoload.php", "<?php\n").unwrap();
        fixture.write("app/routes.php", "<?php").unwrap();
        fixture
            .write_schema("hexagonal", &[("aggregates", r#"{ "api": ["model", "controller"] }"#)])
            .unwrap();
        fixture
            .write(
                "templates/model.txt",
                "{% for field in fields %}{{ field.name }}{% if not field.required %}?{% endif %} {% endfor %}\n",
            )
            .unwrap();
        fixture
            .write("templates/controller.txt", "{{ Entities }}Controller\n")
            .unwrap();
        let model_path = fixture
            .write(
                "app/models/Invoice.toml",
                "[fields]\nnumber = \"string\"\nissued_at = { type = \"\\\\Carbon\\\\Carbon\", required = false }\n",
            )
            .unwrap();

        let schema = SchemaFile::open(fixture.path().join("anvil.json")).unwrap();
        let (mut db, mut model) = (NoDriverDatabase::default(), ModelFile::default());
        let mut sink = RecordingSink::new();
        let request = GenerateRequest::new("api", "invoice").with_options(GenerateOptions {
            model: Some(model_path),
            ..Default::default()
        });

        let ok = Delegate::new(&schema, fixture.path(), &mut db, &mut model)
            .run(&request, &mut sink)
            .unwrap();

        assert!(ok);
        assert!(!sink.has_errors(), "{:?}", sink.messages);
        assert_eq!(
            fixture.read("out/model/Invoice.txt").unwrap(),
            "number issued_at? \n"
        );
        assert_eq!(
            fixture.read("out/controller/Invoice.txt").unwrap(),
            "InvoicesController\n"
        );
        assert_eq!(
            fixture.read("app/routes.php").unwrap(),
            "<?php\n\nRoute::resource('invoices', 'InvoicesController');"
        );
    }

    #[test]
    fn test_database_option_reports_connect_failure() {
        let fixture = ProjectFixture::new().unwrap();
        fixture
            .write_schema("hexagonal", &[("database", r#"{ "type": "pgsql" }"#)])
            .unwrap();
        let schema = SchemaFile::open(fixture.path().join("anvil.json")).unwrap();
        let (mut db, mut model) = (NoDriverDatabase::default(), ModelFile::default());
        let mut sink = RecordingSink::new();
        let request = GenerateRequest::new("model", "order").with_options(GenerateOptions {
            database: true,
            ..Default::default()
        });

        let ok = Delegate::new(&schema, fixture.path(), &mut db, &mut model)
            .run(&request, &mut sink)
            .unwrap();

        assert!(!ok);
        assert_eq!(
            sink.texts(),
            vec!["The field mapper cannot connect to the database."]
        );
    }
}
