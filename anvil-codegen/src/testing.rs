//! Test utilities for the generation pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anvil_core::FieldSet;
use anvil_schema::DatabaseConfig;
use eyre::{Result, WrapErr, eyre};
use tempfile::TempDir;

use crate::{
    report::{Message, MessageSink},
    source::{DatabaseIntrospector, ModelIntrospector},
};

/// Database introspector with canned answers that records what it was asked.
#[derive(Debug, Default)]
pub struct FakeDatabase {
    pub can_connect: bool,
    pub fields: FieldSet,
    pub configured: Option<DatabaseConfig>,
    pub requested: Option<String>,
}

impl FakeDatabase {
    /// A database that connects and reports `fields` for any entity.
    pub fn connected(fields: FieldSet) -> Self {
        Self {
            can_connect: true,
            fields,
            ..Default::default()
        }
    }
}

impl DatabaseIntrospector for FakeDatabase {
    fn configure(&mut self, config: &DatabaseConfig) {
        self.configured = Some(config.clone());
    }

    fn connect(&mut self) -> bool {
        self.can_connect
    }

    fn fields(&mut self, entity: &str) -> Result<FieldSet> {
        self.requested = Some(entity.to_string());
        Ok(self.fields.clone())
    }
}

/// Model introspector that loads only when it has fields to report.
#[derive(Debug, Default)]
pub struct FakeModel {
    pub fields: Option<FieldSet>,
    pub loaded_from: Option<PathBuf>,
    pub loader: Option<PathBuf>,
}

impl FakeModel {
    pub fn loaded(fields: FieldSet) -> Self {
        Self {
            fields: Some(fields),
            ..Default::default()
        }
    }
}

impl ModelIntrospector for FakeModel {
    fn load(&mut self, path: &Path, loader: &Path) -> bool {
        if self.fields.is_none() {
            return false;
        }
        self.loaded_from = Some(path.to_path_buf());
        self.loader = Some(loader.to_path_buf());
        true
    }

    fn fields(&self) -> Result<FieldSet> {
        self.fields.clone().ok_or_else(|| eyre!("no model loaded"))
    }
}

/// Message sink that keeps every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: Vec<Message>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.message.as_str()).collect()
    }

    pub fn errors(&self) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.is_error).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.is_error)
    }
}

impl MessageSink for RecordingSink {
    fn message(&mut self, heading: &str, message: &str, is_error: bool) {
        self.messages.push(Message::new(heading, message, is_error));
    }
}

/// A throwaway project directory with a schema and templates.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().wrap_err("failed to create fixture directory")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.dir.path().join(relative);
        fs::read_to_string(&path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.dir.path().join(relative).exists()
    }

    /// Write a template for every key of `keys` under `templates/<key>.txt`
    /// whose body names the key and the entity.
    pub fn write_templates(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.write(
                format!("templates/{key}.txt"),
                &format!("{key}: {{{{ Entity }}}}\n"),
            )?;
        }
        Ok(())
    }

    /// Write a JSON schema of `config_type` with one entry per
    /// `(key, value)`; keys of the type that are not listed get a complete
    /// setting writing `out/<key>/{{ Entity }}.txt`.
    pub fn write_schema(&self, config_type: &str, entries: &[(&str, &str)]) -> Result<PathBuf> {
        let keys = anvil_schema::GenerationSchema::available_generators(config_type)
            .unwrap_or_default();
        let mut body = vec![format!(r#""config_type": "{config_type}""#)];
        for key in keys {
            if entries.iter().any(|(k, _)| k == key) {
                continue;
            }
            body.push(format!(
                r#""{key}": {{ "template": "templates/{key}.txt", "directory": "out/{key}", "filename": "{{{{ Entity }}}}.txt" }}"#
            ));
        }
        for (key, value) in entries {
            body.push(format!(r#""{key}": {value}"#));
        }
        self.write("anvil.json", &format!("{{\n  {}\n}}\n", body.join(",\n  ")))
    }
}
