use std::path::{Path, PathBuf};

use super::{GenerationSchema, SchemaFormat, parse_str};
use crate::{Error, Result};

/// The hexagonal schema shipped with the binary.
const BUILTIN_SCHEMA: &str = include_str!("../../defaults/hexagonal.json");

/// A loaded schema document together with where it came from.
///
/// Template paths inside the schema resolve against [`directory`](Self::directory).
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: Option<PathBuf>,
    directory: PathBuf,
    schema: GenerationSchema,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Box::new(Error::NotFound { path }));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let schema = parse_str(&content, SchemaFormat::from_path(&path), &filename)?;
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(path = %path.display(), "loaded generation schema");

        Ok(Self {
            path: Some(path),
            directory,
            schema,
        })
    }

    /// Load the built-in hexagonal schema; its templates resolve against `base`.
    pub fn builtin(base: impl Into<PathBuf>) -> Result<Self> {
        let schema = parse_str(BUILTIN_SCHEMA, SchemaFormat::Json, "built-in schema")?;
        Ok(Self {
            path: None,
            directory: base.into(),
            schema,
        })
    }

    /// Open `path` when given, otherwise fall back to the built-in schema.
    pub fn open_or_builtin(path: Option<&Path>, base: impl Into<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Self::builtin(base),
        }
    }

    /// The file path, or `None` for the built-in schema.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Display name for messages.
    pub fn name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in schema".to_string())
    }

    /// Directory template paths resolve against.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &GenerationSchema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::SettingLookup;

    #[test]
    fn test_builtin_is_valid() {
        let file = SchemaFile::builtin("/project").unwrap();
        assert!(file.schema().validate(), "{:?}", file.schema().issues());
        assert_eq!(file.directory(), Path::new("/project"));
        assert!(file.path().is_none());
        assert_eq!(file.name(), "built-in schema");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SchemaFile::open(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::NotFound { .. }));
    }

    #[test]
    fn test_open_toml_resolves_templates_next_to_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("anvil.toml");
        fs::write(
            &path,
            r#"
config_type = "hexagonal"

[model]
template = "templates/model.txt"
directory = "app/models"
filename = "{{ Entity }}.php"
"#,
        )
        .unwrap();

        let file = SchemaFile::open(&path).unwrap();
        assert_eq!(file.directory(), temp.path());
        assert_eq!(file.path(), Some(path.as_path()));
        assert!(matches!(
            file.schema().config_value("model"),
            SettingLookup::Enabled(_)
        ));
    }

    #[test]
    fn test_open_or_builtin() {
        let file = SchemaFile::open_or_builtin(None, ".").unwrap();
        assert!(file.path().is_none());
    }
}
