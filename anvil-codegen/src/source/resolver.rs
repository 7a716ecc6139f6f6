use std::path::{Path, PathBuf};

use anvil_core::{FieldDescriptor, FieldSet, normalize_type};
use anvil_schema::ModelLoaderConfig;

use super::{DatabaseIntrospector, FieldSource, ModelIntrospector};
use crate::GenerateError;

/// Find the nearest ancestor of `path` that contains a `marker` directory.
///
/// The search starts at the directory holding `path` and stops at the
/// filesystem root.
pub fn find_project_root(path: &Path, marker: &str) -> Option<PathBuf> {
    path.parent()?
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

/// Runs exactly one field-source strategy per request.
pub struct FieldSourceResolver<'a> {
    database: &'a mut dyn DatabaseIntrospector,
    model: &'a mut dyn ModelIntrospector,
    loader: ModelLoaderConfig,
}

impl<'a> FieldSourceResolver<'a> {
    pub fn new(
        database: &'a mut dyn DatabaseIntrospector,
        model: &'a mut dyn ModelIntrospector,
    ) -> Self {
        Self {
            database,
            model,
            loader: ModelLoaderConfig::default(),
        }
    }

    /// Use a non-default project marker and loader file.
    pub fn with_loader(mut self, loader: ModelLoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    /// Produce the field set for `entity` from `source`.
    ///
    /// [`FieldSource::None`] yields an empty set.
    pub fn resolve(&mut self, source: &FieldSource, entity: &str) -> Result<FieldSet, GenerateError> {
        tracing::debug!(source = source.kind(), entity, "resolving field source");

        match source {
            FieldSource::None => Ok(FieldSet::new()),
            FieldSource::Explicit(spec) => Ok(FieldSet::parse(spec)?),
            FieldSource::Database(config) => {
                tracing::trace!(?config, "configuring database introspector");
                self.database.configure(config);
                if !self.database.connect() {
                    return Err(GenerateError::FieldSourceConnectFailed);
                }
                self.database.fields(entity).map_err(|e| {
                    tracing::debug!(error = %e, "database introspection failed");
                    GenerateError::FieldSourceConnectFailed
                })
            }
            FieldSource::Model(path) => {
                let loader = self.loader_path(path)?;
                if !self.model.load(path, &loader) {
                    return Err(GenerateError::FieldSourceIntrospectionFailed);
                }
                let fields = self.model.fields().map_err(|e| {
                    tracing::debug!(error = %e, "model introspection failed");
                    GenerateError::FieldSourceIntrospectionFailed
                })?;
                Ok(fields.iter().cloned().map(normalized).collect())
            }
        }
    }

    fn loader_path(&self, model: &Path) -> Result<PathBuf, GenerateError> {
        let root = match find_project_root(model, &self.loader.marker) {
            Some(root) => root,
            None => {
                tracing::warn!(
                    model = %model.display(),
                    marker = %self.loader.marker,
                    "no project root found, looking for the loader next to the model"
                );
                model.parent().map(Path::to_path_buf).unwrap_or_default()
            }
        };
        let loader = root.join(&self.loader.loader);
        tracing::debug!(loader = %loader.display(), "located model loader");

        if loader.is_file() {
            Ok(loader)
        } else {
            Err(GenerateError::FieldSourceLoaderMissing { path: loader })
        }
    }
}

/// Provider descriptors are trusted; only the type tag is canonicalized.
fn normalized(mut field: FieldDescriptor) -> FieldDescriptor {
    field.ty = normalize_type(&field.ty);
    field
}
