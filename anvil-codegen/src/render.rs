//! Template rendering and non-destructive file output.

use std::path::{Path, PathBuf};

use anvil_core::{FieldDescriptor, FieldSet, File, Overwrite, ensure_dir};
use anvil_schema::GeneratorSetting;
use eyre::{Result, WrapErr};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::NamingVariables;

/// Outcome of one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderResult {
    pub success: bool,
    /// Where the file was written; `None` on failure.
    pub destination: Option<PathBuf>,
}

impl RenderResult {
    fn written(destination: PathBuf) -> Self {
        Self {
            success: true,
            destination: Some(destination),
        }
    }

    fn failed() -> Self {
        Self::default()
    }
}

/// Everything a template (or a directory/filename pattern) can reference.
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    naming: &'a NamingVariables,
    fields: Vec<&'a FieldDescriptor>,
    /// Field names, for table headers.
    headings: Vec<&'a str>,
    /// `instance.field` accessors, for table rows.
    cells: Vec<String>,
}

impl<'a> TemplateContext<'a> {
    fn new(naming: &'a NamingVariables, fields: &'a FieldSet) -> Self {
        Self {
            naming,
            fields: fields.iter().collect(),
            headings: fields.names().collect(),
            cells: fields
                .names()
                .map(|name| format!("{}.{}", naming.instance, name))
                .collect(),
        }
    }
}

/// Renders templates into a project directory.
///
/// Template paths resolve against `template_dir`; destination directories
/// resolve against `project_dir`.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    project_dir: PathBuf,
    template_dir: PathBuf,
    overwrite: Overwrite,
    year: Option<i32>,
}

impl TemplateRenderer {
    pub fn new(project_dir: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            template_dir: template_dir.into(),
            overwrite: Overwrite::default(),
            year: None,
        }
    }

    /// Replace existing files instead of failing on them.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Pin the `year` variable.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Naming variables as this renderer computes them for `entity`.
    pub fn naming(&self, entity: &str) -> NamingVariables {
        let naming = NamingVariables::new(entity);
        match self.year {
            Some(year) => naming.with_year(year),
            None => naming,
        }
    }

    /// Render a schema setting for `entity`.
    pub fn render_setting(
        &self,
        entity: &str,
        setting: &GeneratorSetting,
        fields: &FieldSet,
    ) -> RenderResult {
        self.render(
            entity,
            Path::new(&setting.template),
            &setting.directory,
            Some(&setting.filename),
            fields,
        )
    }

    /// Render `template` for `entity` into `directory`/`filename`.
    ///
    /// Without a filename the destination is `{Entity}.<template extension>`.
    /// An existing destination, an unreadable template or a template error
    /// all yield a failed result; nothing is written in those cases.
    pub fn render(
        &self,
        entity: &str,
        template: &Path,
        directory: &str,
        filename: Option<&str>,
        fields: &FieldSet,
    ) -> RenderResult {
        match self.try_render(entity, template, directory, filename, fields) {
            Ok(Some(destination)) => RenderResult::written(destination),
            Ok(None) => RenderResult::failed(),
            Err(e) => {
                tracing::debug!(template = %template.display(), error = ?e, "render failed");
                RenderResult::failed()
            }
        }
    }

    fn try_render(
        &self,
        entity: &str,
        template: &Path,
        directory: &str,
        filename: Option<&str>,
        fields: &FieldSet,
    ) -> Result<Option<PathBuf>> {
        let naming = self.naming(entity);
        eyre::ensure!(!naming.entity.is_empty(), "entity name '{entity}' has no words");
        let context = TemplateContext::new(&naming, fields);
        let env = environment();

        let filename = match filename {
            Some(pattern) => render_str(&env, pattern, &context)?,
            None => default_filename(&naming, template),
        };
        let directory = self.project_dir.join(render_str(&env, directory, &context)?);
        ensure_dir(&directory)?;

        let destination = directory.join(filename);
        if self.overwrite == Overwrite::IfMissing && destination.exists() {
            tracing::debug!(destination = %destination.display(), "destination exists");
            return Ok(None);
        }

        let template_path = self.template_dir.join(template);
        let source = std::fs::read_to_string(&template_path)
            .wrap_err_with(|| format!("failed to read template '{}'", template_path.display()))?;
        let content = render_str(&env, &source, &context)?;

        let written = File::new(&destination, content)
            .with_overwrite(self.overwrite)
            .write()?;
        if !written.is_written() {
            return Ok(None);
        }

        tracing::debug!(destination = %destination.display(), "rendered template");
        Ok(Some(destination))
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

fn render_str(env: &Environment<'_>, source: &str, context: &TemplateContext<'_>) -> Result<String> {
    env.render_str(source, context)
        .wrap_err("failed to render template")
}

fn default_filename(naming: &NamingVariables, template: &Path) -> String {
    match template.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", naming.entity, ext),
        None => naming.entity.clone(),
    }
}
