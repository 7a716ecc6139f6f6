//! Orchestration of a generation request.
//!
//! A run goes through option validation, schema validation, an entity name
//! check, field-source resolution and target resolution, then renders every
//! target. Aggregate runs finish by registering the entity's resource route.

use std::path::PathBuf;

use anvil_core::{FieldSet, split_words};
use anvil_schema::{SchemaFile, SettingLookup};
use eyre::Result;

use crate::{
    GenerateError, GenerateOptions, RenderResult, TemplateRenderer,
    report::{DETAILS_HEADING, ERROR_HEADING, HEADING, MessageSink},
    routes::RouteRegistry,
    source::{DatabaseIntrospector, FieldSourceResolver, ModelIntrospector},
};

/// What to generate, and for which entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    /// A generation key or an aggregate name
    pub target: String,
    pub entity: String,
    pub options: GenerateOptions,
}

impl GenerateRequest {
    pub fn new(target: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            entity: entity.into(),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }
}

/// Runs generation requests against one schema and project.
pub struct Delegate<'a> {
    schema: &'a SchemaFile,
    project_dir: PathBuf,
    database: &'a mut dyn DatabaseIntrospector,
    model: &'a mut dyn ModelIntrospector,
    year: Option<i32>,
}

impl<'a> Delegate<'a> {
    pub fn new(
        schema: &'a SchemaFile,
        project_dir: impl Into<PathBuf>,
        database: &'a mut dyn DatabaseIntrospector,
        model: &'a mut dyn ModelIntrospector,
    ) -> Self {
        Self {
            schema,
            project_dir: project_dir.into(),
            database,
            model,
            year: None,
        }
    }

    /// Pin the `year` variable for every render.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Carry out `request`, reporting every outcome to `sink`.
    ///
    /// Returns `Ok(false)` when the request failed and the reason was
    /// reported. Only fatal misconfiguration is returned as an error.
    pub fn run(&mut self, request: &GenerateRequest, sink: &mut dyn MessageSink) -> Result<bool> {
        tracing::debug!(request = %request.target, entity = %request.entity, "generation requested");

        match self.generate(request, sink) {
            Ok(success) => Ok(success),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                sink.error(ERROR_HEADING, &e.to_string());
                if let Some(details) = e.details() {
                    sink.error(DETAILS_HEADING, &details);
                }
                Ok(false)
            }
        }
    }

    /// Valid targets: generation keys, then aggregate names.
    pub fn choices(&self) -> Vec<String> {
        let schema = self.schema.schema();
        schema
            .generators()
            .iter()
            .map(|key| key.to_string())
            .chain(schema.available_aggregates().into_iter().map(String::from))
            .collect()
    }

    fn generate(
        &mut self,
        request: &GenerateRequest,
        sink: &mut dyn MessageSink,
    ) -> Result<bool, GenerateError> {
        request.options.validate()?;

        let schema = self.schema.schema();
        if !schema.validate() {
            for issue in schema.issues() {
                tracing::debug!(%issue, "schema issue");
            }
            return Err(GenerateError::ConfigInvalid);
        }

        if split_words(&request.entity).is_empty() {
            return Err(GenerateError::InvalidEntity {
                entity: request.entity.clone(),
            });
        }

        let source = request.options.field_source(schema)?;
        let fields = FieldSourceResolver::new(&mut *self.database, &mut *self.model)
            .with_loader(schema.model_loader.clone())
            .resolve(&source, &request.entity)?;

        let mut renderer = TemplateRenderer::new(&self.project_dir, self.schema.directory())
            .with_overwrite(request.options.overwrite());
        if let Some(year) = self.year {
            renderer = renderer.with_year(year);
        }

        match schema.aggregate_values(&request.target) {
            Some(members) => {
                self.generate_aggregate(&renderer, members, request, &fields, sink);
                Ok(true)
            }
            None => self.generate_single(&renderer, request, &fields, sink),
        }
    }

    fn generate_single(
        &self,
        renderer: &TemplateRenderer,
        request: &GenerateRequest,
        fields: &FieldSet,
        sink: &mut dyn MessageSink,
    ) -> Result<bool, GenerateError> {
        match self.schema.schema().config_value(&request.target) {
            SettingLookup::Enabled(setting) => {
                let result = renderer.render_setting(&request.entity, &setting, fields);
                Ok(report_render(sink, &result, None))
            }
            SettingLookup::Disabled => {
                report_skip(sink, &request.target);
                Ok(true)
            }
            SettingLookup::Unknown => Err(GenerateError::UnknownTarget {
                target: request.target.clone(),
                choices: self.choices(),
            }),
            SettingLookup::Incomplete => Err(GenerateError::ConfigInvalid),
        }
    }

    /// Members are attempted independently; a failed member does not stop
    /// the rest.
    fn generate_aggregate(
        &self,
        renderer: &TemplateRenderer,
        members: &[String],
        request: &GenerateRequest,
        fields: &FieldSet,
        sink: &mut dyn MessageSink,
    ) {
        let schema = self.schema.schema();
        for key in members {
            match schema.config_value(key) {
                SettingLookup::Disabled => report_skip(sink, key),
                SettingLookup::Enabled(setting) => {
                    let result = renderer.render_setting(&request.entity, &setting, fields);
                    report_render(sink, &result, Some(key));
                }
                SettingLookup::Unknown | SettingLookup::Incomplete => {
                    tracing::debug!(%key, "aggregate member has no usable setting");
                    report_render(sink, &RenderResult::default(), Some(key));
                }
            }
        }

        let naming = renderer.naming(&request.entity);
        let registry = RouteRegistry::new(&self.project_dir, &schema.routes);
        match registry.register(&naming) {
            Ok(update) => tracing::debug!(?update, path = %registry.path().display(), "route registry"),
            Err(e) => tracing::warn!(error = ?e, "failed to update the route registry"),
        }
    }
}

fn report_skip(sink: &mut dyn MessageSink, key: &str) {
    sink.info(&format!("I skipped \"{key}\""));
}

fn report_render(sink: &mut dyn MessageSink, result: &RenderResult, target: Option<&str>) -> bool {
    match &result.destination {
        Some(destination) if result.success => {
            sink.info(&format!(
                "Success, I generated the code for you in {}",
                destination.display()
            ));
            true
        }
        _ => {
            let failure = GenerateError::RenderFailed {
                target: target.map(String::from),
            };
            sink.message(HEADING, &failure.to_string(), true);
            false
        }
    }
}
