//! Resource route registration after a scaffold.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anvil_schema::RouteConfig;
use eyre::{Result, WrapErr};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::NamingVariables;

/// What [`RouteRegistry::register`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteUpdate {
    Appended,
    AlreadyPresent,
    /// The registry file does not exist; nothing was created.
    NoRegistry,
}

/// The project's route registry file.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    path: PathBuf,
    statement: String,
}

impl RouteRegistry {
    pub fn new(project_dir: &Path, config: &RouteConfig) -> Self {
        Self {
            path: project_dir.join(&config.path),
            statement: config.statement.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The declaration registered for an entity.
    pub fn declaration(&self, naming: &NamingVariables) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.render_str(
            &self.statement,
            context! {
                collection => &naming.collection,
                controller => naming.controller(),
                Entity => &naming.entity,
                Entities => &naming.entities,
                instance => &naming.instance,
            },
        )
        .wrap_err("failed to render route statement")
    }

    /// Append the entity's declaration unless the file already contains it.
    pub fn register(&self, naming: &NamingVariables) -> Result<RouteUpdate> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "no route registry");
            return Ok(RouteUpdate::NoRegistry);
        }

        let declaration = self.declaration(naming)?;
        let contents = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read '{}'", self.path.display()))?;
        if contents.contains(&declaration) {
            return Ok(RouteUpdate::AlreadyPresent);
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .wrap_err_with(|| format!("failed to open '{}'", self.path.display()))?;
        write!(file, "\n\n{declaration}")
            .wrap_err_with(|| format!("failed to append to '{}'", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), %declaration, "registered route");
        Ok(RouteUpdate::Appended)
    }
}
