//! Where field descriptors come from.
//!
//! - [`FieldSource`] - the single strategy chosen for a request
//! - [`DatabaseIntrospector`] / [`ModelIntrospector`] - external providers
//! - [`FieldSourceResolver`] - runs the chosen strategy and yields a [`FieldSet`](anvil_core::FieldSet)

mod provider;
mod resolver;

use std::path::PathBuf;

use anvil_schema::DatabaseConfig;

pub use provider::{DatabaseIntrospector, ModelIntrospector};
pub use resolver::{FieldSourceResolver, find_project_root};

/// The field-source strategy for one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSource {
    /// No fields requested.
    #[default]
    None,
    /// Compact `name:type[:modifier...]` notation.
    Explicit(String),
    /// Introspect a table using the schema's `database` section.
    Database(DatabaseConfig),
    /// Introspect the model at this path.
    Model(PathBuf),
}

impl FieldSource {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSource::None => "none",
            FieldSource::Explicit(_) => "explicit",
            FieldSource::Database(_) => "database",
            FieldSource::Model(_) => "model",
        }
    }
}
