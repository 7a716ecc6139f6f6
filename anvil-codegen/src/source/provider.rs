use std::path::Path;

use anvil_core::FieldSet;
use anvil_schema::DatabaseConfig;
use eyre::Result;

/// A live data store that can describe an entity's columns.
pub trait DatabaseIntrospector {
    /// Receive connection parameters before [`connect`](Self::connect).
    fn configure(&mut self, config: &DatabaseConfig);

    /// Whether a connection could be established.
    fn connect(&mut self) -> bool;

    /// Describe the columns backing `entity`.
    fn fields(&mut self, entity: &str) -> Result<FieldSet>;
}

/// A model definition in the host project that can describe its fields.
pub trait ModelIntrospector {
    /// Load the model at `path`. `loader` is the project's dependency loader,
    /// already known to exist.
    fn load(&mut self, path: &Path, loader: &Path) -> bool;

    /// Describe the loaded model's fields.
    fn fields(&self) -> Result<FieldSet>;
}
