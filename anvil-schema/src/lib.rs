// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config_type;
mod database;
mod error;
mod routes;
mod schema;

pub use config_type::ConfigType;
pub use database::DatabaseConfig;
pub use error::{Error, Result};
pub use routes::*;
pub use schema::*;
