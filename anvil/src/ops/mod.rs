//! Core operations.
//!
//! This module contains the business logic for anvil commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod fields;
pub mod list;

pub use check::check;
pub use fields::fields;
pub use list::list;
