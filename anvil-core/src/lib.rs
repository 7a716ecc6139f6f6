//! Core utilities and types for the Anvil scaffolding engine.
//!
//! This crate provides fundamental types used across the Anvil
//! workspace: file writing with overwrite rules, ASCII casing and
//! pluralization, and field descriptors with their compact notation.

mod case;
mod field;
mod file;
mod inflect;

// String utilities
pub use case::{split_words, to_snake_case, to_studly_case, upper_first};
// Field descriptors
pub use field::{
    FieldDescriptor, FieldSet, FieldSpecError, NULLABLE, READONLY, TIMESTAMP, WRITEONLY,
    normalize_type,
};
// File operations
pub use file::{File, Overwrite, WriteResult, ensure_dir};
pub use inflect::{pluralize, singularize};
