//! Field descriptors and the compact `name:type[:modifier...]` notation.
//!
//! ```
//! use anvil_core::FieldSet;
//!
//! let fields = FieldSet::parse("name:string:unique, age:integer:nullable").unwrap();
//! assert_eq!(fields.len(), 2);
//! assert!(!fields.get("age").unwrap().required);
//! assert_eq!(fields.to_compact_string(), "name:string:unique, age:integer:nullable");
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Modifier that clears `required`.
pub const NULLABLE: &str = "nullable";
/// Modifier that clears `writable`.
pub const READONLY: &str = "readonly";
/// Modifier that clears `readable`.
pub const WRITEONLY: &str = "writeonly";
/// Canonical tag for date-time types.
pub const TIMESTAMP: &str = "timestamp";

/// Spellings normalized to [`TIMESTAMP`], compared lowercase without a
/// leading namespace separator.
const TEMPORAL_TYPES: &[&str] = &[
    "timestamp",
    "timestamptz",
    "datetime",
    "datetimetz",
    "date_time",
    "datetimeinterface",
    "datetimeimmutable",
    "carbon",
    "carbon\\carbon",
    "illuminate\\support\\carbon",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldSpecError {
    #[error("field '{0}' has no type, expected 'name:type'")]
    MissingType(String),

    #[error("field entry '{0}' has an empty name")]
    EmptyName(String),

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

/// Normalized metadata for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub readable: bool,
    pub writable: bool,
    /// Modifiers without a meaning of their own (e.g. `unique`), kept for templates.
    pub decorators: Vec<String>,
}

impl FieldDescriptor {
    /// A required, readable and writable field of the given type.
    pub fn new(name: impl Into<String>, ty: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            ty: normalize_type(ty.as_ref()),
            required: true,
            readable: true,
            writable: true,
            decorators: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_access(mut self, readable: bool, writable: bool) -> Self {
        self.readable = readable;
        self.writable = writable;
        self
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    /// Parse a single `name:type[:modifier...]` token.
    pub fn parse(token: &str) -> Result<Self, FieldSpecError> {
        let mut parts = token.split(':').map(str::trim);
        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(FieldSpecError::EmptyName(token.trim().to_string()));
        }

        let ty = match parts.next() {
            Some(ty) if !ty.is_empty() => ty,
            _ => return Err(FieldSpecError::MissingType(name.to_string())),
        };

        let mut field = Self::new(name, ty);
        for modifier in parts.filter(|m| !m.is_empty()) {
            match modifier {
                NULLABLE => field.required = false,
                READONLY => field.writable = false,
                WRITEONLY => field.readable = false,
                other => field.decorators.push(other.to_string()),
            }
        }
        Ok(field)
    }

    /// Render this descriptor in compact notation.
    ///
    /// Decorators come first, access modifiers next and `nullable` last.
    pub fn to_compact(&self) -> String {
        let mut out = format!("{}:{}", self.name, normalize_type(&self.ty));
        for decorator in &self.decorators {
            out.push(':');
            out.push_str(decorator);
        }
        if !self.writable {
            out.push(':');
            out.push_str(READONLY);
        }
        if !self.readable {
            out.push(':');
            out.push_str(WRITEONLY);
        }
        if !self.required {
            out.push(':');
            out.push_str(NULLABLE);
        }
        out
    }
}

/// Canonicalize a type tag: temporal spellings become [`TIMESTAMP`].
pub fn normalize_type(ty: &str) -> String {
    let trimmed = ty.trim();
    let key = trimmed.trim_start_matches('\\').to_ascii_lowercase();
    if TEMPORAL_TYPES.contains(&key.as_str()) {
        TIMESTAMP.to_string()
    } else {
        trimmed.to_string()
    }
}

/// An ordered set of fields keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: IndexMap<String, FieldDescriptor>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse comma-separated compact notation. Blank entries are ignored.
    pub fn parse(spec: &str) -> Result<Self, FieldSpecError> {
        let mut set = Self::new();
        for token in spec.split(',').filter(|t| !t.trim().is_empty()) {
            set.try_insert(FieldDescriptor::parse(token)?)?;
        }
        Ok(set)
    }

    /// Render in compact notation, in insertion order, joined by `", "`.
    pub fn to_compact_string(&self) -> String {
        self.fields
            .values()
            .map(FieldDescriptor::to_compact)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Insert a field, rejecting a name that is already present.
    pub fn try_insert(&mut self, field: FieldDescriptor) -> Result<(), FieldSpecError> {
        if self.fields.contains_key(&field.name) {
            return Err(FieldSpecError::DuplicateField(field.name));
        }
        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    /// Insert a field, replacing any previous field with the same name.
    pub fn insert(&mut self, field: FieldDescriptor) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut set = Self::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let fields = FieldSet::parse("name:string").unwrap();
        let name = fields.get("name").unwrap();
        assert_eq!(name.ty, "string");
        assert!(name.required);
        assert!(name.readable);
        assert!(name.writable);
        assert!(name.decorators.is_empty());
    }

    #[test]
    fn test_parse_modifiers() {
        let fields = FieldSet::parse("name:string:unique, age:integer:nullable").unwrap();

        let name = fields.get("name").unwrap();
        assert!(name.required);
        assert_eq!(name.decorators, vec!["unique"]);

        let age = fields.get("age").unwrap();
        assert!(!age.required);
        assert!(age.decorators.is_empty());
    }

    #[test]
    fn test_parse_preserves_order_and_trims() {
        let fields = FieldSet::parse("  title : string ,body:text,, published_at:datetime:nullable ,")
            .unwrap();
        assert_eq!(
            fields.names().collect::<Vec<_>>(),
            vec!["title", "body", "published_at"]
        );
        assert_eq!(fields.get("published_at").unwrap().ty, TIMESTAMP);
    }

    #[test]
    fn test_parse_empty() {
        assert!(FieldSet::parse("").unwrap().is_empty());
        assert!(FieldSet::parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            FieldSet::parse("name"),
            Err(FieldSpecError::MissingType("name".to_string()))
        );
        assert_eq!(
            FieldSet::parse("name:"),
            Err(FieldSpecError::MissingType("name".to_string()))
        );
        assert_eq!(
            FieldSet::parse(":string"),
            Err(FieldSpecError::EmptyName(":string".to_string()))
        );
        assert_eq!(
            FieldSet::parse("a:string, a:integer"),
            Err(FieldSpecError::DuplicateField("a".to_string()))
        );
    }

    #[test]
    fn test_to_compact_string() {
        let fields: FieldSet = [
            FieldDescriptor::new("name", "string").nullable(),
            FieldDescriptor::new("subdomain", "string"),
            FieldDescriptor::new("created_at", "\\Carbon\\Carbon"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            fields.to_compact_string(),
            "name:string:nullable, subdomain:string, created_at:timestamp"
        );
    }

    #[test]
    fn test_compact_canonicalizes_unnormalized_type() {
        let mut field = FieldDescriptor::new("at", "string");
        field.ty = "DateTime".to_string();
        assert_eq!(field.to_compact(), "at:timestamp");
    }

    #[test]
    fn test_round_trip() {
        let fields: FieldSet = [
            FieldDescriptor::new("name", "string").nullable(),
            FieldDescriptor::new("created_at", "timestamp"),
            FieldDescriptor::new("slug", "string").with_decorator("unique"),
            FieldDescriptor::new("token", "string").with_access(false, true),
            FieldDescriptor::new("views", "integer").with_access(true, false).nullable(),
        ]
        .into_iter()
        .collect();

        let compact = fields.to_compact_string();
        assert_eq!(FieldSet::parse(&compact).unwrap(), fields);
    }

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("\\Carbon\\Carbon"), "timestamp");
        assert_eq!(normalize_type("DateTime"), "timestamp");
        assert_eq!(normalize_type("timestamp"), "timestamp");
        assert_eq!(normalize_type("date"), "date");
        assert_eq!(normalize_type(" string "), "string");
    }
}
