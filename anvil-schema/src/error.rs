use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for anvil-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("schema file '{path}' could not be found")]
    #[diagnostic(
        code(anvil::schema_not_found),
        help("pass an existing file with --config, or omit it to use the built-in schema")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(anvil::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(anvil::parse_error))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a JSON error with source context
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = json_offset(src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::ParseJson {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a parse error from a TOML error with source context
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }
}

/// Convert serde_json's one-based line/column into a byte offset.
fn json_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
