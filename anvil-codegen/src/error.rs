use std::path::PathBuf;

use anvil_core::FieldSpecError;
use thiserror::Error;

use crate::options::OptionConflict;

/// Why a generation request could not be carried out.
///
/// Every variant except [`FieldSourceLoaderMissing`](Self::FieldSourceLoaderMissing)
/// is reported to the user and turned into a failed run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("The loaded configuration file is invalid")]
    ConfigInvalid,

    #[error(transparent)]
    OptionConflict(#[from] OptionConflict),

    #[error("Database config is missing from the config file.")]
    FieldSourceMissingConfig,

    #[error("The field mapper cannot connect to the database.")]
    FieldSourceConnectFailed,

    #[error("Failed to locate the autoloader [{}]", .path.display())]
    FieldSourceLoaderMissing { path: PathBuf },

    #[error("The model for the field mapper could not be loaded.")]
    FieldSourceIntrospectionFailed,

    #[error("\"{entity}\" is not a valid entity name")]
    InvalidEntity { entity: String },

    #[error("{target} is not a valid option")]
    UnknownTarget { target: String, choices: Vec<String> },

    #[error(
        "An unknown error occurred, nothing was generated{}",
        .target.as_deref().map(|t| format!(" for {t}")).unwrap_or_default()
    )]
    RenderFailed { target: Option<String> },

    #[error(transparent)]
    InvalidFieldSpec(#[from] FieldSpecError),
}

impl GenerateError {
    /// Whether the run must abort instead of reporting and returning `false`.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GenerateError::FieldSourceLoaderMissing { .. })
    }

    /// Follow-up detail line, if the error has one.
    pub fn details(&self) -> Option<String> {
        match self {
            GenerateError::UnknownTarget { choices, .. } => {
                Some(format!("Please choose from: {}", choices.join(", ")))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loader_missing_is_fatal() {
        let fatal = GenerateError::FieldSourceLoaderMissing {
            path: PathBuf::from("/app/vendor/autoload.php"),
        };
        assert!(fatal.is_fatal());
        assert_eq!(
            fatal.to_string(),
            "Failed to locate the autoloader [/app/vendor/autoload.php]"
        );

        assert!(!GenerateError::ConfigInvalid.is_fatal());
        assert!(!GenerateError::FieldSourceConnectFailed.is_fatal());
        assert!(!GenerateError::RenderFailed { target: None }.is_fatal());
    }

    #[test]
    fn test_render_failed_message() {
        assert_eq!(
            GenerateError::RenderFailed { target: None }.to_string(),
            "An unknown error occurred, nothing was generated"
        );
        assert_eq!(
            GenerateError::RenderFailed {
                target: Some("model".to_string())
            }
            .to_string(),
            "An unknown error occurred, nothing was generated for model"
        );
    }

    #[test]
    fn test_unknown_target_details() {
        let err = GenerateError::UnknownTarget {
            target: "widget".to_string(),
            choices: vec!["model".to_string(), "controller".to_string()],
        };
        assert_eq!(err.to_string(), "widget is not a valid option");
        assert_eq!(
            err.details().as_deref(),
            Some("Please choose from: model, controller")
        );
        assert!(GenerateError::ConfigInvalid.details().is_none());
    }
}
