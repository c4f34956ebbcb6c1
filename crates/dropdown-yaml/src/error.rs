//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for manifest parsing and validation.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the manifest
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// YAML syntax or shape error, including unparsable colors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// A field holds a value outside its valid range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ManifestError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ManifestError::invalid("config.item_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'config.item_count': must be at least 1"
        );
    }

    #[test]
    fn test_io_display_includes_path() {
        let err = ManifestError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read missing.yaml: not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[").unwrap_err();
        let err: ManifestError = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error:"));
    }
}
