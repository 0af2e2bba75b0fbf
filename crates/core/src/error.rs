use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an export run.
///
/// Every variant is fatal: the dispatcher stops at the first one and returns
/// it to the caller.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to establish AWS session: {0}")]
    Session(String),

    #[error("{operation} failed for {target}: {message}")]
    Remote {
        operation: &'static str,
        target: String,
        message: String,
    },

    #[error("Failed to convert item from {target}: {message}")]
    Conversion { target: String, message: String },

    #[error("Failed to serialize {target}: {source}")]
    Serialization {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid object key '{key}' in bucket {bucket}")]
    InvalidObjectKey { bucket: String, key: String },

    #[error("Parameter {name} has no value")]
    MissingParameter { name: String },
}

impl ExportError {
    /// Builds a remote-call error for `operation` against `target`.
    pub fn remote(
        operation: &'static str,
        target: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Remote {
            operation,
            target: target.into(),
            message: message.to_string(),
        }
    }

    /// Builds a conversion error for an item read from `target`.
    pub fn conversion(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_display() {
        let error = ExportError::Session("no credentials in profile".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to establish AWS session: no credentials in profile"
        );
    }

    #[test]
    fn test_remote_display() {
        let error = ExportError::remote("Scan", "dev-requests", "ResourceNotFoundException");
        assert_eq!(
            error.to_string(),
            "Scan failed for dev-requests: ResourceNotFoundException"
        );
    }

    #[test]
    fn test_conversion_display() {
        let error = ExportError::conversion("dev-audit_api", "invalid number: abc");
        assert_eq!(
            error.to_string(),
            "Failed to convert item from dev-audit_api: invalid number: abc"
        );
    }

    #[test]
    fn test_filesystem_display() {
        let error = ExportError::filesystem(
            "/tmp/out/users.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            error.to_string(),
            "Filesystem error at /tmp/out/users.json: denied"
        );
    }

    #[test]
    fn test_invalid_object_key_display() {
        let error = ExportError::InvalidObjectKey {
            bucket: "ingenio.ca-dev-files-bucket".to_string(),
            key: "../escape".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid object key '../escape' in bucket ingenio.ca-dev-files-bucket"
        );
    }

    #[test]
    fn test_missing_parameter_display() {
        let error = ExportError::MissingParameter {
            name: "/dev/userPoolId".to_string(),
        };
        assert_eq!(error.to_string(), "Parameter /dev/userPoolId has no value");
    }
}
