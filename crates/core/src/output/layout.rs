//! Output path construction.
//!
//! Exported paths never contain the environment name: the first occurrence
//! inside a resource identifier is replaced by [`ENV_PLACEHOLDER`], so dumps
//! of different environments share one directory structure.

use std::path::{Path, PathBuf};

use crate::environment::Environment;
use crate::error::{ExportError, Result};

/// Token substituted for the environment name in output paths.
pub const ENV_PLACEHOLDER: &str = "envName";

/// Output root used when none is configured.
pub const DEFAULT_OUTPUT_ROOT: &str = "../output";

const DYNAMODB_DIR: &str = "dynamodb";
const S3_DIR: &str = "s3";
const COGNITO_DIR: &str = "cognito";
const USERS_FILE: &str = "users.json";

/// Replaces the first occurrence of `environment` in `identifier` with the
/// placeholder token.
pub fn sanitize(identifier: &str, environment: &str) -> String {
    identifier.replacen(environment, ENV_PLACEHOLDER, 1)
}

/// Where a downloaded object lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectPath {
    /// A regular object, written as a file.
    File(PathBuf),
    /// A key ending in `/`: a folder marker with no content of its own.
    Directory(PathBuf),
}

impl ObjectPath {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Directory(path) => path,
        }
    }
}

/// Directory tree every exporter writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/dynamodb/<table>.json` with the environment replaced.
    pub fn table_file(&self, environment: &Environment, table_name: &str) -> PathBuf {
        self.root.join(DYNAMODB_DIR).join(sanitize(
            &format!("{}.json", table_name),
            environment.name(),
        ))
    }

    /// `<root>/s3/<bucket>` with the environment replaced.
    pub fn bucket_dir(&self, environment: &Environment, bucket_name: &str) -> PathBuf {
        self.root
            .join(S3_DIR)
            .join(sanitize(bucket_name, environment.name()))
    }

    /// Maps an object key below the bucket directory.
    ///
    /// The key is split on `/`; empty and `.` segments are dropped. Keys with
    /// a `..` segment, or with no segment left at all, are rejected so nothing
    /// is written outside the bucket directory.
    pub fn object_path(
        &self,
        environment: &Environment,
        bucket_name: &str,
        key: &str,
    ) -> Result<ObjectPath> {
        let invalid = || ExportError::InvalidObjectKey {
            bucket: bucket_name.to_string(),
            key: key.to_string(),
        };

        let segments: Vec<&str> = key
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();

        if segments.contains(&"..") {
            return Err(invalid());
        }

        let mut path = self.bucket_dir(environment, bucket_name);
        path.extend(&segments);

        if key.ends_with('/') {
            Ok(ObjectPath::Directory(path))
        } else if segments.is_empty() {
            Err(invalid())
        } else {
            Ok(ObjectPath::File(path))
        }
    }

    /// `<root>/cognito/users.json`.
    pub fn users_file(&self) -> PathBuf {
        self.root.join(COGNITO_DIR).join(USERS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> OutputLayout {
        OutputLayout::new("/out")
    }

    #[test]
    fn test_sanitize_replaces_first_occurrence_only() {
        assert_eq!(sanitize("dev-requests", "dev"), "envName-requests");
        assert_eq!(sanitize("dev-devices_api", "dev"), "envName-devices_api");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize("ingenio.ca-qa-files-bucket", "qa");
        assert_eq!(sanitize(&once, "qa"), once);
    }

    #[test]
    fn test_table_file() {
        let path = layout().table_file(&Environment::new("dev"), "dev-requests");
        assert_eq!(path, PathBuf::from("/out/dynamodb/envName-requests.json"));
    }

    #[test]
    fn test_different_environments_collapse_to_same_path() {
        let layout = layout();
        let dev = Environment::new("dev");
        let prod = Environment::new("prod");

        for (dev_table, prod_table) in dev.tables().iter().zip(prod.tables().iter()) {
            assert_eq!(
                layout.table_file(&dev, dev_table.name()),
                layout.table_file(&prod, prod_table.name())
            );
        }
        for (dev_bucket, prod_bucket) in dev.buckets().iter().zip(prod.buckets().iter()) {
            assert_eq!(
                layout.bucket_dir(&dev, dev_bucket.name()),
                layout.bucket_dir(&prod, prod_bucket.name())
            );
        }
    }

    #[test]
    fn test_object_path_mirrors_key() {
        let path = layout()
            .object_path(
                &Environment::new("dev"),
                "ingenio.ca-dev-documents-bucket",
                "a/b.txt",
            )
            .unwrap();

        assert_eq!(
            path,
            ObjectPath::File(PathBuf::from(
                "/out/s3/ingenio.ca-envName-documents-bucket/a/b.txt"
            ))
        );
    }

    #[test]
    fn test_object_path_normalizes_empty_segments() {
        let path = layout()
            .object_path(&Environment::new("dev"), "ingenio.ca-dev-files-bucket", "/x//./y")
            .unwrap();

        assert_eq!(
            path.path(),
            Path::new("/out/s3/ingenio.ca-envName-files-bucket/x/y")
        );
    }

    #[test]
    fn test_object_path_folder_marker() {
        let path = layout()
            .object_path(&Environment::new("dev"), "ingenio.ca-dev-files-bucket", "reports/")
            .unwrap();

        assert_eq!(
            path,
            ObjectPath::Directory(PathBuf::from(
                "/out/s3/ingenio.ca-envName-files-bucket/reports"
            ))
        );
    }

    #[test]
    fn test_object_path_rejects_parent_segments() {
        let result = layout().object_path(
            &Environment::new("dev"),
            "ingenio.ca-dev-files-bucket",
            "a/../../etc/passwd",
        );

        assert!(matches!(
            result,
            Err(ExportError::InvalidObjectKey { ref key, .. }) if key == "a/../../etc/passwd"
        ));
    }

    #[test]
    fn test_object_path_rejects_empty_key() {
        let result = layout().object_path(&Environment::new("dev"), "bucket", "");
        assert!(matches!(result, Err(ExportError::InvalidObjectKey { .. })));
    }

    #[test]
    fn test_users_file() {
        assert_eq!(
            layout().users_file(),
            PathBuf::from("/out/cognito/users.json")
        );
    }

    #[test]
    fn test_default_root() {
        assert_eq!(OutputLayout::default().root(), Path::new("../output"));
    }
}
