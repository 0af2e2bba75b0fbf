//! Object store exporter.

use envdump_core::output::{ExportSummary, ObjectPath};
use envdump_core::Result;
use tracing::{debug, info};

use super::writer::{ensure_dir, write_file};
use crate::config::ExportConfig;
use crate::sources::ObjectSource;

/// Exports every bucket of the configured environment, in catalog order.
pub async fn export_buckets(
    config: &ExportConfig,
    source: &dyn ObjectSource,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    for bucket in config.environment.buckets() {
        summary.absorb(export_bucket(config, source, bucket.name()).await?);
    }
    Ok(summary)
}

/// Downloads every listed object of a bucket to `s3/<bucket>/<key>`.
///
/// An empty bucket writes nothing. Folder markers (keys ending in `/`)
/// only create their directory.
pub async fn export_bucket(
    config: &ExportConfig,
    source: &dyn ObjectSource,
    bucket_name: &str,
) -> Result<ExportSummary> {
    debug!(bucket = bucket_name, "Listing objects");
    let keys = source.list_keys(bucket_name, config.page_policy).await?;

    let mut summary = ExportSummary {
        buckets: 1,
        ..Default::default()
    };

    for key in &keys {
        match config
            .layout
            .object_path(&config.environment, bucket_name, key)?
        {
            ObjectPath::Directory(path) => {
                debug!(bucket = bucket_name, key = %key, "Skipping folder marker");
                ensure_dir(&path).await?;
            }
            ObjectPath::File(path) => {
                let body = source.get_object(bucket_name, key).await?;
                write_file(&path, &body).await?;
                debug!(bucket = bucket_name, key = %key, bytes = body.len(), "Downloaded object");
                summary.objects += 1;
                summary.files_written += 1;
            }
        }
    }

    info!(
        bucket = bucket_name,
        objects = summary.objects,
        "Exported bucket"
    );

    Ok(summary)
}
