//! Runs the exporters selected by the mode.

use envdump_core::output::ExportSummary;
use envdump_core::Result;
use tracing::info;

use crate::config::ExportConfig;
use crate::export::{export_buckets, export_tables, export_users};
use crate::sources::Sources;

/// Runs the selected exporters in order: tables, buckets, users.
///
/// Stops at the first error and returns it; files written before the
/// failure stay on disk.
pub async fn run(config: &ExportConfig, sources: &Sources<'_>) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    if config.mode.includes_tables() {
        info!(environment = config.environment.name(), "Exporting DynamoDB tables");
        summary.absorb(export_tables(config, sources.tables).await?);
    }

    if config.mode.includes_buckets() {
        info!(environment = config.environment.name(), "Exporting S3 buckets");
        summary.absorb(export_buckets(config, sources.objects).await?);
    }

    if config.mode.includes_users() {
        info!(environment = config.environment.name(), "Exporting Cognito users");
        summary.absorb(export_users(config, sources.parameters, sources.directory).await?);
    }

    Ok(summary)
}
