//! Table exporter.

use envdump_core::output::ExportSummary;
use envdump_core::{ExportError, Record, Result};
use tracing::{debug, info};

use super::json;
use super::writer::write_file;
use crate::config::ExportConfig;
use crate::conversions::item_to_record;
use crate::sources::TableSource;

/// Exports every table of the configured environment, in catalog order.
pub async fn export_tables(
    config: &ExportConfig,
    source: &dyn TableSource,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    for table in config.environment.tables() {
        summary.absorb(export_table(config, source, table.name()).await?);
    }
    Ok(summary)
}

/// Scans one table and writes its records as an indented JSON array to
/// `dynamodb/<table>.json`.
pub async fn export_table(
    config: &ExportConfig,
    source: &dyn TableSource,
    table_name: &str,
) -> Result<ExportSummary> {
    debug!(table = table_name, "Scanning table");
    let items = source.scan(table_name, config.page_policy).await?;

    let records = items
        .iter()
        .map(item_to_record)
        .collect::<std::result::Result<Vec<Record>, _>>()
        .map_err(|e| ExportError::conversion(table_name, e.to_string()))?;

    let body = json::to_vec_pretty(&records).map_err(|source| {
        ExportError::Serialization {
            target: table_name.to_string(),
            source,
        }
    })?;

    let path = config.layout.table_file(&config.environment, table_name);
    write_file(&path, &body).await?;

    info!(
        table = table_name,
        records = records.len(),
        path = %path.display(),
        "Exported table"
    );

    Ok(ExportSummary {
        tables: 1,
        records: records.len(),
        files_written: 1,
        ..Default::default()
    })
}
