//! DynamoDB table source.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use envdump_core::pagination::PagePolicy;
use envdump_core::{ExportError, Result};
use tracing::{debug, warn};

use super::error::map_scan_error;
use super::pages::{collect_pages, Page};
use crate::sources::{Item, TableSource};

/// Scans tables with `aws-sdk-dynamodb`.
#[derive(Debug, Clone)]
pub struct DynamoDbTables {
    client: Client,
}

impl DynamoDbTables {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// An empty `LastEvaluatedKey` means the scan is complete.
fn next_start_key(last_evaluated_key: Option<Item>) -> Option<Item> {
    last_evaluated_key.filter(|key| !key.is_empty())
}

#[async_trait]
impl TableSource for DynamoDbTables {
    async fn scan(&self, table_name: &str, page_policy: PagePolicy) -> Result<Vec<Item>> {
        let collected = collect_pages(page_policy, |start_key| async move {
            let output = self
                .client
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_scan_error(e, table_name))?;

            let items = output.items.unwrap_or_default();
            debug!(table = table_name, items = items.len(), "Scanned page");
            Ok::<_, ExportError>(Page {
                items,
                next: next_start_key(output.last_evaluated_key),
            })
        })
        .await?;

        if collected.truncated {
            warn!(
                table = table_name,
                exported = collected.items.len(),
                "Table has more items; exporting the first page only (use --all-pages)"
            );
        }

        Ok(collected.items)
    }
}
