//! S3 object source.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use envdump_core::pagination::PagePolicy;
use envdump_core::{ExportError, Result};
use tracing::{debug, warn};

use super::error::{map_get_object_error, map_list_objects_error};
use super::pages::{collect_pages, Page};
use crate::sources::ObjectSource;

/// Lists and downloads objects with `aws-sdk-s3`.
#[derive(Debug, Clone)]
pub struct S3Objects {
    client: Client,
}

impl S3Objects {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from the shared session. Custom endpoints
    /// (LocalStack) need path-style addressing.
    pub fn from_sdk_config(sdk_config: &SdkConfig, force_path_style: bool) -> Self {
        let config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(force_path_style)
            .build();
        Self::new(Client::from_conf(config))
    }
}

/// The continuation token only counts while the listing is truncated.
fn next_continuation_token(token: Option<String>, is_truncated: Option<bool>) -> Option<String> {
    token.filter(|_| is_truncated.unwrap_or(false))
}

#[async_trait]
impl ObjectSource for S3Objects {
    async fn list_keys(&self, bucket_name: &str, page_policy: PagePolicy) -> Result<Vec<String>> {
        let collected = collect_pages(page_policy, |continuation_token| async move {
            let output = self
                .client
                .list_objects_v2()
                .bucket(bucket_name)
                .set_continuation_token(continuation_token)
                .send()
                .await
                .map_err(|e| map_list_objects_error(e, bucket_name))?;

            let contents = output.contents.unwrap_or_default();
            debug!(bucket = bucket_name, objects = contents.len(), "Listed page");
            Ok::<_, ExportError>(Page {
                items: contents.into_iter().filter_map(|object| object.key).collect(),
                next: next_continuation_token(output.next_continuation_token, output.is_truncated),
            })
        })
        .await?;

        if collected.truncated {
            warn!(
                bucket = bucket_name,
                exported = collected.items.len(),
                "Bucket has more objects; exporting the first page only (use --all-pages)"
            );
        }

        Ok(collected.items)
    }

    async fn get_object(&self, bucket_name: &str, key: &str) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(bucket_name)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_object_error(e, bucket_name, key))?;

        let body = output.body.collect().await.map_err(|e| {
            ExportError::remote("GetObject", format!("{}/{}", bucket_name, key), e)
        })?;

        Ok(body.into_bytes().to_vec())
    }
}
