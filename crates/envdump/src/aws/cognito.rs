//! Cognito user directory source.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::UserType;
use aws_sdk_cognitoidentityprovider::Client;
use envdump_core::pagination::PagePolicy;
use envdump_core::{ExportError, Result};
use tracing::{debug, warn};

use super::error::map_list_users_error;
use super::pages::{collect_pages, Page};
use crate::sources::DirectorySource;

/// Lists pool users with `aws-sdk-cognitoidentityprovider`.
#[derive(Debug, Clone)]
pub struct CognitoDirectory {
    client: Client,
}

impl CognitoDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DirectorySource for CognitoDirectory {
    async fn list_users(
        &self,
        user_pool_id: &str,
        page_policy: PagePolicy,
    ) -> Result<Vec<UserType>> {
        let collected = collect_pages(page_policy, |pagination_token| async move {
            let output = self
                .client
                .list_users()
                .user_pool_id(user_pool_id)
                .set_pagination_token(pagination_token)
                .send()
                .await
                .map_err(|e| map_list_users_error(e, user_pool_id))?;

            let users = output.users.unwrap_or_default();
            debug!(user_pool_id, users = users.len(), "Listed users page");
            Ok::<_, ExportError>(Page {
                items: users,
                next: output.pagination_token,
            })
        })
        .await?;

        if collected.truncated {
            warn!(
                user_pool_id,
                exported = collected.items.len(),
                "User pool has more users; exporting the first page only (use --all-pages)"
            );
        }

        Ok(collected.items)
    }
}
