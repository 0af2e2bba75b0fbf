//! Source traits the exporters read from.
//!
//! The AWS implementations live in [`crate::aws`]; `inmemory` (behind the
//! `inmemory` feature) backs the exporters in tests.

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::UserType;
use aws_sdk_dynamodb::types::AttributeValue;
use envdump_core::pagination::PagePolicy;
use envdump_core::Result;

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// A scan-capable table store.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Scans every item of a table, subject to the page policy.
    async fn scan(&self, table_name: &str, page_policy: PagePolicy) -> Result<Vec<Item>>;
}

/// An object store.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Lists the object keys of a bucket, subject to the page policy.
    async fn list_keys(&self, bucket_name: &str, page_policy: PagePolicy) -> Result<Vec<String>>;

    /// Downloads the full content of an object.
    async fn get_object(&self, bucket_name: &str, key: &str) -> Result<Vec<u8>>;
}

/// A key-value parameter store.
#[async_trait]
pub trait ParameterSource: Send + Sync {
    /// Fetches a parameter value, decrypting it when asked to.
    ///
    /// A missing parameter is reported as `ExportError::MissingParameter`.
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String>;
}

/// A user directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Lists the users of a pool, subject to the page policy.
    async fn list_users(
        &self,
        user_pool_id: &str,
        page_policy: PagePolicy,
    ) -> Result<Vec<UserType>>;
}

/// The four sources an export run reads from.
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    pub tables: &'a dyn TableSource,
    pub objects: &'a dyn ObjectSource,
    pub parameters: &'a dyn ParameterSource,
    pub directory: &'a dyn DirectorySource,
}
