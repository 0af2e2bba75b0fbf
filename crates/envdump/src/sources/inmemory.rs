//! In-memory sources.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::UserType;
use envdump_core::pagination::PagePolicy;
use envdump_core::{ExportError, Result};
use tokio::sync::RwLock;

use super::{DirectorySource, Item, ObjectSource, ParameterSource, Sources, TableSource};

/// In-memory stand-in for every source, for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>`. Bucket contents are kept in
/// key order, the order S3 lists them in. Every request is recorded so tests
/// can check what was (and was not) called.
#[derive(Debug, Clone, Default)]
pub struct InMemorySources {
    tables: Arc<RwLock<HashMap<String, Vec<Item>>>>,
    buckets: Arc<RwLock<HashMap<String, BTreeMap<String, Vec<u8>>>>>,
    parameters: Arc<RwLock<HashMap<String, String>>>,
    pools: Arc<RwLock<HashMap<String, Vec<UserType>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    requests: Arc<RwLock<Vec<String>>>,
    page_size: Option<usize>,
}

impl InMemorySources {
    /// Creates empty sources that return everything in a single page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits every listing into pages of `page_size` entries.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Borrows these sources as the set an export run reads from.
    pub fn sources(&self) -> Sources<'_> {
        Sources {
            tables: self,
            objects: self,
            parameters: self,
            directory: self,
        }
    }

    pub async fn insert_table(&self, table_name: &str, items: Vec<Item>) {
        self.tables
            .write()
            .await
            .insert(table_name.to_string(), items);
    }

    pub async fn create_bucket(&self, bucket_name: &str) {
        self.buckets
            .write()
            .await
            .entry(bucket_name.to_string())
            .or_default();
    }

    pub async fn insert_object(&self, bucket_name: &str, key: &str, body: impl Into<Vec<u8>>) {
        self.buckets
            .write()
            .await
            .entry(bucket_name.to_string())
            .or_default()
            .insert(key.to_string(), body.into());
    }

    pub async fn put_parameter(&self, name: &str, value: &str) {
        self.parameters
            .write()
            .await
            .insert(name.to_string(), value.to_string());
    }

    pub async fn insert_users(&self, user_pool_id: &str, users: Vec<UserType>) {
        self.pools
            .write()
            .await
            .entry(user_pool_id.to_string())
            .or_default()
            .extend(users);
    }

    /// Makes every request naming `target` fail. Objects are named
    /// `bucket/key`.
    pub async fn fail_on(&self, target: &str) {
        self.failing.write().await.insert(target.to_string());
    }

    /// Returns the requests served so far, as `Operation target`.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    async fn record(&self, operation: &'static str, target: &str) -> Result<()> {
        self.requests
            .write()
            .await
            .push(format!("{} {}", operation, target));

        if self.failing.read().await.contains(target) {
            return Err(ExportError::remote(operation, target, "injected failure"));
        }
        Ok(())
    }

    fn page<T: Clone>(&self, values: &[T], page_policy: PagePolicy) -> Vec<T> {
        match self.page_size {
            Some(size) if page_policy == PagePolicy::FirstPage => {
                values.iter().take(size).cloned().collect()
            }
            _ => values.to_vec(),
        }
    }
}

#[async_trait]
impl TableSource for InMemorySources {
    async fn scan(&self, table_name: &str, page_policy: PagePolicy) -> Result<Vec<Item>> {
        self.record("Scan", table_name).await?;

        let tables = self.tables.read().await;
        let items = tables
            .get(table_name)
            .ok_or_else(|| ExportError::remote("Scan", table_name, "Table not found"))?;
        Ok(self.page(items, page_policy))
    }
}

#[async_trait]
impl ObjectSource for InMemorySources {
    async fn list_keys(&self, bucket_name: &str, page_policy: PagePolicy) -> Result<Vec<String>> {
        self.record("ListObjectsV2", bucket_name).await?;

        let buckets = self.buckets.read().await;
        let objects = buckets
            .get(bucket_name)
            .ok_or_else(|| ExportError::remote("ListObjectsV2", bucket_name, "Bucket not found"))?;
        let keys: Vec<String> = objects.keys().cloned().collect();
        Ok(self.page(&keys, page_policy))
    }

    async fn get_object(&self, bucket_name: &str, key: &str) -> Result<Vec<u8>> {
        let target = format!("{}/{}", bucket_name, key);
        self.record("GetObject", &target).await?;

        self.buckets
            .read()
            .await
            .get(bucket_name)
            .and_then(|objects| objects.get(key))
            .cloned()
            .ok_or_else(|| ExportError::remote("GetObject", target, "Object not found"))
    }
}

#[async_trait]
impl ParameterSource for InMemorySources {
    async fn get_parameter(&self, name: &str, _with_decryption: bool) -> Result<String> {
        self.record("GetParameter", name).await?;

        self.parameters
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| ExportError::MissingParameter {
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl DirectorySource for InMemorySources {
    async fn list_users(
        &self,
        user_pool_id: &str,
        page_policy: PagePolicy,
    ) -> Result<Vec<UserType>> {
        self.record("ListUsers", user_pool_id).await?;

        let pools = self.pools.read().await;
        let users = pools
            .get(user_pool_id)
            .ok_or_else(|| ExportError::remote("ListUsers", user_pool_id, "User pool not found"))?;
        Ok(self.page(users, page_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;

    fn item(id: &str) -> Item {
        HashMap::from([("id".to_string(), AttributeValue::S(id.to_string()))])
    }

    #[tokio::test]
    async fn test_scan_missing_table_fails() {
        let sources = InMemorySources::new();
        let result = sources.scan("dev-requests", PagePolicy::FirstPage).await;
        assert!(matches!(result, Err(ExportError::Remote { .. })));
    }

    #[tokio::test]
    async fn test_page_size_truncates_first_page_only() {
        let sources = InMemorySources::new().with_page_size(2);
        sources
            .insert_table("dev-requests", vec![item("1"), item("2"), item("3")])
            .await;

        let first = sources
            .scan("dev-requests", PagePolicy::FirstPage)
            .await
            .unwrap();
        let all = sources
            .scan("dev-requests", PagePolicy::AllPages)
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_keys_are_listed_in_order() {
        let sources = InMemorySources::new();
        sources.insert_object("bucket", "b.txt", "b").await;
        sources.insert_object("bucket", "a.txt", "a").await;

        let keys = sources
            .list_keys("bucket", PagePolicy::FirstPage)
            .await
            .unwrap();
        assert_eq!(keys, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_parameter() {
        let sources = InMemorySources::new();
        let result = sources.get_parameter("/dev/userPoolId", true).await;
        assert!(matches!(
            result,
            Err(ExportError::MissingParameter { ref name }) if name == "/dev/userPoolId"
        ));
    }

    #[tokio::test]
    async fn test_injected_failure_is_recorded() {
        let sources = InMemorySources::new();
        sources.insert_object("bucket", "a.txt", "a").await;
        sources.fail_on("bucket/a.txt").await;

        let result = sources.get_object("bucket", "a.txt").await;

        assert!(matches!(result, Err(ExportError::Remote { .. })));
        assert_eq!(sources.requests().await, vec!["GetObject bucket/a.txt"]);
    }
}
