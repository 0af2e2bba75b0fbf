//! Resource catalog for one environment (Functional Core - pure data).

use super::target::ExportTarget;

/// Table name suffixes, in export order.
pub const TABLE_SUFFIXES: [&str; 17] = [
    "contacts_api",
    "access_control_api",
    "audit_api",
    "commit_api",
    "data_warehouse_api",
    "entities_api",
    "firms_api",
    "notification_api",
    "onboarding_api",
    "relationships_api",
    "reports_api",
    "requests",
    "rule_api",
    "schema_api",
    "tasks_api",
    "template_api",
    "transactions_api",
];

/// Prefix shared by every bucket name.
pub const BUCKET_PREFIX: &str = "ingenio.ca";

/// Bucket name suffixes, in export order.
pub const BUCKET_SUFFIXES: [&str; 3] = ["documents-bucket", "events-bucket", "files-bucket"];

/// An environment whose resources are exported.
///
/// The name is interpolated verbatim into every resource identifier; no
/// validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
}

impl Environment {
    /// Creates an environment from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the environment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tables to export: `{env}-{suffix}` for every table suffix.
    pub fn tables(&self) -> Vec<ExportTarget> {
        TABLE_SUFFIXES
            .iter()
            .map(|suffix| ExportTarget::table(format!("{}-{}", self.name, suffix)))
            .collect()
    }

    /// Returns the buckets to export: `ingenio.ca-{env}-{suffix}`.
    pub fn buckets(&self) -> Vec<ExportTarget> {
        BUCKET_SUFFIXES
            .iter()
            .map(|suffix| {
                ExportTarget::bucket(format!("{}-{}-{}", BUCKET_PREFIX, self.name, suffix))
            })
            .collect()
    }

    /// Returns the parameter store name holding the user pool ID.
    pub fn user_pool_parameter(&self) -> String {
        format!("/{}/userPoolId", self.name)
    }
}
