//! Flattened directory user, as written to `cognito/users.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user of the pool with its attributes flattened to name/value pairs.
///
/// Fields are declared in lexicographic order of their JSON names so the
/// serialized object has the same key order as a sorted map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Attributes")]
    pub attributes: Vec<UserAttribute>,
    #[serde(rename = "Enabled")]
    pub enabled: bool,
    #[serde(rename = "UserCreateDate")]
    pub user_create_date: Option<DateTime<Utc>>,
    #[serde(rename = "UserLastModifiedDate")]
    pub user_last_modified_date: Option<DateTime<Utc>>,
    #[serde(rename = "UserStatus")]
    pub user_status: Option<String>,
    #[serde(rename = "Username")]
    pub username: String,
}

/// A single user attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
