//! Directory exporter.

use envdump_core::directory::UserRecord;
use envdump_core::output::ExportSummary;
use envdump_core::{ExportError, Result};
use tracing::{debug, info};

use super::json;
use super::writer::write_file;
use crate::config::ExportConfig;
use crate::conversions::user_to_record;
use crate::sources::{DirectorySource, ParameterSource};

/// Resolves the environment's user pool through the parameter store, then
/// writes every user of the pool as a compact JSON array to
/// `cognito/users.json`.
///
/// Nothing is written when the parameter or the pool cannot be read.
pub async fn export_users(
    config: &ExportConfig,
    parameters: &dyn ParameterSource,
    directory: &dyn DirectorySource,
) -> Result<ExportSummary> {
    let parameter = config.environment.user_pool_parameter();
    let user_pool_id = parameters.get_parameter(&parameter, true).await?;
    debug!(parameter = %parameter, user_pool_id = %user_pool_id, "Resolved user pool");

    let users = directory
        .list_users(&user_pool_id, config.page_policy)
        .await?;

    let records = users
        .iter()
        .map(user_to_record)
        .collect::<std::result::Result<Vec<UserRecord>, _>>()
        .map_err(|e| ExportError::conversion(user_pool_id.as_str(), e.to_string()))?;

    let body = json::to_vec(&records).map_err(|source| ExportError::Serialization {
        target: user_pool_id.clone(),
        source,
    })?;

    let path = config.layout.users_file();
    write_file(&path, &body).await?;

    info!(
        user_pool_id = %user_pool_id,
        users = records.len(),
        path = %path.display(),
        "Exported users"
    );

    Ok(ExportSummary {
        users: records.len(),
        files_written: 1,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use aws_sdk_cognitoidentityprovider::types::{AttributeType, UserStatusType, UserType};
    use envdump_core::environment::Environment;

    use super::*;
    use crate::sources::inmemory::InMemorySources;

    const POOL_ID: &str = "ca-central-1_AbCdEf";

    fn config(root: &std::path::Path) -> ExportConfig {
        ExportConfig::new(Environment::new("dev")).with_output_root(root)
    }

    fn user(name: &str, email: &str) -> UserType {
        UserType::builder()
            .username(name)
            .enabled(true)
            .user_status(UserStatusType::Confirmed)
            .attributes(
                AttributeType::builder()
                    .name("email")
                    .value(email)
                    .build()
                    .unwrap(),
            )
            .build()
    }

    #[tokio::test]
    async fn test_export_users_writes_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InMemorySources::new();
        sources.put_parameter("/dev/userPoolId", POOL_ID).await;
        sources
            .insert_users(POOL_ID, vec![user("jane", "jane@example.com")])
            .await;

        let summary = export_users(&config(dir.path()), &sources, &sources)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("cognito/users.json")).unwrap();
        assert_eq!(
            written,
            concat!(
                r#"[{"Attributes":[{"Name":"email","Value":"jane@example.com"}],"#,
                r#""Enabled":true,"UserCreateDate":null,"UserLastModifiedDate":null,"#,
                r#""UserStatus":"CONFIRMED","Username":"jane"}]"#
            )
        );
        assert_eq!(summary.users, 1);
    }

    #[tokio::test]
    async fn test_export_users_escapes_html_characters() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InMemorySources::new();
        sources.put_parameter("/dev/userPoolId", POOL_ID).await;
        sources
            .insert_users(POOL_ID, vec![user("smith&co", "<ops>@example.com")])
            .await;

        export_users(&config(dir.path()), &sources, &sources)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("cognito/users.json")).unwrap();
        assert!(written.contains(r#""Value":"\u003cops\u003e@example.com""#));
        assert!(written.contains(r#""Username":"smith\u0026co""#));
    }

    #[tokio::test]
    async fn test_missing_parameter_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InMemorySources::new();
        sources.insert_users(POOL_ID, vec![user("jane", "j@x")]).await;

        let result = export_users(&config(dir.path()), &sources, &sources).await;

        assert!(matches!(
            result,
            Err(ExportError::MissingParameter { ref name }) if name == "/dev/userPoolId"
        ));
        assert!(!dir.path().join("cognito/users.json").exists());
        assert_eq!(sources.requests().await, vec!["GetParameter /dev/userPoolId"]);
    }

    #[tokio::test]
    async fn test_pool_listing_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InMemorySources::new();
        sources.put_parameter("/dev/userPoolId", POOL_ID).await;
        sources.fail_on(POOL_ID).await;

        let result = export_users(&config(dir.path()), &sources, &sources).await;

        assert!(matches!(result, Err(ExportError::Remote { .. })));
        assert!(!dir.path().join("cognito/users.json").exists());
    }

    #[tokio::test]
    async fn test_empty_pool_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let sources = InMemorySources::new();
        sources.put_parameter("/dev/userPoolId", POOL_ID).await;
        sources.insert_users(POOL_ID, vec![]).await;

        export_users(&config(dir.path()), &sources, &sources)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("cognito/users.json")).unwrap();
        assert_eq!(written, "[]");
    }
}
