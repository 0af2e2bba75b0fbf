//! AWS session setup.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use envdump_core::{ExportError, Result};
use tracing::debug;

use crate::config::AwsConfig;

/// Loads the shared SDK configuration for the given profile and checks that
/// credentials can be resolved before any export starts.
pub async fn load_sdk_config(config: &AwsConfig) -> Result<SdkConfig> {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).profile_name(&config.profile);

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    if sdk_config.region().is_none() {
        return Err(ExportError::Session(format!(
            "no region configured for profile '{}'",
            config.profile
        )));
    }

    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        ExportError::Session(format!(
            "no credentials provider for profile '{}'",
            config.profile
        ))
    })?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| ExportError::Session(DisplayErrorContext(&e).to_string()))?;

    debug!(
        profile = %config.profile,
        region = ?sdk_config.region(),
        "AWS session ready"
    );

    Ok(sdk_config)
}
