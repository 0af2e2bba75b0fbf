//! SSM Parameter Store source.

use async_trait::async_trait;
use aws_sdk_ssm::Client;
use envdump_core::{ExportError, Result};

use super::error::map_get_parameter_error;
use crate::sources::ParameterSource;

/// Reads parameters with `aws-sdk-ssm`.
#[derive(Debug, Clone)]
pub struct SsmParameters {
    client: Client,
}

impl SsmParameters {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterSource for SsmParameters {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| map_get_parameter_error(e, name))?;

        output
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| ExportError::MissingParameter {
                name: name.to_string(),
            })
    }
}
