//! AWS implementations of the source traits (Imperative Shell).

mod cognito;
mod dynamodb;
mod error;
mod pages;
mod s3;
mod session;
mod ssm;

pub use cognito::CognitoDirectory;
pub use dynamodb::DynamoDbTables;
pub use s3::S3Objects;
pub use session::load_sdk_config;
pub use ssm::SsmParameters;

use aws_config::SdkConfig;

use crate::config::AwsConfig;
use crate::sources::Sources;

/// One client per service, all built from the same session.
#[derive(Debug, Clone)]
pub struct AwsSources {
    tables: DynamoDbTables,
    objects: S3Objects,
    parameters: SsmParameters,
    directory: CognitoDirectory,
}

impl AwsSources {
    /// Creates the service clients. No request is sent.
    pub fn new(sdk_config: &SdkConfig, aws_config: &AwsConfig) -> Self {
        Self {
            tables: DynamoDbTables::new(aws_sdk_dynamodb::Client::new(sdk_config)),
            objects: S3Objects::from_sdk_config(sdk_config, aws_config.endpoint_url.is_some()),
            parameters: SsmParameters::new(aws_sdk_ssm::Client::new(sdk_config)),
            directory: CognitoDirectory::new(aws_sdk_cognitoidentityprovider::Client::new(
                sdk_config,
            )),
        }
    }

    /// Borrows the clients as the set an export run reads from.
    pub fn sources(&self) -> Sources<'_> {
        Sources {
            tables: &self.tables,
            objects: &self.objects,
            parameters: &self.parameters,
            directory: &self.directory,
        }
    }
}
