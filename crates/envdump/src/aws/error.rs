//! AWS SDK error mapping.
//!
//! Maps service errors to `ExportError::Remote`, keeping the operation and
//! target in the message.

use std::fmt::Debug;

use aws_sdk_cognitoidentityprovider::operation::list_users::ListUsersError;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use envdump_core::ExportError;

/// Map a Scan SDK error to ExportError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table_name: &str,
) -> ExportError {
    let message = match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => "Table not found".to_string(),
        ScanError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded".to_string()
        }
        ScanError::RequestLimitExceeded(_) => "Request limit exceeded".to_string(),
        ScanError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    ExportError::remote("Scan", table_name, message)
}

/// Map a ListObjectsV2 SDK error to ExportError.
pub fn map_list_objects_error<R: Debug + Send + Sync + 'static>(
    err: aws_sdk_s3::error::SdkError<ListObjectsV2Error, R>,
    bucket_name: &str,
) -> ExportError {
    let message = match err.into_service_error() {
        ListObjectsV2Error::NoSuchBucket(_) => "Bucket not found".to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    ExportError::remote("ListObjectsV2", bucket_name, message)
}

/// Map a GetObject SDK error to ExportError.
pub fn map_get_object_error<R: Debug + Send + Sync + 'static>(
    err: aws_sdk_s3::error::SdkError<GetObjectError, R>,
    bucket_name: &str,
    key: &str,
) -> ExportError {
    let message = match err.into_service_error() {
        GetObjectError::NoSuchKey(_) => "Object not found".to_string(),
        GetObjectError::InvalidObjectState(_) => {
            "Object is archived and must be restored first".to_string()
        }
        err => DisplayErrorContext(&err).to_string(),
    };
    ExportError::remote("GetObject", format!("{}/{}", bucket_name, key), message)
}

/// Map a GetParameter SDK error to ExportError.
///
/// A parameter that does not exist is reported as `MissingParameter`.
pub fn map_get_parameter_error<R: Debug + Send + Sync + 'static>(
    err: aws_sdk_ssm::error::SdkError<GetParameterError, R>,
    name: &str,
) -> ExportError {
    match err.into_service_error() {
        GetParameterError::ParameterNotFound(_) => ExportError::MissingParameter {
            name: name.to_string(),
        },
        GetParameterError::InvalidKeyId(_) => {
            ExportError::remote("GetParameter", name, "KMS key cannot decrypt parameter")
        }
        err => ExportError::remote("GetParameter", name, DisplayErrorContext(&err)),
    }
}

/// Map a ListUsers SDK error to ExportError.
pub fn map_list_users_error<R: Debug + Send + Sync + 'static>(
    err: aws_sdk_cognitoidentityprovider::error::SdkError<ListUsersError, R>,
    user_pool_id: &str,
) -> ExportError {
    let message = match err.into_service_error() {
        ListUsersError::ResourceNotFoundException(_) => "User pool not found".to_string(),
        ListUsersError::TooManyRequestsException(_) => "Too many requests".to_string(),
        ListUsersError::NotAuthorizedException(_) => "Not authorized".to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    ExportError::remote("ListUsers", user_pool_id, message)
}
