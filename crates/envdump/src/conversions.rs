//! Conversions from AWS SDK types to exported records.
//!
//! Pure functions, testable in isolation without AWS access.

use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::primitives::DateTime as SmithyDateTime;
use aws_sdk_cognitoidentityprovider::types::UserType;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use envdump_core::directory::{UserAttribute, UserRecord};
use envdump_core::Record;
use serde_json::{Number, Value};
use thiserror::Error;

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Errors converting a source value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid number in attribute {field}: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("unsupported attribute type in {field}")]
    UnsupportedAttribute { field: String },

    #[error("user has no username")]
    MissingUsername,

    #[error("timestamp out of range for user {username}")]
    TimestampOutOfRange { username: String },
}

// ============================================================================
// DynamoDB items
// ============================================================================

/// Convert a DynamoDB item to a generic record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, ConversionError> {
    item.iter()
        .map(|(name, value)| attribute_to_value(name, value).map(|v| (name.clone(), v)))
        .collect()
}

/// Convert one attribute value. `field` names the attribute in errors.
///
/// Numbers become JSON integers when they are integral and fit, floats
/// otherwise; binary values become base64 strings.
pub fn attribute_to_value(field: &str, value: &AttributeValue) -> Result<Value, ConversionError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(field, n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::B(blob) => Ok(Value::String(STANDARD.encode(blob.as_ref()))),
        AttributeValue::M(map) => map
            .iter()
            .map(|(name, value)| attribute_to_value(name, value).map(|v| (name.clone(), v)))
            .collect::<Result<Record, _>>()
            .map(Value::Object),
        AttributeValue::L(list) => list
            .iter()
            .map(|value| attribute_to_value(field, value))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(numbers) => numbers
            .iter()
            .map(|n| parse_number(field, n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::Bs(blobs) => Ok(Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        )),
        _ => Err(ConversionError::UnsupportedAttribute {
            field: field.to_string(),
        }),
    }
}

/// Parse a DynamoDB number string.
fn parse_number(field: &str, raw: &str) -> Result<Value, ConversionError> {
    let trimmed = raw.trim();

    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Ok(Value::from(u));
    }

    let invalid = || ConversionError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let float = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if float.fract() == 0.0 && float.abs() < MAX_SAFE_INTEGER {
        return Ok(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number).ok_or_else(invalid)
}

// ============================================================================
// Cognito users
// ============================================================================

/// Flatten a Cognito user into the exported record.
pub fn user_to_record(user: &UserType) -> Result<UserRecord, ConversionError> {
    let username = user
        .username()
        .ok_or(ConversionError::MissingUsername)?
        .to_string();

    let timestamp = |value: Option<&SmithyDateTime>| {
        value
            .map(|dt| to_chrono(dt, &username))
            .transpose()
    };

    Ok(UserRecord {
        attributes: user
            .attributes()
            .iter()
            .map(|attr| UserAttribute::new(attr.name(), attr.value().map(str::to_string)))
            .collect(),
        enabled: user.enabled(),
        user_create_date: timestamp(user.user_create_date())?,
        user_last_modified_date: timestamp(user.user_last_modified_date())?,
        user_status: user.user_status().map(|status| status.as_str().to_string()),
        username,
    })
}

fn to_chrono(value: &SmithyDateTime, username: &str) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos()).ok_or_else(|| {
        ConversionError::TimestampOutOfRange {
            username: username.to_string(),
        }
    })
}
