use std::{fmt::Display, net::Ipv4Addr, ops::Deref};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::Config;

const MAX_KEY_BYTES: usize = 1024;

/// A string which cannot be used as a bucket name or object key
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("invalid bucket name {name:?}: {reason}")]
    InvalidBucketName { name: String, reason: &'static str },
    #[error("invalid object key {key:?}: {reason}")]
    InvalidObjectKey { key: String, reason: &'static str },
}

/// A bucket name which conforms to the s3 general purpose bucket naming rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketName(String);

impl BucketName {
    pub fn parse(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        match bucket_name_violation(&name) {
            Some(reason) => Err(ValidationErr::InvalidBucketName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn bucket_name_violation(name: &str) -> Option<&'static str> {
    let bytes = name.as_bytes();
    let is_edge = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    if !(3..=63).contains(&bytes.len()) {
        return Some("must be between 3 and 63 characters long");
    }
    if !bytes
        .iter()
        .all(|b| is_edge(b) || *b == b'.' || *b == b'-')
    {
        return Some("may only contain lowercase letters, numbers, dots and hyphens");
    }
    if !bytes.first().is_some_and(is_edge) || !bytes.last().is_some_and(is_edge) {
        return Some("must begin and end with a letter or number");
    }
    if name.contains("..") {
        return Some("must not contain two adjacent periods");
    }
    if name.parse::<Ipv4Addr>().is_ok() {
        return Some("must not be formatted as an ip address");
    }
    None
}

impl TryFrom<String> for BucketName {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<BucketName> for String {
    fn from(value: BucketName) -> Self {
        value.0
    }
}

impl Deref for BucketName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The key of an object inside a bucket. Non empty and at most 1024 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn parse(key: impl Into<String>) -> Result<Self, ValidationErr> {
        let key = key.into();
        let reason = if key.is_empty() {
            "must not be empty"
        } else if key.len() > MAX_KEY_BYTES {
            "must be at most 1024 bytes"
        } else {
            return Ok(Self(key));
        };
        Err(ValidationErr::InvalidObjectKey { key, reason })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ObjectKey> for String {
    fn from(value: ObjectKey) -> Self {
        value.0
    }
}

impl Deref for ObjectKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a single object: the bucket it lives in and its key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub bucket: BucketName,
    pub key: ObjectKey,
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// The payload the lambda is invoked with.
/// Any reference left out falls back to the configured one, so an empty object is a valid request.
/// Payloads which are not json objects (`null`, strings, numbers, arrays) carry no overrides.
#[derive(Debug, Clone, Default)]
pub struct CopyRequest {
    pub source_object: Option<ObjectRef>,
    pub destination_object: Option<ObjectRef>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CopyOverrides {
    source_object: Option<ObjectRef>,
    destination_object: Option<ObjectRef>,
}

impl<'de> Deserialize<'de> for CopyRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(Self::default());
        }

        let overrides: CopyOverrides =
            serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(Self {
            source_object: overrides.source_object,
            destination_object: overrides.destination_object,
        })
    }
}

/// The fully resolved references for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub source: ObjectRef,
    pub destination: ObjectRef,
}

impl CopyPlan {
    pub fn resolve(config: &Config, request: CopyRequest) -> Self {
        Self {
            source: request
                .source_object
                .unwrap_or_else(|| config.source.clone()),
            destination: request
                .destination_object
                .unwrap_or_else(|| config.destination.clone()),
        }
    }
}

/// The response of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOutcome {
    pub source: ObjectRef,
    pub destination: ObjectRef,
    /// buckets created by this invocation, in the order they were created
    pub created_buckets: Vec<BucketName>,
}

#[cfg(test)]
mod tests;
