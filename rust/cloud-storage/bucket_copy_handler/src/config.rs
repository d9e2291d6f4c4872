use std::env::VarError;

use anyhow::Context;

use crate::model::{BucketName, ObjectKey, ObjectRef};

pub const DEFAULT_SOURCE_BUCKET: &str = "source-bucket";
pub const DEFAULT_SOURCE_KEY: &str = "src/design.png";
pub const DEFAULT_DESTINATION_BUCKET: &str = "destination-bucket";
pub const DEFAULT_DESTINATION_KEY: &str = "dest/dest.png";

/// The configuration parameters for the lambda.
///
/// Every value is read from the environment once at cold start.
/// A variable which is not set falls back to its default, a variable which is set must be valid.
/// Individual invocations may still override either reference, see [crate::model::CopyRequest].
#[derive(Debug, Clone)]
pub struct Config {
    /// The object to copy. `SOURCE_BUCKET` and `SOURCE_KEY`
    pub source: ObjectRef,

    /// Where the copy is written to. `DESTINATION_BUCKET` and `DESTINATION_KEY`
    pub destination: ObjectRef,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(std::env::var)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let read = |name: &'static str, default: &'static str| match lookup(name) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Ok(default.to_string()),
            Err(e) => Err(e).context(format!("{name} could not be read")),
        };

        let source = ObjectRef {
            bucket: BucketName::parse(read("SOURCE_BUCKET", DEFAULT_SOURCE_BUCKET)?)
                .context("SOURCE_BUCKET is invalid")?,
            key: ObjectKey::parse(read("SOURCE_KEY", DEFAULT_SOURCE_KEY)?)
                .context("SOURCE_KEY is invalid")?,
        };
        let destination = ObjectRef {
            bucket: BucketName::parse(read("DESTINATION_BUCKET", DEFAULT_DESTINATION_BUCKET)?)
                .context("DESTINATION_BUCKET is invalid")?,
            key: ObjectKey::parse(read("DESTINATION_KEY", DEFAULT_DESTINATION_KEY)?)
                .context("DESTINATION_KEY is invalid")?,
        };

        Ok(Config {
            source,
            destination,
        })
    }
}
