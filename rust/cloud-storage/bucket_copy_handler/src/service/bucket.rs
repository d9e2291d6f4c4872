use ensure_exists::EnsureExists;
use s3_client::BucketStatus;

use super::{CopyErr, s3::S3};
use crate::model::BucketName;

/// A bucket which should exist before anything is copied into or out of it
pub(crate) struct Bucket<'a> {
    s3: &'a S3,
    name: &'a BucketName,
}

impl<'a> Bucket<'a> {
    pub(crate) fn new(s3: &'a S3, name: &'a BucketName) -> Self {
        Self { s3, name }
    }
}

impl EnsureExists<BucketName> for Bucket<'_> {
    type Err = CopyErr;

    async fn check_exists(&self) -> Result<Option<BucketName>, CopyErr> {
        match self.s3.head_bucket(self.name).await? {
            BucketStatus::Exists => Ok(Some(self.name.clone())),
            BucketStatus::NotFound => {
                tracing::info!(bucket = %self.name, "bucket does not exist");
                Ok(None)
            }
        }
    }

    async fn create(&self) -> Result<BucketName, CopyErr> {
        self.s3.create_bucket(self.name).await?;
        tracing::info!(bucket = %self.name, "created bucket");
        Ok(self.name.clone())
    }
}
