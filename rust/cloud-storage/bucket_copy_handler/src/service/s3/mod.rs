#[allow(unused_imports)]
use mockall::automock;
use s3_client::{BucketStatus, HeadBucketErr};

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

use crate::model::{BucketName, ObjectRef};

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3_client::S3,
}

impl S3Client {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self {
            inner: s3_client::S3::new(inner),
        }
    }
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub async fn head_bucket(
        &self,
        bucket: &BucketName,
    ) -> Result<BucketStatus, HeadBucketErr> {
        self.inner.head_bucket(bucket).await
    }

    pub async fn create_bucket(&self, bucket: &BucketName) -> anyhow::Result<()> {
        self.inner.create_bucket(bucket).await
    }

    pub async fn copy_object(
        &self,
        source: &ObjectRef,
        destination: &ObjectRef,
    ) -> anyhow::Result<()> {
        self.inner
            .copy_object(
                &source.bucket,
                &source.key,
                &destination.bucket,
                &destination.key,
            )
            .await
    }
}
