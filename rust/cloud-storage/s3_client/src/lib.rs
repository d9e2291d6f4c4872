mod bucket;
mod copy;
mod error;

pub use error::{BoxError, BucketStatus, HeadBucketErr};

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Probes the bucket with a head request.
    /// A bucket which does not exist is reported as [BucketStatus::NotFound], not as an error.
    #[tracing::instrument(skip(self))]
    pub async fn head_bucket(&self, bucket: &str) -> Result<BucketStatus, HeadBucketErr> {
        bucket::head_bucket(&self.inner, bucket).await
    }

    /// Creates the bucket in the region the client is configured for.
    #[tracing::instrument(skip(self))]
    pub async fn create_bucket(&self, bucket: &str) -> anyhow::Result<()> {
        bucket::create_bucket(&self.inner, bucket).await
    }

    /// Server side copy of an object from one bucket to another.
    /// Any object already at the destination is overwritten.
    #[tracing::instrument(skip(self))]
    pub async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> anyhow::Result<()> {
        copy::copy_object(
            &self.inner,
            source_bucket,
            source_key,
            destination_bucket,
            destination_key,
        )
        .await
    }
}
