pub mod s3;

mod bucket;
mod copy;


use ensure_exists::EnsureExists;
use s3_client::HeadBucketErr;
use thiserror::Error;

use crate::model::{CopyOutcome, CopyPlan};
use bucket::Bucket;
use s3::S3;

/// The error that is produced when an invocation cannot complete
#[derive(Debug, Error)]
pub enum CopyErr {
    /// It could not be determined whether a bucket exists, so nothing was created
    #[error(transparent)]
    Probe(#[from] HeadBucketErr),
    /// Creating a bucket or copying the object failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Ensures the source bucket and then the destination bucket exist, then copies the object between them.
/// Buckets created before a later failure are left in place.
#[tracing::instrument(skip_all, fields(source = %plan.source, destination = %plan.destination))]
pub async fn copy_between_buckets(s3: &S3, plan: CopyPlan) -> Result<CopyOutcome, CopyErr> {
    let mut created_buckets = Vec::new();

    for name in [&plan.source.bucket, &plan.destination.bucket] {
        let bucket = Bucket::new(s3, name).ensure_exists().await?;
        if bucket.was_created() {
            created_buckets.push(bucket.into_inner());
        }
    }

    copy::copy_object(s3, &plan.source, &plan.destination).await?;

    Ok(CopyOutcome {
        source: plan.source,
        destination: plan.destination,
        created_buckets,
    })
}
