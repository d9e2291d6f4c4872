use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result of a successful bucket probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    /// The bucket exists and the caller can access it
    Exists,
    /// S3 confirmed the bucket does not exist
    NotFound,
}

/// A bucket probe which could not determine whether the bucket exists
#[derive(Debug, Error)]
pub enum HeadBucketErr {
    /// The bucket exists but belongs to someone else, or the caller lacks permission to probe it
    #[error("access denied to bucket {bucket}")]
    AccessDenied { bucket: String },
    /// Wrong region, throttling, network failure etc.
    #[error("failed to perform head bucket operation on {bucket}")]
    Other {
        bucket: String,
        #[source]
        source: BoxError,
    },
}

/// Maps a failed head bucket request onto a [BucketStatus] or a [HeadBucketErr].
/// `not_found` is whether the sdk modelled the error as NotFound, `status` is the raw http status if a response was received.
pub(crate) fn classify_head_bucket_failure(
    bucket: &str,
    not_found: bool,
    status: Option<u16>,
    source: BoxError,
) -> Result<BucketStatus, HeadBucketErr> {
    match (not_found, status) {
        (true, _) | (_, Some(404)) => Ok(BucketStatus::NotFound),
        (_, Some(403)) => Err(HeadBucketErr::AccessDenied {
            bucket: bucket.to_string(),
        }),
        _ => Err(HeadBucketErr::Other {
            bucket: bucket.to_string(),
            source,
        }),
    }
}
