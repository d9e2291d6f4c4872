use anyhow::Context;
use aws_sdk_s3 as s3;
use s3::config::http::HttpResponse;
use s3::error::SdkError;
use s3::operation::head_bucket::HeadBucketError;
use s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::error::{BucketStatus, HeadBucketErr, classify_head_bucket_failure};

/// S3 rejects a location constraint of us-east-1, it is the implicit default
const DEFAULT_REGION: &str = "us-east-1";

/// Checks if the bucket exists and is accessible
#[tracing::instrument(skip(client))]
pub(crate) async fn head_bucket(
    client: &s3::Client,
    bucket: &str,
) -> Result<BucketStatus, HeadBucketErr> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(BucketStatus::Exists),
        Err(e) => from_sdk_error(bucket, e),
    }
}

fn from_sdk_error(
    bucket: &str,
    e: SdkError<HeadBucketError, HttpResponse>,
) -> Result<BucketStatus, HeadBucketErr> {
    let not_found = e.as_service_error().map(|e| e.is_not_found()) == Some(true);
    let status = e.raw_response().map(|r| r.status().as_u16());
    tracing::trace!(not_found, ?status, "head bucket failed");

    classify_head_bucket_failure(bucket, not_found, status, Box::new(e))
}

/// Creates the bucket, pinning it to the region of the client
#[tracing::instrument(skip(client))]
pub(crate) async fn create_bucket(client: &s3::Client, bucket: &str) -> anyhow::Result<()> {
    let region = client.config().region().map(|r| r.as_ref().to_string());

    client
        .create_bucket()
        .bucket(bucket)
        .set_create_bucket_configuration(bucket_configuration(region.as_deref()))
        .send()
        .await
        .context(format!("could not create bucket {bucket}"))?;

    Ok(())
}

fn bucket_configuration(region: Option<&str>) -> Option<CreateBucketConfiguration> {
    match region {
        None | Some(DEFAULT_REGION) => None,
        Some(region) => Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;
    use cool_asserts::assert_matches;
    use s3::error::ErrorMetadata;
    use s3::types::error::NotFound;

    fn response(status: u16) -> HttpResponse {
        HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
    }

    fn unmodelled(code: &str) -> HeadBucketError {
        HeadBucketError::generic(ErrorMetadata::builder().code(code).build())
    }

    #[test]
    fn modelled_not_found_maps_to_not_found() {
        let e = SdkError::service_error(
            HeadBucketError::NotFound(NotFound::builder().build()),
            response(404),
        );
        assert_eq!(
            from_sdk_error("my-bucket", e).unwrap(),
            BucketStatus::NotFound
        );
    }

    #[test]
    fn unmodelled_404_maps_to_not_found() {
        let e = SdkError::service_error(unmodelled("NoSuchBucket"), response(404));
        assert_eq!(
            from_sdk_error("my-bucket", e).unwrap(),
            BucketStatus::NotFound
        );
    }

    #[test]
    fn unmodelled_403_maps_to_access_denied() {
        let e = SdkError::service_error(unmodelled("Forbidden"), response(403));
        assert_matches!(
            from_sdk_error("my-bucket", e),
            Err(HeadBucketErr::AccessDenied { bucket }) => {
                assert_eq!(bucket, "my-bucket");
            }
        );
    }

    #[test]
    fn server_errors_and_timeouts_map_to_other() {
        let e = SdkError::service_error(unmodelled("InternalError"), response(500));
        assert_matches!(
            from_sdk_error("my-bucket", e),
            Err(HeadBucketErr::Other { .. })
        );

        let e: SdkError<HeadBucketError, HttpResponse> = SdkError::timeout_error("too slow");
        assert_matches!(
            from_sdk_error("my-bucket", e),
            Err(HeadBucketErr::Other { .. })
        );
    }

    #[test]
    fn us_east_1_has_no_location_constraint() {
        assert!(bucket_configuration(Some("us-east-1")).is_none());
        assert!(bucket_configuration(None).is_none());
    }

    #[test]
    fn other_regions_are_pinned() {
        let config = bucket_configuration(Some("eu-west-1")).unwrap();
        assert_eq!(
            config.location_constraint(),
            Some(&BucketLocationConstraint::EuWest1)
        );
    }
}
