use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{
    config::Config,
    model::{CopyOutcome, CopyPlan, CopyRequest},
    service::{self, s3::S3},
};

/// Processes a single invocation.
/// References missing from the event fall back to the ones in [Config].
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    s3: &S3,
    config: &Config,
    event: LambdaEvent<CopyRequest>,
) -> Result<CopyOutcome, Error> {
    let plan = CopyPlan::resolve(config, event.payload);

    let outcome = service::copy_between_buckets(s3, plan)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "could not copy object");
            Error::from(e)
        })?;

    tracing::info!(
        created_buckets = outcome.created_buckets.len(),
        "processing complete"
    );

    Ok(outcome)
}
