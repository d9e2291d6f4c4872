use anyhow::Context;

use super::s3::S3;
use crate::model::ObjectRef;

/// Copies the object server side, overwriting whatever is at the destination
pub(crate) async fn copy_object(
    s3: &S3,
    source: &ObjectRef,
    destination: &ObjectRef,
) -> anyhow::Result<()> {
    s3.copy_object(source, destination)
        .await
        .context(format!("could not copy {source} to {destination}"))?;
    tracing::info!(%source, %destination, "copied object");
    Ok(())
}
