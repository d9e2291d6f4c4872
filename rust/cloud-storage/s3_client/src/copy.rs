use anyhow::Context;

#[tracing::instrument(skip(client))]
pub(crate) async fn copy_object(
    client: &aws_sdk_s3::Client,
    source_bucket: &str,
    source_key: &str,
    destination_bucket: &str,
    destination_key: &str,
) -> anyhow::Result<()> {
    client
        .copy_object()
        .bucket(destination_bucket)
        .copy_source(copy_source(source_bucket, source_key))
        .key(destination_key)
        .send()
        .await
        .context(format!(
            "could not copy {source_bucket}/{source_key} to {destination_bucket}/{destination_key}"
        ))?;

    Ok(())
}

/// The copy source header must be url encoded, but the path separators stay literal
fn copy_source(bucket: &str, key: &str) -> String {
    let key = key
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");
    format!("{bucket}/{key}")
}
