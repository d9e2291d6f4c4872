#![recursion_limit = "256"]

use anyhow::Context;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use bucket_copy_handler::{config::Config, entrypoint, handler, model::CopyRequest, service::s3};
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

const DEFAULT_REGION: &str = "us-east-1";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let init = entrypoint::init();

    tracing::trace!(environment = ?init.environment(), "initiating lambda");

    let config = Config::from_env().context("invalid configuration")?;
    tracing::trace!(?config, "initialized config");

    let region = RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let s3_client = s3::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let shared_s3_client = &s3_client;
    let shared_config = &config;

    let func = service_fn(move |event: LambdaEvent<CopyRequest>| async move {
        handler::handler(shared_s3_client, shared_config, event).await
    });

    run(func).await
}
