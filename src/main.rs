use anyhow::{anyhow, Context, Result};
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use ec2_ami_backup::instances::CreatedImage;
use ec2_ami_backup::{app, client};
use lambda_runtime::{run, service_fn, LambdaEvent};
use serde::Serialize;

/// The invocation response: the images requested during this pass,
/// in issue order.
#[derive(Serialize)]
struct BackupReport {
    created: Vec<CreatedImage>,
}

/// Request an image of every instance tagged for backup. The
/// scheduled event that triggers the invocation carries no inputs.
async fn function_handler(_event: LambdaEvent<CloudWatchEvent>) -> Result<BackupReport> {
    let created = app::current()
        .handle(client::current())
        .await
        .context("Failed to complete the backup pass")?;
    Ok(BackupReport { created })
}

/// Run an AWS Lambda function that lists the EC2 instances carrying
/// the backup tag and requests creation of one image per instance.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
