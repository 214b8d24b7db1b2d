use anyhow::{Context, Result};
use ec2_ami_backup::{app, client};

/// Run one backup pass outside of Lambda, printing the images
/// requested as JSON.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    let created = app::current()
        .handle(client::current())
        .await
        .context("Failed to complete the backup pass")?;
    println!("{}", serde_json::to_string_pretty(&created)?);

    Ok(())
}
