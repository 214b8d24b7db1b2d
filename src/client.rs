//! Defines the global EC2 client.

use anyhow::{anyhow, Context, Result};
use aws_config::from_env;
use aws_sdk_ec2::types::{Filter, Reservation};
use aws_sdk_ec2::Client;
use once_cell::sync::OnceCell;
use std::env;

/// Lists the reservation groups holding the instances that carry the
/// given tag. A single page of results is requested; `filter_name`
/// must already be in the provider's `tag:<key>` form.
pub async fn list_tagged_reservations(
    client: &Client,
    filter_name: &str,
    filter_value: &str,
) -> Result<Vec<Reservation>> {
    let response = client
        .describe_instances()
        .filters(
            Filter::builder()
                .name(filter_name)
                .values(filter_value)
                .build(),
        )
        .send()
        .await
        .with_context(|| {
            format!(
                "Failed to list instances tagged {:?} = {:?}",
                filter_name, filter_value
            )
        })?;
    Ok(response.reservations().unwrap_or_default().to_vec())
}

/// Requests creation of an image of a single instance under the given
/// name. Returns the identifier of the image the provider starts
/// assembling; completion is not awaited.
pub async fn create_image(client: &Client, instance_id: &str, name: &str) -> Result<String> {
    let response = client
        .create_image()
        .instance_id(instance_id)
        .name(name)
        .send()
        .await
        .with_context(|| {
            format!(
                "Failed to create image {:?} for instance {:?}",
                name, instance_id
            )
        })?;
    Ok(response.image_id().unwrap_or_default().to_string())
}

/// Global EC2 client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Initialize the global EC2 client.
pub async fn init() -> Result<()> {
    let endpoint_url_var = env::var("AWS_ENDPOINT_URL");
    let ec2_config = if let Ok(endpoint_url) = endpoint_url_var {
        from_env()
            .endpoint_url(
                if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
                    endpoint_url
                } else {
                    format!("https://{}", endpoint_url)
                },
            )
            .region("us-east-1") // should be OK since the endpoint was overridden
            .load()
    } else {
        from_env().load()
    }
    .await;
    let client = Client::new(&ec2_config);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current EC2 client instance, or panic if it hasn't been initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}
