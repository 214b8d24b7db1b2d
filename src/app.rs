//! Defines the read-only application state and hub for utility
//! functions.

use crate::client;
use crate::conf::Settings;
use crate::instances::{BackupTarget, CreatedImage};
use anyhow::{anyhow, Result};
use envy::from_env;
use once_cell::sync::OnceCell;
use tracing::{info, instrument};

/// An App is an initialized application state, derived from
/// settings. This is only useful to pre-compute stuff that will be
/// used constantly.
pub struct App {
    /// The original settings.
    pub settings: Settings,

    /// The listing filter name, in the provider's `tag:<key>` form.
    pub tag_filter_name: String,
}

impl App {
    /// Initialize an App instance given a settings struct. Consumes
    /// the settings struct.
    pub fn new(settings: Settings) -> Result<Self> {
        if settings.backup_tag_key.is_empty() {
            return Err(anyhow!("backup tag key must not be empty"));
        }
        let tag_filter_name = format!("tag:{}", settings.backup_tag_key);
        Ok(App {
            settings,
            tag_filter_name,
        })
    }

    /// Run one backup pass: list the tagged instances and request one
    /// image per instance, in listing order. The first failed request
    /// aborts the pass; targets after it are not attempted.
    #[instrument(skip(self, client))]
    pub async fn handle(&self, client: &aws_sdk_ec2::Client) -> Result<Vec<CreatedImage>> {
        let reservations = client::list_tagged_reservations(
            client,
            &self.tag_filter_name,
            &self.settings.backup_tag_value,
        )
        .await?;
        let targets =
            BackupTarget::from_reservations(&reservations, self.settings.first_reservation_only);
        let mut created = Vec::with_capacity(targets.len());
        for target in targets {
            info!("creating image for instance {}", target.instance_id);
            let image_name = target.image_name();
            let image_id = client::create_image(client, &target.instance_id, &image_name).await?;
            created.push(CreatedImage {
                instance_id: target.instance_id,
                image_name,
                image_id,
            });
        }
        Ok(created)
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env()?;
    let app = App::new(settings)?;
    CURRENT
        .set(app)
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}
