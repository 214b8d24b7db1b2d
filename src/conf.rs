//! Defines configuration as read from the environment.

use serde::Deserialize;

/// Default `backup_tag_key` value.
fn default_backup_tag_key() -> String {
    String::from("Backup-AMI")
}

/// Default `backup_tag_value` value.
fn default_backup_tag_value() -> String {
    String::from("yes")
}

/// The backup trigger is configured to select EC2 instances by tag
/// and request one image per selected instance. The configuration
/// must be given as environment variables; with none set, the
/// selection is exactly `tag:Backup-AMI = yes`.
#[derive(Deserialize)]
pub struct Settings {
    /// Tag key that marks an instance for backup. The listing filter
    /// is built as `tag:<backup_tag_key>`.
    #[serde(default = "default_backup_tag_key")]
    pub backup_tag_key: String,

    /// Tag value an instance must carry under `backup_tag_key` to be
    /// selected.
    #[serde(default = "default_backup_tag_value")]
    pub backup_tag_value: String,

    /// Restores the historical scope of imaging only the instances in
    /// the first reservation group returned by the listing call.
    /// Reservations are a grouping artifact of the provider's API, so
    /// this silently skips instances when the listing spans more than
    /// one group. Off by default; every reservation group is scanned.
    #[serde(default)]
    pub first_reservation_only: bool,
}
