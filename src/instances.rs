//! Defines a _backup target_, the unit of work for one invocation.
//! Targets are built from the reservation groups returned by the
//! instance listing.

use aws_sdk_ec2::types::Reservation;
use serde::Serialize;

/// An instance selected for imaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupTarget {
    /// The provider-assigned instance identifier.
    pub instance_id: String,
}

impl BackupTarget {
    /// Builds the vector of targets from the reservation groups of a
    /// listing response, in listing order. Instances the provider
    /// returns without an identifier are skipped. With
    /// `first_reservation_only`, groups beyond the first are ignored,
    /// reproducing the historical scope.
    pub fn from_reservations(reservations: &[Reservation], first_reservation_only: bool) -> Vec<Self> {
        let selected = if first_reservation_only {
            reservations.get(..1).unwrap_or_default()
        } else {
            reservations
        };
        selected
            .iter()
            .flat_map(|reservation| reservation.instances().unwrap_or_default())
            .filter_map(|instance| instance.instance_id().map(String::from))
            .map(|instance_id| BackupTarget { instance_id })
            .collect()
    }

    /// The deterministic name of the image requested for this target.
    /// Repeated invocations derive the same name for the same
    /// instance; uniqueness is not enforced here.
    pub fn image_name(&self) -> String {
        format!("Image for instance {}", self.instance_id)
    }
}

/// The recorded outcome of one image-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedImage {
    /// The instance the image was requested for.
    pub instance_id: String,

    /// The name the image was requested under.
    pub image_name: String,

    /// The image identifier returned by the provider. Creation
    /// continues provider-side after this is handed out.
    pub image_id: String,
}

#[cfg(test)]
mod tests {
    use super::BackupTarget;
    use aws_sdk_ec2::types::{Instance, Reservation};

    fn reservation(instance_ids: &[&str]) -> Reservation {
        let mut builder = Reservation::builder();
        for instance_id in instance_ids {
            builder = builder.instances(Instance::builder().instance_id(*instance_id).build());
        }
        builder.build()
    }

    #[test]
    fn no_reservations_yield_no_targets() {
        assert!(BackupTarget::from_reservations(&[], false).is_empty());
        assert!(BackupTarget::from_reservations(&[], true).is_empty());
    }

    #[test]
    fn targets_keep_listing_order() {
        let reservations = vec![reservation(&["i-1", "i-2"])];
        let targets = BackupTarget::from_reservations(&reservations, false);
        assert_eq!(
            targets,
            vec![
                BackupTarget {
                    instance_id: String::from("i-1")
                },
                BackupTarget {
                    instance_id: String::from("i-2")
                },
            ]
        );
    }

    #[test]
    fn all_reservation_groups_are_scanned_by_default() {
        let reservations = vec![reservation(&["i-1", "i-2"]), reservation(&["i-3"])];
        let targets = BackupTarget::from_reservations(&reservations, false);
        assert_eq!(
            targets
                .iter()
                .map(|target| target.instance_id.as_str())
                .collect::<Vec<_>>(),
            vec!["i-1", "i-2", "i-3"]
        );
    }

    #[test]
    fn first_reservation_only_ignores_later_groups() {
        let reservations = vec![reservation(&["i-1", "i-2"]), reservation(&["i-3"])];
        let targets = BackupTarget::from_reservations(&reservations, true);
        assert_eq!(
            targets
                .iter()
                .map(|target| target.instance_id.as_str())
                .collect::<Vec<_>>(),
            vec!["i-1", "i-2"]
        );
    }

    #[test]
    fn instances_without_an_id_are_skipped() {
        let reservations = vec![Reservation::builder()
            .instances(Instance::builder().build())
            .instances(Instance::builder().instance_id("i-1").build())
            .build()];
        let targets = BackupTarget::from_reservations(&reservations, false);
        assert_eq!(
            targets,
            vec![BackupTarget {
                instance_id: String::from("i-1")
            }]
        );
    }

    #[test]
    fn image_names_are_derived_from_the_instance_id() {
        let target = BackupTarget {
            instance_id: String::from("i-1234567890abcdef0"),
        };
        assert_eq!(target.image_name(), "Image for instance i-1234567890abcdef0");
    }
}
