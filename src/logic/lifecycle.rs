use crate::config::Features;
use crate::error::SyncError;
use crate::logic::AttributeCodec;
use crate::model::{AssetObject, DeclaredAttribute, Id, ObjectPayload};

/// Value written to the fallback attribute when an object is retired
/// instead of removed.
pub const OBSOLETE_MARKER: &str = "Obsolete";

/// Deletion strategy, chosen once at configuration time rather than per
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePolicy {
    /// Remove the object from the catalog.
    HardDelete,
    /// Keep the object and mark it obsolete through the configured
    /// fallback attribute.
    SoftDelete { obsolete_attribute_id: Id },
}

/// The single remote call a delete resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteAction {
    Remove,
    MarkObsolete(ObjectPayload),
}

impl LifecyclePolicy {
    /// Select the policy from the provider features. Soft delete without a
    /// fallback attribute id fails here, before any apply is attempted.
    pub fn from_features(features: &Features) -> Result<Self, SyncError> {
        if features.destroy_object {
            return Ok(LifecyclePolicy::HardDelete);
        }

        if features.obsolete_attribute_id.is_empty() {
            return Err(SyncError::Configuration(
                "destroy_object is disabled but no obsolete object type attribute id is configured"
                    .to_string(),
            ));
        }

        Ok(LifecyclePolicy::SoftDelete {
            obsolete_attribute_id: features.obsolete_attribute_id.clone(),
        })
    }

    /// Resolve the delete of one object into its single remote call.
    pub fn delete_action(&self, prior: &AssetObject) -> Result<DeleteAction, SyncError> {
        match self {
            LifecyclePolicy::HardDelete => Ok(DeleteAction::Remove),
            LifecyclePolicy::SoftDelete {
                obsolete_attribute_id,
            } => {
                let synthesized =
                    vec![DeclaredAttribute::new(obsolete_attribute_id.clone(), &[OBSOLETE_MARKER])];

                Ok(DeleteAction::MarkObsolete(ObjectPayload {
                    object_type_id: prior.object_type_id.clone(),
                    attributes: AttributeCodec::encode(&synthesized)?,
                    has_avatar: false,
                    avatar_uuid: None,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn features(destroy_object: bool, obsolete_attribute_id: &str) -> Features {
        Features {
            destroy_object,
            obsolete_attribute_id: obsolete_attribute_id.to_string(),
        }
    }

    fn prior() -> AssetObject {
        AssetObject {
            workspace_id: "ws-1".into(),
            global_id: "g-42".into(),
            id: "42".into(),
            label: "Server A".into(),
            object_key: "ITSM-42".into(),
            object_type_id: "7".into(),
            created: Utc::now(),
            updated: Utc::now(),
            has_avatar: false,
            attributes: vec![],
            avatar: None,
            links: None,
        }
    }

    #[test]
    fn hard_delete_resolves_to_remove() {
        let policy = LifecyclePolicy::from_features(&features(true, "")).unwrap();
        assert_eq!(policy, LifecyclePolicy::HardDelete);
        assert_eq!(policy.delete_action(&prior()).unwrap(), DeleteAction::Remove);
    }

    #[test]
    fn soft_delete_builds_single_obsolete_attribute() {
        let policy = LifecyclePolicy::from_features(&features(false, "99")).unwrap();

        match policy.delete_action(&prior()).unwrap() {
            DeleteAction::MarkObsolete(payload) => {
                assert_eq!(payload.object_type_id, "7");
                assert_eq!(payload.attributes.len(), 1);
                assert_eq!(payload.attributes[0].object_type_attribute_id, "99");
                assert_eq!(payload.attributes[0].object_attribute_values.len(), 1);
                assert_eq!(
                    payload.attributes[0].object_attribute_values[0].value,
                    OBSOLETE_MARKER
                );
            }
            DeleteAction::Remove => panic!("expected soft delete payload"),
        }
    }

    #[test]
    fn soft_delete_without_fallback_id_fails_fast() {
        let err = LifecyclePolicy::from_features(&features(false, "")).unwrap_err();
        assert!(matches!(err, SyncError::Configuration(_)));
    }
}
