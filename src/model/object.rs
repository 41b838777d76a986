use crate::model::{Attribute, DeclaredAttribute, Id, ObjectLinks};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synchronized asset object, constructed fresh from each remote read
/// or plan evaluation. Immutable within a reconciliation pass; resolution
/// produces a new object rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetObject {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    /// Fetched from whichever attribute is currently marked as the label
    /// source for this object's type.
    pub label: String,
    /// The external identifier for this object, e.g. "ITSM-1".
    pub object_key: String,
    pub object_type_id: Id,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub has_avatar: bool,
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ObjectLinks>,
}

impl AssetObject {
    /// The single attribute flagged as the label source, if any.
    pub fn label_source_attribute(&self) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is_label_source())
    }

    /// The avatar identity, or the empty string when no avatar is attached.
    pub fn avatar_uuid(&self) -> &str {
        self.avatar
            .as_ref()
            .map(|a| a.avatar_uuid.as_str())
            .unwrap_or("")
    }
}

/// Avatar image reference. The fields form an atomic group: they are
/// replaced as a whole or not at all, never updated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    pub avatar_uuid: String,
    pub url16: String,
    pub url48: String,
    pub url72: String,
    pub url144: String,
    pub url288: String,
    pub object_id: Id,
}

/// The proposed desired state for one object instance: everything a user
/// declares directly. Label and avatar are derived, never declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPlan {
    pub object_type_id: Id,
    pub attributes: Vec<DeclaredAttribute>,
    #[serde(default)]
    pub has_avatar: bool,
    /// `None` means the avatar identity is not yet known for this plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_uuid: Option<String>,
}
