//! Raw response shapes of the remote catalog. Every field the server may
//! omit is optional here; `logic::codec` turns these into the structured
//! model types with explicit defaults.

use crate::model::{GroupRef, Id, ObjectLinks, StatusRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireObject {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub object_key: String,
    #[serde(default)]
    pub object_type: Option<WireObjectTypeRef>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_avatar: bool,
    /// Absent on create responses; a follow-up read returns them.
    #[serde(default)]
    pub attributes: Option<Vec<WireAttribute>>,
    #[serde(default)]
    pub avatar: Option<WireAvatar>,
    #[serde(rename = "_links", default)]
    pub links: Option<ObjectLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireObjectTypeRef {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAttribute {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub object_type_attribute_id: Id,
    /// Nested schema reference; the label-source flag lives here.
    #[serde(default)]
    pub object_type_attribute: Option<WireTypeAttributeRef>,
    #[serde(default)]
    pub object_attribute_values: Vec<WireAttributeValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireTypeAttributeRef {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAttributeValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub display_value: String,
    #[serde(default)]
    pub search_value: String,
    #[serde(default)]
    pub additional_value: String,
    #[serde(default)]
    pub group: Option<GroupRef>,
    #[serde(default)]
    pub status: Option<StatusRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAvatar {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(rename = "avatarUUID", default)]
    pub avatar_uuid: String,
    #[serde(default)]
    pub url16: String,
    #[serde(default)]
    pub url48: String,
    #[serde(default)]
    pub url72: String,
    #[serde(default)]
    pub url144: String,
    #[serde(default)]
    pub url288: String,
    #[serde(default)]
    pub object_id: Id,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireObjectType {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<WireIconRef>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object_count: i64,
    #[serde(default)]
    pub parent_object_type_id: Id,
    #[serde(default)]
    pub object_schema_id: Id,
    #[serde(default)]
    pub inherited: bool,
    #[serde(default)]
    pub abstract_object_type: bool,
    #[serde(default)]
    pub parent_object_type_inherited: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireObjectSchema {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub object_schema_key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object_count: i64,
    #[serde(default)]
    pub object_type_count: i64,
    #[serde(default)]
    pub can_manage: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireIconRef {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireObjectTypeAttribute {
    #[serde(default)]
    pub workspace_id: Id,
    #[serde(default)]
    pub global_id: Id,
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: bool,
    #[serde(rename = "type", default)]
    pub attribute_type: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub minimum_cardinality: i64,
    #[serde(default)]
    pub maximum_cardinality: i64,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub unique_attribute: bool,
}
