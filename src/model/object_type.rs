use crate::model::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema definition for a class of asset objects: which attributes exist
/// and where objects of this type are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    pub name: String,
    pub description: String,
    pub icon_id: Id,
    pub position: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub object_count: i64,
    pub parent_object_type_id: Id,
    pub object_schema_id: Id,
    pub inherited: bool,
    pub abstract_object_type: bool,
    pub parent_object_type_inherited: bool,
}

/// Request payload for object type create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypePayload {
    pub name: String,
    pub description: String,
    pub icon_id: Id,
    pub object_schema_id: Id,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub parent_object_type_id: Id,
    pub inherited: bool,
    pub abstract_object_type: bool,
}

/// Request payload for schema attribute create/update calls. Only the
/// fields a caller declares travel to the server; identity and the
/// system/editable flags are server-owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypeAttributePayload {
    pub name: String,
    pub label: bool,
    #[serde(rename = "type")]
    pub attribute_type: i64,
    pub description: String,
    pub minimum_cardinality: i64,
    pub maximum_cardinality: i64,
    pub unique_attribute: bool,
}

/// One schema-level attribute definition of an object type. `label` marks
/// the single attribute whose value is the object's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypeAttribute {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    pub name: String,
    pub label: bool,
    pub attribute_type: i64,
    pub description: String,
    pub minimum_cardinality: i64,
    pub maximum_cardinality: i64,
    pub editable: bool,
    pub system: bool,
    pub hidden: bool,
    pub unique_attribute: bool,
}
