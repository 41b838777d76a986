use crate::model::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level container for object types and their objects. Schemas own the
/// `object_schema_id` that object types reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    pub name: String,
    pub object_schema_key: String,
    pub description: String,
    pub status: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub object_count: i64,
    pub object_type_count: i64,
    pub can_manage: bool,
}

/// Request payload for schema create/update calls. The key is fixed at
/// create time; the server ignores it on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchemaPayload {
    pub name: String,
    pub object_schema_key: String,
    pub description: String,
}
