use crate::model::{GroupRef, Id, StatusRef};
use serde::{Deserialize, Serialize};

/// One structured attribute of an asset object, as synchronized from the
/// catalog. The label-source flag is copied from the object type's schema;
/// exactly one attribute per object type carries it, an invariant owned by
/// the server and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub workspace_id: Id,
    pub global_id: Id,
    pub id: Id,
    pub object_type_attribute_id: Id,
    pub object_type_attribute_label: bool,
    pub object_attribute_values: Vec<AttributeValue>,
}

impl Attribute {
    pub fn is_label_source(&self) -> bool {
        self.object_type_attribute_label
    }
}

/// A single value of a structured attribute. `group` and `status` are
/// either fully present or absent, never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    pub value: String,
    pub display_value: String,
    pub search_value: String,
    pub additional_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRef>,
}

impl AttributeValue {
    /// A value as it would come back for a plain text attribute.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            display_value: value.clone(),
            search_value: value.clone(),
            additional_value: String::new(),
            group: None,
            status: None,
            value,
        }
    }
}

/// The flat, user-declared attribute shape: the schema attribute it fills
/// and the literal value strings, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredAttribute {
    pub object_type_attribute_id: Id,
    pub object_attribute_values: Vec<DeclaredValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredValue {
    pub value: String,
}

impl DeclaredAttribute {
    pub fn new(object_type_attribute_id: impl Into<Id>, values: &[&str]) -> Self {
        Self {
            object_type_attribute_id: object_type_attribute_id.into(),
            object_attribute_values: values
                .iter()
                .map(|v| DeclaredValue {
                    value: (*v).to_string(),
                })
                .collect(),
        }
    }
}

/// Request payload for object create/update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPayload {
    #[serde(rename = "objectTypeId")]
    pub object_type_id: Id,
    pub attributes: Vec<PayloadAttribute>,
    pub has_avatar: bool,
    #[serde(rename = "avatarUUID", skip_serializing_if = "Option::is_none")]
    pub avatar_uuid: Option<String>,
}

/// One attribute entry of the request payload: only the schema attribute id
/// and the literal value strings travel to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadAttribute {
    pub object_type_attribute_id: Id,
    pub object_attribute_values: Vec<PayloadAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadAttributeValue {
    pub value: String,
}
