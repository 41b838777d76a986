use serde::{Deserialize, Serialize};

pub type Id = String;

/// Hypermedia links returned alongside an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Nested group reference inside an attribute value. Either the whole
/// reference is present or it is absent; a present reference always carries
/// both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub avatar_url: String,
    pub name: String,
}

/// Nested status reference inside an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: Id,
    pub name: String,
    pub category: i64,
}
