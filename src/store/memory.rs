//! In-memory catalog used by unit and integration tests. Behaves like the
//! remote service for the operations this crate issues and records every
//! call so tests can assert exact call counts.

use crate::model::{
    Id, ObjectLinks, ObjectPayload, ObjectSchemaPayload, ObjectTypeAttributePayload,
    ObjectTypePayload, WireAttribute, WireAttributeValue, WireAvatar, WireObject,
    WireObjectSchema, WireObjectType, WireObjectTypeAttribute, WireObjectTypeRef,
    WireTypeAttributeRef,
};
use anyhow::{anyhow, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    GetObject(Id),
    CreateObject,
    UpdateObject(Id),
    DeleteObject(Id),
    GetObjectType(Id),
    CreateObjectType,
    UpdateObjectType(Id),
    DeleteObjectType(Id),
    ListObjectTypeAttributes(Id),
    CreateObjectTypeAttribute(Id),
    UpdateObjectTypeAttribute(Id),
    DeleteObjectTypeAttribute(Id),
    GetObjectSchema(Id),
    CreateObjectSchema,
    UpdateObjectSchema(Id),
    DeleteObjectSchema(Id),
}

#[derive(Default)]
pub struct MemoryCatalog {
    objects: RwLock<HashMap<Id, WireObject>>,
    object_types: RwLock<HashMap<Id, WireObjectType>>,
    type_attributes: RwLock<HashMap<Id, Vec<WireObjectTypeAttribute>>>,
    object_schemas: RwLock<HashMap<Id, WireObjectSchema>>,
    next_id: RwLock<u64>,
    calls: RwLock<Vec<CatalogCall>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema attribute for an object type. `label` marks the
    /// attribute whose value becomes the object label.
    pub fn register_type_attribute(
        &self,
        object_type_id: &str,
        attribute_id: &str,
        name: &str,
        label: bool,
    ) {
        self.type_attributes
            .write()
            .entry(object_type_id.to_string())
            .or_default()
            .push(WireObjectTypeAttribute {
                workspace_id: "ws-mem".into(),
                global_id: format!("gta-{}", attribute_id),
                id: attribute_id.to_string(),
                name: name.to_string(),
                label,
                attribute_type: 0,
                editable: true,
                minimum_cardinality: if label { 1 } else { 0 },
                maximum_cardinality: 1,
                ..Default::default()
            });
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.read().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.write().clear();
    }

    fn record(&self, call: CatalogCall) {
        self.calls.write().push(call);
    }

    fn allocate_id(&self) -> Id {
        let mut next = self.next_id.write();
        *next += 1;
        next.to_string()
    }

    /// Expand a request payload into the structured attribute shape the
    /// server would return, including server-computed value fields.
    fn materialize(&self, workspace_id: &str, object_id: &Id, payload: &ObjectPayload) -> WireObject {
        let registry = self.type_attributes.read();
        let type_attrs = registry.get(&payload.object_type_id);
        let label_id = type_attrs
            .and_then(|attrs| attrs.iter().find(|a| a.label))
            .map(|a| a.id.clone());

        let attributes: Vec<WireAttribute> = payload
            .attributes
            .iter()
            .enumerate()
            .map(|(i, attr)| {
                let schema_ref = type_attrs
                    .and_then(|attrs| {
                        attrs.iter().find(|a| a.id == attr.object_type_attribute_id)
                    })
                    .map(|a| WireTypeAttributeRef {
                        id: a.id.clone(),
                        name: a.name.clone(),
                        label: a.label,
                    });

                WireAttribute {
                    workspace_id: workspace_id.to_string(),
                    global_id: format!("ga-{}-{}", object_id, i),
                    id: format!("{}-{}", object_id, i),
                    object_type_attribute_id: attr.object_type_attribute_id.clone(),
                    object_type_attribute: schema_ref,
                    object_attribute_values: attr
                        .object_attribute_values
                        .iter()
                        .map(|v| WireAttributeValue {
                            value: v.value.clone(),
                            display_value: v.value.clone(),
                            search_value: v.value.to_lowercase(),
                            ..Default::default()
                        })
                        .collect(),
                }
            })
            .collect();

        let label = label_id
            .and_then(|id| {
                payload
                    .attributes
                    .iter()
                    .find(|a| a.object_type_attribute_id == id)
            })
            .and_then(|a| a.object_attribute_values.first())
            .map(|v| v.value.clone())
            .unwrap_or_default();

        let avatar = payload
            .avatar_uuid
            .as_ref()
            .filter(|uuid| !uuid.is_empty())
            .map(|uuid| WireAvatar {
                workspace_id: workspace_id.to_string(),
                global_id: format!("gav-{}", object_id),
                avatar_uuid: uuid.clone(),
                url16: format!("https://catalog.test/avatar/{}/16.png", uuid),
                url48: format!("https://catalog.test/avatar/{}/48.png", uuid),
                url72: format!("https://catalog.test/avatar/{}/72.png", uuid),
                url144: format!("https://catalog.test/avatar/{}/144.png", uuid),
                url288: format!("https://catalog.test/avatar/{}/288.png", uuid),
                object_id: object_id.clone(),
            });

        let now = Utc::now();
        WireObject {
            workspace_id: workspace_id.to_string(),
            global_id: Uuid::new_v4().to_string(),
            id: object_id.clone(),
            label,
            object_key: format!("KEY-{}", object_id),
            object_type: Some(WireObjectTypeRef {
                id: payload.object_type_id.clone(),
                name: String::new(),
            }),
            created: Some(now),
            updated: Some(now),
            has_avatar: avatar.is_some(),
            attributes: Some(attributes),
            avatar,
            links: Some(ObjectLinks {
                self_link: format!("https://catalog.test/object/{}", object_id),
            }),
        }
    }
}

#[async_trait::async_trait]
impl super::ObjectStore for MemoryCatalog {
    async fn get_object(&self, _workspace_id: &str, object_id: &Id) -> Result<Option<WireObject>> {
        self.record(CatalogCall::GetObject(object_id.clone()));
        Ok(self.objects.read().get(object_id).cloned())
    }

    async fn create_object(
        &self,
        workspace_id: &str,
        payload: &ObjectPayload,
    ) -> Result<WireObject> {
        self.record(CatalogCall::CreateObject);
        let id = self.allocate_id();
        let object = self.materialize(workspace_id, &id, payload);
        self.objects.write().insert(id, object.clone());

        // Create responses omit attributes, like the real service; callers
        // re-read by id to get them.
        Ok(WireObject {
            attributes: None,
            ..object
        })
    }

    async fn update_object(
        &self,
        workspace_id: &str,
        object_id: &Id,
        payload: &ObjectPayload,
    ) -> Result<WireObject> {
        self.record(CatalogCall::UpdateObject(object_id.clone()));
        let existing = self
            .objects
            .read()
            .get(object_id)
            .cloned()
            .ok_or_else(|| anyhow!("object '{}' not found", object_id))?;

        let mut updated = self.materialize(workspace_id, object_id, payload);
        updated.global_id = existing.global_id;
        updated.object_key = existing.object_key;
        updated.created = existing.created;
        // Partial updates leave attributes the payload does not mention in
        // place, so an obsolete marker never wipes the label.
        if let (Some(prior_attrs), Some(new_attrs)) = (&existing.attributes, &mut updated.attributes)
        {
            let mentioned: Vec<&Id> = new_attrs
                .iter()
                .map(|a| &a.object_type_attribute_id)
                .collect();
            let mut merged: Vec<WireAttribute> = prior_attrs
                .iter()
                .filter(|a| !mentioned.contains(&&a.object_type_attribute_id))
                .cloned()
                .collect();
            merged.append(new_attrs);
            updated.attributes = Some(merged);
            if updated.label.is_empty() {
                updated.label = existing.label;
            }
        }

        self.objects.write().insert(object_id.clone(), updated.clone());
        Ok(updated)
    }

    async fn delete_object(&self, _workspace_id: &str, object_id: &Id) -> Result<()> {
        self.record(CatalogCall::DeleteObject(object_id.clone()));
        self.objects
            .write()
            .remove(object_id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("object '{}' not found", object_id))
    }
}

#[async_trait::async_trait]
impl super::ObjectTypeStore for MemoryCatalog {
    async fn get_object_type(
        &self,
        _workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Option<WireObjectType>> {
        self.record(CatalogCall::GetObjectType(object_type_id.clone()));
        Ok(self.object_types.read().get(object_type_id).cloned())
    }

    async fn create_object_type(
        &self,
        workspace_id: &str,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType> {
        self.record(CatalogCall::CreateObjectType);
        let id = self.allocate_id();
        let now = Utc::now();
        let object_type = WireObjectType {
            workspace_id: workspace_id.to_string(),
            global_id: Uuid::new_v4().to_string(),
            id: id.clone(),
            name: payload.name.clone(),
            description: payload.description.clone(),
            icon: Some(crate::model::WireIconRef {
                id: payload.icon_id.clone(),
                name: String::new(),
            }),
            created: Some(now),
            updated: Some(now),
            parent_object_type_id: payload.parent_object_type_id.clone(),
            object_schema_id: payload.object_schema_id.clone(),
            inherited: payload.inherited,
            abstract_object_type: payload.abstract_object_type,
            ..Default::default()
        };
        self.object_types.write().insert(id, object_type.clone());
        Ok(object_type)
    }

    async fn update_object_type(
        &self,
        _workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType> {
        self.record(CatalogCall::UpdateObjectType(object_type_id.clone()));
        let mut types = self.object_types.write();
        let object_type = types
            .get_mut(object_type_id)
            .ok_or_else(|| anyhow!("object type '{}' not found", object_type_id))?;

        object_type.name = payload.name.clone();
        object_type.description = payload.description.clone();
        object_type.icon = Some(crate::model::WireIconRef {
            id: payload.icon_id.clone(),
            name: String::new(),
        });
        object_type.inherited = payload.inherited;
        object_type.abstract_object_type = payload.abstract_object_type;
        object_type.updated = Some(Utc::now());
        Ok(object_type.clone())
    }

    async fn delete_object_type(&self, _workspace_id: &str, object_type_id: &Id) -> Result<()> {
        self.record(CatalogCall::DeleteObjectType(object_type_id.clone()));
        self.object_types
            .write()
            .remove(object_type_id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("object type '{}' not found", object_type_id))
    }

    async fn list_object_type_attributes(
        &self,
        _workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Vec<WireObjectTypeAttribute>> {
        self.record(CatalogCall::ListObjectTypeAttributes(object_type_id.clone()));
        Ok(self
            .type_attributes
            .read()
            .get(object_type_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_object_type_attribute(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute> {
        self.record(CatalogCall::CreateObjectTypeAttribute(object_type_id.clone()));
        let id = self.allocate_id();
        let attribute = WireObjectTypeAttribute {
            workspace_id: workspace_id.to_string(),
            global_id: format!("gta-{}", id),
            id: id.clone(),
            name: payload.name.clone(),
            label: payload.label,
            attribute_type: payload.attribute_type,
            description: payload.description.clone(),
            minimum_cardinality: payload.minimum_cardinality,
            maximum_cardinality: payload.maximum_cardinality,
            unique_attribute: payload.unique_attribute,
            editable: true,
            ..Default::default()
        };
        self.type_attributes
            .write()
            .entry(object_type_id.clone())
            .or_default()
            .push(attribute.clone());
        Ok(attribute)
    }

    async fn update_object_type_attribute(
        &self,
        _workspace_id: &str,
        object_type_id: &Id,
        attribute_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute> {
        self.record(CatalogCall::UpdateObjectTypeAttribute(attribute_id.clone()));
        let mut registry = self.type_attributes.write();
        let attributes = registry
            .get_mut(object_type_id)
            .ok_or_else(|| anyhow!("object type '{}' not found", object_type_id))?;
        let attribute = attributes
            .iter_mut()
            .find(|a| &a.id == attribute_id)
            .ok_or_else(|| anyhow!("object type attribute '{}' not found", attribute_id))?;

        attribute.name = payload.name.clone();
        attribute.label = payload.label;
        attribute.attribute_type = payload.attribute_type;
        attribute.description = payload.description.clone();
        attribute.minimum_cardinality = payload.minimum_cardinality;
        attribute.maximum_cardinality = payload.maximum_cardinality;
        attribute.unique_attribute = payload.unique_attribute;
        Ok(attribute.clone())
    }

    async fn delete_object_type_attribute(
        &self,
        _workspace_id: &str,
        attribute_id: &Id,
    ) -> Result<()> {
        self.record(CatalogCall::DeleteObjectTypeAttribute(attribute_id.clone()));
        let mut registry = self.type_attributes.write();
        for attributes in registry.values_mut() {
            if let Some(index) = attributes.iter().position(|a| &a.id == attribute_id) {
                attributes.remove(index);
                return Ok(());
            }
        }
        Err(anyhow!("object type attribute '{}' not found", attribute_id))
    }
}

#[async_trait::async_trait]
impl super::ObjectSchemaStore for MemoryCatalog {
    async fn get_object_schema(
        &self,
        _workspace_id: &str,
        schema_id: &Id,
    ) -> Result<Option<WireObjectSchema>> {
        self.record(CatalogCall::GetObjectSchema(schema_id.clone()));
        Ok(self.object_schemas.read().get(schema_id).cloned())
    }

    async fn create_object_schema(
        &self,
        workspace_id: &str,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema> {
        self.record(CatalogCall::CreateObjectSchema);
        let id = self.allocate_id();
        let now = Utc::now();
        let schema = WireObjectSchema {
            workspace_id: workspace_id.to_string(),
            global_id: Uuid::new_v4().to_string(),
            id: id.clone(),
            name: payload.name.clone(),
            object_schema_key: payload.object_schema_key.clone(),
            description: payload.description.clone(),
            status: "Ok".to_string(),
            created: Some(now),
            updated: Some(now),
            object_count: 0,
            object_type_count: 0,
            can_manage: true,
        };
        self.object_schemas.write().insert(id, schema.clone());
        Ok(schema)
    }

    async fn update_object_schema(
        &self,
        _workspace_id: &str,
        schema_id: &Id,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema> {
        self.record(CatalogCall::UpdateObjectSchema(schema_id.clone()));
        let mut schemas = self.object_schemas.write();
        let schema = schemas
            .get_mut(schema_id)
            .ok_or_else(|| anyhow!("object schema '{}' not found", schema_id))?;

        schema.name = payload.name.clone();
        schema.description = payload.description.clone();
        // The schema key is fixed at create time; updates leave it alone.
        schema.updated = Some(Utc::now());
        Ok(schema.clone())
    }

    async fn delete_object_schema(&self, _workspace_id: &str, schema_id: &Id) -> Result<()> {
        self.record(CatalogCall::DeleteObjectSchema(schema_id.clone()));
        self.object_schemas
            .write()
            .remove(schema_id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("object schema '{}' not found", schema_id))
    }
}
