use crate::model::{
    Id, ObjectPayload, ObjectSchemaPayload, ObjectTypeAttributePayload, ObjectTypePayload,
    WireObject, WireObjectSchema, WireObjectType, WireObjectTypeAttribute,
};
use anyhow::Result;

/// Object operations of the remote catalog. Transport failures come back
/// verbatim; nothing here retries.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, workspace_id: &str, object_id: &Id) -> Result<Option<WireObject>>;
    async fn create_object(
        &self,
        workspace_id: &str,
        payload: &ObjectPayload,
    ) -> Result<WireObject>;
    async fn update_object(
        &self,
        workspace_id: &str,
        object_id: &Id,
        payload: &ObjectPayload,
    ) -> Result<WireObject>;
    async fn delete_object(&self, workspace_id: &str, object_id: &Id) -> Result<()>;
}

/// Object type schema operations of the remote catalog.
#[async_trait::async_trait]
pub trait ObjectTypeStore: Send + Sync {
    async fn get_object_type(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Option<WireObjectType>>;
    async fn create_object_type(
        &self,
        workspace_id: &str,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType>;
    async fn update_object_type(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType>;
    async fn delete_object_type(&self, workspace_id: &str, object_type_id: &Id) -> Result<()>;
    /// Schema-level attribute definitions of one object type, including
    /// which one is the label source.
    async fn list_object_type_attributes(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Vec<WireObjectTypeAttribute>>;
    async fn create_object_type_attribute(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute>;
    async fn update_object_type_attribute(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        attribute_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute>;
    /// Deletes by attribute id alone; the owning object type is implicit.
    async fn delete_object_type_attribute(
        &self,
        workspace_id: &str,
        attribute_id: &Id,
    ) -> Result<()>;
}

/// Object schema operations: the container level above object types.
#[async_trait::async_trait]
pub trait ObjectSchemaStore: Send + Sync {
    async fn get_object_schema(
        &self,
        workspace_id: &str,
        schema_id: &Id,
    ) -> Result<Option<WireObjectSchema>>;
    async fn create_object_schema(
        &self,
        workspace_id: &str,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema>;
    async fn update_object_schema(
        &self,
        workspace_id: &str,
        schema_id: &Id,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema>;
    async fn delete_object_schema(&self, workspace_id: &str, schema_id: &Id) -> Result<()>;
}

/// Combined catalog trait used by the sync layer.
pub trait CatalogStore: ObjectStore + ObjectTypeStore + ObjectSchemaStore {}
impl<T: ObjectStore + ObjectTypeStore + ObjectSchemaStore> CatalogStore for T {}
