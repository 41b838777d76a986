use crate::config::ProviderConfig;
use crate::error::SyncError;
use crate::logic::AttributeCodec;
use crate::model::{
    Id, ObjectType, ObjectTypeAttribute, ObjectTypeAttributePayload, ObjectTypePayload,
};
use crate::store::CatalogStore;

/// Plan/apply operations for one object type instance.
pub struct ObjectTypeSync<'a, C: CatalogStore> {
    catalog: &'a C,
    workspace_id: &'a str,
}

impl<'a, C: CatalogStore> ObjectTypeSync<'a, C> {
    pub fn new(config: &'a ProviderConfig, catalog: &'a C) -> Result<Self, SyncError> {
        config.validate()?;
        Ok(Self {
            catalog,
            workspace_id: &config.workspace_id,
        })
    }

    pub async fn create(&self, payload: &ObjectTypePayload) -> Result<ObjectType, SyncError> {
        let created = self
            .catalog
            .create_object_type(self.workspace_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("created object type '{}' ('{}')", created.id, created.name);
        Ok(AttributeCodec::decode_object_type(created))
    }

    pub async fn read(&self, object_type_id: &Id) -> Result<Option<ObjectType>, SyncError> {
        let object_type = self
            .catalog
            .get_object_type(self.workspace_id, object_type_id)
            .await
            .map_err(SyncError::Remote)?;

        Ok(object_type.map(AttributeCodec::decode_object_type))
    }

    pub async fn update(
        &self,
        object_type_id: &Id,
        payload: &ObjectTypePayload,
    ) -> Result<ObjectType, SyncError> {
        let updated = self
            .catalog
            .update_object_type(self.workspace_id, object_type_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("updated object type '{}'", object_type_id);
        Ok(AttributeCodec::decode_object_type(updated))
    }

    pub async fn delete(&self, object_type_id: &Id) -> Result<(), SyncError> {
        self.catalog
            .delete_object_type(self.workspace_id, object_type_id)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("deleted object type '{}'", object_type_id);
        Ok(())
    }

    /// The schema-level attribute definitions of one object type.
    pub async fn attributes(
        &self,
        object_type_id: &Id,
    ) -> Result<Vec<ObjectTypeAttribute>, SyncError> {
        let attributes = self
            .catalog
            .list_object_type_attributes(self.workspace_id, object_type_id)
            .await
            .map_err(SyncError::Remote)?;

        Ok(attributes
            .into_iter()
            .map(AttributeCodec::decode_type_attribute)
            .collect())
    }

    pub async fn create_attribute(
        &self,
        object_type_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<ObjectTypeAttribute, SyncError> {
        let created = self
            .catalog
            .create_object_type_attribute(self.workspace_id, object_type_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!(
            "created attribute '{}' ('{}') on object type '{}'",
            created.id,
            created.name,
            object_type_id
        );
        Ok(AttributeCodec::decode_type_attribute(created))
    }

    pub async fn update_attribute(
        &self,
        object_type_id: &Id,
        attribute_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<ObjectTypeAttribute, SyncError> {
        let updated = self
            .catalog
            .update_object_type_attribute(self.workspace_id, object_type_id, attribute_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("updated attribute '{}'", attribute_id);
        Ok(AttributeCodec::decode_type_attribute(updated))
    }

    pub async fn delete_attribute(&self, attribute_id: &Id) -> Result<(), SyncError> {
        self.catalog
            .delete_object_type_attribute(self.workspace_id, attribute_id)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("deleted attribute '{}'", attribute_id);
        Ok(())
    }
}
