use crate::config::ProviderConfig;
use crate::error::SyncError;
use crate::logic::AttributeCodec;
use crate::model::{Id, ObjectSchema, ObjectSchemaPayload};
use crate::store::CatalogStore;

/// Plan/apply operations for one object schema, the container level above
/// object types.
pub struct ObjectSchemaSync<'a, C: CatalogStore> {
    catalog: &'a C,
    workspace_id: &'a str,
}

impl<'a, C: CatalogStore> ObjectSchemaSync<'a, C> {
    pub fn new(config: &'a ProviderConfig, catalog: &'a C) -> Result<Self, SyncError> {
        config.validate()?;
        Ok(Self {
            catalog,
            workspace_id: &config.workspace_id,
        })
    }

    pub async fn create(&self, payload: &ObjectSchemaPayload) -> Result<ObjectSchema, SyncError> {
        let created = self
            .catalog
            .create_object_schema(self.workspace_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("created object schema '{}' ('{}')", created.id, created.name);
        Ok(AttributeCodec::decode_object_schema(created))
    }

    pub async fn read(&self, schema_id: &Id) -> Result<Option<ObjectSchema>, SyncError> {
        let schema = self
            .catalog
            .get_object_schema(self.workspace_id, schema_id)
            .await
            .map_err(SyncError::Remote)?;

        Ok(schema.map(AttributeCodec::decode_object_schema))
    }

    pub async fn update(
        &self,
        schema_id: &Id,
        payload: &ObjectSchemaPayload,
    ) -> Result<ObjectSchema, SyncError> {
        let updated = self
            .catalog
            .update_object_schema(self.workspace_id, schema_id, payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("updated object schema '{}'", schema_id);
        Ok(AttributeCodec::decode_object_schema(updated))
    }

    pub async fn delete(&self, schema_id: &Id) -> Result<(), SyncError> {
        self.catalog
            .delete_object_schema(self.workspace_id, schema_id)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("deleted object schema '{}'", schema_id);
        Ok(())
    }
}
