use crate::config::ProviderConfig;
use crate::error::SyncError;
use crate::logic::{AttributeCodec, DeleteAction, LifecyclePolicy, PlanReconciler, PlanResolution};
use crate::model::{AssetObject, Avatar, Id, ObjectPlan};
use crate::store::CatalogStore;
use anyhow::anyhow;

/// The outcome of planning one object instance. `None` in a derived field
/// means it stays unknown until apply; the avatar is always known or
/// unknown as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedObject {
    pub resolution: PlanResolution,
    pub label: Option<String>,
    pub avatar: Option<Avatar>,
}

/// Plan/apply operations for one asset object instance. Holds no state of
/// its own: configuration and catalog are borrowed, prior state and plans
/// are passed by value into each call, so concurrent instances never share
/// anything mutable.
pub struct ObjectSync<'a, C: CatalogStore> {
    catalog: &'a C,
    workspace_id: &'a str,
    lifecycle: LifecyclePolicy,
}

impl<'a, C: CatalogStore> ObjectSync<'a, C> {
    /// Fails fast on incomplete configuration, before any remote call.
    pub fn new(config: &'a ProviderConfig, catalog: &'a C) -> Result<Self, SyncError> {
        config.validate()?;
        Ok(Self {
            catalog,
            workspace_id: &config.workspace_id,
            lifecycle: LifecyclePolicy::from_features(&config.features)?,
        })
    }

    pub fn lifecycle(&self) -> &LifecyclePolicy {
        &self.lifecycle
    }

    /// Resolve the derived fields for one plan. Pure: no remote calls, no
    /// mutation of the inputs.
    pub fn plan(
        &self,
        prior: Option<&AssetObject>,
        proposed: &ObjectPlan,
    ) -> Result<PlannedObject, SyncError> {
        let resolution = PlanReconciler::reconcile(
            prior,
            &proposed.attributes,
            proposed.avatar_uuid.as_deref(),
        )?;

        let label = resolution
            .label
            .clone()
            .apply(prior.map(|p| p.label.clone()));
        let avatar = resolution
            .avatar
            .clone()
            .apply(prior.and_then(|p| p.avatar.clone()));

        Ok(PlannedObject {
            resolution,
            label,
            avatar,
        })
    }

    /// Create the object, then read it back: create responses do not carry
    /// attributes, and the resolved state is only assembled once all
    /// constituent data is available.
    pub async fn create(&self, proposed: &ObjectPlan) -> Result<AssetObject, SyncError> {
        let payload = AttributeCodec::encode_payload(proposed)?;

        let created = self
            .catalog
            .create_object(self.workspace_id, &payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!(
            "created object '{}' of type '{}'",
            created.id,
            proposed.object_type_id
        );

        let object = self
            .catalog
            .get_object(self.workspace_id, &created.id)
            .await
            .map_err(SyncError::Remote)?
            .ok_or_else(|| {
                SyncError::Remote(anyhow!(
                    "object '{}' not readable directly after create",
                    created.id
                ))
            })?;

        Ok(AttributeCodec::decode(object))
    }

    /// Refresh the synchronized state from the catalog. `None` when the
    /// object no longer exists remotely.
    pub async fn read(&self, object_id: &Id) -> Result<Option<AssetObject>, SyncError> {
        let object = self
            .catalog
            .get_object(self.workspace_id, object_id)
            .await
            .map_err(SyncError::Remote)?;

        Ok(object.map(AttributeCodec::decode))
    }

    pub async fn update(
        &self,
        object_id: &Id,
        proposed: &ObjectPlan,
    ) -> Result<AssetObject, SyncError> {
        let payload = AttributeCodec::encode_payload(proposed)?;

        let updated = self
            .catalog
            .update_object(self.workspace_id, object_id, &payload)
            .await
            .map_err(SyncError::Remote)?;

        log::info!("updated object '{}'", object_id);
        Ok(AttributeCodec::decode(updated))
    }

    /// Issue exactly one remote call, chosen by the configured lifecycle
    /// branch: remove the object, or mark it obsolete and leave it intact.
    pub async fn delete(&self, prior: &AssetObject) -> Result<(), SyncError> {
        match self.lifecycle.delete_action(prior)? {
            DeleteAction::Remove => {
                self.catalog
                    .delete_object(self.workspace_id, &prior.id)
                    .await
                    .map_err(SyncError::Remote)?;
                log::info!("deleted object '{}'", prior.id);
            }
            DeleteAction::MarkObsolete(payload) => {
                self.catalog
                    .update_object(self.workspace_id, &prior.id, &payload)
                    .await
                    .map_err(SyncError::Remote)?;
                log::info!("marked object '{}' obsolete", prior.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclaredAttribute;
    use crate::store::{CatalogCall, MemoryCatalog};

    fn config(destroy_object: bool, obsolete_attribute_id: &str) -> ProviderConfig {
        ProviderConfig {
            token: "pat".into(),
            mail: "ops@example.test".into(),
            workspace_id: "ws-1".into(),
            features: crate::config::Features {
                destroy_object,
                obsolete_attribute_id: obsolete_attribute_id.into(),
            },
            ..ProviderConfig::default()
        }
    }

    fn catalog_with_server_type() -> MemoryCatalog {
        let catalog = MemoryCatalog::new();
        catalog.register_type_attribute("7", "10", "Name", true);
        catalog.register_type_attribute("7", "11", "Location", false);
        catalog
    }

    fn server_plan(name: &str) -> ObjectPlan {
        ObjectPlan {
            object_type_id: "7".into(),
            attributes: vec![
                DeclaredAttribute::new("10", &[name]),
                DeclaredAttribute::new("11", &["eu-north-1"]),
            ],
            has_avatar: false,
            avatar_uuid: None,
        }
    }

    #[tokio::test]
    async fn create_reads_back_full_attributes() {
        let catalog = catalog_with_server_type();
        let config = config(true, "");
        let sync = ObjectSync::new(&config, &catalog).unwrap();

        let object = sync.create(&server_plan("Server A")).await.unwrap();
        assert_eq!(object.label, "Server A");
        assert_eq!(object.attributes.len(), 2);
        assert!(object.label_source_attribute().is_some());
        assert_eq!(
            catalog.calls(),
            vec![
                CatalogCall::CreateObject,
                CatalogCall::GetObject(object.id.clone())
            ]
        );
    }

    #[tokio::test]
    async fn soft_delete_issues_single_update_and_no_delete() {
        let catalog = catalog_with_server_type();
        let config = config(false, "99");
        let sync = ObjectSync::new(&config, &catalog).unwrap();

        let object = sync.create(&server_plan("Server A")).await.unwrap();
        catalog.clear_calls();

        sync.delete(&object).await.unwrap();

        assert_eq!(catalog.calls(), vec![CatalogCall::UpdateObject(object.id.clone())]);
        // The object is left intact, now carrying the obsolete marker.
        let survivor = sync.read(&object.id).await.unwrap().unwrap();
        let marker = survivor
            .attributes
            .iter()
            .find(|a| a.object_type_attribute_id == "99")
            .expect("obsolete attribute should be present");
        assert_eq!(marker.object_attribute_values[0].value, "Obsolete");
    }

    #[tokio::test]
    async fn hard_delete_issues_single_delete_and_no_update() {
        let catalog = catalog_with_server_type();
        let config = config(true, "");
        let sync = ObjectSync::new(&config, &catalog).unwrap();

        let object = sync.create(&server_plan("Server A")).await.unwrap();
        catalog.clear_calls();

        sync.delete(&object).await.unwrap();

        assert_eq!(catalog.calls(), vec![CatalogCall::DeleteObject(object.id.clone())]);
        assert!(sync.read(&object.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn misconfigured_soft_delete_fails_before_any_call() {
        let catalog = catalog_with_server_type();
        let config = config(false, "");

        let err = match ObjectSync::new(&config, &catalog) {
            Err(err) => err,
            Ok(_) => panic!("construction should fail"),
        };
        assert!(matches!(err, SyncError::Configuration(_)));
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn plan_pins_label_and_keeps_avatar() {
        let catalog = catalog_with_server_type();
        let config = config(true, "");
        let sync = ObjectSync::new(&config, &catalog).unwrap();

        let prior = sync.create(&server_plan("Server A")).await.unwrap();

        let mut proposed = server_plan("Server B");
        proposed.avatar_uuid = Some(prior.avatar_uuid().to_string());

        let planned = sync.plan(Some(&prior), &proposed).unwrap();
        assert_eq!(planned.label.as_deref(), Some("Server B"));
        assert!(planned.resolution.avatar.is_unchanged());
        assert_eq!(planned.avatar, prior.avatar);
    }
}
