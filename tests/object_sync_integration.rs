use assets_sync::config::{Features, ProviderConfig};
use assets_sync::model::{
    DeclaredAttribute, ObjectPlan, ObjectSchemaPayload, ObjectTypeAttributePayload,
    ObjectTypePayload,
};
use assets_sync::store::{CatalogCall, MemoryCatalog};
use assets_sync::sync::{Diagnostics, ObjectSchemaSync, ObjectSync, ObjectTypeSync};
use assets_sync::{Resolution, SyncError};

fn provider_config(destroy_object: bool, obsolete_attribute_id: &str) -> ProviderConfig {
    ProviderConfig {
        token: "pat".into(),
        mail: "ops@example.test".into(),
        workspace_id: "ws-integration".into(),
        features: Features {
            destroy_object,
            obsolete_attribute_id: obsolete_attribute_id.into(),
        },
        ..ProviderConfig::default()
    }
}

fn server_catalog() -> MemoryCatalog {
    let catalog = MemoryCatalog::new();
    catalog.register_type_attribute("7", "10", "Name", true);
    catalog.register_type_attribute("7", "11", "Location", false);
    catalog
}

fn server_plan(name: &str, avatar_uuid: Option<&str>) -> ObjectPlan {
    ObjectPlan {
        object_type_id: "7".into(),
        attributes: vec![
            DeclaredAttribute::new("10", &[name]),
            DeclaredAttribute::new("11", &["eu-north-1"]),
        ],
        has_avatar: avatar_uuid.is_some(),
        avatar_uuid: avatar_uuid.map(str::to_string),
    }
}

#[tokio::test]
async fn test_object_complete_workflow() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .is_test(true)
    .try_init();

    let catalog = server_catalog();
    let config = provider_config(true, "");
    let sync = ObjectSync::new(&config, &catalog).expect("valid configuration");

    println!("1. Inspecting the object type schema");
    let type_sync = ObjectTypeSync::new(&config, &catalog).unwrap();
    let schema_attributes = type_sync.attributes(&"7".to_string()).await.unwrap();
    assert_eq!(schema_attributes.iter().filter(|a| a.label).count(), 1);
    println!("✅ Object type '7' exposes exactly one label attribute");

    println!("2. Creating the object");
    let created = sync
        .create(&server_plan("Server A", Some("uuid-1")))
        .await
        .unwrap();
    assert_eq!(created.label, "Server A");
    assert_eq!(created.object_type_id, "7");
    assert_eq!(created.attributes.len(), 2);
    assert!(created.has_avatar);
    let avatar = created.avatar.clone().expect("avatar should be attached");
    assert_eq!(avatar.avatar_uuid, "uuid-1");
    assert_eq!(avatar.object_id, created.id);
    println!("✅ Created object '{}' with label '{}'", created.id, created.label);

    println!("3. Planning with unchanged input");
    let planned = sync
        .plan(Some(&created), &server_plan("Server A", Some("uuid-1")))
        .unwrap();
    assert_eq!(planned.label.as_deref(), Some("Server A"));
    assert!(planned.resolution.avatar.is_unchanged());
    assert_eq!(planned.avatar, created.avatar);
    println!("✅ No-op plan keeps label and the whole avatar group");

    println!("4. Planning a rename");
    let planned = sync
        .plan(Some(&created), &server_plan("Server B", Some("uuid-1")))
        .unwrap();
    assert_eq!(planned.label.as_deref(), Some("Server B"));
    println!("✅ Rename plan resolves the label from the declared value");

    println!("5. Planning an avatar change");
    let planned = sync
        .plan(Some(&created), &server_plan("Server A", Some("uuid-2")))
        .unwrap();
    assert!(planned.resolution.avatar.is_force_unknown());
    assert_eq!(planned.avatar, None, "no partially-known avatar may survive");
    println!("✅ Avatar change forces the whole group unknown");

    println!("6. Applying the rename");
    let updated = sync
        .update(&created.id, &server_plan("Server B", Some("uuid-1")))
        .await
        .unwrap();
    assert_eq!(updated.label, "Server B");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created, created.created);
    println!("✅ Update applied and state re-synchronized");

    println!("7. Refreshing from the catalog");
    let read_back = sync.read(&created.id).await.unwrap().unwrap();
    assert_eq!(read_back, updated);
    println!("✅ Read returns the updated state");

    println!("8. Hard deleting the object");
    catalog.clear_calls();
    sync.delete(&updated).await.unwrap();
    assert_eq!(
        catalog.calls(),
        vec![CatalogCall::DeleteObject(updated.id.clone())]
    );
    assert!(sync.read(&updated.id).await.unwrap().is_none());
    println!("✅ Hard delete issued exactly one delete call");
}

#[tokio::test]
async fn test_schema_to_object_workflow() {
    let catalog = MemoryCatalog::new();
    let config = provider_config(true, "");

    println!("1. Creating the object schema container");
    let schema_sync = ObjectSchemaSync::new(&config, &catalog).unwrap();
    let schema = schema_sync
        .create(&ObjectSchemaPayload {
            name: "ITSM".into(),
            object_schema_key: "ITSM".into(),
            description: "Service management assets".into(),
        })
        .await
        .unwrap();
    println!("✅ Created schema '{}' ('{}')", schema.id, schema.name);

    println!("2. Creating an object type inside the schema");
    let type_sync = ObjectTypeSync::new(&config, &catalog).unwrap();
    let object_type = type_sync
        .create(&ObjectTypePayload {
            name: "Server".into(),
            description: "Physical and virtual servers".into(),
            icon_id: "1".into(),
            object_schema_id: schema.id.clone(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(object_type.object_schema_id, schema.id);
    println!("✅ Object type '{}' belongs to schema '{}'", object_type.id, schema.id);

    println!("3. Defining the label attribute on the type");
    let name_attr = type_sync
        .create_attribute(
            &object_type.id,
            &ObjectTypeAttributePayload {
                name: "Name".into(),
                label: true,
                attribute_type: 0,
                minimum_cardinality: 1,
                maximum_cardinality: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(name_attr.label);
    println!("✅ Attribute '{}' is the label source", name_attr.id);

    println!("4. Creating an object against the managed schema");
    let object_sync = ObjectSync::new(&config, &catalog).unwrap();
    let object = object_sync
        .create(&ObjectPlan {
            object_type_id: object_type.id.clone(),
            attributes: vec![DeclaredAttribute::new(name_attr.id.as_str(), &["Server A"])],
            has_avatar: false,
            avatar_uuid: None,
        })
        .await
        .unwrap();
    assert_eq!(object.label, "Server A");
    println!("✅ Object '{}' labeled from the managed attribute", object.id);

    println!("5. Tearing down bottom-up");
    object_sync.delete(&object).await.unwrap();
    type_sync.delete_attribute(&name_attr.id).await.unwrap();
    type_sync.delete(&object_type.id).await.unwrap();
    schema_sync.delete(&schema.id).await.unwrap();
    assert!(schema_sync.read(&schema.id).await.unwrap().is_none());
    println!("✅ Schema, type, attribute and object all removed");
}

#[tokio::test]
async fn test_soft_delete_workflow() {
    let catalog = server_catalog();
    catalog.register_type_attribute("7", "99", "Status", false);
    let config = provider_config(false, "99");
    let sync = ObjectSync::new(&config, &catalog).unwrap();

    let created = sync.create(&server_plan("Server A", None)).await.unwrap();
    catalog.clear_calls();

    sync.delete(&created).await.unwrap();

    // Exactly one update, zero deletes.
    assert_eq!(
        catalog.calls(),
        vec![CatalogCall::UpdateObject(created.id.clone())]
    );

    let survivor = sync.read(&created.id).await.unwrap().unwrap();
    let marker = survivor
        .attributes
        .iter()
        .find(|a| a.object_type_attribute_id == "99")
        .expect("obsolete attribute should be written");
    assert_eq!(marker.object_attribute_values.len(), 1);
    assert_eq!(marker.object_attribute_values[0].value, "Obsolete");
    assert_eq!(survivor.label, "Server A", "the object itself is left intact");
}

#[tokio::test]
async fn test_soft_delete_without_fallback_fails_before_any_call() {
    let catalog = server_catalog();
    let config = provider_config(false, "");

    match ObjectSync::new(&config, &catalog) {
        Err(SyncError::Configuration(_)) => {}
        other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
    }
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn test_fatal_plan_halts_only_its_own_instance() {
    let catalog = server_catalog();
    let config = provider_config(true, "");
    let sync = ObjectSync::new(&config, &catalog).unwrap();

    let first = sync.create(&server_plan("Server A", None)).await.unwrap();
    let second = sync.create(&server_plan("Server B", None)).await.unwrap();

    // First instance declares two label values, a fatal plan error.
    let mut bad_plan = server_plan("Server A", None);
    bad_plan.attributes[0] = DeclaredAttribute::new("10", &["A", "B"]);

    let mut first_diagnostics = Diagnostics::new();
    match sync.plan(Some(&first), &bad_plan) {
        Err(err) => {
            assert!(matches!(err, SyncError::MultipleLabelValues { .. }));
            first_diagnostics.add_sync_error("error planning object", &err);
        }
        Ok(_) => panic!("plan should fail"),
    }
    assert!(first_diagnostics.has_errors());

    // The sibling instance plans cleanly with its own diagnostics.
    let second_diagnostics = Diagnostics::new();
    let planned = sync
        .plan(Some(&second), &server_plan("Server B", None))
        .unwrap();
    assert_eq!(planned.label.as_deref(), Some("Server B"));
    assert!(!second_diagnostics.has_errors());

    // The failed plan committed nothing for either instance.
    assert_eq!(sync.read(&first.id).await.unwrap().unwrap(), first);
    assert_eq!(sync.read(&second.id).await.unwrap().unwrap(), second);
}

#[tokio::test]
async fn test_label_resolution_matches_declared_scenario() {
    // Prior state: attribute 10 is the label source carrying "Server A";
    // proposed input declares the same id and value.
    let catalog = server_catalog();
    let config = provider_config(true, "");
    let sync = ObjectSync::new(&config, &catalog).unwrap();

    let prior = sync.create(&server_plan("Server A", None)).await.unwrap();
    let source = prior.label_source_attribute().unwrap();
    assert_eq!(source.object_type_attribute_id, "10");
    assert_eq!(source.object_attribute_values[0].value, "Server A");

    let planned = sync
        .plan(Some(&prior), &server_plan("Server A", None))
        .unwrap();
    assert_eq!(planned.resolution.label, Resolution::Resolved("Server A".into()));
    assert_eq!(planned.label.as_deref(), Some("Server A"));
}
