use crate::error::SyncError;
use crate::model::{
    AssetObject, Attribute, AttributeValue, Avatar, DeclaredAttribute, ObjectPayload,
    ObjectPlan, ObjectSchema, ObjectType, ObjectTypeAttribute, PayloadAttribute,
    PayloadAttributeValue, WireAttribute, WireAttributeValue, WireAvatar, WireObject,
    WireObjectSchema, WireObjectType, WireObjectTypeAttribute,
};
use chrono::{DateTime, Utc};

/// Timestamp used when the server omits created/updated fields.
fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(0, 0).unwrap_or_else(Utc::now)
}

/// Stateless bidirectional mapping between the flat declared attribute
/// shape and the structured attribute/value graph of the catalog.
///
/// The round-trip contract only covers what originates client-side:
/// `decode` after `encode` preserves the object type attribute id and the
/// literal values, while server-only fields (display/search values, nested
/// group/status refs) come back however the server computed them.
pub struct AttributeCodec;

impl AttributeCodec {
    /// Map declared attributes to payload entries carrying only the schema
    /// attribute id and the literal value strings.
    pub fn encode(declared: &[DeclaredAttribute]) -> Result<Vec<PayloadAttribute>, SyncError> {
        let mut payload = Vec::with_capacity(declared.len());

        for attr in declared {
            if attr.object_attribute_values.is_empty() {
                return Err(SyncError::Validation(format!(
                    "attribute '{}' declares no values; at least one is required",
                    attr.object_type_attribute_id
                )));
            }

            payload.push(PayloadAttribute {
                object_type_attribute_id: attr.object_type_attribute_id.clone(),
                object_attribute_values: attr
                    .object_attribute_values
                    .iter()
                    .map(|v| PayloadAttributeValue {
                        value: v.value.clone(),
                    })
                    .collect(),
            });
        }

        Ok(payload)
    }

    /// Full create/update request body for one object plan.
    pub fn encode_payload(plan: &ObjectPlan) -> Result<ObjectPayload, SyncError> {
        Ok(ObjectPayload {
            object_type_id: plan.object_type_id.clone(),
            attributes: Self::encode(&plan.attributes)?,
            has_avatar: plan.has_avatar,
            avatar_uuid: plan.avatar_uuid.clone(),
        })
    }

    /// Build the structured object from a raw catalog response. Total:
    /// absent scalars become defaults, absent nested refs stay `None`, and
    /// every attribute arrives with its full value set.
    pub fn decode(wire: WireObject) -> AssetObject {
        AssetObject {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.id,
            label: wire.label,
            object_key: wire.object_key,
            object_type_id: wire.object_type.map(|t| t.id).unwrap_or_default(),
            created: wire.created.unwrap_or_else(epoch),
            updated: wire.updated.unwrap_or_else(epoch),
            has_avatar: wire.has_avatar,
            attributes: wire
                .attributes
                .unwrap_or_default()
                .into_iter()
                .map(Self::decode_attribute)
                .collect(),
            avatar: wire.avatar.map(Self::decode_avatar),
            links: wire.links,
        }
    }

    pub fn decode_attribute(wire: WireAttribute) -> Attribute {
        let label = wire
            .object_type_attribute
            .as_ref()
            .map(|t| t.label)
            .unwrap_or(false);

        Attribute {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.id,
            object_type_attribute_id: wire.object_type_attribute_id,
            object_type_attribute_label: label,
            object_attribute_values: wire
                .object_attribute_values
                .into_iter()
                .map(Self::decode_value)
                .collect(),
        }
    }

    fn decode_value(wire: WireAttributeValue) -> AttributeValue {
        AttributeValue {
            value: wire.value,
            display_value: wire.display_value,
            search_value: wire.search_value,
            additional_value: wire.additional_value,
            group: wire.group,
            status: wire.status,
        }
    }

    /// The catalog exposes no standalone avatar id; the uuid doubles as the
    /// id, matching what the server reports for `hasAvatar` lookups.
    pub fn decode_avatar(wire: WireAvatar) -> Avatar {
        Avatar {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.avatar_uuid.clone(),
            avatar_uuid: wire.avatar_uuid,
            url16: wire.url16,
            url48: wire.url48,
            url72: wire.url72,
            url144: wire.url144,
            url288: wire.url288,
            object_id: wire.object_id,
        }
    }

    pub fn decode_object_type(wire: WireObjectType) -> ObjectType {
        ObjectType {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.id,
            name: wire.name,
            description: wire.description,
            icon_id: wire.icon.map(|i| i.id).unwrap_or_default(),
            position: wire.position,
            created: wire.created.unwrap_or_else(epoch),
            updated: wire.updated.unwrap_or_else(epoch),
            object_count: wire.object_count,
            parent_object_type_id: wire.parent_object_type_id,
            object_schema_id: wire.object_schema_id,
            inherited: wire.inherited,
            abstract_object_type: wire.abstract_object_type,
            parent_object_type_inherited: wire.parent_object_type_inherited,
        }
    }

    pub fn decode_object_schema(wire: WireObjectSchema) -> ObjectSchema {
        ObjectSchema {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.id,
            name: wire.name,
            object_schema_key: wire.object_schema_key,
            description: wire.description,
            status: wire.status,
            created: wire.created.unwrap_or_else(epoch),
            updated: wire.updated.unwrap_or_else(epoch),
            object_count: wire.object_count,
            object_type_count: wire.object_type_count,
            can_manage: wire.can_manage,
        }
    }

    pub fn decode_type_attribute(wire: WireObjectTypeAttribute) -> ObjectTypeAttribute {
        ObjectTypeAttribute {
            workspace_id: wire.workspace_id,
            global_id: wire.global_id,
            id: wire.id,
            name: wire.name,
            label: wire.label,
            attribute_type: wire.attribute_type,
            description: wire.description,
            minimum_cardinality: wire.minimum_cardinality,
            maximum_cardinality: wire.maximum_cardinality,
            editable: wire.editable,
            system: wire.system,
            hidden: wire.hidden,
            unique_attribute: wire.unique_attribute,
        }
    }
}
