use crate::error::SyncError;
use crate::model::{AssetObject, Avatar, DeclaredAttribute};
use itertools::Itertools;

/// Outcome of resolving one derived field during a plan. Exhaustive by
/// construction: a field is carried over from the prior state, forced
/// unknown as a whole, or pinned to a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Keep the prior state's value, field-for-field.
    Unchanged,
    /// The value cannot be known until apply time; a fresh fetch decides it.
    ForceUnknown,
    /// The value is fully determined by the proposed input.
    Resolved(T),
}

impl<T> Resolution<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Resolution::Unchanged)
    }

    pub fn is_force_unknown(&self) -> bool {
        matches!(self, Resolution::ForceUnknown)
    }

    /// Collapse against the prior value: `Resolved` wins, `Unchanged`
    /// carries the prior over, `ForceUnknown` yields nothing.
    pub fn apply(self, prior: Option<T>) -> Option<T> {
        match self {
            Resolution::Unchanged => prior,
            Resolution::ForceUnknown => None,
            Resolution::Resolved(value) => Some(value),
        }
    }
}

/// Both derived fields of one plan, resolved together.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResolution {
    pub label: Resolution<String>,
    pub avatar: Resolution<Avatar>,
}

/// Plan-time resolution of the two fields a user never declares directly:
/// the display label and the avatar group. Pure functions of (prior state,
/// proposed input); a returned error aborts the plan for this instance only.
pub struct PlanReconciler;

impl PlanReconciler {
    /// Resolve both derived fields. Runs once per plan.
    pub fn reconcile(
        prior: Option<&AssetObject>,
        proposed: &[DeclaredAttribute],
        proposed_avatar_uuid: Option<&str>,
    ) -> Result<PlanResolution, SyncError> {
        Ok(PlanResolution {
            label: Self::resolve_label(prior, proposed)?,
            avatar: Self::resolve_avatar(prior, proposed_avatar_uuid),
        })
    }

    /// The label is sourced from the single declared attribute whose schema
    /// definition carries the label flag in the prior state. Verbatim, no
    /// transformation.
    pub fn resolve_label(
        prior: Option<&AssetObject>,
        proposed: &[DeclaredAttribute],
    ) -> Result<Resolution<String>, SyncError> {
        let prior = match prior {
            // First create: the server computes the label.
            None => return Ok(Resolution::ForceUnknown),
            Some(state) => state,
        };

        let source = prior.label_source_attribute().ok_or_else(|| {
            SyncError::LabelAttributeNotFound(
                "no attribute in the object schema carries the label flag".to_string(),
            )
        })?;
        let source_id = &source.object_type_attribute_id;

        let declared = proposed
            .iter()
            .find(|attr| &attr.object_type_attribute_id == source_id)
            .ok_or_else(|| {
                SyncError::LabelAttributeNotFound(format!(
                    "label attribute '{}' is not declared in the proposed attributes",
                    source_id
                ))
            })?;

        match declared.object_attribute_values.iter().exactly_one() {
            Ok(single) => Ok(Resolution::Resolved(single.value.clone())),
            Err(_) if declared.object_attribute_values.is_empty() => {
                // Empty value sets are rejected by the codec before any
                // apply; guard here so resolution stays total.
                Err(SyncError::Validation(format!(
                    "label attribute '{}' declares no values",
                    source_id
                )))
            }
            Err(_) => Err(SyncError::MultipleLabelValues {
                attribute_id: source_id.clone(),
                count: declared.object_attribute_values.len(),
            }),
        }
    }

    /// The avatar group follows its identity field. Identical identity
    /// keeps the entire prior group; anything else forces the whole group
    /// unknown, never a mix of known and unknown fields.
    pub fn resolve_avatar(
        prior: Option<&AssetObject>,
        proposed_avatar_uuid: Option<&str>,
    ) -> Resolution<Avatar> {
        let prior = match prior {
            None => return Resolution::ForceUnknown,
            Some(state) => state,
        };

        let uuid_from_state = prior.avatar_uuid();
        let uuid_from_plan = proposed_avatar_uuid.unwrap_or("");

        if uuid_from_plan == uuid_from_state {
            Resolution::Unchanged
        } else {
            Resolution::ForceUnknown
        }
    }
}
