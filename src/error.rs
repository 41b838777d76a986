use crate::model::Id;
use thiserror::Error;

/// Error taxonomy for one reconciliation pass. A fatal error aborts the
/// plan/apply of the instance it belongs to; sibling instances are not
/// affected and nothing is retried internally.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Malformed declared input, e.g. an attribute with no values.
    #[error("invalid declared attributes: {0}")]
    Validation(String),

    /// No attribute in the prior state carries the label-source flag, or
    /// the proposed input no longer declares the label-source attribute.
    #[error("object attribute for the label not found: {0}")]
    LabelAttributeNotFound(String),

    /// The label-source attribute must carry exactly one value.
    #[error("only one value expected for the label attribute '{attribute_id}', got {count}")]
    MultipleLabelValues { attribute_id: Id, count: usize },

    /// Invalid provider configuration, raised before any apply is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Opaque transport failure surfaced verbatim from the catalog client.
    #[error("remote catalog error: {0}")]
    Remote(#[source] anyhow::Error),
}

impl SyncError {
    /// True for errors that originate in user input or prior state rather
    /// than in the transport.
    pub fn is_local(&self) -> bool {
        !matches!(self, SyncError::Remote(_))
    }
}
