pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod store;
pub mod sync;

// Export configuration and error types
pub use config::{Features, ProviderConfig};
pub use error::SyncError;

// Export logic types
pub use logic::{
    AttributeCodec, DeleteAction, LifecyclePolicy, PlanReconciler, PlanResolution, Resolution,
    OBSOLETE_MARKER,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{
    CatalogStore, MemoryCatalog, ObjectSchemaStore, ObjectStore, ObjectTypeStore, RestCatalog,
};

// Export sync types
pub use sync::{
    Diagnostic, Diagnostics, ObjectSchemaSync, ObjectSync, ObjectTypeSync, PlannedObject,
    Severity,
};
