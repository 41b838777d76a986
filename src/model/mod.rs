pub mod attribute;
pub mod common;
pub mod object;
pub mod object_schema;
pub mod object_type;
pub mod wire;

pub use attribute::*;
pub use common::*;
pub use object::*;
pub use object_schema::*;
pub use object_type::*;
pub use wire::*;
