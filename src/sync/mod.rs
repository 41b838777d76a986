pub mod diagnostics;
pub mod object;
pub mod object_schema;
pub mod object_type;

pub use diagnostics::*;
pub use object::*;
pub use object_schema::*;
pub use object_type::*;
