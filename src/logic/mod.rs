pub mod codec;
pub mod lifecycle;
pub mod reconcile;

pub use codec::*;
pub use lifecycle::*;
pub use reconcile::*;
