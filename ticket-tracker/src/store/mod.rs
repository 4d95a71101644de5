mod auth_store;
mod tickets_store;

pub use auth_store::*;
pub use tickets_store::*;
