mod error;
mod session_repository;
mod tickets_repository;
mod users_repository;

pub use error::*;
pub use session_repository::*;
pub use tickets_repository::*;
pub use users_repository::*;
