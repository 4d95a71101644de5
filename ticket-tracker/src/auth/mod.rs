mod route_guard;
mod session_validator;

pub use route_guard::*;
pub use session_validator::*;
