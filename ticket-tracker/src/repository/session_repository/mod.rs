mod session_repository;
mod session_repository_impl;

pub use session_repository::*;
pub use session_repository_impl::*;
