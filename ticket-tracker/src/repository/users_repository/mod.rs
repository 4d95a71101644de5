mod entity;
mod users_repository;
mod users_repository_impl;

pub use entity::UserEntity;
pub use users_repository::*;
pub use users_repository_impl::*;
