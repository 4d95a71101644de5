pub mod auth_service;
pub mod tickets_service;
