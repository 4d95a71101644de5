pub mod application;
pub mod auth;
pub mod dto;
pub mod error;
pub mod repository;
pub mod routing;
pub mod service;
pub mod session;
pub mod store;
pub mod validation;
