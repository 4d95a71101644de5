//!
//! Module with all dtos that are passed between the application and its users
//!

pub mod inoutput;
pub mod input;
pub mod output;
