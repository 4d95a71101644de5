mod ticket_validation;
mod validation_errors;

pub use ticket_validation::*;
pub use validation_errors::*;
