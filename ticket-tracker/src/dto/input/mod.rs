mod credentials;
mod new_ticket;
mod signup;
mod ticket_form;
mod ticket_update;
mod ticket_update_form;

pub use credentials::*;
pub use new_ticket::*;
pub use signup::*;
pub use ticket_form::*;
pub use ticket_update::*;
pub use ticket_update_form::*;
