use crate::dto::inoutput::{TicketPriority, TicketStatus};

///
/// Validated ticket that does not have an id yet
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}
