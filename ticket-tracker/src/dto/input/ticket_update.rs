use crate::dto::inoutput::{TicketPriority, TicketStatus};

///
/// Validated partial update.
/// Ticket id and owner cannot be changed so they are not here.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}
