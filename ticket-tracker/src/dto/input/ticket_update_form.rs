use serde::Deserialize;

///
/// Raw partial update. Fields that are not present keep their values,
/// see [crate::validation::validate_ticket_update]
///
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketUpdateForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}
