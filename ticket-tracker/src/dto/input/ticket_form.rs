use serde::Deserialize;

///
/// Raw ticket form. Nothing is checked yet,
/// see [crate::validation::validate_ticket]
///
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub user_id: Option<String>,
}
