use serde::Serialize;
use std::{collections::BTreeMap, fmt};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TicketField {
    Title,
    Description,
    Status,
    Priority,
    UserId,
}

///
/// Messages describing why the form is invalid, grouped by field.
/// Field without entry has no errors.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<TicketField, Vec<String>>);

impl ValidationErrors {
    pub fn push(&mut self, field: TicketField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: TicketField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: TicketField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &TicketField> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields()
            .map(|field| AsRef::<str>::as_ref(field))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "invalid fields: {fields}")
    }
}

impl std::error::Error for ValidationErrors {}
