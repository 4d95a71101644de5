use serde::{Deserialize, Serialize};

///
/// Public user information. Password never leaves the repository.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
