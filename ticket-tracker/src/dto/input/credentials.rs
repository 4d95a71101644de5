use serde::Deserialize;

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
