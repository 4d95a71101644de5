use serde::Deserialize;

#[derive(Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}
