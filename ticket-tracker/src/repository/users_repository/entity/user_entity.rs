use crate::dto::inoutput::User;

///
/// Registry entry. Unlike [User] it contains password.
///
#[derive(Clone)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&UserEntity> for User {
    fn from(value: &UserEntity) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            email: value.email.clone(),
        }
    }
}
