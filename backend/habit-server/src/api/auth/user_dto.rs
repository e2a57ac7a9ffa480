use habit_core::User;

use serde::Serialize;

/// Public view of an account; the password hash never leaves the server
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            fullname: u.fullname,
            email: u.email,
            created_at: u.created_at.timestamp(),
        }
    }
}
