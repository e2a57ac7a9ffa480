use crate::UserDto;

use serde::Serialize;

/// Signup and login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// HS256 bearer token
    pub token: String,
    pub user: UserDto,
}
