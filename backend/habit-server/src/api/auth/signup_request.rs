use serde::Deserialize;

/// Missing fields deserialize as empty and fail validation with a field name
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub fullname: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
