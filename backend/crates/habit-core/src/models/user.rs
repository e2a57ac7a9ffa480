use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(fullname: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            fullname: fullname.trim().to_string(),
            email: Self::normalize_email(&email),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Emails are stored trimmed and lowercased so lookups are case-insensitive
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
