use habit_core::{Habit, User};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

pub fn test_user(email: &str) -> User {
    User::new(
        "Test User".to_string(),
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
    )
}

/// Habit with default emoji and target, created `age_secs` ago
pub fn test_habit(owner_id: Uuid, name: &str, age_secs: i64) -> Habit {
    let mut habit = Habit::new(owner_id, name.to_string(), None, None);
    let created: DateTime<Utc> = habit.created_at - Duration::seconds(age_secs);
    habit.created_at = created;
    habit.updated_at = created;
    habit
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}
