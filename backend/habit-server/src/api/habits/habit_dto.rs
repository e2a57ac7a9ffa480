use habit_core::Habit;

use serde::Serialize;

/// Habit DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub target_minutes_per_day: i32,
    pub progress_minutes: i32,
    pub streak: i32,
    /// "YYYY-MM-DD" or null
    pub last_completion_date: Option<String>,
    pub is_completed_today: bool,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Habit> for HabitDto {
    fn from(h: Habit) -> Self {
        Self {
            id: h.id.to_string(),
            name: h.name,
            emoji: h.emoji,
            target_minutes_per_day: h.target_minutes_per_day,
            progress_minutes: h.progress_minutes,
            streak: h.streak,
            last_completion_date: h.last_completion_date.map(Habit::format_completion_date),
            is_completed_today: h.is_completed_today,
            version: h.version,
            created_at: h.created_at.timestamp(),
            updated_at: h.updated_at.timestamp(),
        }
    }
}
