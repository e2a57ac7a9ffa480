use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    /// Habit name (required)
    #[serde(default)]
    pub name: String,

    /// Defaults to a check mark
    #[serde(default)]
    pub emoji: Option<String>,

    /// Defaults to 60
    #[serde(default)]
    pub target_minutes_per_day: Option<i32>,
}
