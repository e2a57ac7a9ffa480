mod models;

use crate::Habit;

use chrono::NaiveDate;
use uuid::Uuid;

pub(crate) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub(crate) fn habit_with(
    progress_minutes: i32,
    target_minutes_per_day: i32,
    is_completed_today: bool,
    last_completion_date: Option<&str>,
    streak: i32,
) -> Habit {
    let mut habit = Habit::new(
        Uuid::new_v4(),
        "Reading".to_string(),
        None,
        Some(target_minutes_per_day),
    );
    habit.progress_minutes = progress_minutes;
    habit.is_completed_today = is_completed_today;
    habit.last_completion_date = last_completion_date.map(date);
    habit.streak = streak;
    habit
}
