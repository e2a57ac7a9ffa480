use crate::Habit;

use serde::Serialize;

/// Aggregate daily statistics for one user's habits.
///
/// Mirrors the dashboard counters and the daily report: how many habits are
/// done today, how many are pending, and the streak totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub total_streak: i64,
    pub longest_streak: i32,
    pub total_progress_minutes: i64,
}

impl HabitSummary {
    pub fn from_habits(habits: &[Habit]) -> Self {
        habits.iter().fold(Self::default(), |mut summary, habit| {
            summary.total += 1;
            if habit.is_completed_today {
                summary.completed += 1;
            } else {
                summary.pending += 1;
            }
            summary.total_streak += i64::from(habit.streak);
            summary.longest_streak = summary.longest_streak.max(habit.streak);
            summary.total_progress_minutes += i64::from(habit.progress_minutes);
            summary
        })
    }
}
