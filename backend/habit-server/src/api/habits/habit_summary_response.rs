use crate::HabitDto;

use habit_core::HabitSummary;

use serde::Serialize;

/// Daily counters plus the habits they were computed from, enough for a
/// client to draw the dashboard chart or the daily report.
#[derive(Debug, Serialize)]
pub struct HabitSummaryResponse {
    pub summary: HabitSummary,
    /// "YYYY-MM-DD" the counters refer to
    pub date: String,
    pub habits: Vec<HabitDto>,
}
