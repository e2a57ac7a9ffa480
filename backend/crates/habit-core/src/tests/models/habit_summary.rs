use crate::tests::habit_with;
use crate::HabitSummary;

use googletest::prelude::*;

#[test]
fn given_no_habits_when_summarized_then_all_zero() {
    let summary = HabitSummary::from_habits(&[]);

    assert_that!(summary, eq(&HabitSummary::default()));
}

#[test]
fn given_mixed_habits_when_summarized_then_counts_and_streaks_aggregated() {
    let habits = vec![
        habit_with(60, 60, true, Some("2024-01-10"), 5),
        habit_with(15, 30, false, Some("2024-01-08"), 2),
        habit_with(0, 45, false, None, 0),
    ];

    let summary = HabitSummary::from_habits(&habits);

    assert_that!(summary.total, eq(3));
    assert_that!(summary.completed, eq(1));
    assert_that!(summary.pending, eq(2));
    assert_that!(summary.total_streak, eq(7));
    assert_that!(summary.longest_streak, eq(5));
    assert_that!(summary.total_progress_minutes, eq(75));
}
