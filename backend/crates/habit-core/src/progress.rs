//! Daily progress and streak state machine.
//!
//! Both operations are pure: they take the current habit state and return
//! the next one. Persisting the result (and guarding the read-modify-write
//! with the habit's `version`) is the caller's job.
//!
//! ## Day rollover
//!
//! `apply_progress_delta` clears a completion flag left over from an earlier
//! day, but it never zeroes `progress_minutes`. Zeroing belongs to
//! `reset_daily`, which the server's rollover job runs once per calendar day.
//!
//! ## Streak rule
//!
//! Evaluated only when a habit goes from not-completed to completed:
//!
//! | `last_completion_date` | new `streak`   |
//! |------------------------|----------------|
//! | yesterday              | `streak + 1`   |
//! | absent                 | `1`            |
//! | any other date         | `1`            |
//!
//! "Any other date" includes today, which happens after a same-day reset.

use crate::Habit;

use chrono::NaiveDate;

/// Add (or subtract) minutes to today's progress and update completion state.
///
/// `today` is the caller's notion of the current calendar date; the function
/// never reads the system clock.
pub fn apply_progress_delta(habit: &Habit, delta_minutes: i64, today: NaiveDate) -> Habit {
    let mut next = habit.clone();

    // Completion flag belongs to an earlier day
    if next.is_completed_today && next.last_completion_date != Some(today) {
        next.is_completed_today = false;
        next.progress_minutes = next.progress_minutes.max(0);
    }

    next.progress_minutes =
        clamp_minutes(i64::from(next.progress_minutes).saturating_add(delta_minutes));

    if !next.is_completed_today && next.progress_minutes >= next.target_minutes_per_day {
        next.is_completed_today = true;
        next.streak = next_streak(next.streak, next.last_completion_date, today);
        next.last_completion_date = Some(today);
    }

    next
}

/// Zero today's progress and clear the completion flag.
///
/// `streak` and `last_completion_date` are left alone, so applying it twice
/// is the same as applying it once.
pub fn reset_daily(habit: &Habit) -> Habit {
    let mut next = habit.clone();
    next.progress_minutes = 0;
    next.is_completed_today = false;
    next
}

fn next_streak(streak: i32, last_completion_date: Option<NaiveDate>, today: NaiveDate) -> i32 {
    match last_completion_date {
        Some(last) if today.pred_opt() == Some(last) => streak.saturating_add(1),
        _ => 1,
    }
}

fn clamp_minutes(minutes: i64) -> i32 {
    minutes.clamp(0, i64::from(i32::MAX)) as i32
}
