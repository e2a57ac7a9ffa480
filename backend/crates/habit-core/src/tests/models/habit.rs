use crate::tests::date;
use crate::{CoreError, DEFAULT_EMOJI, DEFAULT_TARGET_MINUTES_PER_DAY, Habit};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_no_emoji_or_target_when_created_then_defaults_applied() {
    let owner = Uuid::new_v4();

    let habit = Habit::new(owner, "Read".to_string(), None, None);

    assert_that!(habit.emoji.as_str(), eq(DEFAULT_EMOJI));
    assert_that!(habit.target_minutes_per_day, eq(DEFAULT_TARGET_MINUTES_PER_DAY));
    assert_that!(habit.progress_minutes, eq(0));
    assert_that!(habit.streak, eq(0));
    assert_that!(habit.last_completion_date, none());
    assert_that!(habit.is_completed_today, eq(false));
    assert_that!(habit.version, eq(1));
    assert_that!(habit.owner_id, eq(owner));
}

#[test]
fn given_explicit_values_when_created_then_kept() {
    let habit = Habit::new(
        Uuid::new_v4(),
        "Run".to_string(),
        Some("🏃".to_string()),
        Some(30),
    );

    assert_that!(habit.emoji.as_str(), eq("🏃"));
    assert_that!(habit.target_minutes_per_day, eq(30));
}

#[test]
fn given_habit_when_next_revision_then_version_bumped_and_updated_at_advanced() {
    let habit = Habit::new(Uuid::new_v4(), "Run".to_string(), None, None);
    let before = habit.updated_at;

    let next = habit.clone().next_revision();

    assert_that!(next.version, eq(2));
    assert_that!(next.updated_at >= before, eq(true));
    assert_that!(next.created_at, eq(habit.created_at));
}

#[test]
fn given_completion_date_when_formatted_then_iso_calendar_date() {
    assert_that!(
        Habit::format_completion_date(date("2024-01-09")).as_str(),
        eq("2024-01-09")
    );
}

#[test]
fn given_valid_date_string_when_parsed_then_returns_date() {
    let parsed = Habit::parse_completion_date("2024-02-29").unwrap();

    assert_that!(parsed, eq(date("2024-02-29")));
}

#[test]
fn given_invalid_date_string_when_parsed_then_returns_invalid_date_error() {
    let result = Habit::parse_completion_date("2023-02-29");

    match result {
        Err(CoreError::InvalidDate { value, .. }) => assert_that!(value, eq("2023-02-29")),
        other => panic!("Expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn given_habit_when_serialized_then_completion_date_is_plain_date() {
    let mut habit = Habit::new(Uuid::new_v4(), "Run".to_string(), None, None);
    habit.last_completion_date = Some(date("2024-01-09"));

    let json = serde_json::to_value(&habit).unwrap();

    assert_that!(json["last_completion_date"].as_str(), some(eq("2024-01-09")));
}
