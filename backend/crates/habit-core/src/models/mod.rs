pub mod habit;
pub mod habit_summary;
pub mod user;
