mod habit;
mod habit_summary;
mod user;
