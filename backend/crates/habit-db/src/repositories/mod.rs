pub mod habit_repository;
pub mod rollover_repository;
pub mod user_repository;

mod row;
