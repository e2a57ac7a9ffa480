pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{MIGRATOR, create_pool, run_migrations};
pub use repositories::habit_repository::HabitRepository;
pub use repositories::rollover_repository::RolloverRepository;
pub use repositories::user_repository::UserRepository;
