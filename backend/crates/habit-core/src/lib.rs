pub mod clock;
pub mod error;
pub mod models;
pub mod progress;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::habit::{DEFAULT_EMOJI, DEFAULT_TARGET_MINUTES_PER_DAY, Habit};
pub use models::habit_summary::HabitSummary;
pub use models::user::User;
pub use progress::{apply_progress_delta, reset_daily};
pub use validation::{HabitValidator, ValidationLimits};

#[cfg(test)]
mod tests;
