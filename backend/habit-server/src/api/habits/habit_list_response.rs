use crate::HabitDto;
use serde::Serialize;

/// List of habits response
#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub habits: Vec<HabitDto>,
}
