use serde::Deserialize;

/// Minutes to add to today's progress; negative values subtract
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub minutes: i64,
}
