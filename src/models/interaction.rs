use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Feedback;

/// Timestamp layout used on the metrics page (ISO-8601, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One view of the selector page, as recorded in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEntry {
    pub timestamp: NaiveDateTime,
    pub patient: String,
    /// Role label as selected; not restricted to the known roles.
    pub role: String,
    pub prompt: String,
    pub feedback: Feedback,
}

impl InteractionEntry {
    /// Build an entry stamped with the current local time.
    pub fn now(patient: &str, role: &str, prompt: String, feedback: Feedback) -> Self {
        Self {
            timestamp: chrono::Local::now().naive_local(),
            patient: patient.to_string(),
            role: role.to_string(),
            prompt,
            feedback,
        }
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
