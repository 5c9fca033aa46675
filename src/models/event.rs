use serde::{Deserialize, Serialize};

/// The slice of a Google Calendar event this bot reads and rewrites.
/// Lifecycle (creation/deletion) stays with the calendar service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(rename = "summary", default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color_id: Option<String>,
}
