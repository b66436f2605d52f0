//! Domain DTOs for the DevDays API.
//!
//! # Design
//! Raw records are deserialized straight into typed structs. Required fields
//! have no serde default, so a record missing one fails the whole response
//! with `ApiError::DeserializationError` instead of producing a half-filled
//! value. Unknown fields are ignored; the Drupal export carries many more
//! than the schedule needs.

use serde::{Deserialize, Serialize};

/// Numeric key the remote API uses for one day's full schedule.
pub type ProgramId = u32;

/// A scheduled talk or activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    /// Sortable start time, e.g. `09:30` or an ISO-8601 time.
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifiers to pass to `SpeakerService::get_speakers`.
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// A presenter profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}
