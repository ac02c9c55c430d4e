//! Timeline event model and lenient wire parsing.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use super::EventStatus;

/// A timeline event fetched from the project API.
///
/// Events are externally owned: this library only ever reads a
/// freshly-fetched snapshot and never mutates or deletes them. The `title`
/// is the sole linkage to a construction phase (case-insensitive substring
/// match on the phase name), so the wire fields here are parsed leniently:
/// an unknown `status` or an unparseable `createdAt` degrades to `None`
/// rather than rejecting the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free-text title, expected to contain a phase name
    pub title: String,

    /// Free-text body of the update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reported status; absent or unrecognized values count as unset
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<EventStatus>,

    /// Event category as reported by the server (e.g. "milestone")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Audience of the event (e.g. "public")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Creation time, used to pick the most recent event per phase;
    /// malformed values degrade to `None` and keep snapshot order
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,

    /// User-entered start date (ISO-8601, not validated on read)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// User-entered end date (ISO-8601, not validated on read)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Parse a status value, mapping anything unrecognized to `None`.
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<EventStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

/// Parse a timestamp value, mapping anything unparseable to `None`.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}
