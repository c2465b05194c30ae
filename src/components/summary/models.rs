use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Privacy-reduced projection of a raw calendar event.
///
/// Optional fields are omitted from the serialized form entirely rather than
/// written as null, so the prompt payload only carries what the event had.
/// Time markers are opaque and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Value>,
    /// Event title, or "Untitled Event" when the source had none
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Organizer email only; the rest of the organizer record is dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_meeting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<NormalizedAttendee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// Reduced attendee record kept for meeting analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAttendee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<String>,
    /// Whether this attendee organized the event; absent in the source
    /// means false
    #[serde(default)]
    pub organizer: bool,
}

/// Request body for the summary generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequestPayload {
    pub preprocessed_data: Vec<NormalizedEvent>,
    pub time_frame: String,
}

/// Wrap a normalized event list and a time-frame label into a request
/// payload. Pure assembly; any label and any event list, including an empty
/// one, are accepted as-is.
pub fn build_request(
    normalized: Vec<NormalizedEvent>,
    time_frame_label: impl Into<String>,
) -> SummaryRequestPayload {
    SummaryRequestPayload {
        preprocessed_data: normalized,
        time_frame: time_frame_label.into(),
    }
}

/// Response from the summary generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Headline numbers derived from a normalized event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventStats {
    pub total: usize,
    pub meetings: usize,
    pub personal: usize,
}

impl EventStats {
    /// Split a normalized list into meetings and personal events
    pub fn from_events(events: &[NormalizedEvent]) -> Self {
        let total = events.len();
        let meetings = events
            .iter()
            .filter(|event| event.is_meeting == Some(true))
            .count();

        Self {
            total,
            meetings,
            personal: total - meetings,
        }
    }
}
