use crate::error::{invalid_input_error, BotResult};
use serde_json::{Map, Value};

use super::models::{NormalizedAttendee, NormalizedEvent};

/// Title used when an event has no usable summary
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Reduce raw calendar events to prompt-ready records.
///
/// The output is a 1:1 positional mapping of the input: same length, same
/// order, no filtering. Absent or unusable optional fields are left out of
/// the result rather than carried as nulls. The only failure is an element
/// that is not a JSON object; the whole call fails in that case and no
/// partial output is returned.
pub fn normalize(events: &[Value]) -> BotResult<Vec<NormalizedEvent>> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let record = event.as_object().ok_or_else(|| {
                invalid_input_error(&format!("Event at position {} is not an object", index))
            })?;
            Ok(normalize_event(record))
        })
        .collect()
}

/// Project a single event record onto its normalized form
fn normalize_event(event: &Map<String, Value>) -> NormalizedEvent {
    let summary =
        trimmed_string_field(event, "summary").unwrap_or_else(|| UNTITLED_EVENT.to_string());

    // Values that pass the whitespace check keep their original form
    let description = trimmed_string_field(event, "description");
    let location = trimmed_string_field(event, "location");

    // Organizer shrinks to the bare email address
    let organizer = event
        .get("organizer")
        .and_then(|organizer| organizer.get("email"))
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .map(str::to_string);

    let attendee_list = event
        .get("attendees")
        .and_then(Value::as_array)
        .filter(|attendees| !attendees.is_empty());

    let (attendee_count, is_meeting, attendees) = match attendee_list {
        Some(list) => (
            Some(list.len()),
            Some(list.len() > 1),
            Some(list.iter().map(normalize_attendee).collect()),
        ),
        None => (None, None, None),
    };

    // "default" carries no information, so only other kinds are kept
    let event_type = event
        .get("eventType")
        .and_then(Value::as_str)
        .filter(|kind| *kind != "default")
        .map(str::to_string);

    NormalizedEvent {
        created: event.get("created").cloned(),
        updated: event.get("updated").cloned(),
        summary,
        start: event.get("start").cloned(),
        end: event.get("end").cloned(),
        description,
        location,
        organizer,
        attendee_count,
        is_meeting,
        attendees,
        event_type,
    }
}

/// Read a string field, treating whitespace-only values as absent
fn trimmed_string_field(event: &Map<String, Value>, key: &str) -> Option<String> {
    event
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

/// Reduce an attendee record to email, response status and organizer flag
fn normalize_attendee(attendee: &Value) -> NormalizedAttendee {
    NormalizedAttendee {
        email: attendee
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_string),
        response_status: attendee
            .get("responseStatus")
            .and_then(Value::as_str)
            .map(str::to_string),
        organizer: attendee
            .get("organizer")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}
