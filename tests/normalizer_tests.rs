use calsona::components::summary::normalizer::{normalize, UNTITLED_EVENT};
use calsona::components::summary::{build_request, EventStats, NormalizedEvent};
use calsona::error::Error;
use serde_json::{json, Value};

/// Normalize a single event and return the record
fn normalize_one(event: Value) -> NormalizedEvent {
    let events = vec![event];
    normalize(&events).unwrap().into_iter().next().unwrap()
}

/// Normalize a single event and serialize the record back to JSON
fn normalize_one_to_json(event: Value) -> Value {
    serde_json::to_value(normalize_one(event)).unwrap()
}

/// Normalization keeps the length and order of the input
#[test]
fn preserves_length_and_order() {
    let events = vec![
        json!({ "summary": "First" }),
        json!({ "summary": "Second" }),
        json!({ "summary": "Third" }),
    ];

    let normalized = normalize(&events).unwrap();

    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized[0].summary, "First");
    assert_eq!(normalized[1].summary, "Second");
    assert_eq!(normalized[2].summary, "Third");
}

/// Missing or empty titles fall back to the placeholder
#[test]
fn missing_summary_falls_back_to_untitled() {
    assert_eq!(normalize_one(json!({})).summary, UNTITLED_EVENT);
    assert_eq!(normalize_one(json!({ "summary": "" })).summary, UNTITLED_EVENT);
    assert_eq!(normalize_one(json!({ "summary": "   " })).summary, UNTITLED_EVENT);
}

/// Whitespace-only descriptions and locations are dropped entirely
#[test]
fn whitespace_only_description_is_omitted() {
    let output = normalize_one_to_json(json!({ "summary": "Walk", "description": "   " }));
    assert!(output.get("description").is_none());

    let output = normalize_one_to_json(json!({ "summary": "Walk", "location": "\t\n" }));
    assert!(output.get("location").is_none());
}

/// Values that pass the whitespace check keep their original form
#[test]
fn kept_description_is_not_trimmed() {
    let output = normalize_one(json!({ "description": "  bring socks  " }));
    assert_eq!(output.description.as_deref(), Some("  bring socks  "));
}

/// Two attendees make a meeting and attendee records are reduced
#[test]
fn two_attendees_make_a_meeting() {
    let output = normalize_one(json!({
        "attendees": [
            { "email": "a@x.com" },
            { "email": "b@x.com", "responseStatus": "accepted", "organizer": true }
        ]
    }));

    assert_eq!(output.attendee_count, Some(2));
    assert_eq!(output.is_meeting, Some(true));

    let attendees = output.attendees.unwrap();
    assert_eq!(attendees.len(), 2);
    assert_eq!(attendees[0].email.as_deref(), Some("a@x.com"));
    assert!(!attendees[0].organizer);
    assert_eq!(attendees[1].response_status.as_deref(), Some("accepted"));
    assert!(attendees[1].organizer);
}

/// A single attendee is counted but is not a meeting
#[test]
fn single_attendee_is_not_a_meeting() {
    let output = normalize_one(json!({ "attendees": [{ "email": "a@x.com" }] }));

    assert_eq!(output.attendee_count, Some(1));
    assert_eq!(output.is_meeting, Some(false));
}

/// An empty attendee list leaves no attendee fields at all
#[test]
fn empty_attendees_are_omitted() {
    let output = normalize_one_to_json(json!({ "summary": "Solo", "attendees": [] }));

    assert!(output.get("attendeeCount").is_none());
    assert!(output.get("isMeeting").is_none());
    assert!(output.get("attendees").is_none());
}

/// The default event type carries no information and is dropped
#[test]
fn default_event_type_is_omitted() {
    let output = normalize_one_to_json(json!({ "eventType": "default" }));
    assert!(output.get("eventType").is_none());

    let output = normalize_one(json!({ "eventType": "outOfOffice" }));
    assert_eq!(output.event_type.as_deref(), Some("outOfOffice"));
}

/// Organizer shrinks to the bare email address
#[test]
fn organizer_is_reduced_to_email() {
    let output = normalize_one(json!({
        "organizer": { "email": "boss@x.com", "displayName": "Boss" }
    }));
    assert_eq!(output.organizer.as_deref(), Some("boss@x.com"));

    let output = normalize_one_to_json(json!({ "organizer": { "displayName": "Boss" } }));
    assert!(output.get("organizer").is_none());
}

/// Time markers pass through untouched
#[test]
fn time_markers_are_copied_verbatim() {
    let start = json!({ "dateTime": "2024-05-01T10:00:00+03:00", "timeZone": "Europe/Helsinki" });
    let output = normalize_one(json!({
        "created": "2024-04-30T08:00:00Z",
        "start": start.clone()
    }));

    assert_eq!(output.created, Some(json!("2024-04-30T08:00:00Z")));
    assert_eq!(output.start, Some(start));
    assert!(output.updated.is_none());
    assert!(output.end.is_none());
}

/// Optional fields of the wrong type are treated as absent
#[test]
fn mistyped_fields_are_treated_as_absent() {
    let output = normalize_one_to_json(json!({
        "summary": 7,
        "description": 12,
        "attendees": "everyone",
        "organizer": "boss@x.com"
    }));

    assert_eq!(output["summary"], json!(UNTITLED_EVENT));
    assert!(output.get("description").is_none());
    assert!(output.get("attendeeCount").is_none());
    assert!(output.get("organizer").is_none());
}

/// Normalizing the same input twice yields identical output
#[test]
fn normalize_is_idempotent_over_reruns() {
    let events = vec![
        json!({
            "summary": "Gym",
            "attendees": [{ "email": "a@x.com" }, { "email": "b@x.com" }]
        }),
        json!({ "description": "  " }),
    ];

    let first = normalize(&events).unwrap();
    let second = normalize(&events).unwrap();

    assert_eq!(first, second);
}

/// Serialized output never carries nulls for absent fields
#[test]
fn serialized_output_has_no_nulls() {
    let output = normalize_one_to_json(json!({ "summary": "Spa day" }));
    let record = output.as_object().unwrap();

    assert_eq!(record.get("summary"), Some(&json!("Spa day")));
    assert!(record.values().all(|value| !value.is_null()));
    // Only the title survives for a title-only event
    assert_eq!(record.len(), 1);
}

/// Field names are camelCase on the wire
#[test]
fn serialized_field_names_are_camel_case() {
    let output = normalize_one_to_json(json!({
        "eventType": "focusTime",
        "attendees": [
            { "email": "a@x.com", "responseStatus": "tentative" },
            { "email": "b@x.com" }
        ]
    }));

    assert!(output.get("attendeeCount").is_some());
    assert!(output.get("isMeeting").is_some());
    assert!(output.get("eventType").is_some());
    assert_eq!(output["attendees"][0]["responseStatus"], json!("tentative"));
    assert_eq!(output["attendees"][0]["organizer"], json!(false));
}

/// A non-object element fails the whole call
#[test]
fn non_object_element_fails_the_call() {
    let events = vec![json!({ "summary": "Fine" }), json!(42)];

    let result = normalize(&events);

    match result {
        Err(Error::InvalidInput(message)) => assert!(message.contains("position 1")),
        other => panic!("Expected invalid input error, got {:?}", other),
    }
}

/// Empty input stays empty and the request builder still forms a payload
#[test]
fn empty_input_yields_empty_payload() {
    let normalized = normalize(&[]).unwrap();
    assert!(normalized.is_empty());

    let payload = build_request(normalized, "all time");
    let body = serde_json::to_value(&payload).unwrap();

    assert_eq!(body["preprocessedData"], json!([]));
    assert_eq!(body["timeFrame"], json!("all time"));
}

/// The builder passes any label through unchanged
#[test]
fn builder_passes_label_through() {
    let events = vec![json!({ "summary": "Board games" })];
    let normalized = normalize(&events).unwrap();

    let payload = build_request(normalized, "since the dawn of time");

    assert_eq!(payload.time_frame, "since the dawn of time");
    assert_eq!(payload.preprocessed_data.len(), 1);
}

/// Stats split meetings from personal events
#[test]
fn stats_count_meetings_and_personal() {
    let events = vec![
        json!({ "attendees": [{ "email": "a@x.com" }, { "email": "b@x.com" }] }),
        json!({ "attendees": [{ "email": "a@x.com" }] }),
        json!({ "summary": "Nap" }),
    ];
    let normalized = normalize(&events).unwrap();

    let stats = EventStats::from_events(&normalized);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.meetings, 1);
    assert_eq!(stats.personal, 2);

    let solo_only = normalize(&[json!({ "summary": "Dentist" })]).unwrap();
    let all_personal = EventStats::from_events(&solo_only);
    assert_eq!(all_personal.meetings, 0);
    assert_eq!(all_personal.personal, 1);

    let empty = EventStats::from_events(&[]);
    assert_eq!(empty, EventStats::default());
}
