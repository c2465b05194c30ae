pub mod client;
pub mod models;
pub mod normalizer;
pub mod prompt;

pub use client::SummaryClient;
pub use models::{
    build_request, EventStats, NormalizedAttendee, NormalizedEvent, SummaryRequestPayload,
    SummaryResponse,
};
pub use normalizer::normalize;
