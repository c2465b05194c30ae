// Export components
pub mod google_calendar;
pub mod summary;

// Re-export the pieces of the summarize flow
pub use google_calendar::{GoogleCalendarClient, TimeFrame};
pub use summary::SummaryClient;
