pub mod auth;
pub mod client;
pub mod time;

pub use auth::acquire_access_token;
pub use client::GoogleCalendarClient;
pub use time::TimeFrame;
