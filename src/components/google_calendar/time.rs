use chrono::{Duration, Utc};
use clap::ValueEnum;

/// Date range selector for the calendar fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeFrame {
    /// Events from the last 30 days
    #[value(name = "30days")]
    ThirtyDays,
    /// Events from the last year
    #[default]
    #[value(name = "1year")]
    OneYear,
    /// Events from the last ten years
    #[value(name = "alltime")]
    AllTime,
}

impl TimeFrame {
    /// Lower bound of the query window as an RFC 3339 timestamp
    pub fn time_min(&self) -> String {
        let now = Utc::now();
        let start = match self {
            TimeFrame::ThirtyDays => now - Duration::days(30),
            TimeFrame::OneYear => now - Duration::days(365),
            // The calendar API does not serve unlimited history, so ten
            // years stands in for "all time"
            TimeFrame::AllTime => now - Duration::days(10 * 365),
        };
        start.to_rfc3339()
    }

    /// Upper bound of the query window as an RFC 3339 timestamp
    pub fn time_max(&self) -> String {
        Utc::now().to_rfc3339()
    }

    /// Human-readable label used in the summary prompt
    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::ThirtyDays => "last 30 days",
            TimeFrame::OneYear => "last year",
            TimeFrame::AllTime => "all time",
        }
    }
}
