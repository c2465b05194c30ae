use crate::cli::Command;
use crate::components::google_calendar::{acquire_access_token, GoogleCalendarClient, TimeFrame};
use crate::components::summary::{
    build_request, normalize, EventStats, NormalizedEvent, SummaryClient,
};
use crate::config::Config;
use crate::error::{env_error, BotResult, Error};
use serde_json::Value;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shown when the summary request fails outright
const SUMMARY_UNAVAILABLE: &str = "Unable to generate AI summary at this time. Please try again.";
/// How many event titles the overview lists
const OVERVIEW_TITLES: usize = 10;

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the selected command end to end
pub async fn run(config: Config, command: Command) -> miette::Result<()> {
    match command {
        Command::Events { time_frame, json } => run_events(&config, time_frame, json).await?,
        Command::Summarize {
            time_frame,
            show_payload,
        } => run_summarize(&config, time_frame, show_payload).await?,
    }

    Ok(())
}

/// Fetch, normalize and display events for the time frame
async fn run_events(config: &Config, time_frame: TimeFrame, json: bool) -> BotResult<()> {
    let events = fetch_normalized_events(config, time_frame).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    print_overview(&events, time_frame);

    Ok(())
}

/// The full flow: fetch, normalize, request a narrative, display it
async fn run_summarize(config: &Config, time_frame: TimeFrame, show_payload: bool) -> BotResult<()> {
    let api_key = config
        .openai_api_key
        .clone()
        .ok_or_else(|| env_error("OPENAI_API_KEY"))?;

    let events = fetch_normalized_events(config, time_frame).await?;
    print_overview(&events, time_frame);

    let payload = build_request(events, time_frame.label());

    if show_payload {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    let mut client = SummaryClient::new(api_key);
    if let Some(model) = &config.openai_model {
        client = client.with_model(model);
    }

    // A failed summary request degrades to a fallback message, not an abort
    let summary = match client.generate_summary(&payload).await {
        Ok(response) => response.summary,
        Err(e) => {
            warn!("Summary request failed: {:?}", e);
            SUMMARY_UNAVAILABLE.to_string()
        }
    };

    println!();
    println!("Your Calendar Summary");
    println!("---------------------");
    println!("{}", summary);

    Ok(())
}

/// Authorize, fetch raw events and normalize them
async fn fetch_normalized_events(
    config: &Config,
    time_frame: TimeFrame,
) -> BotResult<Vec<NormalizedEvent>> {
    let access_token = acquire_access_token(config).await?;

    let calendar = GoogleCalendarClient::new(config, access_token);
    let raw_events: Vec<Value> = calendar.fetch_events(time_frame).await?;

    let events = normalize(&raw_events)?;
    info!(
        "Normalized {} events from the {}",
        events.len(),
        time_frame.label()
    );

    Ok(events)
}

/// Print the calendar overview: headline numbers and a sample of titles
fn print_overview(events: &[NormalizedEvent], time_frame: TimeFrame) {
    let stats = EventStats::from_events(events);

    println!("Calendar overview ({})", time_frame.label());
    println!("  Total events: {}", stats.total);
    println!("  Meetings: {}", stats.meetings);
    println!("  Personal events: {}", stats.personal);

    for event in events.iter().take(OVERVIEW_TITLES) {
        println!("  - {}", event.summary);
    }

    if events.len() > OVERVIEW_TITLES {
        println!("  ... and {} more events", events.len() - OVERVIEW_TITLES);
    }
}
