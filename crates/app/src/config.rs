use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, Local, Offset};
use eyre::{Result, WrapErr};
use tracing::Level;

use slotbook_client::config::ClientConfig;

/// Settings for the slotbook client process.
///
/// Everything loads from the environment with defaults matching the
/// platform's cadence: slots and records refresh every 30 seconds,
/// services and notifications every 60.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend connection settings.
    pub client: ClientConfig,

    /// Where the session JSON lives.
    pub session_file: PathBuf,

    /// Re-fetch cadence of the slot lists.
    pub slot_poll: Duration,

    /// Re-fetch cadence of the service list.
    pub service_poll: Duration,

    /// Re-fetch cadence of the viewer's own records.
    pub record_poll: Duration,

    /// Re-fetch cadence of the unread-notification count.
    pub notification_poll: Duration,

    /// Log level for the process.
    pub log_level: Level,

    /// The viewer's UTC offset; date filtering and headings follow it.
    pub utc_offset: FixedOffset,
}

impl AppConfig {
    /// Loads configuration from environment variables:
    ///
    /// - `SLOTBOOK_API_URL`, `SLOTBOOK_REQUEST_TIMEOUT_SECONDS` (see
    ///   [`ClientConfig::from_env`])
    /// - `SLOTBOOK_SESSION_FILE` (default `.slotbook-session.json`)
    /// - `SLOTBOOK_SLOT_POLL_SECONDS` (default 30)
    /// - `SLOTBOOK_SERVICE_POLL_SECONDS` (default 60)
    /// - `SLOTBOOK_RECORD_POLL_SECONDS` (default 30)
    /// - `SLOTBOOK_NOTIFICATION_POLL_SECONDS` (default 60)
    /// - `LOG_LEVEL` (default `info`)
    /// - `SLOTBOOK_UTC_OFFSET_MINUTES` (default: the machine's offset)
    pub fn from_env() -> Result<Self> {
        let client = ClientConfig::from_env()?;

        let session_file = env::var("SLOTBOOK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".slotbook-session.json"));

        let slot_poll = poll_seconds("SLOTBOOK_SLOT_POLL_SECONDS", 30)?;
        let service_poll = poll_seconds("SLOTBOOK_SERVICE_POLL_SECONDS", 60)?;
        let record_poll = poll_seconds("SLOTBOOK_RECORD_POLL_SECONDS", 30)?;
        let notification_poll = poll_seconds("SLOTBOOK_NOTIFICATION_POLL_SECONDS", 60)?;

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let utc_offset = match env::var("SLOTBOOK_UTC_OFFSET_MINUTES") {
            Ok(raw) => {
                let minutes: i32 = raw
                    .parse()
                    .wrap_err("Invalid SLOTBOOK_UTC_OFFSET_MINUTES value")?;
                FixedOffset::east_opt(minutes * 60)
                    .ok_or_else(|| eyre::eyre!("SLOTBOOK_UTC_OFFSET_MINUTES out of range"))?
            }
            Err(_) => Local::now().offset().fix(),
        };

        Ok(Self {
            client,
            session_file,
            slot_poll,
            service_poll,
            record_poll,
            notification_poll,
            log_level,
            utc_offset,
        })
    }
}

fn poll_seconds(var: &str, default: u64) -> Result<Duration> {
    let seconds = match env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid {var} value"))?,
        Err(_) => default,
    };
    Ok(Duration::from_secs(seconds))
}
