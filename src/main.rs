use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use slotbook_app::config::AppConfig;
use slotbook_app::schedule_page::SchedulePage;
use slotbook_app::session::{FileSessionStore, SessionService};
use slotbook_client::ApiClient;

/// Headless schedule watcher: polls one master's public schedule and logs
/// the grouped availability the way the booking page would render it.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let master = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SLOTBOOK_MASTER").ok())
        .ok_or_else(|| {
            eyre!("Pass a master reference as the first argument or set SLOTBOOK_MASTER")
        })?;

    // Session, API client, and the composed page model
    let session = Arc::new(SessionService::init(Box::new(FileSessionStore::new(
        &config.session_file,
    )))?);
    let api = Arc::new(ApiClient::new(&config.client)?.with_tokens(session.clone()));
    let page = SchedulePage::new(api, session, &master, &config);

    info!(master = %master, "watching schedule");

    let mut ticker = tokio::time::interval(config.slot_poll);
    loop {
        tokio::select! {
            _ = ticker.tick() => render(&page).await,
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn render(page: &SchedulePage) {
    if page.is_loading().await {
        info!("loading schedule...");
        return;
    }

    if let Some(profile) = page.master_profile().await {
        info!(
            master = %profile.first_name.as_deref().unwrap_or("—"),
            surname = %profile.surname.as_deref().unwrap_or("—"),
            "schedule of"
        );
    }

    let days = page.schedule().await;
    if days.is_empty() {
        info!("no available slots");
        return;
    }
    for day in days {
        info!(day = %day.label, slots = day.cards.len(), "");
        for card in &day.cards {
            info!(
                time = %card.time_range,
                service = %card.service_name,
                state = card.state.as_str(),
                bookable = card.action_offered,
                "slot"
            );
        }
    }
    if let Some(unread) = page.unread_notifications().await {
        if unread > 0 {
            info!(unread, "unread notifications");
        }
    }
}
