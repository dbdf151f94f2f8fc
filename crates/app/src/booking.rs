use std::sync::Arc;

use chrono::FixedOffset;
use tokio::sync::RwLock;
use tracing::{info, warn};

use slotbook_client::BookingApi;
use slotbook_core::models::record::CreateRecordRequest;
use slotbook_core::models::service::Service;
use slotbook_core::models::slot::Slot;
use slotbook_core::timefmt;

use crate::session::SessionService;

/// Review-step label when the slot's service cannot be resolved; a missing
/// service never blocks submission.
pub const SERVICE_PLACEHOLDER: &str = "Услуга";

/// Where the two-step booking interaction stands.
#[derive(Debug, Clone)]
pub enum FlowStage {
    Idle,
    /// Booking was attempted without a session; the login prompt shows and
    /// no slot is held.
    AuthRequired,
    /// A slot is held and the review step is showing.
    Selected(Slot),
}

impl FlowStage {
    pub fn selected_slot(&self) -> Option<&Slot> {
        match self {
            FlowStage::Selected(slot) => Some(slot),
            _ => None,
        }
    }
}

/// What the review step shows before the viewer confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReview {
    pub service_name: String,
    pub date: String,
    pub time_range: String,
}

/// Outcome surfaced to the viewer after a confirm attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Success,
    /// The backend reports an active record already exists for this
    /// (slot, client) pair.
    AlreadyBooked,
    Failed,
}

impl BookingOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            BookingOutcome::Success => "Запись успешно создана! Мастер получит уведомление.",
            BookingOutcome::AlreadyBooked => {
                "Вы уже записаны на этот слот. На один слот возможна только одна запись от одного пользователя."
            }
            BookingOutcome::Failed => "Ошибка при создании записи. Попробуйте еще раз.",
        }
    }
}

/// The booking submission flow: `Idle → AuthRequired | Selected →
/// (success → Idle | failure → Selected)`.
///
/// Success clears the selection; failure deliberately retains it so the
/// review stays open until the viewer cancels or retries.
pub struct BookingFlow {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionService>,
    stage: RwLock<FlowStage>,
}

impl BookingFlow {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionService>) -> Self {
        Self {
            api,
            session,
            stage: RwLock::new(FlowStage::Idle),
        }
    }

    pub async fn stage(&self) -> FlowStage {
        self.stage.read().await.clone()
    }

    /// Entry point from a slot's booking control. Unauthenticated viewers
    /// land in the login prompt without a held slot.
    pub async fn select(&self, slot: Slot) -> FlowStage {
        let mut stage = self.stage.write().await;
        *stage = if self.session.is_authenticated() {
            FlowStage::Selected(slot)
        } else {
            FlowStage::AuthRequired
        };
        stage.clone()
    }

    /// The review shown before confirmation, resolved against the fetched
    /// service list. `None` when no slot is held.
    pub async fn review(&self, services: &[Service], offset: FixedOffset) -> Option<BookingReview> {
        let stage = self.stage.read().await;
        let slot = stage.selected_slot()?;
        let service_name = slot
            .service_id
            .and_then(|id| services.iter().find(|service| service.id == id))
            .map(|service| service.name.clone())
            .unwrap_or_else(|| SERVICE_PLACEHOLDER.to_string());
        Some(BookingReview {
            service_name,
            date: timefmt::date_short(slot.start_time, offset),
            time_range: format!(
                "{} — {}",
                timefmt::time_short(slot.start_time, offset),
                timefmt::time_short(slot.end_time, offset)
            ),
        })
    }

    /// Submits the held slot. Returns `None` when there is nothing to
    /// submit (no selection or no session); nothing is surfaced then.
    pub async fn confirm(&self) -> Option<BookingOutcome> {
        let slot = self.stage.read().await.selected_slot().cloned()?;
        let user = self.session.current_user()?;

        let request = CreateRecordRequest {
            slot_id: slot.id,
            client_id: user.id,
        };
        match self.api.create_record(request).await {
            Ok(record) => {
                info!(slot_id = slot.id, record_id = record.id, "booking request created");
                *self.stage.write().await = FlowStage::Idle;
                Some(BookingOutcome::Success)
            }
            Err(err) if err.is_duplicate_booking() => {
                warn!(slot_id = slot.id, "booking rejected: duplicate record");
                Some(BookingOutcome::AlreadyBooked)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    // The token is dead; drop the session like any other
                    // unauthorized response.
                    if let Err(err) = self.session.clear() {
                        warn!(error = %err, "failed to clear session");
                    }
                }
                warn!(slot_id = slot.id, error = %err, "booking request failed");
                Some(BookingOutcome::Failed)
            }
        }
    }

    /// Backs out from either step; no server call.
    pub async fn cancel(&self) {
        *self.stage.write().await = FlowStage::Idle;
    }
}
