use std::sync::Arc;

use chrono::{FixedOffset, Locale, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use slotbook_client::BookingApi;
use slotbook_core::availability::filter::{self, DateFilter, ServiceFilter};
use slotbook_core::availability::grouping::{self, DayGroup};
use slotbook_core::availability::state::{derive_slot_state, RecordIndex, SlotDisplayState};
use slotbook_core::availability::window;
use slotbook_core::models::record::Record;
use slotbook_core::models::service::Service;
use slotbook_core::models::slot::Slot;
use slotbook_core::models::user::PublicProfile;
use slotbook_core::timefmt;

use crate::booking::{BookingFlow, BookingOutcome, BookingReview, FlowStage, SERVICE_PLACEHOLDER};
use crate::config::AppConfig;
use crate::polling::PollingCell;
use crate::session::SessionService;

/// One slot prepared for rendering: derived display state, whether the
/// booking control shows, and the resolved display strings.
#[derive(Debug, Clone)]
pub struct SlotCard {
    pub slot: Slot,
    pub state: SlotDisplayState,
    pub action_offered: bool,
    pub service_name: String,
    pub time_range: String,
}

/// One rendered day of the schedule.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub label: String,
    pub cards: Vec<SlotCard>,
}

/// The schedule view of one master, shared by the public booking page and
/// the owner's profile page.
///
/// Five polled dependencies back the view: the filtered slot list, the
/// unfiltered ("ALL" dates) slot list feeding the date options, the
/// service list, the viewer's own records, and the unread-notification
/// count. Each polls on its own cadence and all keep refreshing while the
/// page is backgrounded. Construct inside a Tokio runtime; dropping the
/// page stops the polling.
pub struct SchedulePage {
    session: Arc<SessionService>,
    offset: FixedOffset,
    locale: Locale,
    filters: Arc<RwLock<(ServiceFilter, DateFilter)>>,
    master_id: Arc<RwLock<Option<Uuid>>>,
    slots: PollingCell<Vec<Slot>>,
    all_slots: PollingCell<Vec<Slot>>,
    services: PollingCell<Vec<Service>>,
    records: PollingCell<Vec<Record>>,
    profile: PollingCell<Option<PublicProfile>>,
    unread: PollingCell<u64>,
    flow: BookingFlow,
}

impl SchedulePage {
    /// `master_ref` is the opaque public-page identifier of the master;
    /// the true master id is cached from the first slot seen and then
    /// preferred for service and profile fetches.
    pub fn new(
        api: Arc<dyn BookingApi>,
        session: Arc<SessionService>,
        master_ref: impl Into<String>,
        config: &AppConfig,
    ) -> Self {
        let master_ref: String = master_ref.into();
        let offset = config.utc_offset;
        let filters = Arc::new(RwLock::new((ServiceFilter::All, DateFilter::All)));
        let master_id: Arc<RwLock<Option<Uuid>>> = Arc::new(RwLock::new(None));

        let slots = PollingCell::spawn("slots", config.slot_poll, {
            let api = Arc::clone(&api);
            let master_ref = master_ref.clone();
            let filters = Arc::clone(&filters);
            let master_id = Arc::clone(&master_id);
            move || {
                let api = Arc::clone(&api);
                let master_ref = master_ref.clone();
                let filters = Arc::clone(&filters);
                let master_id = Arc::clone(&master_id);
                async move {
                    let fetched = fetch_master_slots(api.as_ref(), &master_ref).await;
                    remember_master_id(&master_id, &fetched).await;
                    let (service, date) = *filters.read().await;
                    let visible = window::retain_displayable(fetched, Utc::now());
                    filter::apply_filters(visible, service, date, offset)
                }
            }
        });

        let all_slots = PollingCell::spawn("all-slots", config.slot_poll, {
            let api = Arc::clone(&api);
            let master_ref = master_ref.clone();
            let filters = Arc::clone(&filters);
            move || {
                let api = Arc::clone(&api);
                let master_ref = master_ref.clone();
                let filters = Arc::clone(&filters);
                async move {
                    let fetched = fetch_master_slots(api.as_ref(), &master_ref).await;
                    let (service, _) = *filters.read().await;
                    let visible = window::retain_displayable(fetched, Utc::now());
                    filter::apply_filters(visible, service, DateFilter::All, offset)
                }
            }
        });

        let services = PollingCell::spawn("services", config.service_poll, {
            let api = Arc::clone(&api);
            let master_id = Arc::clone(&master_id);
            move || {
                let api = Arc::clone(&api);
                let master_id = Arc::clone(&master_id);
                async move {
                    // Disabled until the master id is known from the slots.
                    let Some(id) = *master_id.read().await else {
                        return Vec::new();
                    };
                    match api.services_for_master(id).await {
                        Ok(list) => list,
                        Err(err) => {
                            warn!(error = %err, "service list fetch failed");
                            Vec::new()
                        }
                    }
                }
            }
        });

        let records = PollingCell::spawn("records", config.record_poll, {
            let api = Arc::clone(&api);
            let session = Arc::clone(&session);
            move || {
                let api = Arc::clone(&api);
                let session = Arc::clone(&session);
                async move {
                    let Some(user) = session.current_user() else {
                        return Vec::new();
                    };
                    match api.records_for_client(user.id).await {
                        Ok(list) => list,
                        Err(err) => {
                            drop_dead_session(&session, &err);
                            warn!(error = %err, "record list fetch failed");
                            Vec::new()
                        }
                    }
                }
            }
        });

        let profile = PollingCell::spawn("profile", config.service_poll, {
            let api = Arc::clone(&api);
            let master_ref = master_ref.clone();
            let master_id = Arc::clone(&master_id);
            move || {
                let api = Arc::clone(&api);
                let master_ref = master_ref.clone();
                let master_id = Arc::clone(&master_id);
                async move {
                    let cached = *master_id.read().await;
                    let reference = cached
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| master_ref.clone());
                    match api.public_profile(&reference).await {
                        Ok(profile) => Some(profile),
                        Err(err) => {
                            warn!(error = %err, "public profile fetch failed");
                            None
                        }
                    }
                }
            }
        });

        let unread = PollingCell::spawn("unread-notifications", config.notification_poll, {
            let api = Arc::clone(&api);
            let session = Arc::clone(&session);
            move || {
                let api = Arc::clone(&api);
                let session = Arc::clone(&session);
                async move {
                    if !session.is_authenticated() {
                        return 0;
                    }
                    match api.unread_notifications().await {
                        Ok(count) => count,
                        Err(err) => {
                            drop_dead_session(&session, &err);
                            warn!(error = %err, "unread count fetch failed");
                            0
                        }
                    }
                }
            }
        });

        let flow = BookingFlow::new(Arc::clone(&api), Arc::clone(&session));

        Self {
            session,
            offset,
            locale: timefmt::DEFAULT_LOCALE,
            filters,
            master_id,
            slots,
            all_slots,
            services,
            records,
            profile,
            unread,
            flow,
        }
    }

    pub async fn filters(&self) -> (ServiceFilter, DateFilter) {
        *self.filters.read().await
    }

    /// Both slot lists key on the service selection.
    pub async fn set_service_filter(&self, selection: ServiceFilter) {
        self.filters.write().await.0 = selection;
        self.slots.invalidate();
        self.all_slots.invalidate();
    }

    /// Only the filtered list keys on the date selection; the date options
    /// keep coming from the unfiltered list.
    pub async fn set_date_filter(&self, selection: DateFilter) {
        self.filters.write().await.1 = selection;
        self.slots.invalidate();
    }

    /// True while the first slot fetch is outstanding.
    pub async fn is_loading(&self) -> bool {
        self.slots.is_loading().await
    }

    /// The filtered slots partitioned into labeled day groups.
    pub async fn day_groups(&self) -> Vec<DayGroup> {
        let slots = self.slots.get().await.unwrap_or_default();
        grouping::group_by_day(slots, self.offset, self.locale)
    }

    /// The full render model: day groups with per-slot display state,
    /// booking control, and resolved display strings.
    pub async fn schedule(&self) -> Vec<DaySchedule> {
        let services = self.services.get().await.unwrap_or_default();
        let records = RecordIndex::new(self.records.get().await.unwrap_or_default());
        self.day_groups()
            .await
            .into_iter()
            .map(|group| DaySchedule {
                label: group.label,
                cards: group
                    .slots
                    .into_iter()
                    .map(|slot| self.card(slot, &services, &records))
                    .collect(),
            })
            .collect()
    }

    fn card(&self, slot: Slot, services: &[Service], records: &RecordIndex) -> SlotCard {
        let state = derive_slot_state(&slot, records.for_slot(slot.id));
        let service_name = slot
            .service_id
            .and_then(|id| services.iter().find(|service| service.id == id))
            .map(|service| service.name.clone())
            .unwrap_or_else(|| SERVICE_PLACEHOLDER.to_string());
        let time_range = format!(
            "{} — {}",
            timefmt::time_short(slot.start_time, self.offset),
            timefmt::time_short(slot.end_time, self.offset)
        );
        SlotCard {
            state,
            action_offered: state.action_offered(),
            service_name,
            time_range,
            slot,
        }
    }

    /// Distinct selectable days, ascending, from the unfiltered list.
    pub async fn date_options(&self) -> Vec<NaiveDate> {
        let slots = self.all_slots.get().await.unwrap_or_default();
        filter::date_options(&slots, self.offset)
    }

    /// Public display data of the master: the profile endpoint when it has
    /// answered, else the joined fields of the first slot seen.
    pub async fn master_profile(&self) -> Option<PublicProfile> {
        if let Some(Some(profile)) = self.profile.get().await {
            return Some(profile);
        }
        self.slots
            .get()
            .await
            .and_then(|slots| slots.first().map(PublicProfile::from_slot))
    }

    /// The master's true id, once discovered from the slot list.
    pub async fn master_id(&self) -> Option<Uuid> {
        *self.master_id.read().await
    }

    /// `None` while the first count fetch is outstanding.
    pub async fn unread_notifications(&self) -> Option<u64> {
        self.unread.get().await
    }

    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    pub async fn booking_stage(&self) -> FlowStage {
        self.flow.stage().await
    }

    /// Entry point from a slot's booking control.
    pub async fn select_slot(&self, slot: Slot) -> FlowStage {
        self.flow.select(slot).await
    }

    pub async fn booking_review(&self) -> Option<BookingReview> {
        let services = self.services.get().await.unwrap_or_default();
        self.flow.review(&services, self.offset).await
    }

    pub async fn cancel_booking(&self) {
        self.flow.cancel().await
    }

    /// Confirms the held slot. On success every dependent cache is
    /// invalidated before control returns, so a just-booked slot cannot
    /// keep rendering as free past the next fetch.
    pub async fn confirm_booking(&self) -> Option<BookingOutcome> {
        let outcome = self.flow.confirm().await;
        if outcome == Some(BookingOutcome::Success) {
            self.slots.invalidate();
            self.all_slots.invalidate();
            self.records.invalidate();
            self.services.invalidate();
        }
        outcome
    }

    /// Window-refocus hook: schedule an immediate re-fetch of everything.
    pub fn refresh_all(&self) {
        self.slots.invalidate();
        self.all_slots.invalidate();
        self.services.invalidate();
        self.records.invalidate();
        self.profile.invalidate();
        self.unread.invalidate();
    }
}

async fn fetch_master_slots(api: &dyn BookingApi, master_ref: &str) -> Vec<Slot> {
    match api.slots_for_master(master_ref).await {
        Ok(slots) => slots,
        Err(err) => {
            warn!(error = %err, "slot list fetch failed");
            Vec::new()
        }
    }
}

/// The master id is cached once discovered so service and profile fetches
/// survive the slot list going momentarily empty.
async fn remember_master_id(cache: &RwLock<Option<Uuid>>, slots: &[Slot]) {
    if let Some(first) = slots.first() {
        let mut guard = cache.write().await;
        if guard.is_none() {
            *guard = Some(first.master_id);
        }
    }
}

/// Any unauthorized response means the token is dead; the session is
/// cleared so auth-dependent surfaces react immediately.
fn drop_dead_session(session: &SessionService, err: &slotbook_client::error::ApiError) {
    if err.is_unauthorized() {
        if let Err(err) = session.clear() {
            warn!(error = %err, "failed to clear session");
        }
    }
}
