use std::collections::HashMap;

use crate::models::record::{Record, RecordStatus};
use crate::models::slot::Slot;

/// What a slot looks like to the viewing client. The five states are
/// mutually exclusive; [`derive_slot_state`] is the only place they are
/// computed, so every surface renders bookings the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDisplayState {
    /// Confirmed for somebody; closed for everyone.
    Booked,
    /// The viewer already requested this slot and the master has not
    /// decided yet.
    UserPending,
    /// The viewer's request was approved.
    UserConfirmed,
    /// The viewer's request was declined; a new request is allowed.
    UserRejected,
    Free,
}

impl SlotDisplayState {
    /// Whether the booking control is offered. A rejection is not final
    /// and the client may re-initiate, while a pending or confirmed
    /// request must not be duplicated.
    pub fn action_offered(&self) -> bool {
        matches!(self, SlotDisplayState::Free | SlotDisplayState::UserRejected)
    }

    /// Stable slug used as a styling hook and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotDisplayState::Booked => "booked",
            SlotDisplayState::UserPending => "user-pending",
            SlotDisplayState::UserConfirmed => "user-confirmed",
            SlotDisplayState::UserRejected => "user-rejected",
            SlotDisplayState::Free => "free",
        }
    }

    /// User-facing badge text. Free slots carry the control instead of a
    /// badge.
    pub fn status_text(&self) -> &'static str {
        match self {
            SlotDisplayState::Booked => "Забронирован",
            SlotDisplayState::UserPending => "Заявка отправлена",
            SlotDisplayState::UserConfirmed => "Одобрено",
            SlotDisplayState::UserRejected => "Отклонено",
            SlotDisplayState::Free => "",
        }
    }
}

/// The viewing client's records keyed by slot id.
///
/// The platform keeps at most one active record per (slot, client) pair;
/// should a payload ever carry several, the last one encountered wins,
/// matching how the map has always been built.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    by_slot: HashMap<u64, Record>,
}

impl RecordIndex {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        let mut by_slot = HashMap::new();
        for record in records {
            by_slot.insert(record.slot_id, record);
        }
        Self { by_slot }
    }

    pub fn for_slot(&self, slot_id: u64) -> Option<&Record> {
        self.by_slot.get(&slot_id)
    }

    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}

/// Classifies a slot for the viewing client. First match wins:
/// a booked slot is `Booked` no matter what records exist; otherwise the
/// client's own record decides; no record means `Free`. An unrecognized
/// record status reads as a pending request.
pub fn derive_slot_state(slot: &Slot, record: Option<&Record>) -> SlotDisplayState {
    if slot.is_booked {
        return SlotDisplayState::Booked;
    }
    match record.map(|r| r.status) {
        Some(RecordStatus::Pending) | Some(RecordStatus::Unknown) => SlotDisplayState::UserPending,
        Some(RecordStatus::Confirm) => SlotDisplayState::UserConfirmed,
        Some(RecordStatus::Reject) => SlotDisplayState::UserRejected,
        None => SlotDisplayState::Free,
    }
}

/// Convenience over [`derive_slot_state`] for a whole page: looks the slot
/// up in the index and returns state plus whether to offer the control.
pub fn classify(slot: &Slot, records: &RecordIndex) -> (SlotDisplayState, bool) {
    let state = derive_slot_state(slot, records.for_slot(slot.id));
    (state, state.action_offered())
}
