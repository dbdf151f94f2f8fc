use chrono::{DateTime, Duration, Utc};

use crate::models::slot::Slot;

/// A slot that started under an hour ago may still be in progress and is
/// worth showing; anything older is clutter.
const DISPLAY_GRACE_MINUTES: i64 = 60;

/// The oldest `start_time` still shown, given the current instant.
pub fn display_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::minutes(DISPLAY_GRACE_MINUTES)
}

/// Whether a slot survives the time-window filter. Slots without a start
/// time are kept; the date filter is what excludes them later.
pub fn is_displayable(slot: &Slot, now: DateTime<Utc>) -> bool {
    match slot.start_time {
        Some(start) => start >= display_cutoff(now),
        None => true,
    }
}

/// Drops every slot whose start lies before the display cutoff, preserving
/// backend order. Idempotent for a fixed `now`.
pub fn retain_displayable(slots: Vec<Slot>, now: DateTime<Utc>) -> Vec<Slot> {
    slots
        .into_iter()
        .filter(|slot| is_displayable(slot, now))
        .collect()
}
