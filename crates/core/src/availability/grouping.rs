use chrono::{FixedOffset, Locale};

use crate::models::slot::Slot;
use crate::timefmt;

/// One rendered schedule day: a localized heading and the slots under it,
/// both in encounter order.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub label: String,
    pub slots: Vec<Slot>,
}

/// Partitions slots into day groups keyed by the localized heading of
/// their viewer-local start date. Headings appear in first-encounter order
/// (whatever order the backend returned), not re-sorted; every input slot
/// lands in exactly one group. Slots without a start time share the empty
/// heading.
pub fn group_by_day(slots: Vec<Slot>, offset: FixedOffset, locale: Locale) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for slot in slots {
        let label = slot
            .start_time
            .map(|start| timefmt::day_heading(start, offset, locale))
            .unwrap_or_default();
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.slots.push(slot),
            None => groups.push(DayGroup {
                label,
                slots: vec![slot],
            }),
        }
    }
    groups
}
