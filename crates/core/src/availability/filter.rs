use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate};

use crate::errors::BookingError;
use crate::models::slot::Slot;

/// Wire sentinel both selectors use for "no filtering".
pub const ALL: &str = "ALL";

/// Service selection: everything, or one concrete service id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Service(u64),
}

impl ServiceFilter {
    /// A slot with no service id never matches a concrete selection.
    pub fn matches(&self, slot: &Slot) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Service(id) => slot.service_id == Some(*id),
        }
    }
}

impl FromStr for ServiceFilter {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL {
            return Ok(ServiceFilter::All);
        }
        value
            .parse::<u64>()
            .map(ServiceFilter::Service)
            .map_err(|_| BookingError::InvalidFilter(format!("not a service id: {value:?}")))
    }
}

impl fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceFilter::All => f.write_str(ALL),
            ServiceFilter::Service(id) => write!(f, "{id}"),
        }
    }
}

/// Date selection: everything, or one exact viewer-local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Day(NaiveDate),
}

impl DateFilter {
    /// Matches on the viewer-local calendar date of `start_time`. A slot
    /// without a start time never matches a concrete day.
    pub fn matches(&self, slot: &Slot, offset: FixedOffset) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Day(day) => slot
                .start_time
                .map(|start| start.with_timezone(&offset).date_naive() == *day)
                .unwrap_or(false),
        }
    }
}

impl FromStr for DateFilter {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL {
            return Ok(DateFilter::All);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(DateFilter::Day)
            .map_err(|_| BookingError::InvalidFilter(format!("not a YYYY-MM-DD date: {value:?}")))
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFilter::All => f.write_str(ALL),
            DateFilter::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
        }
    }
}

/// Applies both selectors over an already time-window-filtered sequence,
/// preserving order. Pure with respect to its inputs.
pub fn apply_filters(
    slots: Vec<Slot>,
    service: ServiceFilter,
    date: DateFilter,
    offset: FixedOffset,
) -> Vec<Slot> {
    slots
        .into_iter()
        .filter(|slot| service.matches(slot) && date.matches(slot, offset))
        .collect()
}

/// Distinct viewer-local days present in a slot sequence, ascending. Feeds
/// the date selector options, so it runs over the unfiltered list.
pub fn date_options(slots: &[Slot], offset: FixedOffset) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = slots
        .iter()
        .filter_map(|slot| slot.start_time)
        .map(|start| start.with_timezone(&offset).date_naive())
        .collect();
    days.sort();
    days.dedup();
    days
}
