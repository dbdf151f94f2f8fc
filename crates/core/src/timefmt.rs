//! Local-time presentation of UTC wire instants.
//!
//! All timestamps arrive as UTC; everything the viewer sees is rendered in
//! their own UTC offset, passed explicitly so formatting stays
//! deterministic under test.

use chrono::{DateTime, FixedOffset, Locale, Utc};

/// Locale used for schedule headings unless a viewer overrides it.
pub const DEFAULT_LOCALE: Locale = Locale::ru_RU;

/// "HH:MM" in the viewer's offset; an em dash when the instant is missing.
pub fn time_short(instant: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match instant {
        Some(t) => t.with_timezone(&offset).format("%H:%M").to_string(),
        None => "—".to_string(),
    }
}

/// "DD.MM.YYYY" in the viewer's offset; empty when the instant is missing.
pub fn date_short(instant: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match instant {
        Some(t) => t.with_timezone(&offset).format("%d.%m.%Y").to_string(),
        None => String::new(),
    }
}

/// "YYYY-MM-DD" key of the viewer-local calendar day, the format date
/// filters are exchanged in.
pub fn date_key(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%Y-%m-%d").to_string()
}

/// Localized "day long-month year" heading a schedule day group is titled
/// with, e.g. "3 марта 2026" under the default locale.
pub fn day_heading(instant: DateTime<Utc>, offset: FixedOffset, locale: Locale) -> String {
    instant
        .with_timezone(&offset)
        .format_localized("%-d %B %Y", locale)
        .to_string()
}
