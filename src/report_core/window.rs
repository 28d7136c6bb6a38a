//! Monday-aligned weekly report windows in a named timezone

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Fallback zone when no timezone is configured or the name fails to parse.
pub const DEFAULT_ZONE: Tz = chrono_tz::US::Eastern;

/// Half-open window `[start_ms, end_ms)` plus display labels for the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub start_ms: i64,
    pub end_ms: i64,
    pub start_label: String,
    pub end_label: String,
}

impl WeekWindow {
    /// Resolve the Monday-aligned week containing `reference`.
    ///
    /// The window runs from Monday 00:00:00 local time at or before the
    /// reference through the following Monday 00:00:00 local. Sunday counts
    /// as weekday 7 when stepping back to Monday. An unresolvable zone name
    /// silently falls back to [`DEFAULT_ZONE`].
    pub fn resolve(reference: DateTime<Utc>, zone: Option<&str>) -> Self {
        let tz = zone
            .filter(|z| !z.is_empty())
            .and_then(|z| z.parse::<Tz>().ok())
            .unwrap_or(DEFAULT_ZONE);
        let local = reference.with_timezone(&tz);

        // Monday = 1 .. Sunday = 7
        let back = local.weekday().number_from_monday() as i64 - 1;
        let monday = local.date_naive() - Duration::days(back);
        let next_monday = monday + Duration::days(7);

        let start = local_midnight(tz, monday);
        let end = local_midnight(tz, next_monday);

        Self {
            start_ms: start.timestamp_millis(),
            end_ms: end.timestamp_millis(),
            start_label: monday.format("%m/%d/%Y").to_string(),
            end_label: next_monday.format("%m/%d/%Y").to_string(),
        }
    }
}

/// Local midnight for `date`, taking the earliest instant when a DST
/// transition makes midnight ambiguous or skips it entirely.
fn local_midnight(tz: Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}
