//! Daily outlook sampling over the 5-day/3-hour forecast series.

use crate::model::{ForecastEntry, ForecastPoint};

/// Time-of-day stamp that marks the representative sample for a day.
const MIDDAY: &str = "12:00:00";

/// Maximum number of days the outlook covers.
const MAX_DAYS: usize = 5;

/// Select one representative midday entry per day from a time-ordered
/// forecast series.
///
/// Keeps, in input order, the points stamped exactly `12:00:00`, capped at
/// five. A series with fewer midday points (the provider's first day may
/// start past noon) simply yields a shorter outlook; a series with none
/// yields an empty one. Matching is a literal comparison on the timestamp
/// text, not calendar deduplication, so a duplicate midday stamp would pass
/// through and only the cap bounds the result.
pub fn midday_outlook(points: &[ForecastPoint]) -> Vec<ForecastEntry> {
    points
        .iter()
        .filter(|p| p.timestamp.ends_with(MIDDAY))
        .take(MAX_DAYS)
        .cloned()
        .map(ForecastEntry::from)
        .collect()
}
