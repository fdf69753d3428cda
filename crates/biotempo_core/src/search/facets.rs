//! Derived facets: year bounds and decade buckets.
//!
//! # Responsibility
//! - Compute the global min/max year window offered to range controls.
//! - Compute the ordered decade facet offered as navigation buttons.
//!
//! # Invariants
//! - Sentinel years are excluded from bounds but kept in the decade set.
//! - Decades come back ascending with no duplicates.

use crate::dataset::preprocess::UNKNOWN_YEAR;
use crate::model::event::ProcessedEvent;

/// Fallback window used when no record carries a resolvable year.
pub const DEFAULT_MIN_YEAR: i32 = 1800;
pub const DEFAULT_MAX_YEAR: i32 = 2025;

/// Inclusive min/max of resolved years across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min_year: i32,
    pub max_year: i32,
}

/// Returns the decade bucket a year belongs to, e.g. 1995 to 1990.
pub fn decade_bucket(year: i32) -> i32 {
    (year / 10) * 10
}

/// Display label for a decade button.
///
/// The 1800 bucket collects century-labelled records, so it reads as a
/// century rather than a decade.
pub fn decade_label(decade: i32) -> String {
    if decade == 1800 {
        "Séc XIX".to_string()
    } else {
        decade.to_string()
    }
}

/// Derives the min/max year window from resolved years only.
///
/// Falls back to [`DEFAULT_MIN_YEAR`]..=[`DEFAULT_MAX_YEAR`] when every
/// record's year is the unknown sentinel (or the dataset is empty).
pub fn derive_bounds(events: &[ProcessedEvent]) -> YearBounds {
    let mut resolved = events
        .iter()
        .map(|event| event.numeric_year)
        .filter(|&year| year > UNKNOWN_YEAR);

    let Some(first) = resolved.next() else {
        return YearBounds {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        };
    };

    let (min_year, max_year) = resolved.fold((first, first), |(lo, hi), year| {
        (lo.min(year), hi.max(year))
    });
    YearBounds { min_year, max_year }
}

/// Derives the distinct decade buckets present in the dataset, ascending.
///
/// The 0 bucket from unresolved years is a valid member: records without
/// a year stay reachable through the decade controls.
pub fn derive_decades(events: &[ProcessedEvent]) -> Vec<i32> {
    let mut decades: Vec<i32> = events
        .iter()
        .map(|event| decade_bucket(event.numeric_year))
        .collect();
    decades.sort_unstable();
    decades.dedup();
    decades
}

#[cfg(test)]
mod tests {
    use super::{decade_bucket, decade_label};

    #[test]
    fn decade_bucket_floors_to_tens() {
        assert_eq!(decade_bucket(1995), 1990);
        assert_eq!(decade_bucket(1990), 1990);
        assert_eq!(decade_bucket(0), 0);
    }

    #[test]
    fn decade_label_reads_the_1800_bucket_as_a_century() {
        assert_eq!(decade_label(1800), "Séc XIX");
        assert_eq!(decade_label(1900), "1900");
        assert_eq!(decade_label(1990), "1990");
    }
}
