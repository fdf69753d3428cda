//! Year normalization and chronological preprocessing.
//!
//! # Responsibility
//! - Resolve heterogeneous year labels into comparable integers.
//! - Produce the stable chronological order consumed by filters and facets.
//!
//! # Invariants
//! - `normalize_year` is total and pure: every input maps to an integer.
//! - Preprocessing is idempotent on ordering (stable sort, run once).

use crate::model::event::{ProcessedEvent, TimelineEvent};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel for labels with no recognizable year.
///
/// Sorts before every real year and is excluded from bounds derivation.
pub const UNKNOWN_YEAR: i32 = 0;

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit run regex"));

/// Resolves a free-form year label into a comparable year.
///
/// Rules, checked in priority order on the lowercased label:
/// - contains "século xix" or "seculo xix": 1800
/// - contains "século xx" or "seculo xx": 1900
/// - contains "anos 2000": 2000
/// - otherwise the first run of exactly four consecutive digits
/// - no recognizable pattern: [`UNKNOWN_YEAR`]
pub fn normalize_year(label: &str) -> i32 {
    let lowered = label.to_lowercase();

    if lowered.contains("século xix") || lowered.contains("seculo xix") {
        return 1800;
    }
    if lowered.contains("século xx") || lowered.contains("seculo xx") {
        return 1900;
    }
    if lowered.contains("anos 2000") {
        return 2000;
    }

    DIGIT_RUN_RE
        .find_iter(&lowered)
        .find(|run| run.as_str().len() == 4)
        .and_then(|run| run.as_str().parse().ok())
        .unwrap_or(UNKNOWN_YEAR)
}

/// Resolves every record's year and sorts the dataset chronologically.
///
/// # Contract
/// - Runs once at startup; the result is immutable for the session.
/// - The sort is stable: records with equal years keep dataset order,
///   which keeps card alternation and decade grouping deterministic.
pub fn preprocess(raw: Vec<TimelineEvent>) -> Vec<ProcessedEvent> {
    let mut events: Vec<ProcessedEvent> = raw
        .into_iter()
        .map(|event| ProcessedEvent {
            numeric_year: normalize_year(&event.year),
            event,
        })
        .collect();
    events.sort_by_key(|event| event.numeric_year);
    events
}
