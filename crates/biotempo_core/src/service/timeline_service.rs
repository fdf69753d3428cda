//! Timeline session facade.
//!
//! # Responsibility
//! - Preprocess the dataset once and cache derived facets for the session.
//! - Answer filter queries, memoizing the last criteria and result.
//!
//! # Invariants
//! - The processed order never changes after construction.
//! - Equal criteria always produce equal results (no hidden query state
//!   beyond the single last-criteria memo).

use crate::dataset::preprocess::preprocess;
use crate::model::event::{ProcessedEvent, TimelineEvent};
use crate::search::facets::{derive_bounds, derive_decades, YearBounds};
use crate::search::filter::{filter_events, FilterCriteria, YearRange};
use log::{debug, info};

/// Session facade over the immutable processed dataset.
///
/// Owns everything derived from the raw records: chronological order,
/// year bounds, the decade facet and the last filter result.
pub struct TimelineService {
    events: Vec<ProcessedEvent>,
    bounds: YearBounds,
    decades: Vec<i32>,
    last_query: Option<(FilterCriteria, Vec<ProcessedEvent>)>,
}

impl TimelineService {
    /// Preprocesses `raw` and derives the session facets.
    ///
    /// # Side effects
    /// - Emits one `timeline_init` logging event with dataset stats.
    pub fn from_events(raw: Vec<TimelineEvent>) -> Self {
        let events = preprocess(raw);
        let bounds = derive_bounds(&events);
        let decades = derive_decades(&events);

        info!(
            "event=timeline_init module=service status=ok records={} decades={} min_year={} max_year={}",
            events.len(),
            decades.len(),
            bounds.min_year,
            bounds.max_year
        );

        Self {
            events,
            bounds,
            decades,
            last_query: None,
        }
    }

    /// Full processed dataset in chronological order.
    pub fn processed_events(&self) -> &[ProcessedEvent] {
        &self.events
    }

    /// Min/max resolved years (or the default window for empty data).
    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Distinct decade buckets present in the dataset, ascending.
    pub fn decades(&self) -> &[i32] {
        &self.decades
    }

    /// Criteria that return the full dataset, sized to these bounds.
    pub fn unfiltered_criteria(&self) -> FilterCriteria {
        FilterCriteria::unfiltered(self.bounds)
    }

    /// Corrects a user-provided range against the session bounds.
    ///
    /// The end is pulled into `[start, max_year]` first, then the start
    /// into `[min_year, end]`, so out-of-order inputs converge instead of
    /// reaching the engine.
    pub fn clamped_range(&self, range: YearRange) -> YearRange {
        let mut clamped = range;
        clamped.set_end(range.end, self.bounds);
        clamped.set_start(range.start, self.bounds);
        clamped
    }

    /// Applies `criteria` and returns matches in chronological order.
    ///
    /// # Contract
    /// - Recomputes from the immutable processed dataset on every change.
    /// - Consecutive calls with equal criteria reuse the memoized result.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) -> &[ProcessedEvent] {
        let memo_hit = self
            .last_query
            .as_ref()
            .is_some_and(|(last, _)| last == criteria);

        if !memo_hit {
            let matches = filter_events(&self.events, criteria);
            debug!(
                "event=filter_apply module=service status=ok matches={} total={}",
                matches.len(),
                self.events.len()
            );
            self.last_query = Some((criteria.clone(), matches));
        }

        self.last_query
            .as_ref()
            .map(|(_, matches)| matches.as_slice())
            .unwrap_or_default()
    }
}
