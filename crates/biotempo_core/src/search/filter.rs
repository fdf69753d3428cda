//! Filter criteria and the event filter engine.
//!
//! # Responsibility
//! - Define the criteria value object owned by the presentation layer.
//! - Evaluate the combined filter dimensions over preprocessed events.
//!
//! # Invariants
//! - Filtering preserves preprocessed order; it never re-sorts.
//! - Empty dimensions are skipped, never read as "match nothing".
//! - The engine assumes a pre-clamped, well-ordered year range.

use crate::model::event::ProcessedEvent;
use crate::search::facets::{decade_bucket, YearBounds};

/// Inclusive `[start, end]` year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Full window covering the dataset bounds.
    pub fn full(bounds: YearBounds) -> Self {
        Self {
            start: bounds.min_year,
            end: bounds.max_year,
        }
    }

    /// Moves the lower edge, clamped into `[bounds.min_year, self.end]`.
    pub fn set_start(&mut self, value: i32, bounds: YearBounds) {
        self.start = value.min(self.end).max(bounds.min_year);
    }

    /// Moves the upper edge, clamped into `[self.start, bounds.max_year]`.
    pub fn set_end(&mut self, value: i32, bounds: YearBounds) {
        self.end = value.max(self.start).min(bounds.max_year);
    }

    /// Returns whether `year` falls inside the window, both ends inclusive.
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Current filter state, owned by the caller and passed in by value.
///
/// Equality over the whole struct keys the service-level memo, so every
/// field participates in `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text term; empty disables the text dimension.
    pub search_term: String,
    /// Inclusive year window, pre-clamped to the dataset bounds.
    pub year_range: YearRange,
    /// Selected category labels; empty disables the category dimension.
    pub selected_categories: Vec<String>,
    /// Single selected decade bucket, when any.
    pub selected_decade: Option<i32>,
}

impl FilterCriteria {
    /// Criteria that let every event through: empty term, full range,
    /// no categories, no decade.
    pub fn unfiltered(bounds: YearBounds) -> Self {
        Self {
            search_term: String::new(),
            year_range: YearRange::full(bounds),
            selected_categories: Vec::new(),
            selected_decade: None,
        }
    }

    /// Adds `label` to the selection, or removes it when already present.
    pub fn toggle_category(&mut self, label: &str) {
        if let Some(position) = self
            .selected_categories
            .iter()
            .position(|selected| selected == label)
        {
            self.selected_categories.remove(position);
        } else {
            self.selected_categories.push(label.to_string());
        }
    }

    /// Clears the category selection, disabling that dimension.
    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }
}

/// Applies every active filter dimension over `events`.
///
/// # Contract
/// - Surviving events keep their relative (chronological) input order.
/// - An event passes only when all active dimensions accept it; within
///   the category dimension, matching any selected label is enough.
/// - Records with missing optional fields degrade to "no match", never
///   to an error.
pub fn filter_events(events: &[ProcessedEvent], criteria: &FilterCriteria) -> Vec<ProcessedEvent> {
    events
        .iter()
        .filter(|event| event_passes(event, criteria))
        .cloned()
        .collect()
}

fn event_passes(event: &ProcessedEvent, criteria: &FilterCriteria) -> bool {
    if !matches_search(event, &criteria.search_term) {
        return false;
    }

    if !criteria.year_range.contains(event.numeric_year) {
        return false;
    }

    if !criteria.selected_categories.is_empty() {
        let matches_category = event
            .event
            .categories
            .iter()
            .any(|category| criteria.selected_categories.iter().any(|s| s == category));
        if !matches_category {
            return false;
        }
    }

    if let Some(decade) = criteria.selected_decade {
        if decade_bucket(event.numeric_year) != decade {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match over title, summary, full text and
/// the original year label. Matching any one field is enough.
fn matches_search(event: &ProcessedEvent, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    let raw = &event.event;
    [
        raw.title.as_str(),
        raw.summary.as_str(),
        raw.full_text.as_str(),
        raw.year.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}
