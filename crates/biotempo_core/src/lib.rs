//! Core filtering engine for the bioethics history timeline.
//!
//! Owns the dataset model, year normalization, facet derivation and the
//! filter engine; presentation layers consume this crate and stay thin.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use dataset::preprocess::{normalize_year, preprocess, UNKNOWN_YEAR};
pub use dataset::{
    load_timeline_from_path, load_timeline_from_str, load_tributes_from_path,
    load_tributes_from_str, DatasetError, DatasetResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{is_known_category, EventId, ProcessedEvent, TimelineEvent, CATEGORIES};
pub use model::tribute::TributePerson;
pub use search::debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use search::facets::{
    decade_bucket, decade_label, derive_bounds, derive_decades, YearBounds, DEFAULT_MAX_YEAR,
    DEFAULT_MIN_YEAR,
};
pub use search::filter::{filter_events, FilterCriteria, YearRange};
pub use service::timeline_service::TimelineService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
