//! Timeline event domain model.
//!
//! # Responsibility
//! - Define the raw timeline record and its processed projection.
//! - Own the controlled category vocabulary and card excerpt rules.
//!
//! # Invariants
//! - `id` is unique and stable across the dataset's lifetime.
//! - Unknown category labels are tolerated and kept, never rejected.
//! - Optional text fields decode as empty when absent from the wire.

use serde::{Deserialize, Serialize};

/// Stable identifier for timeline records, as shipped in the dataset.
pub type EventId = i64;

/// Maximum characters shown in a timeline card excerpt.
const CARD_EXCERPT_CHARS: usize = 280;

/// Controlled vocabulary of known event categories.
///
/// Events may carry labels outside this list; such labels still display
/// and filter normally, they just have no dedicated filter control.
pub const CATEGORIES: [&str; 9] = [
    "Institucionalização",
    "Educação e Formação",
    "Legislação e Direitos",
    "Saúde Pública",
    "Ética Médica e Clínica",
    "Pesquisa e Experimentação",
    "Bioética Feminista",
    "Bioética Ambiental",
    "Bioética Animal",
];

/// Returns whether `label` belongs to the controlled vocabulary.
pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

/// Raw timeline record as stored in `data/timeline.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Stable dataset id used for linking and presentation keys.
    pub id: EventId,
    /// Original heterogeneous year label ("1995", "Século XIX", "anos 2000").
    pub year: String,
    /// Short display title.
    pub title: String,
    /// One-paragraph summary. Empty when the record carries none.
    #[serde(default)]
    pub summary: String,
    /// Long-form body, serialized as `fullText`. Empty when absent.
    #[serde(default, rename = "fullText")]
    pub full_text: String,
    /// Category labels. May be empty or carry unknown labels.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl TimelineEvent {
    /// Returns the card-sized excerpt of the long-form body.
    pub fn card_excerpt(&self) -> String {
        excerpt(&self.full_text, CARD_EXCERPT_CHARS)
    }
}

/// Timeline record enriched with the comparable year projection.
///
/// Produced once by preprocessing; `numeric_year` exists solely for
/// ordering, range checks and decade bucketing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEvent {
    /// The unmodified raw record.
    pub event: TimelineEvent,
    /// Resolved year; 0 when the label carries no recognizable year.
    pub numeric_year: i32,
}

/// Truncates `text` to at most `max_chars` characters on a char boundary.
///
/// Short inputs come back unchanged; truncated inputs are trimmed and
/// suffixed with an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}
