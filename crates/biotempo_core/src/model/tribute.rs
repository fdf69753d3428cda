//! Posthumous tribute model.
//!
//! # Responsibility
//! - Define the read-only record shown in the memorial gallery.
//!
//! # Invariants
//! - Tribute records have no filtering lifecycle; they load and display.

use crate::model::event::excerpt;
use serde::{Deserialize, Serialize};

/// Characters kept in the gallery card bio preview.
const BIO_PREVIEW_CHARS: usize = 150;

/// Honored person as stored in `data/tributes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TributePerson {
    /// Stable dataset id.
    pub id: i64,
    /// Full display name.
    pub name: String,
    /// Lifespan label, e.g. "1911-2001".
    pub years: String,
    /// Full biography text.
    pub bio: String,
}

impl TributePerson {
    /// Returns the card-sized preview of the biography.
    pub fn bio_preview(&self) -> String {
        excerpt(&self.bio, BIO_PREVIEW_CHARS)
    }
}
