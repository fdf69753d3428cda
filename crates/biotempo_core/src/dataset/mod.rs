//! Static dataset loading and preprocessing entry points.
//!
//! # Responsibility
//! - Load the timeline and tributes JSON resources shipped with the app.
//! - Resolve year labels and produce the session's chronological order.
//!
//! # Invariants
//! - Loading never partially succeeds; a parse failure drops the batch.
//! - Year label quirks are not load errors; the normalizer owns them.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod load;
pub mod preprocess;

pub use load::{
    load_timeline_from_path, load_timeline_from_str, load_tributes_from_path,
    load_tributes_from_str,
};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error for dataset resource loading and decoding.
#[derive(Debug)]
pub enum DatasetError {
    /// Resource file could not be read.
    Io(std::io::Error),
    /// Resource content is not valid JSON for the expected shape.
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dataset resource: {err}"),
            Self::Parse(err) => write!(f, "failed to decode dataset resource: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
