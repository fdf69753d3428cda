//! JSON resource loading for the two shipped datasets.
//!
//! # Responsibility
//! - Decode `timeline.json` / `tributes.json` into model records.
//! - Emit structured load events with duration for diagnostics.
//!
//! # Invariants
//! - Optional record fields decode as empty, never as load failures.
//! - Path loaders report I/O and parse errors separately.

use super::DatasetResult;
use crate::model::event::TimelineEvent;
use crate::model::tribute::TributePerson;
use log::{error, info};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Instant;

/// Decodes timeline records from in-memory JSON.
pub fn load_timeline_from_str(json: &str) -> DatasetResult<Vec<TimelineEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes tribute records from in-memory JSON.
pub fn load_tributes_from_str(json: &str) -> DatasetResult<Vec<TributePerson>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and decodes the timeline dataset from a file.
///
/// # Side effects
/// - Emits `dataset_load` logging events with record count and duration.
pub fn load_timeline_from_path(path: impl AsRef<Path>) -> DatasetResult<Vec<TimelineEvent>> {
    load_records(path.as_ref(), "timeline")
}

/// Reads and decodes the tributes dataset from a file.
///
/// # Side effects
/// - Emits `dataset_load` logging events with record count and duration.
pub fn load_tributes_from_path(path: impl AsRef<Path>) -> DatasetResult<Vec<TributePerson>> {
    load_records(path.as_ref(), "tributes")
}

fn load_records<T: DeserializeOwned>(path: &Path, kind: &str) -> DatasetResult<Vec<T>> {
    let started_at = Instant::now();
    info!("event=dataset_load module=dataset status=start kind={kind}");

    match read_and_decode::<T>(path) {
        Ok(records) => {
            info!(
                "event=dataset_load module=dataset status=ok kind={kind} records={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(records)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=dataset status=error kind={kind} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn read_and_decode<T: DeserializeOwned>(path: &Path) -> DatasetResult<Vec<T>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
