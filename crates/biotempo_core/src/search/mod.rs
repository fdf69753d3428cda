//! Filtering engine and derived facets.
//!
//! # Responsibility
//! - Evaluate filter criteria over the preprocessed dataset.
//! - Derive the discrete facet values (decades, year bounds) the
//!   presentation layer offers as controls.
//! - Coalesce free-text keystrokes ahead of the engine boundary.
//!
//! # Invariants
//! - Everything here is synchronous and pure over the inputs it is given.

pub mod debounce;
pub mod facets;
pub mod filter;
