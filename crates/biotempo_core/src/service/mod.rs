//! Core use-case services.
//!
//! # Responsibility
//! - Expose the session facade the presentation layer talks to.
//! - Keep UI layers decoupled from preprocessing and engine details.

pub mod timeline_service;
