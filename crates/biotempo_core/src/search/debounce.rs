//! Keystroke coalescing ahead of the filter boundary.
//!
//! # Responsibility
//! - Echo raw input immediately while holding back term propagation
//!   until a quiescence window passes without further keystrokes.
//!
//! # Invariants
//! - Every keystroke restarts the window.
//! - A settled term is released at most once per quiescent burst.
//! - No timers run here; callers drive the clock explicitly, so the
//!   engine downstream stays synchronous and pure.

use std::time::{Duration, Instant};

/// Quiescence window applied to free-text search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces a stream of keystrokes into settled search terms.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    pending: String,
    deadline: Option<Instant>,
}

impl SearchDebouncer {
    /// Creates a debouncer with the standard search window.
    pub fn new() -> Self {
        Self::with_window(SEARCH_DEBOUNCE)
    }

    /// Creates a debouncer with a caller-chosen window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: String::new(),
            deadline: None,
        }
    }

    /// Records a keystroke at `now`, restarting the quiescence window.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = text.into();
        self.deadline = Some(now + self.window);
    }

    /// Newest raw input, for immediate echo in the input control.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Releases the settled term once the window has elapsed at `now`.
    ///
    /// Returns `None` while input is still within the window or when the
    /// current burst was already released.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.pending.clone())
            }
            _ => None,
        }
    }

    /// Commits the newest input immediately, bypassing the window.
    ///
    /// Used by explicit actions such as the clear button, where the user
    /// expects the change to apply without delay.
    pub fn flush(&mut self) -> String {
        self.deadline = None;
        self.pending.clone()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
