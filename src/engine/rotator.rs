//! Placeholder Rotator - cycles the placeholder text on a timer.
//!
//! Maintains a rotating display index over an ordered list of strings,
//! advancing circularly once per interval. Purely cosmetic state: no failure
//! modes.
//!
//! The cadence is deadline-based and advanced from the host's `tick` call
//! rather than a background thread, keeping the whole engine single-threaded
//! and the 3000ms contract deterministic under test. Visibility loss cancels
//! the cadence outright; becoming visible again restarts it from that moment
//! with no catch-up tick and no drift correction.

use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};

/// Interval between placeholder advances.
pub const ROTATE_INTERVAL: Duration = Duration::from_millis(3000);

// =============================================================================
// PlaceholderRotator
// =============================================================================

/// Rotating placeholder state, owned by the component instance.
pub struct PlaceholderRotator {
    placeholders: Vec<String>,
    index: Signal<usize>,
    next_advance: Option<Instant>,
    running: bool,
    visible: bool,
}

impl PlaceholderRotator {
    /// Create a rotator over the given placeholder list.
    pub fn new(placeholders: Vec<String>) -> Self {
        Self {
            placeholders,
            index: signal(0),
            next_advance: None,
            running: false,
            visible: true,
        }
    }

    /// Start rotating. A no-op for an empty placeholder list.
    pub fn start(&mut self, now: Instant) {
        if self.placeholders.is_empty() {
            return;
        }
        self.running = true;
        if self.visible {
            self.next_advance = Some(now + ROTATE_INTERVAL);
        }
    }

    /// Stop rotating and drop the pending deadline.
    pub fn stop(&mut self) {
        self.running = false;
        self.next_advance = None;
    }

    /// Host page visibility change.
    ///
    /// Hidden cancels the cadence; visible restarts it from `now`.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if !visible {
            self.next_advance = None;
        } else if self.running && !self.placeholders.is_empty() {
            self.next_advance = Some(now + ROTATE_INTERVAL);
        }
    }

    /// Advance the index once per interval elapsed while visible.
    pub fn tick(&mut self, now: Instant) {
        while let Some(deadline) = self.next_advance {
            if now < deadline {
                break;
            }
            let len = self.placeholders.len();
            self.index.set((self.index.get() + 1) % len);
            self.next_advance = Some(deadline + ROTATE_INTERVAL);
        }
    }

    /// Current display index.
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Signal of the display index, for reactive hosts.
    pub fn index_signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    /// The currently displayed placeholder, if any.
    pub fn current(&self) -> Option<&str> {
        self.placeholders.get(self.index.get()).map(String::as_str)
    }
}

// =============================================================================
// Tests
// =============================================================================
