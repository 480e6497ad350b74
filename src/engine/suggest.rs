//! Suggestion Engine - catalog filtering and highlight navigation.
//!
//! A prefix/substring filter over the static symbol catalog, recomputed
//! synchronously on every keystroke, plus the keyboard-navigable highlight
//! state machine for the dropdown.
//!
//! Invariant: the highlighted index is always in `[-1, len - 1]`; -1 means
//! "no highlight".

use spark_signals::{Signal, signal};

use crate::catalog::{self, Suggestion};

/// Maximum entries shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 5;

// =============================================================================
// Filtering
// =============================================================================

/// Filter the catalog against `input`.
///
/// An entry matches when its symbol starts with the input or its name
/// contains it as a substring, both case-insensitive. Catalog order is
/// preserved among matches; the result is capped at [`MAX_SUGGESTIONS`].
/// Empty or whitespace-only input yields an empty list.
pub fn filter_catalog(input: &str) -> Vec<Suggestion> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    catalog::entries()
        .filter(|s| {
            s.symbol.to_lowercase().starts_with(&needle)
                || s.name.to_lowercase().contains(&needle)
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

// =============================================================================
// SuggestionEngine
// =============================================================================

/// Live suggestion list plus highlight state, owned by the component.
pub struct SuggestionEngine {
    suggestions: Signal<Vec<Suggestion>>,
    highlighted: Signal<i32>,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self {
            suggestions: signal(Vec::new()),
            highlighted: signal(-1),
        }
    }

    /// Recompute the list for a new input value and reset the highlight.
    pub fn refilter(&self, input: &str) {
        self.suggestions.set(filter_catalog(input));
        self.highlighted.set(-1);
    }

    /// Drop the list and the highlight (dropdown dismissed).
    pub fn clear(&self) {
        self.suggestions.set(Vec::new());
        self.highlighted.set(-1);
    }

    /// Current suggestion list.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.get()
    }

    /// Signal of the suggestion list, for reactive hosts.
    pub fn suggestions_signal(&self) -> Signal<Vec<Suggestion>> {
        self.suggestions.clone()
    }

    /// Current highlighted index (-1 = none).
    pub fn highlighted(&self) -> i32 {
        self.highlighted.get()
    }

    /// Signal of the highlighted index.
    pub fn highlighted_signal(&self) -> Signal<i32> {
        self.highlighted.clone()
    }

    /// The highlighted entry, if any.
    pub fn highlighted_entry(&self) -> Option<Suggestion> {
        let idx = self.highlighted.get();
        if idx < 0 {
            return None;
        }
        self.suggestions.get().get(idx as usize).cloned()
    }

    /// ArrowDown: advance circularly forward, wrapping last to first.
    pub fn highlight_next(&self) {
        let len = self.suggestions.get().len() as i32;
        if len == 0 {
            return;
        }
        let current = self.highlighted.get();
        self.highlighted.set((current + 1).rem_euclid(len));
    }

    /// ArrowUp: advance circularly backward, wrapping first to last.
    pub fn highlight_prev(&self) {
        let len = self.suggestions.get().len() as i32;
        if len == 0 {
            return;
        }
        let current = self.highlighted.get();
        if current <= 0 {
            self.highlighted.set(len - 1);
        } else {
            self.highlighted.set(current - 1);
        }
    }

    /// Pointer hover over a dropdown row.
    pub fn hover(&self, index: usize) {
        if index < self.suggestions.get().len() {
            self.highlighted.set(index as i32);
        }
    }

    /// Pointer left the dropdown rows.
    pub fn leave(&self) {
        self.highlighted.set(-1);
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
