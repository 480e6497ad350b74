//! The VanishInput controller.
//!
//! Owns the four engines (placeholder rotator, text rasterizer, dissolve
//! animator, suggestion engine) plus the reactive input state, and exposes
//! the event surface a host wires up: key events, pointer events on the
//! dropdown, focus/blur, visibility, and a `tick` the host render loop calls
//! once per frame.
//!
//! # Concurrency model
//!
//! Single-threaded and cooperative. The `ANIMATING` flag is the sole guard:
//! it is checked before keystrokes, submits and value changes, which gives
//! the animator exclusive ownership of the point cloud for the whole
//! dissolve. All timing (placeholder cadence, blur grace window) is
//! deadline-based against the `Instant` the host passes in.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Instant;
//! use vanish_input::VanishInput;
//!
//! let mut input = VanishInput::new(vec!["Search AAPL...".into()]);
//! input.on_submit(|stock| println!("submitted {}", stock.symbol));
//! input.start(Instant::now());
//!
//! // host event loop
//! loop {
//!     for command in input.tick(Instant::now()) {
//!         // blit command to the presentation surface
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};

use crate::catalog::{self, Suggestion};
use crate::engine::{DissolveAnimator, PlaceholderRotator, SuggestionEngine};
use crate::raster::{FontMetrics, TextRasterizer};
use crate::state::KeyboardEvent;
use crate::types::{PointCloud, RenderCommand, StateFlags};

/// Grace window between input blur and dropdown dismissal.
///
/// A pointer click on a suggestion row blurs the input before the click
/// lands; dismissal is deferred so the click is still registered. Required
/// race-avoidance contract, not an implementation accident.
pub const BLUR_GRACE: Duration = Duration::from_millis(100);

/// Callback invoked on every accepted value change.
pub type ChangeCallback = Box<dyn Fn(&str)>;

/// Callback invoked exactly once per successful submit.
pub type SubmitCallback = Box<dyn Fn(&Suggestion)>;

// =============================================================================
// VanishInput
// =============================================================================

/// The animated search input engine.
pub struct VanishInput {
    value: Signal<String>,
    flags: Signal<StateFlags>,
    rotator: PlaceholderRotator,
    suggest: SuggestionEngine,
    rasterizer: TextRasterizer,
    cloud: PointCloud,
    animator: DissolveAnimator,
    dismiss_at: Option<Instant>,
    on_change: Option<ChangeCallback>,
    on_submit: Option<SubmitCallback>,
}

impl VanishInput {
    /// Create a component over the given placeholder list with default font
    /// metrics.
    pub fn new(placeholders: Vec<String>) -> Self {
        Self::with_metrics(placeholders, FontMetrics::default())
    }

    /// Create a component with explicit live font metrics.
    pub fn with_metrics(placeholders: Vec<String>, metrics: FontMetrics) -> Self {
        Self {
            value: signal(String::new()),
            flags: signal(StateFlags::NONE),
            rotator: PlaceholderRotator::new(placeholders),
            suggest: SuggestionEngine::new(),
            rasterizer: TextRasterizer::new(metrics),
            cloud: Vec::new(),
            animator: DissolveAnimator::new(),
            dismiss_at: None,
            on_change: None,
            on_submit: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the placeholder rotation (mount).
    pub fn start(&mut self, now: Instant) {
        self.rotator.start(now);
    }

    /// Tear down: stop the rotation and cancel any pending blur dismissal.
    pub fn dispose(&mut self) {
        self.rotator.stop();
        self.dismiss_at = None;
    }

    /// Host page visibility change, forwarded to the rotator.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.rotator.set_visible(visible, now);
    }

    /// External disabled control. Suppresses all keyboard/pointer handling.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.set_flag(StateFlags::DISABLED, disabled);
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Register the change callback, invoked with the new value on every
    /// accepted keystroke.
    pub fn on_change(&mut self, cb: impl Fn(&str) + 'static) {
        self.on_change = Some(Box::new(cb));
    }

    /// Register the submit callback, invoked exactly once per successful
    /// submit - immediately, not on animation completion.
    pub fn on_submit(&mut self, cb: impl Fn(&Suggestion) + 'static) {
        self.on_submit = Some(Box::new(cb));
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Current text value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Signal of the text value, for reactive hosts.
    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    /// Current state flags.
    pub fn flags(&self) -> StateFlags {
        self.flags.get()
    }

    /// Signal of the state flags.
    pub fn flags_signal(&self) -> Signal<StateFlags> {
        self.flags.clone()
    }

    /// Whether a dissolve is in flight.
    pub fn is_animating(&self) -> bool {
        self.flags.get().contains(StateFlags::ANIMATING)
    }

    /// Whether the control is externally disabled.
    pub fn is_disabled(&self) -> bool {
        self.flags.get().contains(StateFlags::DISABLED)
    }

    /// Whether the submit affordance is enabled (non-empty value, not
    /// disabled).
    pub fn submit_enabled(&self) -> bool {
        !self.value.get().is_empty() && !self.is_disabled()
    }

    /// The currently displayed placeholder, if any.
    pub fn current_placeholder(&self) -> Option<&str> {
        self.rotator.current()
    }

    /// Signal of the placeholder display index.
    pub fn placeholder_signal(&self) -> Signal<usize> {
        self.rotator.index_signal()
    }

    /// Current suggestion list.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggest.suggestions()
    }

    /// Signal of the suggestion list.
    pub fn suggestions_signal(&self) -> Signal<Vec<Suggestion>> {
        self.suggest.suggestions_signal()
    }

    /// Current highlighted dropdown index (-1 = none).
    pub fn highlighted(&self) -> i32 {
        self.suggest.highlighted()
    }

    /// Live particle count (0 while idle).
    pub fn particle_count(&self) -> usize {
        if self.is_animating() {
            self.animator.particle_count()
        } else {
            self.cloud.len()
        }
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Handle one keyboard event.
    ///
    /// Suppressed entirely while animating or disabled.
    pub fn handle_key(&mut self, event: &KeyboardEvent) {
        if !event.is_press() {
            return;
        }
        if self.is_animating() || self.is_disabled() {
            return;
        }

        match event.key.as_str() {
            "Enter" => {
                // A valid highlight on a non-empty list bypasses free-text
                // resolution
                if let Some(selected) = self.suggest.highlighted_entry() {
                    self.accept_suggestion(selected);
                } else {
                    self.submit(None);
                }
            }
            "ArrowDown" => self.suggest.highlight_next(),
            "ArrowUp" => self.suggest.highlight_prev(),
            "Backspace" => {
                let mut value = self.value.get();
                value.pop();
                self.apply_value(value);
            }
            _ => {
                if let Some(c) = event.typed_char() {
                    let mut value = self.value.get();
                    value.push(c);
                    self.apply_value(value);
                }
            }
        }
    }

    /// Programmatic value change, same guards and same synchronous
    /// refilter + rasterize path as typing.
    pub fn set_value(&mut self, value: &str) {
        if self.is_animating() || self.is_disabled() {
            return;
        }
        self.apply_value(value.to_string());
    }

    /// Pointer click on dropdown row `index`.
    ///
    /// Still registered during the blur grace window.
    pub fn click_suggestion(&mut self, index: usize) {
        if self.is_animating() || self.is_disabled() {
            return;
        }
        let Some(selected) = self.suggest.suggestions().get(index).cloned() else {
            return;
        };
        self.dismiss_at = None;
        self.accept_suggestion(selected);
    }

    /// Pointer hover over dropdown row `index`.
    pub fn hover_suggestion(&mut self, index: usize) {
        if self.is_animating() || self.is_disabled() {
            return;
        }
        self.suggest.hover(index);
    }

    /// Pointer left the dropdown rows.
    pub fn leave_suggestions(&mut self) {
        self.suggest.leave();
    }

    /// Input gained focus. Cancels a pending dismissal.
    pub fn focus(&mut self) {
        self.set_flag(StateFlags::FOCUSED, true);
        self.dismiss_at = None;
    }

    /// Input lost focus. Dropdown dismissal is deferred by [`BLUR_GRACE`].
    pub fn blur(&mut self, now: Instant) {
        self.set_flag(StateFlags::FOCUSED, false);
        self.dismiss_at = Some(now + BLUR_GRACE);
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Submit the current value.
    ///
    /// No-op for an empty/whitespace value or while a dissolve is already in
    /// flight. The value is re-rasterized to capture the exact submitted
    /// text, the submitted entity is resolved once (explicit selection, then
    /// exact catalog symbol match, then a synthesized entry), `on_submit`
    /// fires immediately, and the dissolve begins.
    pub fn submit(&mut self, selected: Option<Suggestion>) {
        if self.is_animating() || self.is_disabled() {
            return;
        }
        let raw = self.value.get();
        if raw.trim().is_empty() {
            return;
        }

        // Capture the cloud for the exact value at submit time
        self.cloud = self.rasterizer.rasterize(&raw);

        let stock = selected.unwrap_or_else(|| catalog::resolve(&raw));
        if let Some(cb) = &self.on_submit {
            cb(&stock);
        }

        self.set_flag(StateFlags::ANIMATING, true);
        self.animator.begin(std::mem::take(&mut self.cloud));
    }

    // =========================================================================
    // Frame driver
    // =========================================================================

    /// Advance the engine one frame.
    ///
    /// Runs the placeholder cadence, fires a due blur dismissal, and while
    /// animating steps the dissolve - returning the render commands for this
    /// frame. On animation termination the input value is cleared and the
    /// animating flag dropped.
    pub fn tick(&mut self, now: Instant) -> Vec<RenderCommand> {
        self.rotator.tick(now);

        if let Some(deadline) = self.dismiss_at {
            if now >= deadline {
                self.dismiss_at = None;
                self.suggest.clear();
                self.set_flag(StateFlags::DROPDOWN_OPEN, false);
            }
        }

        if self.is_animating() {
            let frame = self.animator.step();
            if frame.finished {
                self.value.set(String::new());
                self.cloud.clear();
                self.set_flag(StateFlags::ANIMATING, false);
            }
            return frame.commands;
        }

        Vec::new()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Accept a suggestion: value becomes the symbol, the list closes, and
    /// the submit carries the explicit selection.
    fn accept_suggestion(&mut self, selected: Suggestion) {
        self.value.set(selected.symbol.clone());
        self.suggest.clear();
        self.set_flag(StateFlags::DROPDOWN_OPEN, false);
        self.submit(Some(selected));
    }

    /// The one value-change path: update the signal, refilter, re-rasterize,
    /// notify. Rasterization always observes the value of the triggering
    /// change - both run synchronously in the same update.
    fn apply_value(&mut self, value: String) {
        self.value.set(value.clone());
        self.suggest.refilter(&value);
        self.set_flag(StateFlags::DROPDOWN_OPEN, !self.suggest.suggestions().is_empty());
        self.cloud = self.rasterizer.rasterize(&value);
        if let Some(cb) = &self.on_change {
            cb(&value);
        }
    }

    fn set_flag(&self, flag: StateFlags, on: bool) {
        let mut flags = self.flags.get();
        flags.set(flag, on);
        self.flags.set(flags);
    }
}

// =============================================================================
// Tests
// =============================================================================
