//! # vanish-input
//!
//! Animated search input engine: rotating placeholders, catalog-backed
//! suggestions, and a vanish-on-submit effect that rasterizes the typed text
//! into a particle cloud and dissolves it with a right-to-left wipe.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactive state.
//!
//! ## Architecture
//!
//! The [`component::VanishInput`] controller composes four engines, each
//! usable on its own:
//!
//! ```text
//! keystrokes → SuggestionEngine (filter + highlight)
//!            → TextRasterizer   (text → PointCloud)
//! submit     → DissolveAnimator (PointCloud → RenderCommands per frame)
//! tick(now)  → PlaceholderRotator (3s cadence, visibility-aware)
//! ```
//!
//! Everything is single-threaded and pull-based: the host calls
//! [`component::VanishInput::tick`] once per frame with the current
//! [`std::time::Instant`] and blits the returned commands.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Particle, RenderCommand, StateFlags)
//! - [`catalog`] - The stock catalog and symbol resolution
//! - [`raster`] - 800x800 surface and bitmap-font text rasterization
//! - [`engine`] - Placeholder rotator, suggestion engine, dissolve animator
//! - [`state`] - Keyboard event types and crossterm conversion
//! - [`component`] - The VanishInput controller wiring it all together

pub mod catalog;
pub mod component;
pub mod engine;
pub mod raster;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use catalog::{CATALOG, Suggestion, entries, resolve};

pub use raster::{FontMetrics, SURFACE_SIZE, Surface, TEXT_ORIGIN, TextRasterizer};

pub use engine::{
    DissolveAnimator, Frame, MAX_SUGGESTIONS, PlaceholderRotator, ROTATE_INTERVAL,
    SuggestionEngine, WIPE_STEP, filter_catalog,
};

pub use state::{KeyState, KeyboardEvent, Modifiers, convert_key_event};

pub use component::{BLUR_GRACE, ChangeCallback, SubmitCallback, VanishInput};
