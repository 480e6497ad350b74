//! Text Rasterizer - text value to particle point cloud.
//!
//! On every accepted value change the current text is drawn to the off-screen
//! [`Surface`] and every pixel is scanned; ink pixels (non-zero R, G and B,
//! alpha ignored) become [`Particle`]s. The scan is bounded and deterministic:
//! 640,000 pixels per keystroke is wasteful but acceptable for the short
//! values this component sees (ticker symbols, short phrases).

pub mod font;
pub mod surface;

pub use font::{FontMetrics, glyph_for_char};
pub use surface::{SURFACE_SIZE, Surface};

use crate::types::{Particle, PointCloud, Rgba};

/// Fixed draw origin: x of the first glyph, y of the text baseline.
///
/// Preserved from the observed design - particles are emitted at these
/// surface coordinates and the host presents them at a visually matching
/// offset.
pub const TEXT_ORIGIN: (u16, u16) = (16, 40);

// =============================================================================
// Rasterizer
// =============================================================================

/// Owns the off-screen surface and turns text values into point clouds.
#[derive(Debug)]
pub struct TextRasterizer {
    surface: Surface,
    metrics: FontMetrics,
}

impl TextRasterizer {
    /// Create a rasterizer with the standard 800x800 surface.
    pub fn new(metrics: FontMetrics) -> Self {
        Self {
            surface: Surface::new(),
            metrics,
        }
    }

    /// Update the live font metrics (host font changed).
    pub fn set_metrics(&mut self, metrics: FontMetrics) {
        self.metrics = metrics;
    }

    /// Borrow the surface (hosts may blit it while idle).
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Rasterize `value` and return its point cloud.
    ///
    /// Clears the surface, draws the text in white at the fixed origin with
    /// 2x the live font size, then scans every pixel. The returned cloud
    /// fully replaces any previous one.
    pub fn rasterize(&mut self, value: &str) -> PointCloud {
        self.surface.clear();
        font::draw_text(
            &mut self.surface,
            value,
            TEXT_ORIGIN.0,
            TEXT_ORIGIN.1,
            self.metrics,
            Rgba::WHITE,
        );
        scan(&self.surface)
    }
}

/// Scan a surface into a point cloud, row-major.
///
/// A pixel is ink iff its R, G and B channels are all non-zero; alpha is not
/// checked (preserved verbatim for visual fidelity).
pub fn scan(surface: &Surface) -> PointCloud {
    let mut cloud = Vec::new();
    for (x, y, px) in surface.iter() {
        if px.is_ink() {
            cloud.push(Particle::at(x as f32, y as f32, px));
        }
    }
    cloud
}

// =============================================================================
// Tests
// =============================================================================
