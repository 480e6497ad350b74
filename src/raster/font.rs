//! Bitmap glyph rendering.
//!
//! Text is drawn with the `font8x8` 8x8 bitmap glyphs scaled by
//! nearest-neighbor to the configured pixel size. The off-screen draw always
//! uses twice the live input's font size: the surface oversamples so the
//! dissolve looks fine-grained when the host presents it at half scale.

use font8x8::legacy::BASIC_LEGACY;

use super::surface::Surface;
use crate::types::Rgba;

/// Glyph cell side in font units.
pub const GLYPH_SIZE: u16 = 8;

/// Rows of the glyph cell above the baseline.
///
/// font8x8 glyphs sit on the bottom row of the cell (descenders dip into it),
/// so 7 of the 8 rows are ascent.
const GLYPH_ASCENT: u16 = 7;

// =============================================================================
// Font metrics
// =============================================================================

/// The live input element's font size, supplied by the host.
///
/// The one piece of presentation state the rasterizer needs to visually
/// match the real text; hosts pass their computed font size here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Font size in logical pixels.
    pub px: f32,
}

impl FontMetrics {
    pub const fn new(px: f32) -> Self {
        Self { px }
    }

    /// Integer scale factor for the off-screen draw: 2x the live size,
    /// quantized to whole glyph pixels (minimum 1).
    pub fn raster_scale(&self) -> u16 {
        let scale = (self.px * 2.0 / GLYPH_SIZE as f32).round();
        scale.max(1.0) as u16
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        // 16px, the usual browser default for input text
        Self::new(16.0)
    }
}

// =============================================================================
// Glyph lookup and blitting
// =============================================================================

/// Look up the 8x8 bitmap for a character, falling back to '?' outside the
/// basic range.
pub fn glyph_for_char(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < BASIC_LEGACY.len() {
        BASIC_LEGACY[index]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}

/// Draw `text` onto the surface with the baseline at (`origin_x`, `baseline_y`).
///
/// Glyph bits are tested LSB-first (leftmost pixel) and blitted as
/// `scale` x `scale` blocks. Pixels falling outside the surface are dropped.
pub fn draw_text(
    surface: &mut Surface,
    text: &str,
    origin_x: u16,
    baseline_y: u16,
    metrics: FontMetrics,
    color: Rgba,
) {
    let scale = metrics.raster_scale();
    let cell = GLYPH_SIZE * scale;
    let top = baseline_y.saturating_sub(GLYPH_ASCENT * scale);

    let mut pen_x = origin_x;
    for ch in text.chars() {
        let glyph = glyph_for_char(ch);
        for (row, bits) in glyph.iter().enumerate() {
            for bit in 0..GLYPH_SIZE {
                if (bits >> bit) & 0x01 == 0 {
                    continue;
                }
                // Scale each glyph pixel to a block
                let block_x = pen_x + bit * scale;
                let block_y = top + row as u16 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        surface.set(block_x + dx, block_y + dy, color);
                    }
                }
            }
        }
        pen_x = pen_x.saturating_add(cell);
        if pen_x >= surface.width() {
            break;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
