//! Off-screen pixel surface.
//!
//! A fixed-size RGBA bitmap the rasterizer draws text into and the scan reads
//! ink pixels out of. Deliberately oversized (800x800 logical units) -
//! generously larger than any realistic input width, trading memory for
//! algorithmic simplicity.

use crate::types::Rgba;

/// Side length of the square drawing surface in logical units.
pub const SURFACE_SIZE: u16 = 800;

// =============================================================================
// Surface
// =============================================================================

/// A 2D pixel buffer.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u16,
    height: u16,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Create the standard 800x800 surface, fully transparent.
    pub fn new() -> Self {
        Self::with_size(SURFACE_SIZE, SURFACE_SIZE)
    }

    /// Create a surface with explicit dimensions (tests use small ones).
    pub fn with_size(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; size],
        }
    }

    /// Surface width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Surface height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a pixel (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<Rgba> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a pixel. Out-of-bounds writes are silently dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, color: Rgba) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Clear the entire surface to transparent.
    pub fn clear(&mut self) {
        for px in &mut self.pixels {
            *px = Rgba::TRANSPARENT;
        }
    }

    /// Clear the region from column `from_x` to the right edge.
    ///
    /// The cheap partial clear the dissolve wipe uses each frame. Negative
    /// positions clear the whole surface.
    pub fn clear_from(&mut self, from_x: f32) {
        let start = from_x.max(0.0) as u16;
        if start >= self.width {
            return;
        }
        for y in 0..self.height {
            let row = self.index(start, y);
            let end = self.index(self.width - 1, y) + 1;
            for px in &mut self.pixels[row..end] {
                *px = Rgba::TRANSPARENT;
            }
        }
    }

    /// Iterate over pixels with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Rgba)> + '_ {
        self.pixels.iter().enumerate().map(move |(i, px)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, *px)
        })
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_default_size() {
        let surface = Surface::new();
        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 800);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut surface = Surface::with_size(10, 10);
        surface.set(3, 4, Rgba::WHITE);
        assert_eq!(surface.get(3, 4), Some(Rgba::WHITE));
        assert_eq!(surface.get(4, 3), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_out_of_bounds_write_is_dropped() {
        let mut surface = Surface::with_size(10, 10);
        surface.set(10, 0, Rgba::WHITE);
        surface.set(0, 10, Rgba::WHITE);
        assert_eq!(surface.get(10, 0), None);
        assert!(surface.iter().all(|(_, _, px)| px.is_transparent()));
    }

    #[test]
    fn test_clear_from_partial() {
        let mut surface = Surface::with_size(10, 2);
        for x in 0..10 {
            surface.set(x, 0, Rgba::WHITE);
            surface.set(x, 1, Rgba::WHITE);
        }
        surface.clear_from(4.0);

        // Left of the wipe untouched
        assert_eq!(surface.get(3, 0), Some(Rgba::WHITE));
        assert_eq!(surface.get(3, 1), Some(Rgba::WHITE));
        // From the wipe position rightwards cleared
        assert_eq!(surface.get(4, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.get(9, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_clear_from_negative_clears_all() {
        let mut surface = Surface::with_size(4, 1);
        surface.set(0, 0, Rgba::WHITE);
        surface.clear_from(-16.0);
        assert_eq!(surface.get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_clear_from_past_right_edge_is_noop() {
        let mut surface = Surface::with_size(4, 1);
        surface.set(3, 0, Rgba::WHITE);
        surface.clear_from(100.0);
        assert_eq!(surface.get(3, 0), Some(Rgba::WHITE));
    }
}
