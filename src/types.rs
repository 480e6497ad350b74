//! Core types for vanish-input.
//!
//! These types flow through the whole engine: the rasterizer produces
//! particles, the dissolve animator consumes them, and the host render loop
//! receives render commands.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color (the cleared surface state).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// The "ink" predicate: all of R, G and B non-zero, alpha ignored.
    ///
    /// This classifies a rasterized pixel as part of a rendered glyph. The
    /// alpha channel is deliberately not consulted - anti-aliased edge pixels
    /// below full alpha still count as ink.
    #[inline]
    pub const fn is_ink(&self) -> bool {
        self.r != 0 && self.g != 0 && self.b != 0
    }
}

// =============================================================================
// Particle
// =============================================================================

/// A single dissolving pixel.
///
/// Created in bulk by the rasterizer scan, owned exclusively by the dissolve
/// animator once an animation starts, dropped when its radius reaches zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    /// Create a particle at an ink pixel with the initial unit radius.
    pub const fn at(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            x,
            y,
            radius: 1.0,
            color,
        }
    }
}

/// The full set of ink-pixel-derived particles for one text value.
///
/// Exactly one live cloud exists per rendered value; it is replaced (not
/// mutated) whenever the value changes while idle, and snapshot-owned by the
/// animator during a dissolve.
pub type PointCloud = Vec<Particle>;

// =============================================================================
// Render Commands
// =============================================================================

/// One drawing instruction for the host render loop.
///
/// The dissolve animator is pull-based: each `tick` yields the commands for
/// one frame instead of touching any drawing surface directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Clear the region from `x` to the right edge of the surface.
    ///
    /// Cheap partial clear - everything left of the wipe position is
    /// untouched from previous frames.
    ClearFrom { x: f32 },
    /// Draw one particle as a square of `size` at (`x`, `y`).
    Rect { x: f32, y: f32, size: f32, color: Rgba },
}

// =============================================================================
// State Flags
// =============================================================================

bitflags::bitflags! {
    /// Visual/interaction state of the component as a bitfield.
    ///
    /// The analog of class toggling on a DOM element: hosts read these to
    /// style the control (dimmed when disabled, canvas visible while
    /// animating, dropdown mounted while open).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StateFlags: u8 {
        const NONE = 0;
        /// A dissolve is in flight. Exclusive-access guard: no value
        /// mutation, filtering or rasterization while set.
        const ANIMATING = 1 << 0;
        /// Externally disabled - all keyboard/pointer handling suppressed.
        const DISABLED = 1 << 1;
        /// The input currently has focus.
        const FOCUSED = 1 << 2;
        /// The suggestion dropdown is showing.
        const DROPDOWN_OPEN = 1 << 3;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ink_predicate_requires_all_channels() {
        assert!(Rgba::WHITE.is_ink());
        assert!(Rgba::rgb(1, 1, 1).is_ink());
        assert!(!Rgba::rgb(255, 255, 0).is_ink());
        assert!(!Rgba::rgb(0, 255, 255).is_ink());
        assert!(!Rgba::BLACK.is_ink());
    }

    #[test]
    fn test_ink_predicate_ignores_alpha() {
        // Partially transparent ink still counts
        assert!(Rgba::new(200, 200, 200, 10).is_ink());
        assert!(Rgba::new(200, 200, 200, 0).is_ink());
    }

    #[test]
    fn test_particle_at_has_unit_radius() {
        let p = Particle::at(3.0, 7.0, Rgba::WHITE);
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 7.0);
    }

    #[test]
    fn test_state_flags_combine() {
        let flags = StateFlags::ANIMATING | StateFlags::FOCUSED;
        assert!(flags.contains(StateFlags::ANIMATING));
        assert!(!flags.contains(StateFlags::DISABLED));
    }
}
