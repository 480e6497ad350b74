//! Dissolve Animator - the vanish wipe over the particle cloud.
//!
//! Consumes a point-cloud snapshot and animates it to empty: a horizontal
//! wipe position sweeps right-to-left, converting untouched particles into
//! drifting, shrinking ones. Pull-based: the host drives it one frame at a
//! time and receives the render commands for that frame.
//!
//! State machine: `Idle -> Animating -> Idle`. Entry is guarded by the caller
//! (non-empty trimmed value, not already animating); once begun, the snapshot
//! is owned exclusively here - later value changes cannot touch it.

use crate::types::{Particle, PointCloud, RenderCommand};

/// Units the wipe position moves left per frame.
pub const WIPE_STEP: f32 = 8.0;

/// Upper bound on the random radius decay per perturbed frame.
pub const RADIUS_DECAY: f32 = 0.05;

/// Floor on the radius decay per perturbed frame.
///
/// The loop terminates only because every perturbed particle strictly
/// shrinks; an unlucky run of near-zero random decays must not stall the
/// animation, so the decay is clamped away from zero. Bounds any dissolve to
/// `max_x / WIPE_STEP + 1 / MIN_RADIUS_DECAY` frames.
pub const MIN_RADIUS_DECAY: f32 = 0.001;

// =============================================================================
// Animator
// =============================================================================

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Animating,
}

/// Output of one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Draw commands for this frame, in order.
    pub commands: Vec<RenderCommand>,
    /// True when the particle set drained and the animation ended.
    pub finished: bool,
}

/// The wipe state machine. Owned by the component, advanced by its `tick`.
#[derive(Debug)]
pub struct DissolveAnimator {
    particles: PointCloud,
    pos: f32,
    phase: Phase,
}

impl DissolveAnimator {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            pos: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Whether a dissolve is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Number of live particles (kept + perturbed).
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Take ownership of a cloud snapshot and enter `Animating`.
    ///
    /// The wipe position starts at the maximum x-coordinate present in the
    /// cloud. An empty cloud enters and finishes on the first step.
    pub fn begin(&mut self, cloud: PointCloud) {
        if self.phase == Phase::Animating {
            return;
        }
        self.pos = cloud.iter().fold(0.0, |max, p| p.x.max(max));
        self.particles = cloud;
        self.phase = Phase::Animating;
    }

    /// Advance one frame.
    ///
    /// Particles left of the wipe position are kept untouched; the rest are
    /// perturbed and shrunk, and dropped once their radius is exhausted. The
    /// emitted commands clear from the wipe position rightwards and redraw
    /// only particles right of it - kept particles behind the already-cleared
    /// region cost nothing.
    pub fn step(&mut self) -> Frame {
        if self.phase != Phase::Animating {
            return Frame {
                commands: Vec::new(),
                finished: false,
            };
        }

        let pos = self.pos;
        let mut next = Vec::with_capacity(self.particles.len());
        for p in self.particles.drain(..) {
            if p.x < pos {
                next.push(p);
            } else {
                if p.radius <= 0.0 {
                    continue;
                }
                next.push(perturb(p));
            }
        }
        self.particles = next;

        let mut commands = Vec::with_capacity(self.particles.len() + 1);
        commands.push(RenderCommand::ClearFrom { x: pos });
        for p in &self.particles {
            if p.x > pos {
                commands.push(RenderCommand::Rect {
                    x: p.x,
                    y: p.y,
                    size: p.radius,
                    color: p.color,
                });
            }
        }

        let finished = self.particles.is_empty();
        if finished {
            self.phase = Phase::Idle;
        } else {
            self.pos -= WIPE_STEP;
        }

        Frame { commands, finished }
    }
}

impl Default for DissolveAnimator {
    fn default() -> Self {
        Self::new()
    }
}

/// One perturbation step: unit drift with uniform random sign on each axis,
/// radius decay clamped to the termination floor.
fn perturb(mut p: Particle) -> Particle {
    p.x += if rand::random::<bool>() { 1.0 } else { -1.0 };
    p.y += if rand::random::<bool>() { 1.0 } else { -1.0 };
    p.radius -= (RADIUS_DECAY * rand::random::<f32>()).max(MIN_RADIUS_DECAY);
    p
}

// =============================================================================
// Tests
// =============================================================================
