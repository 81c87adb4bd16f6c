//! Per-frame particle update.
//!
//! Each particle eases from where it currently is towards its rest position
//! after the gesture transform (scale, radial spread, idle jitter). Changing
//! the shape only swaps the rest positions, so the cloud morphs instead of
//! cutting.

use crate::clock::FrameTime;
use crate::constants::*;
use crate::gesture::TrackingSignal;
use crate::shapes::{self, ShapeKind};
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;

/// Current and rest positions of every particle. Both always hold `count` entries.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    current: Vec<Vec3>,
    target: Vec<Vec3>,
}

impl ParticleSet {
    /// Particles start at rest.
    pub fn new(target: Vec<Vec3>) -> Self {
        Self {
            current: target.clone(),
            target,
        }
    }

    pub fn count(&self) -> usize {
        self.target.len()
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    pub fn target(&self) -> &[Vec3] {
        &self.target
    }

    /// Replace the rest positions. Current positions are kept when the count
    /// is unchanged and re-seeded at rest otherwise.
    pub fn retarget(&mut self, target: Vec<Vec3>) {
        if target.len() != self.current.len() {
            self.current = target.clone();
        }
        self.target = target;
    }

    /// Current positions as tightly packed `f32` triples for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.current.as_slice())
    }
}

/// Whole-cloud orientation: roll follows the gesture, yaw turns on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CloudTransform {
    /// Rotation about the view (z) axis.
    pub roll: f32,
    /// Rotation about the vertical (y) axis.
    pub yaw: f32,
}

impl CloudTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw) * Mat4::from_rotation_z(self.roll)
    }
}

/// Where particle `index` wants to be this frame.
pub fn transform_target(rest: Vec3, index: usize, signal: &TrackingSignal, elapsed: f32) -> Vec3 {
    let mut p = rest * signal.scale_factor;
    let dir = p / (p.length() + SPREAD_EPSILON);
    p += dir * (signal.spread_factor * SPREAD_DISTANCE);
    let i = index as f32;
    p.x += (elapsed + i).sin() * IDLE_JITTER_AMPLITUDE;
    p.y += (elapsed + i * 0.5).cos() * IDLE_JITTER_AMPLITUDE;
    p
}

/// Fraction of the remaining distance covered in a frame of `delta` seconds.
///
/// `1 - e^(-rate * delta)`: about `rate * delta` for short frames, never
/// overshoots for long ones, and exactly 0 when no time passed.
#[inline]
pub fn ease_factor(delta: f32) -> f32 {
    if delta > 0.0 && delta.is_finite() {
        1.0 - (-EASE_RATE_PER_SEC * delta).exp()
    } else {
        0.0
    }
}

pub struct ParticleAnimator<R = StdRng> {
    particles: ParticleSet,
    shape: ShapeKind,
    rng: R,
    transform: CloudTransform,
    color: Vec3,
    target_color: Vec3,
}

impl<R: Rng> ParticleAnimator<R> {
    pub fn new(shape: ShapeKind, count: usize, color: Vec3, mut rng: R) -> Self {
        let particles = ParticleSet::new(shapes::generate(shape, count, &mut rng));
        Self {
            particles,
            shape,
            rng,
            transform: CloudTransform::default(),
            color,
            target_color: color,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn count(&self) -> usize {
        self.particles.count()
    }

    /// Color currently displayed (lags the selection).
    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn target_color(&self) -> Vec3 {
        self.target_color
    }

    pub fn transform(&self) -> CloudTransform {
        self.transform
    }

    /// Regenerate rest positions for `shape`; particles migrate on later frames.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape == self.shape {
            return;
        }
        log::info!("[animator] shape {} -> {}", self.shape, shape);
        self.shape = shape;
        let target = shapes::generate(shape, self.particles.count(), &mut self.rng);
        self.particles.retarget(target);
    }

    pub fn set_color(&mut self, rgb: Vec3) {
        log::debug!(
            "[animator] color target ({:.2},{:.2},{:.2})",
            rgb.x,
            rgb.y,
            rgb.z
        );
        self.target_color = rgb;
    }

    /// Resize the cloud. Positions restart at rest for the current shape.
    pub fn set_count(&mut self, count: usize) {
        if count == self.particles.count() {
            return;
        }
        log::info!("[animator] particle count {} -> {}", self.particles.count(), count);
        self.particles = ParticleSet::new(shapes::generate(self.shape, count, &mut self.rng));
    }

    pub fn update(&mut self, time: FrameTime, signal: &TrackingSignal) {
        let signal = signal.sanitized();
        let k = ease_factor(time.delta);
        let ParticleSet { current, target } = &mut self.particles;
        for (i, (cur, rest)) in current.iter_mut().zip(target.iter()).enumerate() {
            let goal = transform_target(*rest, i, &signal, time.elapsed);
            *cur += (goal - *cur) * k;
        }

        self.color += (self.target_color - self.color) * COLOR_BLEND_PER_FRAME;
        self.transform.roll += (signal.rotation - self.transform.roll) * ROTATION_BLEND_PER_FRAME;
        if time.delta > 0.0 && time.delta.is_finite() {
            self.transform.yaw =
                (self.transform.yaw + AUTO_ROTATION_PER_SEC * time.delta).rem_euclid(TAU);
        }
    }
}
