//! Procedural target point clouds.
//!
//! Every shape is sampled independently per particle from the random source
//! handed in by the caller, so a seeded `StdRng` gives reproducible clouds.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Heart,
    Flower,
    Sphere,
    Fireworks,
    Dna,
}

impl ShapeKind {
    /// All shapes in the order the selector presents them.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Sphere,
        ShapeKind::Fireworks,
        ShapeKind::Dna,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Heart => "Heart",
            ShapeKind::Flower => "Flower",
            ShapeKind::Sphere => "Planet",
            ShapeKind::Fireworks => "Fireworks",
            ShapeKind::Dna => "DNA",
        }
    }

    /// Next shape in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heart" => Ok(ShapeKind::Heart),
            "flower" => Ok(ShapeKind::Flower),
            "sphere" | "planet" => Ok(ShapeKind::Sphere),
            "fireworks" => Ok(ShapeKind::Fireworks),
            "dna" => Ok(ShapeKind::Dna),
            _ => Err(ConfigError::UnknownShape(s.to_string())),
        }
    }
}

/// Sample `count` rest positions for `shape`.
pub fn generate<R: Rng>(shape: ShapeKind, count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|i| match shape {
            ShapeKind::Heart => heart(rng),
            ShapeKind::Sphere => sphere(rng),
            ShapeKind::Flower => flower(rng),
            ShapeKind::Fireworks => firework(rng),
            ShapeKind::Dna => dna(i, count, rng),
        })
        .collect()
}

fn heart<R: Rng>(rng: &mut R) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    // cube root of the fill fraction spreads points into the interior
    let fill = rng.gen::<f32>().cbrt();
    let x = HEART_SCALE * 16.0 * t.sin().powi(3);
    let y = HEART_SCALE
        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    let z = rng.gen_range(-1.0..1.0);
    Vec3::new(x * fill, y * fill, z)
}

fn sphere<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = SPHERE_RADIUS * rng.gen::<f32>().cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn flower<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..=PI);
    let r = FLOWER_BASE_RADIUS + (FLOWER_PETALS * theta).sin() * phi.sin();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

fn firework<R: Rng>(rng: &mut R) -> Vec3 {
    let branch = rng.gen_range(0..FIREWORK_BRANCHES);
    let theta = TAU * branch as f32 / FIREWORK_BRANCHES as f32;
    let phi = rng.gen_range(0.0..FRAC_PI_2);
    let r = FIREWORK_RADIUS * rng.gen::<f32>();
    let mut jitter = || rng.gen_range(-FIREWORK_JITTER..FIREWORK_JITTER);
    Vec3::new(
        r * theta.cos() * phi.sin() + jitter(),
        r * phi.cos() + jitter(),
        r * theta.sin() * phi.sin() + jitter(),
    )
}

fn dna<R: Rng>(index: usize, count: usize, rng: &mut R) -> Vec3 {
    let mut p = dna_strand_point(index, count);
    p.x += rng.gen_range(-DNA_JITTER..DNA_JITTER);
    p.z += rng.gen_range(-DNA_JITTER..DNA_JITTER);
    p
}

/// Angle of particle `index` around the helix axis. Odd indices sit on the
/// second strand, half a turn away from the first.
pub fn dna_phase(index: usize, count: usize) -> f32 {
    let t = index as f32 / count.max(1) as f32 * DNA_TURNS_RADIANS;
    let offset = if index % 2 == 0 { 0.0 } else { PI };
    t + offset
}

/// Helix position of particle `index` before jitter.
pub fn dna_strand_point(index: usize, count: usize) -> Vec3 {
    let phase = dna_phase(index, count);
    let y = (index as f32 / count.max(1) as f32 - 0.5) * DNA_HEIGHT;
    Vec3::new(phase.cos() * DNA_RADIUS, y, phase.sin() * DNA_RADIUS)
}
