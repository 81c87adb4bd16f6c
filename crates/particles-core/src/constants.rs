use glam::Vec3;

// Shared tuning constants used by the animator, the gesture pipeline and the front-end.

// Particle budget per device class
pub const PARTICLE_COUNT_DESKTOP: usize = 6000;
pub const PARTICLE_COUNT_MOBILE: usize = 3000;

// Shape sampling
pub const HEART_SCALE: f32 = 0.15;
pub const SPHERE_RADIUS: f32 = 2.5;
pub const FLOWER_BASE_RADIUS: f32 = 1.5;
pub const FLOWER_PETALS: f32 = 5.0;
pub const FIREWORK_BRANCHES: u32 = 10;
pub const FIREWORK_RADIUS: f32 = 4.0;
pub const FIREWORK_JITTER: f32 = 0.25; // half-width of the per-axis jitter
pub const DNA_TURNS_RADIANS: f32 = 10.0 * std::f32::consts::PI;
pub const DNA_RADIUS: f32 = 1.5;
pub const DNA_HEIGHT: f32 = 8.0;
pub const DNA_JITTER: f32 = 0.1;

// Gesture mapping
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 2.5;
pub const WRIST_DISTANCE_TO_SCALE: f32 = 3.0;
pub const OPENNESS_CLOSED: f32 = 0.15; // wrist-to-fingertip distance of a fist
pub const OPENNESS_GAIN: f32 = 4.0;

// Signal smoothing: weight of the newest sample
pub const SIGNAL_SMOOTHING_ALPHA: f32 = 0.2;

// Per-particle animation
pub const EASE_RATE_PER_SEC: f32 = 4.0;
pub const SPREAD_DISTANCE: f32 = 5.0; // outward push at full openness
pub const SPREAD_EPSILON: f32 = 0.001; // keeps the radial normalization finite at the origin
pub const IDLE_JITTER_AMPLITUDE: f32 = 0.02;

// Whole-cloud motion (fixed per-frame blends, not delta-scaled)
pub const COLOR_BLEND_PER_FRAME: f32 = 0.1;
pub const ROTATION_BLEND_PER_FRAME: f32 = 0.1;
pub const AUTO_ROTATION_PER_SEC: f32 = 0.05;

// Scene camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOVY_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Visual sizing
pub const PARTICLE_SIZE: f32 = 0.15;

// UI palette, in display order
pub const PALETTE: [&str; 6] = [
    "#ff0055", // hot pink
    "#00ffff", // cyan
    "#ffaa00", // gold
    "#aa00ff", // violet
    "#00ff66", // green
    "#ffffff", // white
];
pub const DEFAULT_COLOR_HEX: &str = PALETTE[0];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}
