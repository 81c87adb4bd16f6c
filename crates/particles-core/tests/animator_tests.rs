// Tests for the per-frame particle animator and the signal smoother.

use glam::Vec3;
use particles_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_animator(shape: ShapeKind, count: usize) -> ParticleAnimator {
    ParticleAnimator::new(shape, count, Vec3::ONE, StdRng::seed_from_u64(42))
}

fn signal(scale: f32, spread: f32, rotation: f32) -> TrackingSignal {
    TrackingSignal {
        is_tracking: true,
        scale_factor: scale,
        spread_factor: spread,
        rotation,
    }
}

#[test]
fn starts_at_rest_with_matching_lengths() {
    let a = make_animator(ShapeKind::Heart, 300);
    assert_eq!(a.count(), 300);
    assert_eq!(a.particles().current().len(), a.particles().target().len());
    assert_eq!(a.particles().current(), a.particles().target());
    assert_eq!(a.particles().as_bytes().len(), 300 * 3 * 4);
}

#[test]
fn zero_delta_leaves_positions_untouched() {
    let mut a = make_animator(ShapeKind::Sphere, 200);
    a.update(FrameTime::new(0.016, 0.5), &signal(2.0, 0.7, 1.0));
    a.set_shape(ShapeKind::Dna);
    let before = a.particles().current().to_vec();
    for elapsed in [0.5, 1.0, 3.0] {
        a.update(FrameTime::new(0.0, elapsed), &signal(0.5, 1.0, -2.0));
    }
    assert_eq!(a.particles().current(), before.as_slice());
}

#[test]
fn shape_change_keeps_current_positions() {
    let mut a = make_animator(ShapeKind::Heart, 100);
    let before = a.particles().current().to_vec();
    a.set_shape(ShapeKind::Fireworks);
    assert_eq!(a.shape(), ShapeKind::Fireworks);
    assert_eq!(a.particles().current(), before.as_slice());
    assert_ne!(a.particles().target(), before.as_slice());
}

#[test]
fn morph_converges_monotonically_without_jumps() {
    let mut a = make_animator(ShapeKind::Heart, 400);
    a.set_shape(ShapeKind::Sphere);
    let s = TrackingSignal::IDLE;
    let time = FrameTime::new(1.0 / 60.0, 2.0);
    let goals: Vec<Vec3> = a
        .particles()
        .target()
        .iter()
        .enumerate()
        .map(|(i, rest)| transform_target(*rest, i, &s, time.elapsed))
        .collect();
    let distance = |cur: &[Vec3]| -> Vec<f32> {
        cur.iter().zip(&goals).map(|(c, g)| c.distance(*g)).collect()
    };

    let mut prev_pos = a.particles().current().to_vec();
    let mut prev = distance(&prev_pos);
    let k = ease_factor(time.delta);
    for _ in 0..240 {
        a.update(time, &s);
        let cur_pos = a.particles().current().to_vec();
        let cur = distance(&cur_pos);
        for i in 0..cur.len() {
            assert!(cur[i] <= prev[i] + 1e-5, "particle {i} moved away");
            // a single step covers at most the easing fraction of the gap
            let step = cur_pos[i].distance(prev_pos[i]);
            assert!(step <= prev[i] * k + 1e-4, "particle {i} jumped");
        }
        prev = cur;
        prev_pos = cur_pos;
    }
    assert!(prev.iter().all(|d| *d < 0.01), "cloud did not settle");
}

#[test]
fn scale_and_spread_shape_the_goal() {
    let rest = Vec3::new(1.0, 0.0, 0.0);
    // elapsed chosen so the idle jitter on y is cos(pi/2 + 0) ~ 0 for index 0
    let elapsed = std::f32::consts::FRAC_PI_2;
    let g = transform_target(rest, 0, &signal(2.0, 0.0, 0.0), elapsed);
    assert!((g.x - (2.0 + IDLE_JITTER_AMPLITUDE)).abs() < 1e-4, "{g:?}");

    let spread = transform_target(rest, 0, &signal(1.0, 1.0, 0.0), elapsed);
    // pushed outward by spread * 5 along +x
    assert!((spread.x - (1.0 + SPREAD_DISTANCE + IDLE_JITTER_AMPLITUDE)).abs() < 1e-2);
}

#[test]
fn goal_at_origin_stays_finite() {
    let g = transform_target(Vec3::ZERO, 3, &signal(2.5, 1.0, 0.0), 10.0);
    assert!(g.is_finite());
}

#[test]
fn non_finite_signal_does_not_poison_positions() {
    let mut a = make_animator(ShapeKind::Flower, 50);
    let bad = TrackingSignal {
        is_tracking: true,
        scale_factor: f32::NAN,
        spread_factor: f32::INFINITY,
        rotation: f32::NAN,
    };
    for _ in 0..10 {
        a.update(FrameTime::new(0.016, 1.0), &bad);
    }
    assert!(a.particles().current().iter().all(|p| p.is_finite()));
    assert!(a.transform().roll.is_finite());
}

#[test]
fn color_and_roll_blend_by_fixed_fraction() {
    let mut a = ParticleAnimator::new(ShapeKind::Heart, 10, Vec3::ZERO, StdRng::seed_from_u64(1));
    a.set_color(Vec3::ONE);
    a.update(FrameTime::new(0.0, 0.0), &signal(1.0, 0.0, 1.0));
    assert!((a.color().x - COLOR_BLEND_PER_FRAME).abs() < 1e-6);
    assert!((a.transform().roll - ROTATION_BLEND_PER_FRAME).abs() < 1e-6);
    // no time passed: no auto-rotation
    assert_eq!(a.transform().yaw, 0.0);

    a.update(FrameTime::new(2.0, 2.0), &signal(1.0, 0.0, 1.0));
    assert!((a.transform().yaw - AUTO_ROTATION_PER_SEC * 2.0).abs() < 1e-6);
    assert_eq!(a.target_color(), Vec3::ONE);
}

#[test]
fn count_change_reseeds_at_rest() {
    let mut a = make_animator(ShapeKind::Dna, PARTICLE_COUNT_DESKTOP);
    a.set_count(PARTICLE_COUNT_MOBILE);
    assert_eq!(a.count(), PARTICLE_COUNT_MOBILE);
    assert_eq!(a.particles().current(), a.particles().target());
}

#[test]
fn ease_factor_is_bounded() {
    assert_eq!(ease_factor(0.0), 0.0);
    assert_eq!(ease_factor(-1.0), 0.0);
    assert_eq!(ease_factor(f32::NAN), 0.0);
    let small = ease_factor(0.001);
    assert!((small - EASE_RATE_PER_SEC * 0.001).abs() < 1e-4);
    assert!(ease_factor(100.0) <= 1.0);
}

#[test]
fn smoother_blends_and_tracks_latest_flag() {
    let mut s = SignalSmoother::default();
    let out = s.push(signal(2.0, 1.0, 1.0));
    assert!(out.is_tracking);
    assert!((out.scale_factor - 1.2).abs() < 1e-6);
    assert!((out.spread_factor - 0.2).abs() < 1e-6);
    assert!((out.rotation - 0.2).abs() < 1e-6);

    let out = s.push(TrackingSignal::IDLE);
    assert!(!out.is_tracking);
    assert!((out.scale_factor - (1.2 * 0.8 + 0.2)).abs() < 1e-6);

    s.reset();
    assert_eq!(s.current(), TrackingSignal::IDLE);
}

#[test]
fn smoother_output_stays_in_domain() {
    let mut s = SignalSmoother::new(0.5);
    for i in 0..100 {
        let raw = if i % 2 == 0 {
            signal(SCALE_MAX, 1.0, 3.0)
        } else {
            signal(50.0, -4.0, f32::NAN)
        };
        let out = s.push(raw);
        assert!((SCALE_MIN..=SCALE_MAX).contains(&out.scale_factor));
        assert!((0.0..=1.0).contains(&out.spread_factor));
        assert!(out.rotation.is_finite());
    }
}
