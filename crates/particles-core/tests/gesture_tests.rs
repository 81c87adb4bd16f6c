// Tests for the stateless landmark → signal interpreter.

use particles_core::*;
use std::f32::consts::FRAC_PI_2;

/// Hand with every landmark at the wrist except the middle fingertip.
fn hand(wrist: (f32, f32), tip: (f32, f32)) -> HandLandmarkSet {
    let mut points = [LandmarkPoint::new(wrist.0, wrist.1, 0.0); LANDMARK_COUNT];
    points[MIDDLE_TIP] = LandmarkPoint::new(tip.0, tip.1, 0.0);
    HandLandmarkSet::new(points)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn no_hands_is_neutral() {
    let s = interpret(&[]);
    assert_eq!(s, TrackingSignal::IDLE);
    assert!(!s.is_tracking);
    assert_eq!(s.scale_factor, 1.0);
    assert_eq!(s.spread_factor, 0.0);
    assert_eq!(s.rotation, 0.0);
}

#[test]
fn no_hands_after_hands_is_still_neutral() {
    let _ = interpret(&[hand((0.2, 0.5), (0.3, 0.1)), hand((0.8, 0.6), (0.8, 0.1))]);
    let _ = interpret(&[hand((0.5, 0.5), (0.9, 0.9))]);
    assert_eq!(interpret(&[]), TrackingSignal::IDLE);
}

#[test]
fn one_hand_upright_is_zero_rotation() {
    let s = interpret(&[hand((0.5, 0.5), (0.5, 0.3))]);
    assert!(s.is_tracking);
    assert!(approx(s.rotation, 0.0), "rotation {}", s.rotation);
    assert_eq!(s.scale_factor, 1.0);
}

#[test]
fn one_hand_pointing_right_is_clockwise() {
    let s = interpret(&[hand((0.5, 0.5), (0.6, 0.5))]);
    assert!(approx(s.rotation, -FRAC_PI_2), "rotation {}", s.rotation);
}

#[test]
fn one_hand_pointing_left_is_counter_clockwise() {
    let s = interpret(&[hand((0.5, 0.5), (0.4, 0.5))]);
    // atan2(0, -0.1) = pi, so -(pi + pi/2)
    assert!(approx(s.rotation, -3.0 * FRAC_PI_2), "rotation {}", s.rotation);
}

#[test]
fn openness_maps_to_spread() {
    // fist: distance below the closed threshold
    let fist = interpret(&[hand((0.5, 0.5), (0.5, 0.4))]);
    assert_eq!(fist.spread_factor, 0.0);
    // 0.25 apart -> (0.25 - 0.15) * 4 = 0.4
    let half = interpret(&[hand((0.5, 0.5), (0.5, 0.25))]);
    assert!(approx(half.spread_factor, 0.4), "spread {}", half.spread_factor);
    // wide open saturates
    let open = interpret(&[hand((0.5, 0.9), (0.5, 0.1))]);
    assert_eq!(open.spread_factor, 1.0);
}

#[test]
fn two_hands_scale_from_wrist_distance() {
    let s = interpret(&[hand((0.3, 0.5), (0.3, 0.3)), hand((0.6, 0.5), (0.6, 0.3))]);
    assert!(s.is_tracking);
    assert!(approx(s.scale_factor, 0.9), "scale {}", s.scale_factor);
    assert!(approx(s.rotation, 0.0));
    // both hands 0.2 open -> (0.2 - 0.15) * 4
    assert!(approx(s.spread_factor, 0.2), "spread {}", s.spread_factor);
}

#[test]
fn two_hands_right_lower_is_clockwise() {
    let s = interpret(&[hand((0.2, 0.4), (0.2, 0.2)), hand((0.6, 0.8), (0.6, 0.6))]);
    assert!(s.rotation < 0.0, "rotation {}", s.rotation);
    assert!(approx(s.rotation, -(0.4f32).atan2(0.4)));
}

#[test]
fn two_hands_ignore_detector_order() {
    let pairs = [
        (hand((0.2, 0.4), (0.25, 0.1)), hand((0.7, 0.6), (0.6, 0.3))),
        (hand((0.9, 0.1), (0.9, 0.05)), hand((0.1, 0.9), (0.3, 0.5))),
        // same wrist x: y decides
        (hand((0.5, 0.2), (0.5, 0.1)), hand((0.5, 0.7), (0.4, 0.4))),
        // coincident wrists
        (hand((0.5, 0.5), (0.5, 0.2)), hand((0.5, 0.5), (0.7, 0.5))),
    ];
    for (a, b) in pairs {
        let ab = interpret(&[a.clone(), b.clone()]);
        let ba = interpret(&[b, a]);
        assert_eq!(ab, ba);
    }
}

#[test]
fn factors_stay_in_domain_for_degenerate_input() {
    let coincident = hand((0.5, 0.5), (0.5, 0.5));
    let far_a = hand((-10.0, -10.0), (40.0, 40.0));
    let far_b = hand((10.0, 10.0), (-40.0, -40.0));
    let cases: Vec<Vec<HandLandmarkSet>> = vec![
        vec![coincident.clone()],
        vec![coincident.clone(), coincident.clone()],
        vec![far_a.clone(), far_b.clone()],
        vec![far_a, coincident.clone(), far_b],
    ];
    for hands in cases {
        let s = interpret(&hands);
        assert!((SCALE_MIN..=SCALE_MAX).contains(&s.scale_factor), "{s:?}");
        assert!((0.0..=1.0).contains(&s.spread_factor), "{s:?}");
        assert!(s.rotation.is_finite());
    }
    let coincident_pair = interpret(&[coincident.clone(), coincident]);
    assert_eq!(coincident_pair.scale_factor, SCALE_MIN);
    assert_eq!(coincident_pair.spread_factor, 0.0);
}

#[test]
fn nan_landmarks_fall_back_to_neutral_fields() {
    let bad = hand((f32::NAN, 0.5), (0.5, f32::NAN));
    let s = interpret(&[bad.clone()]);
    assert!(s.is_tracking);
    assert_eq!(s.spread_factor, 0.0);
    assert_eq!(s.rotation, 0.0);

    let s2 = interpret(&[bad, hand((0.5, 0.5), (0.5, 0.2))]);
    assert!((SCALE_MIN..=SCALE_MAX).contains(&s2.scale_factor));
    assert!(s2.rotation.is_finite());
}

#[test]
fn extra_hands_use_the_two_most_confident() {
    let a = hand((0.2, 0.5), (0.2, 0.2)).with_confidence(0.9);
    let b = hand((0.6, 0.5), (0.6, 0.2)).with_confidence(0.8);
    let noise = hand((0.95, 0.05), (0.5, 0.5)).with_confidence(0.1);
    let expected = interpret(&[a.clone(), b.clone()]);
    assert_eq!(interpret(&[noise.clone(), a.clone(), b.clone()]), expected);
    assert_eq!(interpret(&[b, noise, a]), expected);
}

#[test]
fn status_label_follows_tracking_flag() {
    assert_eq!(TrackingSignal::IDLE.status_label(), "Camera Ready");
    assert_eq!(
        interpret(&[hand((0.5, 0.5), (0.5, 0.3))]).status_label(),
        "Tracking Active"
    );
}
