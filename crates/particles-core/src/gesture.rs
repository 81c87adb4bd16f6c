//! Hand landmarks to continuous control signals.
//!
//! [`interpret`] is a pure function of one frame's detections. It keeps no
//! memory between calls; temporal smoothing lives in [`crate::smoothing`].
//!
//! | Hands | Rotation | Scale | Spread |
//! |---|---|---|---|
//! | 0 | 0 | 1 | 0 |
//! | 1 | wrist→middle-tip tilt, upright = 0 | 1 | openness of that hand |
//! | 2 | tilt of the wrist-to-wrist line | wrist distance × 3 | mean openness |
//! | >2 | as for 2, using the two most confident hands | | |
//!
//! Image space has y pointing down, so a clockwise tilt on screen maps to a
//! negative rotation in both the one-hand and two-hand modes.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::f32::consts::FRAC_PI_2;

pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const MIDDLE_TIP: usize = 12;

/// One detector landmark: x/y normalized to the image, z relative depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The 21 landmarks of one detected hand, in detector order.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarkSet {
    pub points: [LandmarkPoint; LANDMARK_COUNT],
    /// Detector handedness score; only consulted when more than two hands are reported.
    pub confidence: f32,
}

impl HandLandmarkSet {
    pub fn new(points: [LandmarkPoint; LANDMARK_COUNT]) -> Self {
        Self {
            points,
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    #[inline]
    pub fn wrist(&self) -> LandmarkPoint {
        self.points[WRIST]
    }

    #[inline]
    pub fn middle_tip(&self) -> LandmarkPoint {
        self.points[MIDDLE_TIP]
    }

    /// Wrist to middle-fingertip distance in the image plane.
    pub fn openness(&self) -> f32 {
        self.wrist().xy().distance(self.middle_tip().xy())
    }
}

/// Hands reported for a single camera frame. Two fit inline.
pub type Hands = SmallVec<[HandLandmarkSet; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingSignal {
    pub is_tracking: bool,
    /// Uniform cloud scale, within [`SCALE_MIN`, `SCALE_MAX`].
    pub scale_factor: f32,
    /// Radial push, within [0, 1].
    pub spread_factor: f32,
    /// Cloud roll about the view axis, radians.
    pub rotation: f32,
}

impl TrackingSignal {
    /// The "no gesture input" signal.
    pub const IDLE: TrackingSignal = TrackingSignal {
        is_tracking: false,
        scale_factor: 1.0,
        spread_factor: 0.0,
        rotation: 0.0,
    };

    pub fn status_label(&self) -> &'static str {
        if self.is_tracking {
            "Tracking Active"
        } else {
            "Camera Ready"
        }
    }

    /// Clamp into the documented domains and replace non-finite fields with
    /// their neutral values.
    pub fn sanitized(self) -> Self {
        Self {
            is_tracking: self.is_tracking,
            scale_factor: clamp_or(self.scale_factor, SCALE_MIN, SCALE_MAX, 1.0),
            spread_factor: clamp_or(self.spread_factor, 0.0, 1.0, 0.0),
            rotation: if self.rotation.is_finite() {
                self.rotation
            } else {
                0.0
            },
        }
    }
}

impl Default for TrackingSignal {
    fn default() -> Self {
        Self::IDLE
    }
}

pub fn interpret(hands: &[HandLandmarkSet]) -> TrackingSignal {
    match hands {
        [] => TrackingSignal::IDLE,
        [hand] => one_hand(hand),
        [a, b] => two_hands(a, b),
        _ => {
            let (a, b) = most_confident_pair(hands);
            two_hands(a, b)
        }
    }
}

fn one_hand(hand: &HandLandmarkSet) -> TrackingSignal {
    let d = hand.middle_tip().xy() - hand.wrist().xy();
    // upright fingers point towards -y in image space: shift so that reads as 0
    let rotation = -(d.y.atan2(d.x) + FRAC_PI_2);
    TrackingSignal {
        is_tracking: true,
        scale_factor: 1.0,
        spread_factor: spread_for(&[hand]),
        rotation: if rotation.is_finite() { rotation } else { 0.0 },
    }
}

fn two_hands<'a>(a: &'a HandLandmarkSet, b: &'a HandLandmarkSet) -> TrackingSignal {
    let (left, right) = match compare_wrists(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };
    let l = left.wrist().xy();
    let r = right.wrist().xy();
    let d = r - l;
    let rotation = -d.y.atan2(d.x);
    TrackingSignal {
        is_tracking: true,
        scale_factor: clamp_or(
            l.distance(r) * WRIST_DISTANCE_TO_SCALE,
            SCALE_MIN,
            SCALE_MAX,
            1.0,
        ),
        spread_factor: spread_for(&[left, right]),
        rotation: if rotation.is_finite() { rotation } else { 0.0 },
    }
}

// Left-to-right by wrist x; y breaks ties so the pairing never depends on detector order.
fn compare_wrists(a: &HandLandmarkSet, b: &HandLandmarkSet) -> Ordering {
    let (wa, wb) = (a.wrist(), b.wrist());
    wa.x.total_cmp(&wb.x).then(wa.y.total_cmp(&wb.y))
}

fn most_confident_pair(hands: &[HandLandmarkSet]) -> (&HandLandmarkSet, &HandLandmarkSet) {
    let rank = |h: &HandLandmarkSet| {
        if h.confidence.is_nan() {
            f32::NEG_INFINITY
        } else {
            h.confidence
        }
    };
    let mut ranked: SmallVec<[&HandLandmarkSet; 4]> = hands.iter().collect();
    // stable: equal scores keep detector order
    ranked.sort_by(|a, b| rank(b).total_cmp(&rank(a)));
    (ranked[0], ranked[1])
}

fn spread_for(hands: &[&HandLandmarkSet]) -> f32 {
    let total: f32 = hands.iter().map(|h| h.openness()).sum();
    let avg = total / hands.len().max(1) as f32;
    clamp_or((avg - OPENNESS_CLOSED) * OPENNESS_GAIN, 0.0, 1.0, 0.0)
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_or_replaces_nan_and_clamps_infinity() {
        assert_eq!(clamp_or(f32::NAN, 0.0, 1.0, 0.5), 0.5);
        assert_eq!(clamp_or(f32::INFINITY, 0.0, 1.0, 0.5), 1.0);
        assert_eq!(clamp_or(f32::NEG_INFINITY, 0.5, 2.5, 1.0), 0.5);
    }

    #[test]
    fn sanitized_keeps_tracking_flag() {
        let s = TrackingSignal {
            is_tracking: true,
            scale_factor: 9.0,
            spread_factor: -3.0,
            rotation: f32::NAN,
        }
        .sanitized();
        assert!(s.is_tracking);
        assert_eq!(s.scale_factor, SCALE_MAX);
        assert_eq!(s.spread_factor, 0.0);
        assert_eq!(s.rotation, 0.0);
    }
}
