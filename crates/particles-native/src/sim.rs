//! Mouse-driven stand-in for the camera and the vision model.
//!
//! The cursor is the wrist, the left button closes the fist and the wheel
//! tilts the hand. In two-hand mode a second hand mirrors the cursor through
//! the image centre, so moving the mouse changes both the wrist distance and
//! the steering angle. Frames are stamped on a 30 Hz grid like a webcam.

use glam::Vec2;
use particles_core::{
    CameraDevice, CameraFrame, HandDetector, HandLandmarkSet, Hands, LandmarkPoint,
    TrackingBackend, TrackingError, LANDMARK_COUNT,
};
use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;
use std::time::Instant;

pub const CAMERA_FPS: f64 = 30.0;
pub const CAMERA_WIDTH: u32 = 640;
pub const CAMERA_HEIGHT: u32 = 480;

const OPEN_HAND: f32 = 0.45; // wrist to middle tip, image units
const FIST: f32 = 0.12;
const TILT_PER_WHEEL_LINE: f32 = 0.1;

// per finger, thumb to pinky: angle off the hand axis, length relative to the middle finger
const FINGERS: [(f32, f32); 5] = [(-0.9, 0.6), (-0.3, 0.9), (0.0, 1.0), (0.25, 0.95), (0.5, 0.75)];

#[derive(Clone, Copy, Debug)]
pub struct SimInput {
    /// Cursor in normalized image coordinates.
    pub cursor: Vec2,
    pub inside: bool,
    pub fist: bool,
    /// Clockwise hand tilt, radians.
    pub tilt: f32,
    pub two_hands: bool,
}

impl Default for SimInput {
    fn default() -> Self {
        Self {
            cursor: Vec2::splat(0.5),
            inside: false,
            fist: false,
            tilt: 0.0,
            two_hands: false,
        }
    }
}

impl SimInput {
    pub fn add_wheel_lines(&mut self, lines: f32) {
        self.tilt = (self.tilt + lines * TILT_PER_WHEEL_LINE).clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

pub type SharedSimInput = Rc<RefCell<SimInput>>;

/// Landmarks for a hand at `wrist`, fingers fanned around an axis tilted
/// clockwise by `tilt` from upright, middle fingertip `reach` away.
pub fn synth_hand(wrist: Vec2, tilt: f32, reach: f32) -> HandLandmarkSet {
    let mut points = [LandmarkPoint::new(wrist.x, wrist.y, 0.0); LANDMARK_COUNT];
    for (f, (spread, length)) in FINGERS.iter().enumerate() {
        let angle = tilt + spread;
        // image y points down: upright is -y, clockwise moves towards +x
        let dir = Vec2::new(angle.sin(), -angle.cos());
        for joint in 0..4 {
            let p = wrist + dir * (reach * length * (joint + 1) as f32 / 4.0);
            points[1 + f * 4 + joint] = LandmarkPoint::new(p.x, p.y, -0.01 * joint as f32);
        }
    }
    HandLandmarkSet::new(points)
}

pub fn hands_for(input: &SimInput) -> Hands {
    let mut hands = Hands::new();
    if !input.inside {
        return hands;
    }
    let reach = if input.fist { FIST } else { OPEN_HAND };
    hands.push(synth_hand(input.cursor, input.tilt, reach));
    if input.two_hands {
        let mirrored = Vec2::ONE - input.cursor;
        hands.push(synth_hand(mirrored, -input.tilt, reach).with_confidence(0.9));
    }
    hands
}

pub struct SimulatedBackend {
    input: SharedSimInput,
}

impl SimulatedBackend {
    pub fn new(input: SharedSimInput) -> Self {
        Self { input }
    }
}

impl TrackingBackend for SimulatedBackend {
    fn load_detector(&mut self) -> Result<Box<dyn HandDetector>, TrackingError> {
        log::info!("[sim] hand detector ready (mouse-driven)");
        Ok(Box::new(SimDetector {
            input: self.input.clone(),
        }))
    }

    fn open_camera(&mut self) -> Result<Box<dyn CameraDevice>, TrackingError> {
        log::info!("[sim] camera {}x{} @ {} fps", CAMERA_WIDTH, CAMERA_HEIGHT, CAMERA_FPS);
        Ok(Box::new(SimCamera {
            opened: Instant::now(),
            running: true,
        }))
    }
}

struct SimCamera {
    opened: Instant,
    running: bool,
}

impl CameraDevice for SimCamera {
    fn latest_frame(&mut self) -> Option<CameraFrame<'_>> {
        if !self.running {
            return None;
        }
        let frame_ms = 1000.0 / CAMERA_FPS;
        let now_ms = self.opened.elapsed().as_secs_f64() * 1000.0;
        Some(CameraFrame {
            timestamp_ms: (now_ms / frame_ms).floor() * frame_ms,
            width: CAMERA_WIDTH,
            height: CAMERA_HEIGHT,
            pixels: &[],
        })
    }

    fn stop(&mut self) {
        self.running = false;
        log::info!("[sim] camera stopped");
    }
}

struct SimDetector {
    input: SharedSimInput,
}

impl HandDetector for SimDetector {
    fn detect(&mut self, _frame: &CameraFrame<'_>) -> Result<Hands, TrackingError> {
        Ok(hands_for(&self.input.borrow()))
    }

    fn close(&mut self) {
        log::info!("[sim] hand detector closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particles_core::interpret;

    #[test]
    fn synthesized_hand_reaches_exactly() {
        let h = synth_hand(Vec2::new(0.5, 0.6), 0.3, 0.25);
        assert!((h.openness() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn upright_hand_reads_as_zero_rotation() {
        let input = SimInput {
            inside: true,
            ..SimInput::default()
        };
        let s = interpret(&hands_for(&input));
        assert!(s.is_tracking);
        assert!(s.rotation.abs() < 1e-5);
        assert_eq!(s.spread_factor, 1.0);
    }

    #[test]
    fn clockwise_tilt_reads_as_negative_rotation() {
        let mut input = SimInput {
            inside: true,
            ..SimInput::default()
        };
        input.add_wheel_lines(3.0);
        let s = interpret(&hands_for(&input));
        assert!((s.rotation + 0.3).abs() < 1e-4, "rotation {}", s.rotation);
    }

    #[test]
    fn fist_closes_spread() {
        let input = SimInput {
            inside: true,
            fist: true,
            ..SimInput::default()
        };
        assert_eq!(interpret(&hands_for(&input)).spread_factor, 0.0);
    }

    #[test]
    fn cursor_outside_means_no_hands() {
        assert!(hands_for(&SimInput::default()).is_empty());
    }

    #[test]
    fn two_hand_mode_scales_with_cursor_distance_from_centre() {
        let near = SimInput {
            inside: true,
            two_hands: true,
            cursor: Vec2::new(0.45, 0.5),
            ..SimInput::default()
        };
        let far = SimInput {
            cursor: Vec2::new(0.1, 0.5),
            ..near
        };
        let s_near = interpret(&hands_for(&near));
        let s_far = interpret(&hands_for(&far));
        assert_eq!(s_near.scale_factor, 0.5);
        assert!(s_far.scale_factor > 2.0);
    }

    #[test]
    fn stopped_camera_delivers_nothing() {
        let mut cam = SimCamera {
            opened: Instant::now(),
            running: true,
        };
        assert!(cam.latest_frame().is_some());
        cam.stop();
        assert!(cam.latest_frame().is_none());
    }
}
