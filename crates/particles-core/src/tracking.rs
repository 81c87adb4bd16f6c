//! Camera / detector lifecycle and the gesture pipeline.
//!
//! The camera and the vision detector are external collaborators reached
//! through [`TrackingBackend`]. A [`TrackingSession`] owns them only while
//! tracking is enabled: the detector is loaded first, then the camera is
//! opened, and both are released by guards on disable, on drop and when the
//! second step of initialization fails.
//!
//! [`GesturePipeline`] is the orchestrating layer: it polls the session once
//! per rendered frame and folds fresh samples into a [`SignalSmoother`].

use crate::error::TrackingError;
use crate::gesture::{interpret, Hands, TrackingSignal};
use crate::smoothing::SignalSmoother;

/// A video frame as handed to the detector. Pixel layout is the backend's business.
#[derive(Clone, Copy, Debug)]
pub struct CameraFrame<'a> {
    /// Monotonic capture time, milliseconds.
    pub timestamp_ms: f64,
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [u8],
}

pub trait CameraDevice {
    /// Newest frame delivered by the device, if any has arrived yet.
    fn latest_frame(&mut self) -> Option<CameraFrame<'_>>;
    /// Stop the device stream. Called once, when the session lets go of it.
    fn stop(&mut self);
}

pub trait HandDetector {
    /// Landmarks of every hand visible in `frame`.
    fn detect(&mut self, frame: &CameraFrame<'_>) -> Result<Hands, TrackingError>;
    /// Release the model. Called once, when the session lets go of it.
    fn close(&mut self);
}

/// Acquires the camera and the detector.
pub trait TrackingBackend {
    fn load_detector(&mut self) -> Result<Box<dyn HandDetector>, TrackingError>;
    fn open_camera(&mut self) -> Result<Box<dyn CameraDevice>, TrackingError>;
}

struct CameraGuard(Box<dyn CameraDevice>);

impl Drop for CameraGuard {
    fn drop(&mut self) {
        self.0.stop();
        log::debug!("[tracking] camera stopped");
    }
}

struct DetectorGuard(Box<dyn HandDetector>);

impl Drop for DetectorGuard {
    fn drop(&mut self) {
        self.0.close();
        log::debug!("[tracking] detector closed");
    }
}

// field order is release order: camera first, then the detector
struct ActiveTracking {
    camera: CameraGuard,
    detector: DetectorGuard,
    last_frame_ms: Option<f64>,
}

pub struct TrackingSession<B> {
    backend: B,
    active: Option<ActiveTracking>,
}

impl<B: TrackingBackend> TrackingSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Acquire detector and camera. A no-op when already enabled.
    pub fn enable(&mut self) -> Result<(), TrackingError> {
        if self.active.is_some() {
            return Ok(());
        }
        let detector = DetectorGuard(self.backend.load_detector()?);
        let camera = CameraGuard(self.backend.open_camera()?);
        log::info!("[tracking] enabled");
        self.active = Some(ActiveTracking {
            camera,
            detector,
            last_frame_ms: None,
        });
        Ok(())
    }

    pub fn disable(&mut self) {
        if self.active.take().is_some() {
            log::info!("[tracking] disabled");
        }
    }

    /// Interpret the newest camera frame.
    ///
    /// Returns `None` when tracking is off, no frame has arrived, the newest
    /// frame was already processed, or detection failed.
    pub fn poll(&mut self) -> Option<TrackingSignal> {
        let active = self.active.as_mut()?;
        let frame = active.camera.0.latest_frame()?;
        if active.last_frame_ms == Some(frame.timestamp_ms) {
            return None;
        }
        active.last_frame_ms = Some(frame.timestamp_ms);
        match active.detector.0.detect(&frame) {
            Ok(hands) => Some(interpret(&hands)),
            Err(e) => {
                log::warn!("[tracking] frame at {:.1}ms skipped: {}", frame.timestamp_ms, e);
                None
            }
        }
    }
}

pub struct GesturePipeline<B> {
    session: TrackingSession<B>,
    smoother: SignalSmoother,
}

impl<B: TrackingBackend> GesturePipeline<B> {
    pub fn new(backend: B, smoother: SignalSmoother) -> Self {
        Self {
            session: TrackingSession::new(backend),
            smoother,
        }
    }

    pub fn session(&self) -> &TrackingSession<B> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TrackingSession<B> {
        &mut self.session
    }

    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    /// Turn tracking on or off and return whether it ended up on.
    ///
    /// Initialization failures are logged and leave tracking off; either way
    /// the smoothed signal falls back to neutral whenever tracking is off.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if enabled {
            if let Err(e) = self.session.enable() {
                log::error!("[tracking] unavailable, continuing without gestures: {}", e);
                self.smoother.reset();
                return false;
            }
            true
        } else {
            self.session.disable();
            self.smoother.reset();
            false
        }
    }

    pub fn toggle(&mut self) -> bool {
        let want = !self.is_enabled();
        self.set_enabled(want)
    }

    /// Once per rendered frame: fold in a fresh sample if one arrived,
    /// otherwise keep the previous smoothed signal.
    pub fn tick(&mut self) -> TrackingSignal {
        match self.session.poll() {
            Some(raw) => self.smoother.push(raw),
            None => self.smoother.current(),
        }
    }

    pub fn signal(&self) -> TrackingSignal {
        self.smoother.current()
    }
}
