use crate::constants::SIGNAL_SMOOTHING_ALPHA;
use crate::gesture::TrackingSignal;

/// Exponential moving average over the raw [`TrackingSignal`] stream.
///
/// `alpha` is the weight of the newest sample. The tracking flag is not
/// averaged; it always follows the newest sample. Because every stored value
/// is a convex blend of clamped samples, the smoothed factors stay within
/// their domains.
#[derive(Clone, Debug)]
pub struct SignalSmoother {
    alpha: f32,
    current: TrackingSignal,
}

impl SignalSmoother {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: if alpha.is_nan() {
                SIGNAL_SMOOTHING_ALPHA
            } else {
                alpha.clamp(0.0, 1.0)
            },
            current: TrackingSignal::IDLE,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn current(&self) -> TrackingSignal {
        self.current
    }

    /// Fold one raw sample in and return the new smoothed value.
    pub fn push(&mut self, raw: TrackingSignal) -> TrackingSignal {
        let raw = raw.sanitized();
        let a = self.alpha;
        let prev = self.current;
        self.current = TrackingSignal {
            is_tracking: raw.is_tracking,
            scale_factor: prev.scale_factor * (1.0 - a) + raw.scale_factor * a,
            spread_factor: prev.spread_factor * (1.0 - a) + raw.spread_factor * a,
            rotation: prev.rotation * (1.0 - a) + raw.rotation * a,
        }
        .sanitized();
        self.current
    }

    /// Drop all history and return to the neutral signal.
    pub fn reset(&mut self) {
        self.current = TrackingSignal::IDLE;
    }
}

impl Default for SignalSmoother {
    fn default() -> Self {
        Self::new(SIGNAL_SMOOTHING_ALPHA)
    }
}
