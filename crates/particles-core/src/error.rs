use thiserror::Error;

/// Failures at the camera / vision-detector boundary.
///
/// None of these are fatal for the render loop: the gesture pipeline logs
/// them and falls back to the neutral, not-tracking signal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackingError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("hand detector failed to initialize: {0}")]
    DetectorInit(String),
    #[error("hand detection failed: {0}")]
    Detection(String),
}

/// Startup configuration problems.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("invalid hex color `{0}` (expected #rrggbb)")]
    InvalidColor(String),
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
}
