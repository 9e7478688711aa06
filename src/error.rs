use thiserror::Error;

/// Configuration errors reported by [`Camera`](crate::camera::Camera) setters.
///
/// Runtime input (zoom, orbit) is clamped instead and never produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("camera parameters must be finite")]
    NonFinite,

    #[error("eye and target coincide")]
    EyeAtTarget,

    #[error("up vector is zero or parallel to the view direction")]
    DegenerateBasis,

    #[error("invalid perspective frustum: {reason}")]
    InvalidFrustum { reason: &'static str },
}
