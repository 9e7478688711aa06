use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::CameraError;

/// Closest the eye may get to the target, in world units
pub const MIN_DISTANCE: f32 = 1e-3;
/// Farthest zoom-out, in world units
pub const MAX_DISTANCE: f32 = 1e4;
/// Elevation limit (radians) keeping the eye off the poles of the orbit sphere
pub const MAX_ELEVATION: f32 = FRAC_PI_2 - 0.01;

const PARALLEL_EPSILON: f32 = 1e-4;

/// Eye/target/up triple describing the view basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl LookAt {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Check that the triple spans a usable view basis
    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.eye.is_finite() && self.target.is_finite() && self.up.is_finite()) {
            return Err(CameraError::NonFinite);
        }

        let forward = self.target - self.eye;
        if forward.length() < MIN_DISTANCE {
            return Err(CameraError::EyeAtTarget);
        }

        let up = self.up.try_normalize().ok_or(CameraError::DegenerateBasis)?;
        if forward.normalize().cross(up).length() < PARALLEL_EPSILON {
            return Err(CameraError::DegenerateBasis);
        }

        Ok(())
    }
}

/// Perspective frustum; `fov` is the vertical field of view in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
        }
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        let invalid = |reason| Err(CameraError::InvalidFrustum { reason });

        if ![self.fov, self.aspect, self.near, self.far]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(CameraError::NonFinite);
        }
        if self.near <= 0.0 {
            return invalid("near plane must be positive");
        }
        if self.far <= self.near {
            return invalid("far plane must lie beyond the near plane");
        }
        if self.aspect <= 0.0 {
            return invalid("aspect ratio must be positive");
        }
        if self.fov <= 0.0 || self.fov >= PI {
            return invalid("field of view must lie in (0, pi)");
        }

        Ok(())
    }
}

/// Perspective camera orbiting a fixed target.
///
/// View and projection are recomputed on every call so they always reflect the
/// latest eye position. Matrices are right-handed, column-major, with a `[0, 1]`
/// clip depth range as wgpu expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    frustum: Frustum,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            frustum: Frustum::new(45f32.to_radians(), 1.0, 0.1, 100.0),
        }
    }
}

impl Camera {
    /// Build a camera from a validated view basis and frustum
    pub fn new(look_at: LookAt, frustum: Frustum) -> Result<Self, CameraError> {
        let mut camera = Self::default();
        camera.look_at(look_at.eye, look_at.target, look_at.up)?;
        camera.perspective(frustum.fov, frustum.aspect, frustum.near, frustum.far)?;
        Ok(camera)
    }

    /// Set the view basis. On error the camera is left untouched.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<(), CameraError> {
        LookAt::new(eye, target, up).validate()?;
        self.eye = eye;
        self.target = target;
        self.up = up;
        Ok(())
    }

    /// Set the projection frustum. On error the camera is left untouched.
    pub fn perspective(
        &mut self,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), CameraError> {
        let frustum = Frustum::new(fov, aspect, near, far);
        frustum.validate()?;
        self.frustum = frustum;
        Ok(())
    }

    /// Update only the aspect ratio, e.g. after a framebuffer resize
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), CameraError> {
        let Frustum { fov, near, far, .. } = self.frustum;
        self.perspective(fov, aspect, near, far)
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn frustum(&self) -> Frustum {
        self.frustum
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        let Frustum {
            fov,
            aspect,
            near,
            far,
        } = self.frustum;
        Mat4::perspective_rh(fov, aspect, near, far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Angle of the eye around `up`, measured in a horizontal frame derived from `up`
    pub fn azimuth(&self) -> f32 {
        let up = self.up.normalize();
        let x_axis = up.any_orthonormal_vector();
        let y_axis = up.cross(x_axis);
        let offset = self.eye - self.target;
        offset.dot(y_axis).atan2(offset.dot(x_axis))
    }

    /// Angle of the eye above the plane perpendicular to `up`
    pub fn elevation(&self) -> f32 {
        let up = self.up.normalize();
        let offset = self.eye - self.target;
        let vertical = offset.dot(up);
        let horizontal = (offset - up * vertical).length();
        vertical.atan2(horizontal)
    }

    /// Move the eye along the eye-target line. Positive `delta` moves closer:
    /// the distance is scaled by `1 - delta` and kept within
    /// [`MIN_DISTANCE`]..=[`MAX_DISTANCE`]. A camera placed farther out by
    /// `look_at` may zoom in but not further out.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }

        let offset = self.eye - self.target;
        let distance = offset.length();
        let new_distance =
            (distance * (1.0 - delta)).clamp(MIN_DISTANCE, MAX_DISTANCE.max(distance));
        if !new_distance.is_finite() {
            return;
        }

        self.eye = self.target + offset * (new_distance / distance);
        log::trace!("zoom {delta}: distance {distance} -> {new_distance}");
    }

    /// Rotate the eye around the target, keeping radius, target and `up` fixed.
    ///
    /// Positive azimuth turns counter-clockwise about `up`; positive elevation
    /// lifts the eye toward `up`. Elevation stops at [`MAX_ELEVATION`], or at the
    /// current elevation if the camera was placed beyond it.
    pub fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        if !delta_azimuth.is_finite() || !delta_elevation.is_finite() {
            return;
        }

        let up = self.up.normalize();
        let offset = self.eye - self.target;
        let radius = offset.length();
        let vertical = offset.dot(up);
        let horizontal = offset - up * vertical;
        let Some(heading) = horizontal.try_normalize() else {
            return;
        };

        let elevation = vertical.atan2(horizontal.length());
        let lo = (-MAX_ELEVATION).min(elevation);
        let hi = MAX_ELEVATION.max(elevation);
        let elevation = (elevation + delta_elevation).clamp(lo, hi);
        let heading = (Quat::from_axis_angle(up, delta_azimuth) * heading).normalize();

        self.eye = self.target + (heading * elevation.cos() + up * elevation.sin()) * radius;
        log::trace!("orbit ({delta_azimuth}, {delta_elevation}): eye {}", self.eye);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn pyramid_camera() -> Camera {
        Camera::new(
            LookAt::new(Vec3::new(2.0, 1.0, 2.0), Vec3::ZERO, Vec3::Z),
            Frustum::new(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn test_default_camera_is_valid() {
        let camera = Camera::default();
        assert!(LookAt::new(camera.eye(), camera.target(), camera.up())
            .validate()
            .is_ok());
        assert!(camera.frustum().validate().is_ok());
    }

    #[test]
    fn test_look_at_rejects_parallel_up() {
        let mut camera = Camera::default();
        let before = camera.clone();

        let result = camera.look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Z);
        assert_eq!(result, Err(CameraError::DegenerateBasis));
        assert_eq!(camera, before, "failed look_at must not mutate");

        // Nearly parallel: the cross product is tiny but not zero
        let result = camera.look_at(Vec3::new(1e-5, 0.0, 3.0), Vec3::ZERO, Vec3::Z);
        assert_eq!(result, Err(CameraError::DegenerateBasis));
        assert_eq!(camera, before);
    }

    #[test]
    fn test_look_at_rejects_zero_up() {
        let mut camera = Camera::default();
        let result = camera.look_at(Vec3::ONE, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(result, Err(CameraError::DegenerateBasis));
    }

    #[test]
    fn test_look_at_rejects_coincident_eye() {
        let mut camera = Camera::default();
        let result = camera.look_at(Vec3::ONE, Vec3::ONE, Vec3::Z);
        assert_eq!(result, Err(CameraError::EyeAtTarget));
    }

    #[test]
    fn test_look_at_rejects_nan() {
        let mut camera = Camera::default();
        let result = camera.look_at(Vec3::new(f32::NAN, 0.0, 1.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(result, Err(CameraError::NonFinite));
    }

    #[test]
    fn test_perspective_rejects_bad_frustums() {
        let mut camera = Camera::default();
        let fov = 45f32.to_radians();

        assert!(camera.perspective(fov, 1.0, 0.0, 10.0).is_err());
        assert!(camera.perspective(fov, 1.0, 5.0, 5.0).is_err());
        assert!(camera.perspective(fov, 0.0, 0.1, 10.0).is_err());
        assert!(camera.perspective(0.0, 1.0, 0.1, 10.0).is_err());
        assert!(camera.perspective(PI, 1.0, 0.1, 10.0).is_err());
        assert_eq!(
            camera.perspective(fov, f32::INFINITY, 0.1, 10.0),
            Err(CameraError::NonFinite)
        );
        assert_eq!(camera.frustum(), Camera::default().frustum());
    }

    #[test]
    fn test_set_aspect_keeps_other_parameters() {
        let mut camera = pyramid_camera();
        camera.set_aspect(2.0).unwrap();

        let frustum = camera.frustum();
        assert_eq!(frustum.aspect, 2.0);
        assert_eq!(frustum.near, 0.1);
        assert_eq!(frustum.far, 100.0);
        assert!(camera.set_aspect(0.0).is_err());
        assert_eq!(camera.frustum().aspect, 2.0);
    }

    #[test]
    fn test_zoom_half_distance() {
        let mut camera = pyramid_camera();
        let before = camera.distance();

        camera.zoom(0.5);
        assert!((camera.distance() - before * 0.5).abs() < EPS);
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn test_zoom_out_moves_away() {
        let mut camera = pyramid_camera();
        let before = camera.distance();

        camera.zoom(-1.0);
        assert!((camera.distance() - before * 2.0).abs() < EPS);
    }

    #[test]
    fn test_zoom_ignores_non_finite() {
        let mut camera = pyramid_camera();
        let before = camera.clone();

        camera.zoom(f32::NAN);
        camera.zoom(f32::INFINITY);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_orbit_preserves_radius() {
        let mut camera = pyramid_camera();
        let radius = camera.distance();

        camera.orbit(0.7, -0.3);
        assert!((camera.distance() - radius).abs() < EPS);
    }

    #[test]
    fn test_orbit_azimuth_increases_counter_clockwise() {
        let mut camera = pyramid_camera();
        let before = camera.azimuth();

        camera.orbit(0.1, 0.0);
        assert!((camera.azimuth() - before - 0.1).abs() < EPS);
    }

    #[test]
    fn test_elevation_of_pyramid_eye() {
        let camera = pyramid_camera();
        let expected = 2.0f32.atan2(5.0f32.sqrt());
        assert!((camera.elevation() - expected).abs() < EPS);
    }

    #[test]
    fn test_orbit_ignores_non_finite() {
        let mut camera = pyramid_camera();
        let before = camera.clone();

        camera.orbit(f32::NAN, 0.0);
        camera.orbit(0.0, f32::NEG_INFINITY);
        assert_eq!(camera, before);
    }
}
