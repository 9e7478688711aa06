use glam::{Vec2, Vec3};
use orbit_viewer::camera::Camera;
use orbit_viewer::core::controller::{CameraController, ControllerSettings, DragState};
use std::f32::consts::{PI, TAU};

fn camera() -> Camera {
    let mut camera = Camera::default();
    camera
        .look_at(Vec3::new(2.0, 1.0, 2.0), Vec3::ZERO, Vec3::Z)
        .unwrap();
    camera
}

/// Signed azimuth change wrapped into (-pi, pi]
fn azimuth_delta(before: f32, after: f32) -> f32 {
    let d = (after - before).rem_euclid(TAU);
    if d > PI {
        d - TAU
    } else {
        d
    }
}

#[cfg(test)]
mod controller_tests {
    use super::*;

    #[test]
    fn test_drag_right_moves_azimuth_monotonically() {
        let mut controller = CameraController::default();
        let mut cam = camera();

        controller.lmb_pressed(Vec2::new(0.0, 0.0));
        let mut last = cam.azimuth();
        for x in 1..=10 {
            controller.mouse_moved(&mut cam, Vec2::new(x as f32, 0.0));
            let now = cam.azimuth();
            assert!(azimuth_delta(last, now) < 0.0, "step {x} should decrease azimuth");
            last = now;
        }
        controller.lmb_released(Vec2::new(10.0, 0.0));

        assert!(!controller.is_dragging());
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn test_single_drag_step_uses_sensitivity() {
        let settings = ControllerSettings {
            orbit_sensitivity: 0.02,
            zoom_scale: 0.05,
        };
        let mut controller = CameraController::new(settings);
        let mut cam = camera();
        let before = cam.azimuth();
        let elevation = cam.elevation();

        controller.lmb_pressed(Vec2::ZERO);
        controller.mouse_moved(&mut cam, Vec2::new(10.0, 0.0));
        controller.lmb_released(Vec2::new(10.0, 0.0));

        assert!((azimuth_delta(before, cam.azimuth()) + 0.2).abs() < 1e-4);
        assert!((cam.elevation() - elevation).abs() < 1e-4);
    }

    #[test]
    fn test_idle_moves_never_mutate_camera() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let before = cam.clone();

        for i in 0..20 {
            let p = Vec2::new(i as f32 * 13.0, i as f32 * -7.0);
            controller.mouse_moved(&mut cam, p);
        }

        assert_eq!(cam, before);
        assert_eq!(cam.eye().to_array(), before.eye().to_array());
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn test_moves_after_release_ignored() {
        let mut controller = CameraController::default();
        let mut cam = camera();

        controller.lmb_pressed(Vec2::ZERO);
        controller.mouse_moved(&mut cam, Vec2::new(5.0, 5.0));
        controller.lmb_released(Vec2::new(5.0, 5.0));
        let after_drag = cam.clone();

        controller.mouse_moved(&mut cam, Vec2::new(50.0, 50.0));
        assert_eq!(cam, after_drag);
    }

    #[test]
    fn test_scroll_during_drag_keeps_drag() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let before = cam.distance();

        controller.lmb_pressed(Vec2::new(3.0, 4.0));
        controller.scroll(&mut cam, 1.0);

        assert!(cam.distance() < before);
        assert_eq!(controller.last_cursor(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_scroll_matches_original_rate() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let before = cam.distance();

        // One wheel notch zooms by 1/20th
        controller.scroll(&mut cam, 1.0);
        assert!((cam.distance() - before * 0.95).abs() < 1e-4);
    }

    #[test]
    fn test_long_scroll_out_then_drag_stays_finite() {
        let mut controller = CameraController::default();
        let mut cam = camera();

        for _ in 0..3000 {
            controller.scroll(&mut cam, -1.0);
        }
        assert!(cam.view().is_finite());

        controller.lmb_pressed(Vec2::ZERO);
        controller.mouse_moved(&mut cam, Vec2::new(50.0, 20.0));
        assert!(cam.view().is_finite());

        let before = cam.distance();
        controller.scroll(&mut cam, 1.0);
        assert!(cam.distance() < before);
    }

    #[test]
    fn test_focus_lost_ends_drag() {
        let mut controller = CameraController::default();
        let mut cam = camera();

        controller.lmb_pressed(Vec2::ZERO);
        controller.focus_lost();
        let before = cam.clone();
        controller.mouse_moved(&mut cam, Vec2::new(100.0, 0.0));

        assert_eq!(cam, before);
        assert_eq!(controller.last_cursor(), None);
    }
}
