use glam::{Mat4, Vec3};

use super::Scene;
use crate::camera::{Frustum, LookAt};
use crate::types::{MixerUniform, Vertex};

const GREY: [f32; 3] = [0.5, 0.5, 0.5];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

/// Square pyramid with its apex on +Z, base in the XY plane.
/// Each wall has its own vertices so it can carry a flat colour.
pub fn create_pyramid_scene() -> Scene {
    let apex = [0.0, 0.0, 1.0];

    let vertices = vec![
        // base
        Vertex::new([-0.5, 0.5, 0.0], GREY),
        Vertex::new([-0.5, -0.5, 0.0], GREY),
        Vertex::new([0.5, -0.5, 0.0], GREY),
        Vertex::new([0.5, 0.5, 0.0], GREY),
        // +X wall
        Vertex::new([0.5, -0.5, 0.0], RED),
        Vertex::new(apex, RED),
        Vertex::new([0.5, 0.5, 0.0], RED),
        // -X wall
        Vertex::new([-0.5, -0.5, 0.0], GREEN),
        Vertex::new(apex, GREEN),
        Vertex::new([-0.5, 0.5, 0.0], GREEN),
        // +Y wall
        Vertex::new([0.5, 0.5, 0.0], BLUE),
        Vertex::new(apex, BLUE),
        Vertex::new([-0.5, 0.5, 0.0], BLUE),
        // -Y wall
        Vertex::new([0.5, -0.5, 0.0], YELLOW),
        Vertex::new(apex, YELLOW),
        Vertex::new([-0.5, -0.5, 0.0], YELLOW),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1,
        0, 3, 2,
        4, 6, 5,
        7, 8, 9,
        10, 12, 11,
        13, 14, 15,
    ];

    Scene {
        name: "pyramid",
        vertices,
        indices,
        model: Mat4::IDENTITY,
        mixer: MixerUniform::disabled(),
        look_at: LookAt::new(Vec3::new(2.0, 1.0, 2.0), Vec3::ZERO, Vec3::Z),
        frustum: Frustum::new(45f32.to_radians(), 1.0, 0.1, 100.0),
    }
}
