use glam::{Mat4, Vec3};

use super::Scene;
use crate::camera::{Frustum, LookAt};
use crate::types::{MixerUniform, Vertex};

/// Green square with a red triangular roof, shifted up-left by the model matrix
pub fn create_house_scene() -> Scene {
    let green = [0.0, 1.0, 0.0];
    let red = [1.0, 0.0, 0.0];

    let vertices = vec![
        Vertex::new([-0.5, -0.5, 0.0], green),
        Vertex::new([0.5, -0.5, 0.0], green),
        Vertex::new([-0.5, 0.0, 0.0], green),
        Vertex::new([0.5, 0.0, 0.0], green),
        Vertex::new([-0.5, 0.0, 0.0], red),
        Vertex::new([0.5, 0.0, 0.0], red),
        Vertex::new([0.0, 0.5, 0.0], red),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        1, 3, 2,
        4, 5, 6,
    ];

    Scene {
        name: "house",
        vertices,
        indices,
        model: Mat4::from_translation(Vec3::new(-1.0, 1.0, 0.0)),
        mixer: MixerUniform::new(0.5, [0.0, 0.0, 1.0]),
        look_at: LookAt::new(Vec3::new(0.0, -2.0, 2.0), Vec3::ZERO, Vec3::Z),
        frustum: Frustum::new(45f32.to_radians(), 1.0, 0.1, 20.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_counts() {
        let scene = create_house_scene();
        assert_eq!(scene.vertices.len(), 7);
        assert_eq!(scene.index_count(), 9);
    }

    #[test]
    fn test_model_translates_origin() {
        let scene = create_house_scene();
        assert_eq!(
            scene.model.transform_point3(Vec3::ZERO),
            Vec3::new(-1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_mixer_pulls_toward_blue() {
        let scene = create_house_scene();
        assert_eq!(scene.mixer.strength, 0.5);
        assert_eq!(scene.mixer.color, [0.0, 0.0, 1.0]);
    }
}
