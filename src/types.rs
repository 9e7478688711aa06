use glam::{Mat4, Vec3};

/// Vertex layout: position at location 0, color at location 1
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Color mixer uniform: fragment = mix(vertex color, color, strength)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MixerUniform {
    pub strength: f32,
    pub _pad1: [f32; 3], // color is 16-byte aligned in WGSL
    pub color: [f32; 3],
    pub _pad2: f32,
}

impl MixerUniform {
    pub const fn new(strength: f32, color: [f32; 3]) -> Self {
        Self {
            strength,
            _pad1: [0.0; 3],
            color,
            _pad2: 0.0,
        }
    }

    /// Mixer that leaves vertex colors untouched
    pub const fn disabled() -> Self {
        Self::new(0.0, [0.0; 3])
    }
}

/// Projection * View * Model, column-major
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub pvm: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(pvm: Mat4) -> Self {
        Self {
            pvm: pvm.to_cols_array_2d(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.pvm)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix().project_point3(point)
    }
}

/// What a uniform buffer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferRole {
    Mixer,
    Transform,
}

/// Binding slot of one uniform buffer in bind group 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSlot {
    pub role: BufferRole,
    pub binding: u32,
    pub size: u64,
    pub visibility: wgpu::ShaderStages,
}

pub const UNIFORM_SLOTS: [UniformSlot; 2] = [
    UniformSlot {
        role: BufferRole::Mixer,
        binding: 0,
        size: std::mem::size_of::<MixerUniform>() as u64,
        visibility: wgpu::ShaderStages::FRAGMENT,
    },
    UniformSlot {
        role: BufferRole::Transform,
        binding: 1,
        size: std::mem::size_of::<TransformUniform>() as u64,
        visibility: wgpu::ShaderStages::VERTEX,
    },
];

pub const fn slot(role: BufferRole) -> UniformSlot {
    match role {
        BufferRole::Mixer => UNIFORM_SLOTS[0],
        BufferRole::Transform => UNIFORM_SLOTS[1],
    }
}

const SHADER_TEMPLATE: &str = include_str!("shaders/base.wgsl");

/// WGSL source with binding indices filled in from [`UNIFORM_SLOTS`]
pub fn shader_source() -> String {
    SHADER_TEMPLATE
        .replace(
            "{{MIXER_BINDING}}",
            &slot(BufferRole::Mixer).binding.to_string(),
        )
        .replace(
            "{{TRANSFORM_BINDING}}",
            &slot(BufferRole::Transform).binding.to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<MixerUniform>(), 32);
        assert_eq!(std::mem::size_of::<TransformUniform>(), 64);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_mixer_color_offset() {
        let mixer = MixerUniform::new(0.5, [0.0, 0.0, 1.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&mixer));
        assert_eq!(floats[0], 0.5);
        assert_eq!(floats[4..7], [0.0f32, 0.0, 1.0]);
    }

    #[test]
    fn test_slot_bindings_unique() {
        assert_ne!(UNIFORM_SLOTS[0].binding, UNIFORM_SLOTS[1].binding);
        assert_eq!(slot(BufferRole::Mixer).binding, 0);
        assert_eq!(slot(BufferRole::Transform).binding, 1);
    }

    #[test]
    fn test_shader_source_has_bindings() {
        let source = shader_source();
        assert!(!source.contains("{{"));
        assert!(source.contains("@binding(0) var<uniform> mixer"));
        assert!(source.contains("@binding(1) var<uniform> transform"));
    }

    #[test]
    fn test_transform_uniform_round_trip() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let uniform = TransformUniform::new(m);
        assert_eq!(uniform.matrix(), m);
        assert_eq!(uniform.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }
}
