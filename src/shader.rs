//! GPU-side vertex and uniform layouts plus the WGSL sources.

use bytemuck::{Pod, Zeroable};

pub const PARTICLE_SOURCE: &str = include_str!("particles.wgsl");
pub const LINE_SOURCE: &str = include_str!("lines.wgsl");

/// Shared uniforms for both pipelines. Layout matches the WGSL `Uniforms`
/// struct (vec3 is 16-byte aligned, hence the padding).
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub _pad0: [f32; 2],
    pub color: [f32; 3],
    pub _pad1: f32,
}

/// Per-instance data for the particle quad pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub alpha: f32,
}

/// One endpoint of a connection line.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        // Strides baked into the vertex buffer layouts
        assert_eq!(std::mem::size_of::<Uniforms>(), 32);
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 16);
        assert_eq!(std::mem::size_of::<LineVertex>(), 12);
    }
}
