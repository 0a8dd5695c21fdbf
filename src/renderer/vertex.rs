//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with screen-space position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes of a vertex list, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_TOP: [f32; 4] = [0.04, 0.04, 0.14, 1.0];
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.16, 0.16, 0.42, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const PLATFORM: [f32; 4] = [0.22, 1.0, 0.08, 1.0];
    pub const PLATFORM_STRIPE: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const CHECKPOINT: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const CHECKPOINT_RING: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const CHECKPOINT_CLAIMED: [f32; 4] = [0.67, 0.67, 0.67, 0.5];
    pub const CHECKPOINT_RING_CLAIMED: [f32; 4] = [0.59, 0.59, 0.59, 0.35];
    pub const FRAGMENT: [f32; 4] = [0.45, 0.04, 0.72, 1.0];
    pub const FRAGMENT_CORE: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const PLAYER: [f32; 4] = [0.12, 0.56, 1.0, 1.0];
    pub const VISOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertices = [Vertex::new(1.0, 2.0, [0.0; 4]); 3];
        assert_eq!(Vertex::as_bytes(&vertices).len(), 72);
    }
}
