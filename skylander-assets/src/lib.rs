pub mod color;
pub mod heightmap;
pub mod mesh;
pub mod obj;
pub mod terrain;

pub use color::saturate_rgba;
pub use heightmap::Heightmap;
pub use mesh::{MeshBatch, MeshData};
pub use obj::parse_obj;
pub use terrain::{heightmap_mesh, runway_mesh, terrain_mesh};

/// Largest vertex count macroquad accepts in one draw call.
pub const MAX_BATCH_VERTICES: usize = 10_000;
/// Largest index count macroquad accepts in one draw call.
pub const MAX_BATCH_INDICES: usize = 5_000;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("heightmap must be at least 2x2, got {width}x{depth}")]
    HeightmapTooSmall { width: usize, depth: usize },

    #[error("expected {expected} samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    #[error("failed to parse obj: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("model has no triangles")]
    EmptyModel,
}
