//! Wavefront OBJ loading into [`MeshData`]. Materials are ignored; the
//! frontend supplies the texture.

use crate::AssetError;
use crate::mesh::MeshData;
use glam::{Vec2, Vec3};

/// Parses OBJ text. All objects are merged into one mesh. Texture `v` is
/// flipped so that 0 is the top row of the image.
pub fn parse_obj(source: &str) -> Result<MeshData, AssetError> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj_buf(&mut source.as_bytes(), &options, |_| {
        Ok((Vec::new(), Default::default()))
    })?;

    let mut mesh = MeshData::default();
    for model in models {
        let part = model.mesh;
        let start = mesh.positions.len() as u32;
        let count = part.positions.len() / 3;

        mesh.positions.extend(
            part.positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        );
        mesh.uvs.extend((0..count).map(|i| match part.texcoords.get(i * 2..i * 2 + 2) {
            Some(uv) => Vec2::new(uv[0], 1.0 - uv[1]),
            None => Vec2::ZERO,
        }));

        if part.indices.is_empty() {
            mesh.indices.extend(start..start + count as u32);
        } else {
            mesh.indices.extend(part.indices.iter().map(|&i| start + i));
        }
    }

    if mesh.is_empty() {
        return Err(AssetError::EmptyModel);
    }
    log::debug!(
        "parsed obj: {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
