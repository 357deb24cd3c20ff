use crate::heightmap::Heightmap;
use crate::mesh::MeshData;
use glam::{Vec2, Vec3};
use skylander_core::SceneryConfig;

/// Grid mesh over the heightmap. The map spans `size.x` by `size.z` and a
/// full-white sample reaches `size.y`. Texture coordinates run 0..1 across
/// the map.
pub fn heightmap_mesh(map: &Heightmap, size: Vec3) -> MeshData {
    let (width, depth) = (map.width(), map.depth());
    let cell = Vec3::new(
        size.x / (width - 1) as f32,
        size.y / 255.0,
        size.z / (depth - 1) as f32,
    );

    let mut mesh = MeshData {
        positions: Vec::with_capacity(width * depth),
        uvs: Vec::with_capacity(width * depth),
        indices: Vec::with_capacity((width - 1) * (depth - 1) * 6),
    };

    for z in 0..depth {
        for x in 0..width {
            mesh.positions.push(Vec3::new(
                x as f32 * cell.x,
                map.sample(x, z) * cell.y,
                z as f32 * cell.z,
            ));
            mesh.uvs.push(Vec2::new(
                x as f32 / (width - 1) as f32,
                z as f32 / (depth - 1) as f32,
            ));
        }
    }

    let at = |x: usize, z: usize| (x + z * width) as u32;
    for z in 0..depth - 1 {
        for x in 0..width - 1 {
            mesh.indices
                .extend_from_slice(&[at(x, z), at(x, z + 1), at(x + 1, z)]);
            mesh.indices
                .extend_from_slice(&[at(x + 1, z), at(x, z + 1), at(x + 1, z + 1)]);
        }
    }

    mesh
}

/// Terrain placed where the scenery config puts it.
pub fn terrain_mesh(map: &Heightmap, scenery: &SceneryConfig) -> MeshData {
    let mut mesh = heightmap_mesh(map, scenery.terrain_size);
    mesh.translate(scenery.terrain_origin);
    mesh
}

/// Runway quad centred on the configured runway position.
pub fn runway_mesh(scenery: &SceneryConfig) -> MeshData {
    let mut mesh = MeshData::plane_quad(scenery.runway_width, scenery.runway_length);
    mesh.translate(scenery.runway_center);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> Heightmap {
        // 3 columns, 2 rows; heights rise along x.
        Heightmap::new(3, 2, vec![0.0, 127.5, 255.0, 0.0, 127.5, 255.0]).unwrap()
    }

    #[test]
    fn grid_has_two_triangles_per_cell() {
        let mesh = heightmap_mesh(&ramp(), Vec3::new(1000.0, 350.0, 1000.0));

        assert_eq!(mesh.positions.len(), 6);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
    }

    #[test]
    fn vertices_scale_with_size() {
        let mesh = heightmap_mesh(&ramp(), Vec3::new(1000.0, 350.0, 1000.0));

        assert_eq!(mesh.positions[0], Vec3::ZERO);
        assert_relative_eq!(mesh.positions[1].x, 500.0);
        assert_relative_eq!(mesh.positions[1].y, 175.0);
        assert_relative_eq!(mesh.positions[2].y, 350.0);
        assert_relative_eq!(mesh.positions[5].z, 1000.0);
        assert_eq!(mesh.uvs[5], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn terrain_is_offset_to_origin() {
        let scenery = SceneryConfig::default();
        let mesh = terrain_mesh(&ramp(), &scenery);

        assert_eq!(mesh.positions[0], scenery.terrain_origin);
    }

    #[test]
    fn runway_sits_on_configured_center() {
        let scenery = SceneryConfig::default();
        let mesh = runway_mesh(&scenery);

        let center: Vec3 = mesh.positions.iter().copied().sum::<Vec3>() / 4.0;
        assert_relative_eq!(center.x, scenery.runway_center.x, epsilon = 1e-4);
        assert_relative_eq!(center.y, scenery.runway_center.y, epsilon = 1e-4);
        assert_relative_eq!(center.z, scenery.runway_center.z, epsilon = 1e-4);
    }

    #[test]
    fn terrain_batches_fit_draw_call_budget() {
        let samples = (0..64 * 64).map(|i| (i % 256) as f32).collect();
        let map = Heightmap::new(64, 64, samples).unwrap();
        let mesh = heightmap_mesh(&map, Vec3::new(1000.0, 350.0, 1000.0));

        let batches = mesh.batches(10_000, 5_000);
        let triangles: usize = batches.iter().map(|b| b.indices.len() / 3).sum();
        assert_eq!(triangles, 63 * 63 * 2);
        assert!(batches.iter().all(|b| b.indices.len() <= 5_000));
    }
}
