use glam::{Vec2, Vec3};
use std::collections::HashMap;

/// Indexed triangle mesh with one uv per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Slice of a mesh small enough for one draw call, with local u16 indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBatch {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn translate(&mut self, offset: Vec3) {
        for position in &mut self.positions {
            *position += offset;
        }
    }

    /// Appends another mesh, offsetting its indices past the current vertices.
    pub fn append(&mut self, other: &MeshData) {
        let start = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|&i| start + i));
    }

    /// Flat rectangle in the xz plane centred on the origin, facing +y.
    pub fn plane_quad(width: f32, length: f32) -> Self {
        let (hw, hl) = (width * 0.5, length * 0.5);
        Self {
            positions: vec![
                Vec3::new(-hw, 0.0, -hl),
                Vec3::new(hw, 0.0, -hl),
                Vec3::new(hw, 0.0, hl),
                Vec3::new(-hw, 0.0, hl),
            ],
            uvs: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            indices: vec![0, 2, 1, 0, 3, 2],
        }
    }

    /// Splits the mesh into batches that each stay within the given vertex
    /// and index budget. Triangles are never split; vertices shared across a
    /// batch boundary are duplicated.
    pub fn batches(&self, max_vertices: usize, max_indices: usize) -> Vec<MeshBatch> {
        let max_vertices = max_vertices.clamp(3, u16::MAX as usize + 1);
        let max_indices = max_indices.max(3);

        let mut batches = Vec::new();
        let mut current = MeshBatch::default();
        let mut local: HashMap<u32, u16> = HashMap::new();

        for triangle in self.indices.chunks_exact(3) {
            let new_vertices = triangle
                .iter()
                .filter(|&index| !local.contains_key(index))
                .count();
            let overflow = current.positions.len() + new_vertices > max_vertices
                || current.indices.len() + 3 > max_indices;
            if overflow && !current.indices.is_empty() {
                batches.push(std::mem::take(&mut current));
                local.clear();
            }

            for &index in triangle {
                let slot = *local.entry(index).or_insert_with(|| {
                    current.positions.push(self.positions[index as usize]);
                    current
                        .uvs
                        .push(self.uvs.get(index as usize).copied().unwrap_or(Vec2::ZERO));
                    (current.positions.len() - 1) as u16
                });
                current.indices.push(slot);
            }
        }

        if !current.indices.is_empty() {
            batches.push(current);
        }
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(quads: u32) -> MeshData {
        let mut mesh = MeshData::default();
        for i in 0..=quads {
            mesh.positions.push(Vec3::new(i as f32, 0.0, 0.0));
            mesh.positions.push(Vec3::new(i as f32, 0.0, 1.0));
            mesh.uvs.push(Vec2::new(i as f32, 0.0));
            mesh.uvs.push(Vec2::new(i as f32, 1.0));
        }
        for i in 0..quads {
            let a = i * 2;
            mesh.indices
                .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
        }
        mesh
    }

    fn resolved(batch: &MeshBatch) -> Vec<Vec3> {
        batch
            .indices
            .iter()
            .map(|&i| batch.positions[i as usize])
            .collect()
    }

    #[test]
    fn small_mesh_stays_in_one_batch() {
        let mesh = strip(4);
        let batches = mesh.batches(10_000, 5_000);

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].positions.len(), mesh.positions.len());
        assert_eq!(batches[0].indices.len(), mesh.indices.len());
    }

    #[test]
    fn batches_respect_budgets_and_keep_every_triangle() {
        let mesh = strip(100);
        let batches = mesh.batches(16, 30);

        assert!(batches.len() > 1);
        for batch in &batches {
            assert!(batch.positions.len() <= 16);
            assert!(batch.indices.len() <= 30);
            assert_eq!(batch.positions.len(), batch.uvs.len());
        }

        let original: Vec<Vec3> = mesh
            .indices
            .iter()
            .map(|&i| mesh.positions[i as usize])
            .collect();
        let rebuilt: Vec<Vec3> = batches.iter().flat_map(resolved).collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn quad_is_centred_and_flat() {
        let quad = MeshData::plane_quad(6.0, 24.0);

        assert_eq!(quad.triangle_count(), 2);
        assert!(quad.positions.iter().all(|p| p.y == 0.0));
        let sum: Vec3 = quad.positions.iter().copied().sum();
        assert_eq!(sum, Vec3::ZERO);
        assert_eq!(quad.positions[2], Vec3::new(3.0, 0.0, 12.0));
    }

    #[test]
    fn append_offsets_indices() {
        let mut mesh = MeshData::plane_quad(1.0, 1.0);
        mesh.append(&MeshData::plane_quad(2.0, 2.0));

        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.indices[6..], &[4, 6, 5, 4, 7, 6]);
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut quad = MeshData::plane_quad(2.0, 2.0);
        quad.translate(Vec3::new(95.0, 27.458, 15.0));

        assert_eq!(quad.positions[0], Vec3::new(94.0, 27.458, 14.0));
    }
}
