use anyhow::{Context, Result, anyhow};
use macroquad::audio::{Sound, load_sound};
use macroquad::models::{Mesh, Vertex};
use macroquad::prelude::*;
use skylander_assets::{
    Heightmap, MAX_BATCH_INDICES, MAX_BATCH_VERTICES, MeshBatch, MeshData, parse_obj,
    runway_mesh, saturate_rgba, terrain_mesh,
};
use skylander_core::SceneryConfig;

pub const HEIGHTMAP_PATH: &str = "Great Lakes/Height-Map.png";
pub const TERRAIN_DIFFUSE_PATH: &str = "Great Lakes/Diffuse-Map.png";
pub const PLANE_MODEL_PATH: &str = "Assets/plane.obj";
pub const PLANE_TEXTURE_PATH: &str = "Assets/An2_aeroflot.png";
pub const RUNWAY_TEXTURE_PATH: &str = "Assets/runway_texture.png";
pub const ENGINE_SOUND_PATH: &str = "Assets/airplane-sound.ogg";

/// Everything drawn or played by the frontend. Only the heightmap is
/// required; every other asset falls back to something plainer.
pub struct GameAssets {
    pub terrain: Vec<Mesh>,
    pub runway: Vec<Mesh>,
    pub plane_model: Vec<MeshBatch>,
    pub plane_texture: Option<Texture2D>,
    pub engine: Option<Sound>,
}

impl GameAssets {
    pub async fn load(scenery: &SceneryConfig) -> Result<Self> {
        let heightmap = load_heightmap(HEIGHTMAP_PATH).await?;
        let terrain_texture = optional(
            TERRAIN_DIFFUSE_PATH,
            load_saturated_texture(TERRAIN_DIFFUSE_PATH, scenery.terrain_saturation).await,
        );
        let runway_texture = optional(
            RUNWAY_TEXTURE_PATH,
            load_texture_file(RUNWAY_TEXTURE_PATH).await,
        );
        let plane_texture = optional(
            PLANE_TEXTURE_PATH,
            load_texture_file(PLANE_TEXTURE_PATH).await,
        );
        let plane_model = optional(PLANE_MODEL_PATH, load_plane_model(PLANE_MODEL_PATH).await)
            .unwrap_or_else(placeholder_plane);
        let engine = optional(ENGINE_SOUND_PATH, load_engine_sound(ENGINE_SOUND_PATH).await);

        let terrain = upload(&terrain_mesh(&heightmap, scenery), terrain_texture);
        let runway = upload(&runway_mesh(scenery), runway_texture);
        log::info!(
            "assets ready: {} terrain batches, plane model with {} triangles",
            terrain.len(),
            plane_model.triangle_count()
        );

        Ok(Self {
            terrain,
            runway,
            plane_model: plane_model.batches(MAX_BATCH_VERTICES, MAX_BATCH_INDICES),
            plane_texture,
            engine,
        })
    }
}

fn optional<T>(path: &str, loaded: Result<T>) -> Option<T> {
    match loaded {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("continuing without {path}: {err:#}");
            None
        }
    }
}

async fn load_heightmap(path: &str) -> Result<Heightmap> {
    let image = load_image(path)
        .await
        .map_err(|err| anyhow!("{err}"))
        .with_context(|| format!("loading heightmap {path}"))?;
    let full = Heightmap::from_rgba(image.width as usize, image.height as usize, &image.bytes)
        .with_context(|| format!("decoding heightmap {path}"))?;
    let map = full.halved().context("halving heightmap")?;
    log::info!(
        "heightmap {}x{} halved to {}x{}",
        full.width(),
        full.depth(),
        map.width(),
        map.depth()
    );
    Ok(map)
}

async fn load_texture_file(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|err| anyhow!("{err}"))
        .with_context(|| format!("loading texture {path}"))?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

async fn load_saturated_texture(path: &str, saturation: f32) -> Result<Texture2D> {
    let mut image = load_image(path)
        .await
        .map_err(|err| anyhow!("{err}"))
        .with_context(|| format!("loading texture {path}"))?;
    saturate_rgba(&mut image.bytes, saturation);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

async fn load_plane_model(path: &str) -> Result<MeshData> {
    let source = load_string(path)
        .await
        .map_err(|err| anyhow!("{err}"))
        .with_context(|| format!("reading model {path}"))?;
    parse_obj(&source).with_context(|| format!("parsing model {path}"))
}

async fn load_engine_sound(path: &str) -> Result<Sound> {
    load_sound(path)
        .await
        .map_err(|err| anyhow!("{err}"))
        .with_context(|| format!("loading sound {path}"))
}

/// Crossed wing and fuselage quads, sized like the real model in its own
/// units.
fn placeholder_plane() -> MeshData {
    let mut model = MeshData::plane_quad(300.0, 1800.0);
    model.append(&MeshData::plane_quad(1400.0, 200.0));
    model
}

fn upload(mesh: &MeshData, texture: Option<Texture2D>) -> Vec<Mesh> {
    mesh.batches(MAX_BATCH_VERTICES, MAX_BATCH_INDICES)
        .iter()
        .map(|batch| to_mesh(batch, texture.clone(), |p| p))
        .collect()
}

/// Builds a macroquad mesh from a batch, passing every position through
/// `place` first.
pub fn to_mesh(
    batch: &MeshBatch,
    texture: Option<Texture2D>,
    place: impl Fn(glam::Vec3) -> glam::Vec3,
) -> Mesh {
    let vertices = batch
        .positions
        .iter()
        .zip(&batch.uvs)
        .map(|(&position, uv)| {
            let p = place(position);
            Vertex::new(p.x, p.y, p.z, uv.x, uv.y, WHITE)
        })
        .collect();

    Mesh {
        vertices,
        indices: batch.indices.clone(),
        texture,
    }
}
