#![cfg(feature = "baker")]

use std::error::Error;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use skylander_assets::{
    Heightmap, MAX_BATCH_INDICES, MAX_BATCH_VERTICES, saturate_rgba, terrain_mesh,
};
use skylander_core::SceneryConfig;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn save(image: &RgbaImage, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    image.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(workspace_root);
    let scenery = SceneryConfig::default();
    let out = root.join("assets").join("preview");

    let height_path = root.join("Great Lakes").join("Height-Map.png");
    let height_image = image::open(&height_path)
        .map_err(|err| format!("{}: {err}", height_path.display()))?
        .to_rgba8();
    let (width, depth) = height_image.dimensions();
    let heightmap =
        Heightmap::from_rgba(width as usize, depth as usize, height_image.as_raw())?.halved()?;
    log::info!(
        "heightmap {}x{} halved to {}x{}",
        width,
        depth,
        heightmap.width(),
        heightmap.depth()
    );

    let mesh = terrain_mesh(&heightmap, &scenery);
    let batches = mesh.batches(MAX_BATCH_VERTICES, MAX_BATCH_INDICES);
    log::info!(
        "terrain: {} vertices, {} triangles, {} draw batches",
        mesh.positions.len(),
        mesh.triangle_count(),
        batches.len()
    );

    let preview = RgbaImage::from_raw(
        heightmap.width() as u32,
        heightmap.depth() as u32,
        heightmap.to_rgba(),
    )
    .ok_or("heightmap preview buffer has the wrong size")?;
    save(&preview, &out.join("height.png"))?;

    let diffuse_path = root.join("Great Lakes").join("Diffuse-Map.png");
    match image::open(&diffuse_path) {
        Ok(diffuse) => {
            let mut diffuse = diffuse.to_rgba8();
            saturate_rgba(&mut diffuse, scenery.terrain_saturation);
            save(&diffuse, &out.join("diffuse.png"))?;
        }
        Err(err) => log::warn!("skipping diffuse preview, {}: {err}", diffuse_path.display()),
    }

    Ok(())
}
