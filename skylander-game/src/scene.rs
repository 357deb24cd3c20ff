use macroquad::models::draw_mesh;
use macroquad::prelude::*;
use skylander_core::{CameraView, Plane, Session};

use crate::assets::{GameAssets, to_mesh};

const MENU_BACKGROUND: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

fn to_mq(v: glam::Vec3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

pub fn camera_3d(view: &CameraView) -> Camera3D {
    Camera3D {
        position: to_mq(view.position),
        target: to_mq(view.target),
        up: to_mq(view.up),
        fovy: view.fovy_degrees.to_radians(),
        ..Default::default()
    }
}

pub fn draw_menu_background() {
    clear_background(MENU_BACKGROUND);
}

/// Terrain, runway, planes and the landing marker, seen from the session
/// camera. Leaves the default 2D camera active for the HUD.
pub fn draw_world(session: &Session, assets: &GameAssets) {
    let scenery = &session.config().scenery;

    clear_background(SKYBLUE);
    set_camera(&camera_3d(session.camera()));

    for mesh in &assets.terrain {
        draw_mesh(mesh);
    }
    draw_grid(scenery.grid_slices, scenery.grid_spacing, GRAY, LIGHTGRAY);
    for mesh in &assets.runway {
        draw_mesh(mesh);
    }
    for plane in session.roster().planes() {
        draw_plane(plane, assets);
    }
    draw_sphere(
        to_mq(session.landing_spot()),
        scenery.landing_marker_radius,
        None,
        RED,
    );

    set_default_camera();
}

fn draw_plane(plane: &Plane, assets: &GameAssets) {
    let tint = if assets.plane_texture.is_some() {
        None
    } else {
        Some(DARKGRAY)
    };
    for batch in &assets.plane_model {
        let mut mesh = to_mesh(batch, assets.plane_texture.clone(), |p| {
            plane.transform.transform_point3(p)
        });
        if let Some(color) = tint {
            for vertex in &mut mesh.vertices {
                vertex.color = color.into();
            }
        }
        draw_mesh(&mesh);
    }
}
