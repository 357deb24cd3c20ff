use macroquad::prelude::*;
use macroquad::ui::{root_ui, widgets};
use skylander_core::{Plane, Roster, plane_letter};

pub const TITLE: &str = "Airplane Simulation";
const LANDED_TEXT: &str = "LANDED!";
const LANDED_PROMPT: &str = "Press Y to Play Again or N to Exit";
const AUTOPILOT_TEXT: &str = "AUTOPILOT ON";

const MENU_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);
const ADD_BUTTON: Rect = Rect {
    x: 20.0,
    y: 20.0,
    w: 140.0,
    h: 40.0,
};
const ROW_GAP: f32 = 10.0;
const REMOVE_WIDTH: f32 = 40.0;
const REMOVE_GAP: f32 = 5.0;

/// Button presses collected while drawing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Exit,
    AddPlane,
    SelectPlane(usize),
    RemovePlane(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub title_top: f32,
    pub start: Rect,
    pub exit: Rect,
}

pub fn menu_layout(screen: Vec2) -> MenuLayout {
    let left = screen.x / 2.0 - MENU_BUTTON_SIZE.x / 2.0;
    MenuLayout {
        title_top: screen.y / 2.0 - 120.0,
        start: Rect::new(
            left,
            screen.y / 2.0 - 40.0,
            MENU_BUTTON_SIZE.x,
            MENU_BUTTON_SIZE.y,
        ),
        exit: Rect::new(
            left,
            screen.y / 2.0 + 20.0,
            MENU_BUTTON_SIZE.x,
            MENU_BUTTON_SIZE.y,
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterRow {
    pub select: Rect,
    pub remove: Rect,
}

pub fn add_button() -> Rect {
    ADD_BUTTON
}

/// Select and remove buttons for roster slot `index`, stacked under Add Plane.
pub fn roster_row(index: usize) -> RosterRow {
    let step = ADD_BUTTON.h + ROW_GAP;
    let select = Rect::new(
        ADD_BUTTON.x,
        ADD_BUTTON.y + step * (index + 1) as f32,
        ADD_BUTTON.w - (REMOVE_WIDTH + REMOVE_GAP),
        ADD_BUTTON.h,
    );
    let remove = Rect::new(
        select.x + select.w + REMOVE_GAP,
        select.y,
        REMOVE_WIDTH,
        select.h,
    );
    RosterRow { select, remove }
}

pub fn plane_label(index: usize, active: bool) -> String {
    if active {
        format!("[Plane {}]", plane_letter(index))
    } else {
        format!("Plane {}", plane_letter(index))
    }
}

pub fn coordinates_text(plane: &Plane) -> String {
    format!(
        "X: {:.1}, Y: {:.1}, Z: {:.1}",
        plane.position.x, plane.position.y, plane.position.z
    )
}

fn button(label: &str, rect: Rect) -> bool {
    widgets::Button::new(label)
        .position(rect.point())
        .size(rect.size())
        .ui(&mut root_ui())
}

/// Text positioned by its top-left corner instead of the baseline.
fn draw_text_top(text: &str, x: f32, top: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(text, x, top + dims.offset_y, font_size as f32, color);
}

fn draw_centered(text: &str, top: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text_top(text, screen_width() / 2.0 - dims.width / 2.0, top, font_size, color);
}

pub fn draw_menu() -> Vec<UiAction> {
    let layout = menu_layout(vec2(screen_width(), screen_height()));
    draw_centered(TITLE, layout.title_top, 40, DARKBLUE);

    let mut actions = Vec::new();
    if button("Start", layout.start) {
        actions.push(UiAction::Start);
    }
    if button("Exit", layout.exit) {
        actions.push(UiAction::Exit);
    }
    actions
}

pub fn draw_flight_hud(roster: &Roster) {
    draw_text_top(&format!("{} FPS", get_fps()), 960.0, 10.0, 20, LIME);

    let Some(plane) = roster.active() else {
        return;
    };

    let coords = coordinates_text(plane);
    let dims = measure_text(&coords, None, 20, 1.0);
    draw_text_top(&coords, screen_width() - dims.width - 10.0, 10.0, 20, WHITE);

    if plane.autopilot {
        draw_centered(AUTOPILOT_TEXT, 40.0, 30, LIME);
    }
}

pub fn draw_roster_panel(roster: &Roster) -> Vec<UiAction> {
    let mut actions = Vec::new();
    if button("Add Plane", add_button()) {
        actions.push(UiAction::AddPlane);
    }

    for index in 0..roster.len() {
        let row = roster_row(index);
        let label = plane_label(index, index == roster.active_index());
        if button(&label, row.select) {
            actions.push(UiAction::SelectPlane(index));
        }
        if button("X", row.remove) {
            actions.push(UiAction::RemovePlane(index));
        }
    }
    actions
}

pub fn draw_landed_overlay() {
    let (w, h) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, w, h, Color::new(0.0, 0.0, 0.0, 0.5));
    draw_centered(LANDED_TEXT, h / 2.0 - 50.0, 40, WHITE);
    draw_centered(LANDED_PROMPT, h / 2.0 + 10.0, 20, WHITE);
}
