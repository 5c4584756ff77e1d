// Screen-space presentation. Physics is y-up in metres; the screen is y-down
// in pixels, so everything crossing this module gets scaled and flipped.

use macroquad::prelude::*;

use crate::pendulum::Pendulum;

pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 1000.0;

/// Pixels per world metre.
pub const SCALE: f32 = SCREEN_WIDTH / 4.5;

const ROD_THICKNESS: f32 = 5.0;
const ROD_COLOR: Color = BLACK;
// World metres, like the rod lengths.
const MARKER_RADIUS: f64 = 0.04;

const BACKGROUND: Color = Color::new(0.59, 0.59, 0.59, 1.0);

/// Shared pivot for the whole population, at the middle of the screen.
pub fn world_center() -> DVec2 {
    DVec2::new(
        (SCREEN_WIDTH / (2.0 * SCALE)) as f64,
        (SCREEN_HEIGHT / (2.0 * SCALE)) as f64,
    )
}

pub fn clear() {
    clear_background(BACKGROUND);
}

fn to_screen(world: DVec2) -> Vec2 {
    vec2(
        world.x as f32 * SCALE,
        SCREEN_HEIGHT - world.y as f32 * SCALE,
    )
}

/// Both rods of one instance, pivot to joint to end.
pub fn draw_rods(p: &Pendulum) {
    let pivot = to_screen(p.origin);
    let joint = to_screen(p.origin + p.joint);
    let end = to_screen(p.origin + p.end);

    draw_line(pivot.x, pivot.y, joint.x, joint.y, ROD_THICKNESS, ROD_COLOR);
    draw_line(joint.x, joint.y, end.x, end.y, ROD_THICKNESS, ROD_COLOR);
}

/// The two mass markers of one instance, in its own color.
pub fn draw_markers(p: &Pendulum) {
    let (r, g, b) = p.color;
    let color = Color::from_rgba(r, g, b, 255);
    let radius = MARKER_RADIUS as f32 * SCALE;

    let joint = to_screen(p.origin + p.joint);
    let end = to_screen(p.origin + p.end);

    draw_circle(joint.x, joint.y, radius, color);
    draw_circle(end.x, end.y, radius, color);
}
