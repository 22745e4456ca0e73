//! Rocket viewport: world-to-screen transform and debug rays.

use std::f64::consts::PI;

use egui::{Color32, Pos2, Sense, Shape, Stroke};
use gimbal_sim::Rocket;
use glam::DVec2;

/// Pixels per world unit.
const CAMERA_SCALE: f32 = 50.0;
const RAY_WIDTH: f32 = 3.0;

const BODY_COLOR: Color32 = Color32::from_gray(230);
// Straight-alpha #ff0000dd and friends, premultiplied.
const VELOCITY_COLOR: Color32 = Color32::from_rgba_premultiplied(0xdd, 0x00, 0x00, 0xdd);
const ACCELERATION_COLOR: Color32 = Color32::from_rgba_premultiplied(0x00, 0xdd, 0x00, 0xdd);
const THRUST_COLOR: Color32 = Color32::from_rgba_premultiplied(0x00, 0x00, 0xdd, 0xdd);

/// Draw the rocket and its velocity, acceleration, and thrust rays
/// into the remaining panel space.
pub fn draw(ui: &mut egui::Ui, rocket: &Rocket) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    // World Y points up, screen Y points down.
    let to_screen = |p: DVec2| -> Pos2 {
        Pos2::new(
            center.x + p.x as f32 * CAMERA_SCALE,
            center.y - p.y as f32 * CAMERA_SCALE,
        )
    };

    let rotation = DVec2::from_angle(rocket.body.angle);
    let half = rocket.size * 0.5;
    let corners = [
        DVec2::new(-half.x, -half.y),
        DVec2::new(half.x, -half.y),
        DVec2::new(half.x, half.y),
        DVec2::new(-half.x, half.y),
    ];
    let points: Vec<Pos2> = corners
        .iter()
        .map(|&corner| to_screen(rocket.body.position + rotation.rotate(corner)))
        .collect();
    painter.add(Shape::convex_polygon(points, BODY_COLOR, Stroke::NONE));

    let ray = |origin: DVec2, direction: DVec2, color: Color32| {
        painter.line_segment(
            [to_screen(origin), to_screen(origin + direction)],
            Stroke::new(RAY_WIDTH, color),
        );
    };

    ray(rocket.body.position, rocket.body.velocity, VELOCITY_COLOR);
    ray(
        rocket.body.position,
        rocket.body.linear_acceleration,
        ACCELERATION_COLOR,
    );

    // Exhaust direction, opposite the thrust.
    let motor = rocket.body.position + rotation.rotate(rocket.center_of_thrust);
    let exhaust = DVec2::from_angle(rocket.thrust_angle() + PI);
    ray(motor, exhaust, THRUST_COLOR);
}
