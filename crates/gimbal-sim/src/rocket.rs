//! Rocket model with a gimballed motor.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::body::RigidBody2d;

/// Maximum motor deflection, 5 degrees either side.
pub const MAX_MOTOR_ANGLE: f64 = 5.0 * std::f64::consts::PI / 180.0;

/// A rocket balancing on its motor thrust.
///
/// The motor sits below the centre of mass and can be deflected by
/// `motor_angle`, vectoring the thrust to control attitude. Position
/// is pinned to the origin every step; the model studies attitude
/// only.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub body: RigidBody2d,
    /// Body extents in world units (width, height).
    pub size: DVec2,
    /// Thrust application point in body-local space.
    pub center_of_thrust: DVec2,
    /// Motor deflection in radians, relative to the body axis.
    pub motor_angle: f64,
    pub thrust_force: f64,
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new()
    }
}

impl Rocket {
    pub fn new() -> Self {
        Self {
            body: RigidBody2d::new(DVec2::ZERO, 0.0, 1.0, 1.0, DVec2::new(0.0, -1.0)),
            size: DVec2::new(0.2, 0.6),
            center_of_thrust: DVec2::new(0.0, -0.3),
            motor_angle: 0.0,
            thrust_force: 1.1,
        }
    }

    /// World-space direction the thrust pushes the body.
    ///
    /// With the body upright and the motor centred this points
    /// straight up, countering gravity.
    pub fn thrust_angle(&self) -> f64 {
        self.body.angle + FRAC_PI_2 + self.motor_angle
    }

    /// Set the motor deflection, clamped to [`MAX_MOTOR_ANGLE`].
    pub fn set_motor_angle(&mut self, angle: f64) {
        self.motor_angle = angle.clamp(-MAX_MOTOR_ANGLE, MAX_MOTOR_ANGLE);
    }

    /// Apply thrust, advance the body, and re-pin it to the origin.
    pub fn step(&mut self, dt: f64) {
        let thrust = DVec2::from_angle(self.thrust_angle()) * self.thrust_force;
        self.body.apply_force(thrust, self.center_of_thrust);
        self.body.step(dt);

        self.body.position = DVec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn upright_rocket_with_centered_motor_stays_upright() {
        let mut rocket = Rocket::new();
        for _ in 0..100 {
            rocket.step(0.01);
        }
        assert!(rocket.body.angle.abs() < EPS);
        assert!(rocket.body.angular_velocity.abs() < EPS);
    }

    #[test]
    fn thrust_exceeds_gravity_when_upright() {
        let mut rocket = Rocket::new();
        rocket.step(1.0);
        // Net upward acceleration of thrust_force - 1.
        assert!((rocket.body.linear_acceleration.y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn deflected_motor_torques_the_body() {
        let mut rocket = Rocket::new();
        rocket.set_motor_angle(MAX_MOTOR_ANGLE);
        rocket.step(0.01);
        // Motor deflected counterclockwise pushes the tail left,
        // rotating the body clockwise.
        assert!(rocket.body.angular_velocity < 0.0);
    }

    #[test]
    fn motor_angle_is_clamped() {
        let mut rocket = Rocket::new();
        rocket.set_motor_angle(1.0);
        assert!((rocket.motor_angle - MAX_MOTOR_ANGLE).abs() < EPS);
        rocket.set_motor_angle(-1.0);
        assert!((rocket.motor_angle + MAX_MOTOR_ANGLE).abs() < EPS);
    }

    #[test]
    fn position_stays_pinned_to_the_origin() {
        let mut rocket = Rocket::new();
        for _ in 0..10 {
            rocket.step(0.1);
        }
        assert_eq!(rocket.body.position, DVec2::ZERO);
    }
}
