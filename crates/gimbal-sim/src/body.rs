//! 2D rigid body with explicit Euler integration.

use glam::DVec2;

/// A point mass with rotation, integrated with explicit Euler steps.
///
/// Forces are queued with [`RigidBody2d::apply_force`] and consumed by
/// the next [`RigidBody2d::step`]; the queue is cleared afterwards.
#[derive(Debug, Clone)]
pub struct RigidBody2d {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Orientation in radians, counterclockwise from +X.
    pub angle: f64,
    pub angular_velocity: f64,

    pub mass: f64,
    pub inertia: f64,
    pub gravity: DVec2,

    /// Linear acceleration from the last step, kept for visualisation.
    pub linear_acceleration: DVec2,

    forces: Vec<(DVec2, DVec2)>,
}

impl RigidBody2d {
    pub fn new(position: DVec2, angle: f64, mass: f64, inertia: f64, gravity: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            angle,
            angular_velocity: 0.0,
            mass,
            inertia,
            gravity,
            linear_acceleration: DVec2::ZERO,
            forces: Vec::new(),
        }
    }

    /// Queue `force` applied at `point`, given in body-local space
    /// relative to the centre of mass.
    pub fn apply_force(&mut self, force: DVec2, point: DVec2) {
        self.forces.push((force, point));
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Velocity integrates before position, so the step is explicit
    /// Euler in the semi-implicit ordering of the forces' frame.
    pub fn step(&mut self, dt: f64) {
        self.linear_acceleration = self.gravity;
        let mut angular_acceleration = 0.0;

        for &(force, point) in &self.forces {
            self.linear_acceleration += force / self.mass;
            let torque = point.perp_dot(force);
            angular_acceleration += torque / self.inertia;
        }

        self.velocity += self.linear_acceleration * dt;
        self.angular_velocity += angular_acceleration * dt;

        self.position += self.velocity * dt;
        self.angle += self.angular_velocity * dt;

        self.forces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn weightless() -> RigidBody2d {
        RigidBody2d::new(DVec2::ZERO, 0.0, 1.0, 1.0, DVec2::ZERO)
    }

    #[test]
    fn gravity_accelerates_the_body() {
        let mut body = RigidBody2d::new(DVec2::ZERO, 0.0, 1.0, 1.0, DVec2::new(0.0, -1.0));
        body.step(0.5);
        assert!((body.velocity.y + 0.5).abs() < EPS);
        // Position uses the already-updated velocity.
        assert!((body.position.y + 0.25).abs() < EPS);
    }

    #[test]
    fn force_through_the_center_produces_no_torque() {
        let mut body = weightless();
        body.apply_force(DVec2::new(2.0, 0.0), DVec2::ZERO);
        body.step(1.0);
        assert!((body.velocity.x - 2.0).abs() < EPS);
        assert!(body.angular_velocity.abs() < EPS);
    }

    #[test]
    fn offset_force_produces_torque() {
        let mut body = weightless();
        // Leftward push at the top spins counterclockwise.
        body.apply_force(DVec2::new(-1.0, 0.0), DVec2::new(0.0, 1.0));
        body.step(1.0);
        assert!((body.angular_velocity - 1.0).abs() < EPS);
    }

    #[test]
    fn forces_are_cleared_after_a_step() {
        let mut body = weightless();
        body.apply_force(DVec2::new(1.0, 0.0), DVec2::ZERO);
        body.step(1.0);
        body.step(1.0);
        assert!((body.velocity.x - 1.0).abs() < EPS);
    }

    #[test]
    fn heavier_bodies_accelerate_less() {
        let mut body = weightless();
        body.mass = 4.0;
        body.apply_force(DVec2::new(1.0, 0.0), DVec2::ZERO);
        body.step(1.0);
        assert!((body.velocity.x - 0.25).abs() < EPS);
    }
}
