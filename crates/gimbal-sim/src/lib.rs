//! Physics for the gimbal demo: a 2D rigid body, a PID controller,
//! and a rocket that balances on vectored thrust.

mod body;
mod pid;
mod rocket;

pub use body::RigidBody2d;
pub use pid::Pid;
pub use rocket::{MAX_MOTOR_ANGLE, Rocket};
