//! Proportional-integral-derivative controller.

/// A PID controller tracking a fixed set point.
///
/// The integral term uses only the current frame's `error * dt` rather
/// than an accumulated sum, which keeps the controller windup-free for
/// the attitude demo it was written for.
#[derive(Debug, Clone)]
pub struct Pid {
    pub set_point: f64,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,

    previous_error: Option<f64>,
}

impl Pid {
    pub fn new(set_point: f64, kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            set_point,
            kp,
            ki,
            kd,
            previous_error: None,
        }
    }

    /// Compute the control output for the current measurement.
    ///
    /// The derivative term is zero on the first update since no
    /// previous error exists yet.
    pub fn update(&mut self, current: f64, dt: f64) -> f64 {
        let error = self.set_point - current;

        let p = error;
        let i = error * dt;
        let d = match self.previous_error {
            Some(previous) if dt > 0.0 => (error - previous) / dt,
            _ => 0.0,
        };

        self.previous_error = Some(error);
        self.kp * p + self.ki * i + self.kd * d
    }

    /// Forget the error history, e.g. after the plant is reset.
    pub fn reset(&mut self) {
        self.previous_error = None;
    }
}
