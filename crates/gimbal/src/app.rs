//! The eframe application: simulation loop, input, controls, charts.

use eframe::App;
use gimbal_chart::{AxisConfig, Chart, ChartConfig, ChartWidget, ConfigError, ElapsedWindow};
use gimbal_sim::{Pid, Rocket};
use glam::DVec2;

use crate::viewport;

/// Wall-clock seconds to simulation-time multiplier.
const TIME_SCALE: f64 = 1000.0 / 300.0;

/// Lateral force magnitude from the A/D keys, applied at the nose.
const NUDGE_FORCE: f64 = 1.0;

/// Seconds of telemetry kept visible in the chart windows.
const WINDOW_SECONDS: f64 = 10.0;

pub struct GimbalApp {
    rocket: Rocket,
    pid: Pid,
    sim_time: f64,

    angle_chart: Chart,
    motor_chart: Chart,
}

impl GimbalApp {
    pub fn new() -> Result<Self, ConfigError> {
        let angle_chart = Chart::new(
            400.0,
            300.0,
            ChartConfig::default()
                .with_header("Body angle")
                .with_x_axis(elapsed_axis())
                .with_y_axis(
                    AxisConfig::default()
                        .with_title("deg")
                        .with_wrap(-180.0, 180.0)
                        .with_min_range(1.0),
                ),
        )?
        .with_processor(Box::new(ElapsedWindow));

        let motor_chart = Chart::new(
            400.0,
            300.0,
            ChartConfig::default()
                .with_header("Motor angle")
                .with_x_axis(elapsed_axis())
                .with_y_axis(AxisConfig::default().with_title("deg").with_min_range(1.0)),
        )?
        .with_processor(Box::new(ElapsedWindow));

        Ok(Self {
            rocket: Rocket::new(),
            pid: Pid::new(0.0, 4.0, 0.0, -10.0),
            sim_time: 0.0,
            angle_chart,
            motor_chart,
        })
    }

    fn step(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt) as f64 * TIME_SCALE;
        let nose = DVec2::new(0.0, self.rocket.size.y * 0.5);

        if ctx.input(|i| i.key_down(egui::Key::A)) {
            self.rocket.body.apply_force(DVec2::new(-NUDGE_FORCE, 0.0), nose);
        }
        if ctx.input(|i| i.key_down(egui::Key::D)) {
            self.rocket.body.apply_force(DVec2::new(NUDGE_FORCE, 0.0), nose);
        }

        self.rocket.step(dt);
        let output = self.pid.update(self.rocket.body.angle, dt);
        self.rocket.set_motor_angle(output);
        self.sim_time += dt;

        self.angle_chart
            .push_value(self.sim_time, self.rocket.body.angle.to_degrees());
        self.motor_chart
            .push_value(self.sim_time, self.rocket.motor_angle.to_degrees());
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("PID gains");
        egui::Grid::new("pid_gains").num_columns(2).show(ui, |ui| {
            ui.label("P");
            ui.add(egui::DragValue::new(&mut self.pid.kp).speed(0.1));
            ui.end_row();
            ui.label("I");
            ui.add(egui::DragValue::new(&mut self.pid.ki).speed(0.1));
            ui.end_row();
            ui.label("D");
            ui.add(egui::DragValue::new(&mut self.pid.kd).speed(0.1));
            ui.end_row();
        });

        ui.separator();
        ui.label("A / D: push the nose sideways");
        if ui.button("Reset").clicked() {
            self.rocket = Rocket::new();
            self.pid.reset();
            tracing::info!("simulation reset");
        }
    }
}

impl App for GimbalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step(ctx);

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("charts")
            .default_width(420.0)
            .show(ctx, |ui| {
                let width = ui.available_width();
                let half = (ui.available_height() - ui.spacing().item_spacing.y) * 0.5;
                ui.add_sized([width, half], ChartWidget::new(&mut self.angle_chart));
                ui.add_sized([width, half], ChartWidget::new(&mut self.motor_chart));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            viewport::draw(ui, &self.rocket);
        });

        ctx.request_repaint();
    }
}

fn elapsed_axis() -> AxisConfig {
    AxisConfig::default()
        .with_title("elapsed (s)")
        .with_fixed_range(0.0, WINDOW_SECONDS)
        .inverted()
}
