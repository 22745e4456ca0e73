//! Demo entry point: a rocket balancing on vectored thrust, with live
//! charts for the body angle and motor deflection.

mod app;
mod viewport;

use app::GimbalApp;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("info,eframe=warn,egui_wgpu=warn,wgpu_core=warn,winit=warn")
        .init();
}

fn main() -> eframe::Result {
    init_logging();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 650.0]),
        ..Default::default()
    };

    eframe::run_native(
        "gimbal",
        options,
        Box::new(|_cc| Ok(Box::new(GimbalApp::new()?))),
    )
}
