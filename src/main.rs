#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 420.0])
            .with_min_inner_size([300.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "System Monitor",
        native_options,
        Box::new(|cc| Ok(Box::new(sysmon::SystemMonitorApp::new(cc)))),
    )
}
