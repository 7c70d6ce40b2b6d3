use std::time::Duration;

use log::info;

use crate::components::{show_settings_window, stats_view, ProcessView, Settings};
use crate::metrics::{SystemMetrics, SystemMonitor};
use crate::process::ProcessTable;

/// We derive Deserialize/Serialize so we can persist UI preferences on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SystemMonitorApp {
    #[serde(skip)]
    monitor: SystemMonitor,
    #[serde(skip)]
    metrics: SystemMetrics,
    #[serde(skip)]
    table: ProcessTable,
    #[serde(skip)]
    process_view: ProcessView,
    settings: Settings,
}

impl Default for SystemMonitorApp {
    fn default() -> Self {
        Self {
            monitor: SystemMonitor::new(Duration::from_millis(1000)),
            metrics: SystemMetrics::default(),
            table: ProcessTable::new(),
            process_view: ProcessView::default(),
            settings: Settings::default(),
        }
    }
}

impl SystemMonitorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        info!(
            "starting system monitor, tick interval {:?}",
            app.monitor.update_interval()
        );
        // One pass at startup so the window opens populated.
        app.run_pass();
        app
    }

    fn poll(&mut self) {
        if !self.monitor.should_update() {
            return;
        }
        self.run_pass();
    }

    /// One sampling + reconciliation pass against a fresh snapshot.
    fn run_pass(&mut self) {
        self.monitor.update();
        self.metrics = self.monitor.sample();

        let live = self.monitor.live_pids();
        let monitor = &self.monitor;
        self.table.reconcile(&live, |pid| monitor.process_name(pid));
    }
}

impl eframe::App for SystemMonitorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        self.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::CentralPanel::default().show(ctx, |ui| {
            stats_view::show_system_stats(ui, &self.metrics);
            ui.separator();
            self.process_view
                .show(ui, &mut self.table, &mut self.monitor);
        });

        // Wake up again when the next tick is due.
        ctx.request_repaint_after(self.monitor.time_to_next_update());
    }
}
