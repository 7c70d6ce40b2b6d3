use crate::metrics::SystemMetrics;

pub fn show_system_stats(ui: &mut egui::Ui, metrics: &SystemMetrics) {
    ui.label(format!("CPU usage: {:.1}%", metrics.cpu_percent));
    ui.label(format!("RAM usage: {:.1}%", metrics.mem_percent));
}
