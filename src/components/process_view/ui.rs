use log::warn;

use super::state::ProcessView;
use crate::metrics::SystemMonitor;
use crate::process::ProcessTable;

impl ProcessView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        table: &mut ProcessTable,
        monitor: &mut SystemMonitor,
    ) {
        ui.horizontal(|ui| {
            let selected = table.selected();
            let button = egui::Button::new("End process");
            if ui.add_enabled(selected.is_some(), button).clicked() {
                if let Some(pid) = selected {
                    self.end_process(monitor, pid);
                }
            }
            if let Some(status) = &self.status {
                ui.colored_label(ui.visuals().warn_fg_color, status);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("process_table")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("PID");
                        ui.end_row();

                        let selected = table.selected();
                        let mut clicked = None;
                        for entry in table.entries() {
                            let is_selected = selected == Some(entry.pid);
                            if ui.selectable_label(is_selected, &entry.name).clicked() {
                                clicked = Some(entry.pid);
                            }
                            ui.label(entry.pid.to_string());
                            ui.end_row();
                        }
                        if let Some(pid) = clicked {
                            table.select(pid);
                        }
                    });
            });
    }

    /// The row stays in the table either way; the next reconciliation pass
    /// removes it once the OS stops listing the pid.
    fn end_process(&mut self, monitor: &mut SystemMonitor, pid: sysinfo::Pid) {
        match monitor.terminate(pid) {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!("terminate failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }
}
