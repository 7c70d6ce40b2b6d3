use std::time::{Duration, Instant};

use log::{debug, warn};
use sysinfo::{Pid, ProcessesToUpdate, Signal, System};

use crate::process::TerminateError;

use super::SystemMetrics;

/// Owns the sysinfo handle and gates snapshot refreshes to the tick interval.
pub struct SystemMonitor {
    system: System,
    last_update: Instant,
    update_interval: Duration,
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl SystemMonitor {
    /// The initial `new_all` doubles as the CPU warm-up read: sysinfo needs
    /// one earlier refresh before its percentages are deltas rather than a
    /// baseline.
    pub fn new(update_interval: Duration) -> Self {
        Self {
            system: System::new_all(),
            last_update: Instant::now(),
            update_interval,
        }
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn should_update(&self) -> bool {
        self.last_update.elapsed() >= self.update_interval
    }

    /// Time left until the next tick is due.
    pub fn time_to_next_update(&self) -> Duration {
        self.update_interval.saturating_sub(self.last_update.elapsed())
    }

    /// Takes a fresh snapshot. Everything read afterwards (metrics, pids,
    /// names) comes from this one snapshot until the next tick.
    pub fn update(&mut self) {
        self.system.refresh_all();
        self.last_update = Instant::now();
        debug!(
            "refreshed snapshot, {} live processes",
            self.system.processes().len()
        );
    }

    /// Scalar readings from the last snapshot, clamped to percentage range.
    pub fn sample(&self) -> SystemMetrics {
        let cpu_percent = self.system.global_cpu_usage().clamp(0.0, 100.0);
        let total = self.system.total_memory();
        let mem_percent = if total == 0 {
            0.0
        } else {
            (self.system.used_memory() as f32 / total as f32 * 100.0).clamp(0.0, 100.0)
        };
        SystemMetrics {
            cpu_percent,
            mem_percent,
        }
    }

    /// Live pids from the last snapshot, sorted ascending.
    pub fn live_pids(&self) -> Vec<Pid> {
        let mut pids: Vec<Pid> = self.system.processes().keys().copied().collect();
        pids.sort_unstable();
        pids
    }

    pub fn process_name(&self, pid: Pid) -> Option<String> {
        self.system
            .process(pid)
            .map(|p| p.name().to_string_lossy().into_owned())
    }

    pub fn pid_exists(&self, pid: Pid) -> bool {
        self.system.process(pid).is_some()
    }

    /// Asks the OS to end `pid`. The displayed row is left to the next
    /// reconciliation pass, which drops it once the pid stops being listed.
    pub fn terminate(&mut self, pid: Pid) -> Result<(), TerminateError> {
        let process = self
            .system
            .process(pid)
            .ok_or(TerminateError::ProcessNotFound(pid))?;

        let delivered = match process.kill_with(Signal::Term) {
            Some(sent) => sent,
            // Platforms without SIGTERM only offer the hard kill.
            None => match process.kill_with(Signal::Kill) {
                Some(sent) => sent,
                None => return Err(TerminateError::Unsupported),
            },
        };
        if delivered {
            debug!("terminate signal sent to pid {pid}");
            return Ok(());
        }

        // Refused: tell "already gone" apart from "not allowed" by asking
        // the OS about this one pid again.
        let alive = self
            .system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true)
            > 0;
        if alive {
            warn!("terminate refused for live pid {pid}");
            Err(TerminateError::PermissionDenied(pid))
        } else {
            Err(TerminateError::ProcessNotFound(pid))
        }
    }
}
