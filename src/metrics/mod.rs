mod monitor;

pub use monitor::*;

/// One tick's scalar readings. Recomputed fresh every pass, nothing kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemMetrics {
    pub cpu_percent: f32,
    pub mem_percent: f32,
}
