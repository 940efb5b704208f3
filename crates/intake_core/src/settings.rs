use std::time::Duration;

/// Tunables for the simulated parts of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeSettings {
    /// Percent added per progress tick.
    pub progress_step: u32,
    pub progress_interval: Duration,
    pub mb_per_file: u64,
    pub capacity_mb: u64,
    pub gauge_circumference: u64,
    /// Gauge stroke consumed per accepted file.
    pub gauge_step: u64,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            progress_step: 8,
            progress_interval: Duration::from_millis(120),
            mb_per_file: 10,
            capacity_mb: 100,
            gauge_circumference: 282,
            gauge_step: 20,
        }
    }
}
