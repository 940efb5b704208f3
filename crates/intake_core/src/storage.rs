use crate::IntakeSettings;

/// Synthetic usage metric derived from the number of accepted files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageUsage {
    /// `count * per_file_mb`; may exceed `capacity_mb`.
    pub used_mb: u64,
    pub capacity_mb: u64,
    /// Stroke offset for the circular gauge, clamped to `[0, circumference]`.
    pub gauge_offset: u64,
    pub gauge_circumference: u64,
}

impl StorageUsage {
    pub fn over_capacity(&self) -> bool {
        self.used_mb > self.capacity_mb
    }
}

pub fn estimate(count: usize, settings: &IntakeSettings) -> StorageUsage {
    let count = count as u64;
    let circumference = settings.gauge_circumference;
    StorageUsage {
        used_mb: count * settings.mb_per_file,
        capacity_mb: settings.capacity_mb,
        gauge_offset: circumference.saturating_sub(count * settings.gauge_step),
        gauge_circumference: circumference,
    }
}
