use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use intake_core::IntakeSettings;
use intake_logging::{intake_info, intake_warn};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = "./intake.ron";

/// On-disk overrides; every field is optional and falls back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PersistedSettings {
    progress_step: Option<u32>,
    progress_interval_ms: Option<u64>,
    mb_per_file: Option<u64>,
    capacity_mb: Option<u64>,
    gauge_circumference: Option<u64>,
    gauge_step: Option<u64>,
}

impl PersistedSettings {
    fn apply(self, mut settings: IntakeSettings) -> anyhow::Result<IntakeSettings> {
        if let Some(step) = self.progress_step {
            if step == 0 || step > 100 {
                bail!("progress_step must be between 1 and 100, got {step}");
            }
            settings.progress_step = step;
        }
        if let Some(ms) = self.progress_interval_ms {
            if ms == 0 {
                bail!("progress_interval_ms must be positive");
            }
            settings.progress_interval = Duration::from_millis(ms);
        }
        if let Some(mb) = self.mb_per_file {
            settings.mb_per_file = mb;
        }
        if let Some(mb) = self.capacity_mb {
            settings.capacity_mb = mb;
        }
        if let Some(circumference) = self.gauge_circumference {
            settings.gauge_circumference = circumference;
        }
        if let Some(step) = self.gauge_step {
            settings.gauge_step = step;
        }
        Ok(settings)
    }
}

/// Loads settings from `explicit`, or from `./intake.ron` if it exists.
/// An explicitly named file must exist; the default one is optional.
pub(crate) fn load_settings(explicit: Option<&Path>) -> anyhow::Result<IntakeSettings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG);
            if !path.exists() {
                return Ok(IntakeSettings::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = parse_settings(&content)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    intake_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

fn parse_settings(content: &str) -> anyhow::Result<IntakeSettings> {
    let persisted: PersistedSettings = ron::from_str(content)?;
    if persisted.mb_per_file == Some(0) {
        intake_warn!("mb_per_file is 0; storage usage will always read 0MB");
    }
    persisted.apply(IntakeSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_keeps_defaults() {
        assert_eq!(parse_settings("()").unwrap(), IntakeSettings::default());
    }

    #[test]
    fn overrides_are_applied() {
        let settings =
            parse_settings("(progress_step: Some(20), progress_interval_ms: Some(50), capacity_mb: Some(500))")
                .unwrap();
        assert_eq!(settings.progress_step, 20);
        assert_eq!(settings.progress_interval, Duration::from_millis(50));
        assert_eq!(settings.capacity_mb, 500);
        assert_eq!(settings.mb_per_file, 10);
    }

    #[test]
    fn invalid_values_and_unknown_fields_are_errors() {
        assert!(parse_settings("(progress_step: Some(0))").is_err());
        assert!(parse_settings("(progress_interval_ms: Some(0))").is_err());
        assert!(parse_settings("(colour: Some(\"red\"))").is_err());
    }

    #[test]
    fn explicit_file_is_read_and_must_exist() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("intake.ron");
        fs::write(&path, "(gauge_step: Some(10))").unwrap();

        assert_eq!(load_settings(Some(path.as_path())).unwrap().gauge_step, 10);
        assert!(load_settings(Some(temp.path().join("missing.ron").as_path())).is_err());
    }
}
