//! Configuration validation logic.

use crate::Config;
use crate::defaults::LOG_FORMATS;
use crate::loader::ConfigError;

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.data.dir.trim().is_empty() {
        return Err(ConfigError::Validation("data.dir is empty".into()));
    }
    if config.output.dir.trim().is_empty() {
        return Err(ConfigError::Validation("output.dir is empty".into()));
    }
    let dat_name = config.output.dat_name.trim();
    if dat_name.is_empty() {
        return Err(ConfigError::Validation("output.dat_name is empty".into()));
    }
    if dat_name.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "output.dat_name must be a file name, got {dat_name:?}"
        )));
    }
    if config.output.export_lists.iter().any(|l| l.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "output.export_lists contains an empty list name".into(),
        ));
    }
    if config.output.direct_lists.iter().any(|l| l.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "output.direct_lists contains an empty list name".into(),
        ));
    }
    for (list, tags) in &config.exclude {
        if list.trim().is_empty() {
            return Err(ConfigError::Validation("exclude has an empty list name".into()));
        }
        if tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "exclude.{list} contains an empty tag"
            )));
        }
    }
    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(ConfigError::Validation(format!(
            "logging.format must be one of: {:?}",
            LOG_FORMATS
        )));
    }
    Ok(())
}
