//! CLI override definitions and application logic.

use clap::Parser;

use crate::Config;
use crate::exclusion::parse_exclusions;
use crate::loader::ConfigError;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override the data directory
    #[arg(long)]
    pub data_dir: Option<String>,
    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,
    /// Override the exported lists (repeatable or comma-separated)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub export_lists: Option<Vec<String>>,
    /// Override the list exported as gfwlist.txt (empty disables it)
    #[arg(long)]
    pub gfwlist: Option<String>,
    /// Override the geosite output file name
    #[arg(long)]
    pub dat_name: Option<String>,
    /// Override exclusions, e.g. cn@!cn@ads,geolocation-!cn@cn@ads
    #[arg(long)]
    pub exclude: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override log format (pretty/compact/json)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Apply command-line overrides on top of a loaded config.
///
/// Fails only when `--exclude` cannot be parsed.
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<(), ConfigError> {
    if let Some(v) = &overrides.data_dir {
        config.data.dir = v.clone();
    }
    if let Some(v) = &overrides.output_dir {
        config.output.dir = v.clone();
    }
    if let Some(v) = &overrides.export_lists {
        config.output.export_lists = v
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
    }
    if let Some(v) = &overrides.gfwlist {
        config.output.gfwlist = v.trim().to_string();
    }
    if let Some(v) = &overrides.dat_name {
        config.output.dat_name = v.trim().to_string();
    }
    if let Some(v) = &overrides.exclude {
        config.exclude = parse_exclusions(v)?;
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = v.clone();
    }
    if let Some(v) = &overrides.log_format {
        config.logging.format = v.clone();
    }
    Ok(())
}
