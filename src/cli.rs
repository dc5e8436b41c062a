//! `build` and `check` subcommands.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use ruleset_config::{
    CliOverrides, Config, LoggingConfig, apply_overrides, exclusion_config, load_config,
    load_config_or_default, validate_config,
};
use ruleset_rules::FileId;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::build::{build, export_meta, load_registry};

/// Config file read when `--config` is not given. May be absent.
pub const DEFAULT_CONFIG_PATH: &str = "ruleset.toml";

/// Arguments of `ruleset build`.
#[derive(Parser, Debug, Clone)]
#[command(about = "Compile the data directory and write every export")]
pub struct BuildArgs {
    /// Config file path (toml/json/yaml). Defaults to ./ruleset.toml if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Arguments of `ruleset check`.
#[derive(Parser, Debug, Clone)]
#[command(about = "Parse and resolve the data directory without writing anything")]
pub struct CheckArgs {
    /// Config file path (toml/json/yaml). Defaults to ./ruleset.toml if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Load, override and validate the config, then set up logging.
fn prepare(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => load_config_or_default(DEFAULT_CONFIG_PATH)?,
    };
    apply_overrides(&mut config, overrides)?;
    validate_config(&config)?;

    init_tracing(&config.logging);
    Ok(config)
}

pub fn run_build(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = prepare(args.config.as_deref(), &args.overrides)?;
    let meta = export_meta(&config, time::OffsetDateTime::now_utc());
    let report = build(&config, &meta)?;
    if !report.missing.is_empty() {
        warn!(lists = ?report.missing, "some lists were not found in the data directory");
    }
    Ok(())
}

pub fn run_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = prepare(args.config.as_deref(), &args.overrides)?;
    let registry = load_registry(Path::new(&config.data.dir))?;

    let exclusion = exclusion_config(&config.exclude);
    let mut rules = 0;
    for id in registry.ids() {
        rules += registry.compile(id, &exclusion)?.len();
    }
    for name in &config.output.export_lists {
        if !registry.contains(&FileId::new(name)) {
            warn!(list = %name, "export list has no data file");
        }
    }
    info!(lists = registry.len(), rules, "data directory is valid");
    Ok(())
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
///
/// Logs go to stderr. A subscriber that is already installed is kept.
pub fn init_tracing(config: &LoggingConfig) {
    // Build the env filter from base level and per-module filters
    let mut filter_str = config.level.clone();
    for (module, level) in &config.filters {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }
    let filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        "compact" => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
        // pretty is default
        _ => registry.with(fmt::layer().with_writer(io::stderr)).try_init(),
    };
    if let Err(e) = installed {
        debug!(error = %e, "tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_keeps_running() {
        let mut config = LoggingConfig::default();
        init_tracing(&config);
        config.format = "json".into();
        init_tracing(&config);
    }
}
