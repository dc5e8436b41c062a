//! Configuration loading, CLI overrides and validation for ruleset.
//!
//! A config file is TOML, JSON or YAML (chosen by extension):
//!
//! ```toml
//! [data]
//! dir = "./data"
//!
//! [output]
//! dir = "./publish"
//! export_lists = ["cn", "geolocation-!cn", "private"]
//! gfwlist = "geolocation-!cn"
//!
//! [exclude]
//! cn = ["!cn", "ads"]
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```
//!
//! Every section is optional; missing values take the defaults in
//! [`defaults`].

mod cli;
pub mod defaults;
mod exclusion;
mod loader;
mod types;
mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use exclusion::{ExclusionMap, exclusion_config, parse_exclusions};
pub use loader::{ConfigError, load_config, load_config_or_default};
pub use types::{Config, DataConfig, LoggingConfig, OutputConfig};
pub use validate::validate_config;
