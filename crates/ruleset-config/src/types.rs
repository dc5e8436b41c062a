//! Configuration type definitions for data, output, exclusions and logging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;
use crate::exclusion::{ExclusionMap, default_exclusions};

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Tags dropped per list, e.g. `cn = ["!cn", "ads"]`.
    #[serde(default = "default_exclusions")]
    pub exclude: ExclusionMap,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            output: OutputConfig::default(),
            exclude: default_exclusions(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the domain-list files.
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the generated files are written to. Created if missing.
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Lists exported in every per-list format.
    #[serde(default = "default_export_lists")]
    pub export_lists: Vec<String>,
    /// List exported as `gfwlist.txt`. Empty disables the gfwlist output.
    #[serde(default = "default_gfwlist")]
    pub gfwlist: String,
    /// File name of the geosite protobuf bundle, relative to `dir`.
    #[serde(default = "default_dat_name")]
    pub dat_name: String,
    /// Homepage written into generated headers.
    #[serde(default = "default_homepage")]
    pub homepage: String,
    /// Lists given the `direct` policy in Quantumult X output.
    #[serde(default = "default_direct_lists")]
    pub direct_lists: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            export_lists: default_export_lists(),
            gfwlist: default_gfwlist(),
            dat_name: default_dat_name(),
            homepage: default_homepage(),
            direct_lists: default_direct_lists(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format: json, pretty, or compact. Default: pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Per-module log level filters (e.g., {"ruleset_rules": "debug"}).
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            filters: BTreeMap::new(),
        }
    }
}
