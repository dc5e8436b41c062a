//! # ruleset
//!
//! Compiles a directory of `domain-list` files into per-list rule sets for
//! proxy tools (plain text, Surge, Mihomo, sing-box, Quantumult X) and a
//! base64 gfwlist.
//!
//! ## Crates
//!
//! - [`ruleset_rules`] - Parsing, inclusion resolution, deduplication
//! - [`ruleset_export`] - Output formats
//! - [`ruleset_config`] - Configuration loading and validation

pub mod build;
pub mod cli;
pub mod error;

pub use ruleset_config as config;
pub use ruleset_export as export;
pub use ruleset_rules as rules;

pub use build::{BuildReport, build, export_meta, load_registry};
pub use error::BuildError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ruleset_config::{Config, load_config, validate_config};
    pub use ruleset_export::{ExportMeta, Exporter, all_exporters};
    pub use ruleset_rules::{CompiledRuleSet, DirProvider, ExclusionConfig, FileId, Registry};
}
