//! Errors of the build pipeline.

use std::path::PathBuf;

use ruleset_config::ConfigError;
use ruleset_export::ExportError;
use ruleset_rules::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("export {list} as {format}: {source}")]
    Export {
        list: String,
        format: &'static str,
        #[source]
        source: ExportError,
    },

    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
