//! Data-directory provider.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::CompileError;
use crate::parser::{FileRawCollection, parse_list};
use crate::registry::Registry;
use crate::rule::FileId;

/// Loads every list file under a data directory.
///
/// A list's id is its file name (not its path), upper-cased. Hidden files
/// and directories are skipped.
pub struct DirProvider;

impl DirProvider {
    /// Read and parse all lists under `dir` into a fresh registry.
    ///
    /// Files are parsed in parallel; every file is parsed before the
    /// registry is returned, so resolution can start right away.
    pub fn load(dir: &Path) -> Result<Registry, CompileError> {
        let files = Self::list_files(dir)?;

        let parsed: Vec<Result<(FileId, FileRawCollection), CompileError>> =
            files.par_iter().map(|path| Self::load_file(path)).collect();

        let mut registry = Registry::new();
        let mut rules = 0;
        for item in parsed {
            let (id, raw) = item?;
            rules += raw.rule_count();
            registry.insert(id, raw)?;
        }

        info!(
            dir = %dir.display(),
            lists = registry.len(),
            rules,
            "loaded data directory"
        );
        Ok(registry)
    }

    /// Parse a single list file.
    pub fn load_file(path: &Path) -> Result<(FileId, FileRawCollection), CompileError> {
        let content = fs::read_to_string(path).map_err(|source| CompileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = FileId::new(&name);
        let raw = parse_list(&id, &content)?;
        debug!(list = %id, rules = raw.rule_count(), "parsed list");
        Ok((id, raw))
    }

    fn list_files(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
        let mut files = Vec::new();
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
