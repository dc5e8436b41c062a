//! The build pipeline: load, resolve, compile and export.

use std::fs;
use std::path::{Path, PathBuf};

use ruleset_config::{Config, exclusion_config};
use ruleset_export::{
    ExportMeta, Exporter, GFWLIST_FILE_NAME, GeoSiteExporter, GfwListExporter, all_exporters,
};
use ruleset_rules::{CompiledRuleSet, DirProvider, ExclusionConfig, FileId, Registry};
use tracing::{debug, info, warn};

use crate::error::BuildError;

/// What a build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Export lists that were compiled and written.
    pub exported: Vec<String>,
    /// Export lists with no matching data file.
    pub missing: Vec<String>,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// Load the data directory and resolve every list.
///
/// Resolution is all-or-nothing: any parse error, missing include or
/// cycle fails the whole registry.
pub fn load_registry(data_dir: &Path) -> Result<Registry, BuildError> {
    let mut registry = DirProvider::load(data_dir)?;
    registry.resolve_all()?;
    Ok(registry)
}

/// Export metadata from the output config, stamped with `now`.
pub fn export_meta(config: &Config, now: time::OffsetDateTime) -> ExportMeta {
    ExportMeta::new(now)
        .with_homepage(config.output.homepage.as_str())
        .with_direct_lists(&config.output.direct_lists)
}

/// Run a full build and write every output file.
pub fn build(config: &Config, meta: &ExportMeta) -> Result<BuildReport, BuildError> {
    let registry = load_registry(Path::new(&config.data.dir))?;
    let exclusion = exclusion_config(&config.exclude);

    let out_dir = PathBuf::from(&config.output.dir);
    fs::create_dir_all(&out_dir).map_err(|source| BuildError::Io {
        path: out_dir.clone(),
        source,
    })?;

    let mut report = BuildReport::default();

    let sets = registry
        .ids()
        .into_iter()
        .map(|id| registry.compile(id, &exclusion))
        .collect::<Result<Vec<_>, _>>()?;
    let dat_path = out_dir.join(config.output.dat_name.trim());
    write_output(&dat_path, &GeoSiteExporter.encode(&sets))?;
    debug!(lists = sets.len(), "exported geosite");
    report.files.push(dat_path);

    let exporters = all_exporters();

    for name in &config.output.export_lists {
        let Some(set) = compile_list(&registry, name, &exclusion)? else {
            warn!(list = %name, "export list has no data file, skipped");
            report.missing.push(name.clone());
            continue;
        };
        for exporter in &exporters {
            let path = out_dir.join(exporter.file_name(name));
            let bytes = render(&**exporter, name, &set, meta)?;
            write_output(&path, &bytes)?;
            report.files.push(path);
        }
        debug!(list = %name, rules = set.len(), "exported list");
        report.exported.push(name.clone());
    }

    let gfwlist = config.output.gfwlist.as_str();
    if !gfwlist.is_empty() {
        match compile_list(&registry, gfwlist, &exclusion)? {
            Some(set) => {
                let path = out_dir.join(GFWLIST_FILE_NAME);
                let bytes = render(&GfwListExporter, gfwlist, &set, meta)?;
                write_output(&path, &bytes)?;
                report.files.push(path);
            }
            None => {
                warn!(list = %gfwlist, "gfwlist source list has no data file, skipped");
                report.missing.push(gfwlist.to_string());
            }
        }
    }

    info!(
        lists = report.exported.len(),
        files = report.files.len(),
        missing = report.missing.len(),
        out = %out_dir.display(),
        "build finished"
    );
    Ok(report)
}

/// Compile a list by name, or `None` if no data file has that name.
fn compile_list(
    registry: &Registry,
    name: &str,
    exclusion: &ExclusionConfig,
) -> Result<Option<CompiledRuleSet>, BuildError> {
    let id = FileId::new(name);
    if !registry.contains(&id) {
        return Ok(None);
    }
    Ok(Some(registry.compile(&id, exclusion)?))
}

fn render(
    exporter: &dyn Exporter,
    list: &str,
    set: &CompiledRuleSet,
    meta: &ExportMeta,
) -> Result<Vec<u8>, BuildError> {
    exporter
        .export(set, meta)
        .map_err(|source| BuildError::Export {
            list: list.to_string(),
            format: exporter.name(),
            source,
        })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), BuildError> {
    fs::write(path, bytes).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(file = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}
