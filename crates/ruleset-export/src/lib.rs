//! Exporters for compiled ruleset lists.
//!
//! Each exporter is a pure function from a [`CompiledRuleSet`] and an
//! [`ExportMeta`] to the bytes of one output file:
//!
//! | exporter       | extension  | rules emitted              |
//! |----------------|------------|----------------------------|
//! | `plaintext`    | `.txt`     | all kinds, with tags       |
//! | `surge`        | `.list`    | full, suffix               |
//! | `mihomo`       | `.yaml`    | full, suffix               |
//! | `sing-box`     | `.json`    | full, suffix               |
//! | `quantumult-x` | `.snippet` | full, suffix               |
//! | `gfwlist`      | (single `gfwlist.txt`, base64) | all kinds  |
//! | `geosite`      | (single `geosite.dat`, protobuf, every list) | all kinds |

pub mod error;
pub mod geosite;
pub mod gfwlist;
pub mod meta;
pub mod mihomo;
pub mod plaintext;
pub mod quantumult;
pub mod singbox;
pub mod surge;

pub use error::ExportError;
pub use geosite::{GEOSITE_FILE_NAME, GeoSiteExporter};
pub use gfwlist::{GFWLIST_FILE_NAME, GfwListExporter};
pub use meta::{DEFAULT_HOMEPAGE, ExportMeta};
pub use mihomo::MihomoExporter;
pub use plaintext::PlainTextExporter;
pub use quantumult::QuantumultXExporter;
pub use singbox::SingBoxExporter;
pub use surge::SurgeExporter;

use ruleset_rules::{CompiledRuleSet, RuleRecord};

/// Renders a compiled rule set into one output format.
pub trait Exporter: Send + Sync {
    /// Short format name used in logs.
    fn name(&self) -> &'static str;

    /// File extension (without the dot) of per-list output files.
    fn extension(&self) -> &'static str;

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError>;

    /// Output file name for a list, e.g. `geolocation-!cn.yaml`.
    fn file_name(&self, list: &str) -> String {
        format!("{list}.{}", self.extension())
    }
}

/// Every per-list exporter. gfwlist and geosite are written once per build
/// and are not included.
pub fn all_exporters() -> Vec<Box<dyn Exporter>> {
    vec![
        Box::new(PlainTextExporter),
        Box::new(SurgeExporter),
        Box::new(MihomoExporter),
        Box::new(SingBoxExporter),
        Box::new(QuantumultXExporter),
    ]
}

/// Rules paired with their trimmed value, skipping empty values.
pub(crate) fn non_empty(set: &CompiledRuleSet) -> impl Iterator<Item = (&RuleRecord, &str)> {
    set.iter()
        .map(|r| (r, r.value.trim()))
        .filter(|(_, v)| !v.is_empty())
}
