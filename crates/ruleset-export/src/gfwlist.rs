//! AutoProxy (gfwlist) export.
//!
//! Unlike the per-list formats this is produced once per build, from a
//! single configured list, and written as base64 text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ruleset_rules::{CompiledRuleSet, RuleKind};
use time::UtcOffset;
use time::macros::offset;

use crate::error::ExportError;
use crate::meta::{ExportMeta, http_date};
use crate::{Exporter, non_empty};

/// File name of the gfwlist output.
pub const GFWLIST_FILE_NAME: &str = "gfwlist.txt";

/// Timestamps in the AutoProxy header are China Standard Time.
const HEADER_OFFSET: UtcOffset = offset!(+8);

pub struct GfwListExporter;

impl GfwListExporter {
    /// The decoded AutoProxy document.
    pub fn render(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<String, ExportError> {
        let modified = http_date(meta.generated_at.to_offset(HEADER_OFFSET))?;
        let mut out = format!(
            "[AutoProxy 0.2.9]\n! Last Modified: {modified}\n! Expires: 24h\n! HomePage: {}\n\n",
            meta.homepage
        );
        for (rule, value) in non_empty(set) {
            match rule.kind {
                RuleKind::Full => {
                    out.push_str(&format!("|http://{value}\n|https://{value}\n"));
                }
                RuleKind::Suffix => out.push_str(&format!("||{value}\n")),
                RuleKind::Keyword => out.push_str(&format!("{value}\n")),
                RuleKind::Regex => out.push_str(&format!("/{value}/\n")),
            }
        }
        Ok(out)
    }
}

impl Exporter for GfwListExporter {
    fn name(&self) -> &'static str {
        "gfwlist"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let document = self.render(set, meta)?;
        Ok(STANDARD.encode(document).into_bytes())
    }
}
