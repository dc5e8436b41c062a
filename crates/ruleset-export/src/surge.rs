//! Surge rule-list export (`.list`).

use ruleset_rules::{CompiledRuleSet, RuleKind};

use crate::error::ExportError;
use crate::meta::ExportMeta;
use crate::{Exporter, non_empty};

/// Emits `DOMAIN,` and `DOMAIN-SUFFIX,` lines. Keyword and regex rules
/// have no domain-set equivalent and are skipped.
pub struct SurgeExporter;

impl Exporter for SurgeExporter {
    fn name(&self) -> &'static str {
        "surge"
    }

    fn extension(&self) -> &'static str {
        "list"
    }

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let mut out = meta.comment_header()?;
        for (rule, value) in non_empty(set) {
            let rule_type = match rule.kind {
                RuleKind::Full => "DOMAIN",
                RuleKind::Suffix => "DOMAIN-SUFFIX",
                RuleKind::Keyword | RuleKind::Regex => continue,
            };
            out.push_str(&format!("{rule_type},{value}\n"));
        }
        Ok(out.into_bytes())
    }
}
