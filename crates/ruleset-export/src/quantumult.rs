//! Quantumult X filter snippet export (`.snippet`).

use ruleset_rules::{CompiledRuleSet, RuleKind};

use crate::error::ExportError;
use crate::meta::ExportMeta;
use crate::{Exporter, non_empty};

pub struct QuantumultXExporter;

impl Exporter for QuantumultXExporter {
    fn name(&self) -> &'static str {
        "quantumult-x"
    }

    fn extension(&self) -> &'static str {
        "snippet"
    }

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let policy = meta.policy_for(&set.id);
        let mut out = meta.comment_header()?;
        for (rule, value) in non_empty(set) {
            let rule_type = match rule.kind {
                RuleKind::Full => "host",
                RuleKind::Suffix => "host-suffix",
                RuleKind::Keyword | RuleKind::Regex => continue,
            };
            out.push_str(&format!("{rule_type}, {value}, {policy}\n"));
        }
        Ok(out.into_bytes())
    }
}
