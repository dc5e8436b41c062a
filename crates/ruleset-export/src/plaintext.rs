//! Plaintext `domain-list` export (`.txt`).
//!
//! One rule per line in the same grammar the compiler reads, with tags
//! appended as `:@a,@b`, e.g. `full:dl.google.com:@ads,@cn`.

use ruleset_rules::CompiledRuleSet;

use crate::error::ExportError;
use crate::meta::ExportMeta;
use crate::{Exporter, non_empty};

pub struct PlainTextExporter;

impl Exporter for PlainTextExporter {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let mut out = meta.comment_header()?;
        for (rule, value) in non_empty(set) {
            out.push_str(rule.kind.prefix());
            out.push(':');
            out.push_str(value);
            if rule.is_tagged() {
                let tags: Vec<_> = rule.tags.iter().map(|t| format!("@{t}")).collect();
                out.push(':');
                out.push_str(&tags.join(","));
            }
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
