//! sing-box source rule-set export (`.json`, format version 2).

use ruleset_rules::{CompiledRuleSet, RuleKind};
use serde::Serialize;

use crate::error::ExportError;
use crate::meta::ExportMeta;
use crate::{Exporter, non_empty};

const RULE_SET_VERSION: u8 = 2;

#[derive(Debug, Serialize)]
struct SingBoxRuleSet {
    version: u8,
    rules: Vec<HeadlessRule>,
}

#[derive(Debug, Default, Serialize)]
struct HeadlessRule {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    domain: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    domain_suffix: Vec<String>,
}

/// Emits one headless rule holding every full and suffix rule. Suffix
/// values get a leading dot.
pub struct SingBoxExporter;

impl Exporter for SingBoxExporter {
    fn name(&self) -> &'static str {
        "sing-box"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, set: &CompiledRuleSet, _meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let mut rule = HeadlessRule::default();
        for (r, value) in non_empty(set) {
            match r.kind {
                RuleKind::Full => rule.domain.push(value.to_string()),
                RuleKind::Suffix => rule.domain_suffix.push(format!(".{value}")),
                RuleKind::Keyword | RuleKind::Regex => {}
            }
        }
        let rule_set = SingBoxRuleSet {
            version: RULE_SET_VERSION,
            rules: vec![rule],
        };
        Ok(serde_json::to_vec_pretty(&rule_set)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{compiled, meta};

    #[test]
    fn domains_and_suffixes() {
        let set = compiled("full:a.example.com\nexample.com\nkeyword:skip");
        let out = SingBoxExporter.export(&set, &meta()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 2,
                "rules": [{ "domain": ["a.example.com"], "domain_suffix": [".example.com"] }]
            })
        );
    }

    #[test]
    fn empty_arrays_omitted() {
        let set = compiled("example.com");
        let out = SingBoxExporter.export(&set, &meta()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("\"domain\":"));
        assert!(text.contains("  \"version\": 2"));
    }
}
