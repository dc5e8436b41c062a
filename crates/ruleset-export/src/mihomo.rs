//! Mihomo / Clash.Meta rule-provider export (`.yaml`, `domain` behavior).

use ruleset_rules::{CompiledRuleSet, RuleKind};

use crate::error::ExportError;
use crate::meta::ExportMeta;
use crate::{Exporter, non_empty};

/// Full rules are written as-is, suffix rules with the `+.` prefix that
/// matches the domain and all subdomains.
pub struct MihomoExporter;

impl Exporter for MihomoExporter {
    fn name(&self) -> &'static str {
        "mihomo"
    }

    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn export(&self, set: &CompiledRuleSet, meta: &ExportMeta) -> Result<Vec<u8>, ExportError> {
        let mut out = meta.comment_header()?;
        out.push_str("payload:\n");
        for (rule, value) in non_empty(set) {
            let value = quoted(value);
            match rule.kind {
                RuleKind::Full => out.push_str(&format!("  - '{value}'\n")),
                RuleKind::Suffix => out.push_str(&format!("  - '+.{value}'\n")),
                RuleKind::Keyword | RuleKind::Regex => {}
            }
        }
        Ok(out.into_bytes())
    }
}

/// Single-quoted YAML scalars escape `'` by doubling it.
fn quoted(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{compiled, meta};

    #[test]
    fn payload_is_valid_yaml() {
        let set = compiled("full:api.example.com\napple.com\nkeyword:google");
        let out = MihomoExporter.export(&set, &meta()).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let payload: Vec<_> = yaml["payload"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(payload, ["api.example.com", "+.apple.com"]);
    }

    #[test]
    fn single_quotes_are_doubled() {
        let set = compiled("full:it's.example.com\no'brien.example.org");
        let out = MihomoExporter.export(&set, &meta()).unwrap();

        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.contains("  - 'it''s.example.com'\n"));

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let payload: Vec<_> = yaml["payload"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(payload, ["it's.example.com", "+.o'brien.example.org"]);
    }

    #[test]
    fn empty_set_has_empty_payload() {
        let set = compiled("keyword:only");
        let out = MihomoExporter.export(&set, &meta()).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("payload:\n"));
    }
}
