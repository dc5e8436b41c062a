//! Per-list attribute exclusions.
//!
//! On the command line exclusions are written as `list@tag@tag,...`, e.g.
//! `cn@!cn@ads,geolocation-!cn@cn@ads`; in a config file as an
//! `[exclude]` table of `list = ["tag", ...]`.

use std::collections::BTreeMap;

use ruleset_rules::ExclusionConfig;

use crate::defaults::DEFAULT_EXCLUDE_ATTRS;
use crate::loader::ConfigError;

/// List name → tags excluded from it.
pub type ExclusionMap = BTreeMap<String, Vec<String>>;

/// Parse the `list@tag@tag,...` syntax.
///
/// Whitespace around names and tags is ignored, as are empty entries and
/// empty tags. Naming the same list twice merges the tags.
pub fn parse_exclusions(s: &str) -> Result<ExclusionMap, ConfigError> {
    let mut map = ExclusionMap::new();
    for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut parts = entry.split('@').map(str::trim);
        let list = parts.next().unwrap_or_default();
        if list.is_empty() {
            return Err(ConfigError::Validation(format!(
                "exclusion entry has no list name: {entry}"
            )));
        }
        let tags = map.entry(list.to_string()).or_default();
        for tag in parts.filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t2| t2 == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    Ok(map)
}

pub(crate) fn default_exclusions() -> ExclusionMap {
    parse_exclusions(DEFAULT_EXCLUDE_ATTRS).unwrap_or_default()
}

/// Convert configured exclusions to the compiler's form.
pub fn exclusion_config(map: &ExclusionMap) -> ExclusionConfig {
    let mut config = ExclusionConfig::new();
    for (list, tags) in map {
        config.exclude(list.as_str(), tags);
    }
    config
}
