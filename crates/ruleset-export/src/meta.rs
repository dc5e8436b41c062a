//! Context shared by all exporters.

use ruleset_rules::FileId;
use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

use crate::error::ExportError;

/// Default project homepage written into generated headers.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/caocaocc/rule-set";

/// Inputs to an export that are not part of the rule set itself.
///
/// Keeping the clock and naming here makes every exporter a pure function
/// of `(CompiledRuleSet, ExportMeta)`.
#[derive(Debug, Clone)]
pub struct ExportMeta {
    pub generated_at: OffsetDateTime,
    pub homepage: String,
    /// Lists routed with the `direct` policy; everything else is `proxy`.
    pub direct_lists: Vec<FileId>,
}

impl ExportMeta {
    pub fn new(generated_at: OffsetDateTime) -> Self {
        Self {
            generated_at,
            homepage: DEFAULT_HOMEPAGE.to_string(),
            direct_lists: Vec::new(),
        }
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn with_direct_lists<I, S>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.direct_lists = lists.into_iter().map(|s| FileId::new(s.as_ref())).collect();
        self
    }

    /// `direct` or `proxy` for the given list.
    pub fn policy_for(&self, list: &FileId) -> &'static str {
        if self.direct_lists.contains(list) {
            "direct"
        } else {
            "proxy"
        }
    }

    /// Comment header used by the line-based formats.
    pub(crate) fn comment_header(&self) -> Result<String, ExportError> {
        Ok(format!(
            "# Generated by {}\n# Last Modified: {}\n\n",
            self.homepage,
            http_date(self.generated_at)?
        ))
    }
}

/// `Tue, 05 Mar 2024 08:09:10 UTC`: RFC 1123 with a zone abbreviation.
pub(crate) fn http_date(at: OffsetDateTime) -> Result<String, ExportError> {
    let stamp = at.format(format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second]"
    ))?;
    Ok(format!("{stamp} {}", zone_name(at.offset())?))
}

fn zone_name(zone: UtcOffset) -> Result<String, ExportError> {
    if zone == UtcOffset::UTC {
        return Ok("UTC".to_string());
    }
    if zone == offset!(+8) {
        return Ok("CST".to_string());
    }
    Ok(zone.format(format_description!(
        "[offset_hour sign:mandatory][offset_minute]"
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn header_format() {
        let meta = ExportMeta::new(datetime!(2024-03-05 08:09:10 UTC));
        assert_eq!(
            meta.comment_header().unwrap(),
            "# Generated by https://github.com/caocaocc/rule-set\n\
             # Last Modified: Tue, 05 Mar 2024 08:09:10 UTC\n\n"
        );
    }

    #[test]
    fn http_date_zone_names() {
        let at = datetime!(2024-03-05 08:09:10 UTC);
        assert_eq!(http_date(at).unwrap(), "Tue, 05 Mar 2024 08:09:10 UTC");
        assert_eq!(
            http_date(at.to_offset(offset!(+8))).unwrap(),
            "Tue, 05 Mar 2024 16:09:10 CST"
        );
        assert_eq!(
            http_date(at.to_offset(offset!(-5))).unwrap(),
            "Tue, 05 Mar 2024 03:09:10 -0500"
        );
    }

    #[test]
    fn policy_lookup_is_case_insensitive() {
        let meta = ExportMeta::new(OffsetDateTime::UNIX_EPOCH).with_direct_lists(["cn", "Private"]);
        assert_eq!(meta.policy_for(&FileId::new("CN")), "direct");
        assert_eq!(meta.policy_for(&FileId::new("private")), "direct");
        assert_eq!(meta.policy_for(&FileId::new("google")), "proxy");
    }
}
