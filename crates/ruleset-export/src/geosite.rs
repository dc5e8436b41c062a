//! V2Ray `geosite.dat` export.
//!
//! The router schema is small enough to declare by hand; field tags match
//! `v2ray.com/core/app/router/config.proto` so the output loads in v2ray,
//! Xray and compatible cores.

use prost::Message;
use ruleset_rules::{CompiledRuleSet, RuleKind, RuleRecord};

use crate::non_empty;

/// Default file name of the geosite output.
pub const GEOSITE_FILE_NAME: &str = "geosite.dat";

#[derive(Clone, PartialEq, Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSite>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GeoSite {
    /// Upper-cased list name, e.g. `GEOLOCATION-!CN`.
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<Domain>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Domain {
    #[prost(enumeration = "domain::Type", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(message, repeated, tag = "3")]
    pub attribute: Vec<domain::Attribute>,
}

pub mod domain {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// Keyword match.
        Plain = 0,
        Regex = 1,
        /// The domain and all of its subdomains.
        RootDomain = 2,
        Full = 3,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Attribute {
        #[prost(string, tag = "1")]
        pub key: String,
        #[prost(oneof = "attribute::TypedValue", tags = "2, 3")]
        pub typed_value: Option<attribute::TypedValue>,
    }

    pub mod attribute {
        #[derive(Clone, PartialEq, prost::Oneof)]
        pub enum TypedValue {
            #[prost(bool, tag = "2")]
            BoolValue(bool),
            #[prost(int64, tag = "3")]
            IntValue(i64),
        }
    }
}

impl From<RuleKind> for domain::Type {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Full => domain::Type::Full,
            RuleKind::Suffix => domain::Type::RootDomain,
            RuleKind::Keyword => domain::Type::Plain,
            RuleKind::Regex => domain::Type::Regex,
        }
    }
}

impl Domain {
    fn from_rule(rule: &RuleRecord, value: &str) -> Self {
        Self {
            r#type: domain::Type::from(rule.kind) as i32,
            value: value.to_string(),
            attribute: rule
                .tags
                .iter()
                .map(|tag| domain::Attribute {
                    key: tag.to_string(),
                    typed_value: Some(domain::attribute::TypedValue::BoolValue(true)),
                })
                .collect(),
        }
    }
}

/// Bundles every compiled list into one `GeoSiteList`.
///
/// Unlike the per-list formats this takes the whole registry at once and
/// writes a single binary file.
pub struct GeoSiteExporter;

impl GeoSiteExporter {
    pub fn name(&self) -> &'static str {
        "geosite"
    }

    pub fn geo_site(&self, set: &CompiledRuleSet) -> GeoSite {
        GeoSite {
            country_code: set.id.as_str().to_ascii_uppercase(),
            domain: non_empty(set)
                .map(|(rule, value)| Domain::from_rule(rule, value))
                .collect(),
        }
    }

    pub fn geo_site_list<'a, I>(&self, sets: I) -> GeoSiteList
    where
        I: IntoIterator<Item = &'a CompiledRuleSet>,
    {
        GeoSiteList {
            entry: sets.into_iter().map(|set| self.geo_site(set)).collect(),
        }
    }

    /// Protobuf bytes of the `GeoSiteList` for `sets`, in the given order.
    pub fn encode<'a, I>(&self, sets: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a CompiledRuleSet>,
    {
        self.geo_site_list(sets).encode_to_vec()
    }
}
