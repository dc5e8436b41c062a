//! Rule, tag and file identifier types.

use std::collections::BTreeSet;
use std::fmt;

/// The matching behaviour of a domain rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// Matches exactly the given domain (`full:`).
    Full,
    /// Matches the domain and all of its subdomains (`domain:` or no prefix).
    Suffix,
    /// Matches any domain containing the value (`keyword:`).
    Keyword,
    /// Matches domains against a regular expression (`regexp:`).
    Regex,
}

impl RuleKind {
    /// Resolve a type prefix such as `full` or `DOMAIN` (case-insensitive).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "full" => Some(RuleKind::Full),
            "domain" => Some(RuleKind::Suffix),
            "keyword" => Some(RuleKind::Keyword),
            "regexp" => Some(RuleKind::Regex),
            _ => None,
        }
    }

    /// The prefix used to write this kind back out in the rule-file grammar.
    pub fn prefix(self) -> &'static str {
        match self {
            RuleKind::Full => "full",
            RuleKind::Suffix => "domain",
            RuleKind::Keyword => "keyword",
            RuleKind::Regex => "regexp",
        }
    }

    /// Whether values of this kind are lower-cased on parse.
    pub fn folds_case(self) -> bool {
        !matches!(self, RuleKind::Regex)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A canonical, sorted set of attribute tags.
///
/// Two tag sets written in a different order (`@cn @ads` vs `@ads @cn`)
/// compare equal and hash identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. The tag is lower-cased; empty tags are ignored.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag.to_ascii_lowercase())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if every tag of `other` is also in `self`.
    pub fn is_superset(&self, other: &TagSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// True if `self` and `other` share at least one tag.
    pub fn intersects(&self, other: &TagSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Tags in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "@{tag}")?;
        }
        Ok(())
    }
}

/// A single parsed rule. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleRecord {
    pub kind: RuleKind,
    pub value: String,
    pub tags: TagSet,
}

impl RuleRecord {
    /// Build a rule, normalizing the value for its kind.
    pub fn new(kind: RuleKind, value: &str, tags: TagSet) -> Self {
        let value = value.trim();
        let value = if kind.folds_case() {
            value.to_ascii_lowercase()
        } else {
            value.to_string()
        };
        Self { kind, value, tags }
    }

    /// Shorthand for an untagged rule.
    pub fn untagged(kind: RuleKind, value: &str) -> Self {
        Self::new(kind, value, TagSet::new())
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Number of dot-separated labels in the value.
    pub fn label_count(&self) -> usize {
        label_count(&self.value)
    }
}

impl fmt::Display for RuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)?;
        for tag in self.tags.iter() {
            write!(f, " @{tag}")?;
        }
        Ok(())
    }
}

/// Number of dot-separated labels in a domain.
pub fn label_count(domain: &str) -> usize {
    domain.split('.').count()
}

/// Case-insensitive file identifier, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(String);

impl FileId {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FileId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FileId {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An `include:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionDirective {
    pub target: FileId,
    /// `None` pulls in everything; `Some` pulls in only tagged rules whose
    /// tag set is a superset of the filter.
    pub filter: Option<TagSet>,
    /// The directive as written, for error messages.
    pub raw: String,
}
