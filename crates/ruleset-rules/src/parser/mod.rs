//! Domain-list file parser.

pub mod line;

use crate::error::CompileError;
use crate::rule::{FileId, InclusionDirective, RuleKind, RuleRecord};
use crate::tagged::TaggedRules;

pub use line::{Line, parse_line, strip_comment};

/// The rules of one file as written, before any inclusion is resolved.
///
/// Built once by [`parse_list`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRawCollection {
    pub full: Vec<RuleRecord>,
    pub suffix: Vec<RuleRecord>,
    pub keyword: Vec<RuleRecord>,
    pub regex: Vec<RuleRecord>,
    /// Every tagged rule, in file order, grouped by exact tag set.
    pub tagged: TaggedRules,
    pub inclusions: Vec<InclusionDirective>,
}

impl FileRawCollection {
    /// Route a rule to the list it belongs to.
    pub fn classify(&mut self, rule: RuleRecord) {
        if rule.is_tagged() {
            self.tagged.push(rule);
            return;
        }
        self.untagged_mut(rule.kind).push(rule);
    }

    /// Untagged rules of one kind.
    pub fn untagged(&self, kind: RuleKind) -> &[RuleRecord] {
        match kind {
            RuleKind::Full => &self.full,
            RuleKind::Suffix => &self.suffix,
            RuleKind::Keyword => &self.keyword,
            RuleKind::Regex => &self.regex,
        }
    }

    fn untagged_mut(&mut self, kind: RuleKind) -> &mut Vec<RuleRecord> {
        match kind {
            RuleKind::Full => &mut self.full,
            RuleKind::Suffix => &mut self.suffix,
            RuleKind::Keyword => &mut self.keyword,
            RuleKind::Regex => &mut self.regex,
        }
    }

    /// Total number of rules, tagged and untagged.
    pub fn rule_count(&self) -> usize {
        self.full.len()
            + self.suffix.len()
            + self.keyword.len()
            + self.regex.len()
            + self.tagged.len()
    }
}

/// Parse the content of one list file.
///
/// Any malformed line fails the whole file; the error carries the file id
/// and the 1-based line number.
pub fn parse_list(file: &FileId, content: &str) -> Result<FileRawCollection, CompileError> {
    let mut collection = FileRawCollection::default();

    for (idx, raw) in content.lines().enumerate() {
        let parsed = parse_line(raw).map_err(|kind| CompileError::Parse {
            file: file.clone(),
            line: idx + 1,
            kind,
        })?;

        match parsed {
            Some(Line::Inclusion(directive)) => collection.inclusions.push(directive),
            Some(Line::Rule(rule)) => collection.classify(rule),
            None => {}
        }
    }

    Ok(collection)
}
