//! Single-line grammar of the domain-list format.
//!
//! ```text
//! line        := inclusion | rule | ""
//! inclusion   := "include:" fileid ("@" tag)*
//! rule        := ruletoken (" " attrtoken)*
//! ruletoken   := (typeprefix ":")? value
//! attrtoken   := "@" tag
//! ```

use crate::error::ParseErrorKind;
use crate::rule::{FileId, InclusionDirective, RuleKind, RuleRecord, TagSet};

const COMMENT_MARKER: char = '#';
const INCLUDE_PREFIX: &str = "include:";

/// A meaningful line of a list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Inclusion(InclusionDirective),
    Rule(RuleRecord),
}

/// Drop the comment (if any) and surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Parse one raw line. Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(raw: &str) -> Result<Option<Line>, ParseErrorKind> {
    let line = strip_comment(raw);
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(rest) = line.strip_prefix(INCLUDE_PREFIX) {
        return parse_inclusion(line, rest).map(|d| Some(Line::Inclusion(d)));
    }

    parse_rule(line).map(|r| Some(Line::Rule(r)))
}

/// Parse the part after `include:`, e.g. `google @cn @ads`.
fn parse_inclusion(line: &str, rest: &str) -> Result<InclusionDirective, ParseErrorKind> {
    let mut segments = rest.split('@');
    let target = FileId::new(segments.next().unwrap_or(""));
    if target.is_empty() {
        return Err(ParseErrorKind::EmptyInclusion);
    }

    let filter: TagSet = segments.collect();
    Ok(InclusionDirective {
        target,
        filter: (!filter.is_empty()).then_some(filter),
        raw: line.to_string(),
    })
}

fn parse_rule(line: &str) -> Result<RuleRecord, ParseErrorKind> {
    let mut tokens = line.split_whitespace();
    let rule_token = tokens.next().ok_or(ParseErrorKind::EmptyRule)?;

    let (kind, value) = match rule_token.split_once(':') {
        Some((prefix, value)) => {
            let kind = RuleKind::from_prefix(prefix.trim())
                .ok_or_else(|| ParseErrorKind::UnknownType(prefix.to_string()))?;
            (kind, value)
        }
        None => (RuleKind::Suffix, rule_token),
    };
    if value.trim().is_empty() {
        return Err(ParseErrorKind::EmptyValue);
    }

    let mut tags = TagSet::new();
    for token in tokens {
        let tag = token
            .strip_prefix('@')
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ParseErrorKind::InvalidAttribute(token.to_string()))?;
        tags.insert(tag);
    }

    Ok(RuleRecord::new(kind, value, tags))
}
