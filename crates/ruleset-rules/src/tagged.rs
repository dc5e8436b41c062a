//! Tagged rules with a per-tag-set group index.

use std::collections::BTreeMap;

use crate::rule::{RuleKind, RuleRecord, TagSet};

/// Tagged rules in first-seen order, grouped by their exact tag set.
///
/// Groups hold positions into the ordered list, so a filtered lookup only
/// touches the groups whose key covers the filter and still returns rules
/// in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedRules {
    rules: Vec<RuleRecord>,
    groups: BTreeMap<TagSet, Vec<usize>>,
}

impl TaggedRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: RuleRecord) {
        self.groups
            .entry(rule.tags.clone())
            .or_default()
            .push(self.rules.len());
        self.rules.push(rule);
    }

    pub fn as_slice(&self) -> &[RuleRecord] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleRecord> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of distinct tag sets.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Rules whose tag set is exactly `tags`.
    pub fn group<'a>(
        &'a self,
        tags: &TagSet,
    ) -> impl Iterator<Item = &'a RuleRecord> + use<'a> {
        self.groups
            .get(tags)
            .into_iter()
            .flatten()
            .map(move |&i| &self.rules[i])
    }

    /// Rules of every group whose tag set is a superset of `filter`, in
    /// list order.
    pub fn matching<'a>(
        &'a self,
        filter: &TagSet,
    ) -> impl Iterator<Item = &'a RuleRecord> + use<'a> {
        let mut positions: Vec<usize> = self
            .groups
            .iter()
            .filter(|(tags, _)| tags.is_superset(filter))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        positions.sort_unstable();
        positions.into_iter().map(move |i| &self.rules[i])
    }

    /// Rules of one kind, in order.
    pub fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &RuleRecord> {
        self.rules.iter().filter(move |r| r.kind == kind)
    }
}

impl<'a> IntoIterator for &'a TaggedRules {
    type Item = &'a RuleRecord;
    type IntoIter = std::slice::Iter<'a, RuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<RuleRecord> for TaggedRules {
    fn from_iter<I: IntoIterator<Item = RuleRecord>>(iter: I) -> Self {
        let mut tagged = Self::new();
        for rule in iter {
            tagged.push(rule);
        }
        tagged
    }
}
