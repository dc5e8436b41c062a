//! Final per-list rule-set assembly with attribute exclusion.

use rustc_hash::FxHashMap;

use crate::error::CompileError;
use crate::registry::{FlattenedCollection, Registry};
use crate::rule::{FileId, RuleKind, RuleRecord, TagSet};

/// Tags to drop per list, e.g. `CN → {ads, !cn}`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionConfig {
    lists: FxHashMap<FileId, TagSet>,
}

impl ExclusionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tags to exclude from `list`. Repeated calls accumulate.
    pub fn exclude<I, S>(&mut self, list: impl Into<FileId>, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.lists.entry(list.into()).or_default();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        self
    }

    /// Excluded tags of a list, if any are configured.
    pub fn get(&self, list: &FileId) -> Option<&TagSet> {
        self.lists.get(list).filter(|tags| !tags.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.lists.values().all(TagSet::is_empty)
    }

    fn drops(&self, list: &FileId, rule: &RuleRecord) -> bool {
        self.get(list).is_some_and(|excluded| rule.tags.intersects(excluded))
    }
}

/// The ordered output for one list, as handed to exporters.
///
/// Order: untagged full, tagged full, deduplicated suffix, tagged suffix,
/// then keyword and regex rules (untagged before tagged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRuleSet {
    pub id: FileId,
    pub rules: Vec<RuleRecord>,
}

impl CompiledRuleSet {
    pub fn iter(&self) -> std::slice::Iter<'_, RuleRecord> {
        self.rules.iter()
    }

    /// Rules of one kind, in output order.
    pub fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &RuleRecord> {
        self.rules.iter().filter(move |r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a CompiledRuleSet {
    type Item = &'a RuleRecord;
    type IntoIter = std::slice::Iter<'a, RuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Build the compiled rule set of `id` from its flattened collection.
pub fn assemble(
    id: &FileId,
    flat: &FlattenedCollection,
    exclusion: &ExclusionConfig,
) -> CompiledRuleSet {
    let mut rules = Vec::with_capacity(flat.rule_count());

    for kind in [RuleKind::Full, RuleKind::Suffix] {
        rules.extend(flat.untagged(kind).iter().cloned());
        rules.extend(
            flat.tagged_of(kind)
                .filter(|r| !exclusion.drops(id, r))
                .cloned(),
        );
    }
    for kind in [RuleKind::Keyword, RuleKind::Regex] {
        rules.extend(flat.untagged(kind).iter().cloned());
        rules.extend(flat.tagged_of(kind).cloned());
    }

    CompiledRuleSet {
        id: id.clone(),
        rules,
    }
}

impl Registry {
    /// Compile one resolved list. Does not mutate the registry.
    pub fn compile(
        &self,
        id: &FileId,
        exclusion: &ExclusionConfig,
    ) -> Result<CompiledRuleSet, CompileError> {
        if !self.contains(id) {
            return Err(CompileError::UnknownFile { id: id.clone() });
        }
        let flat = self
            .flattened(id)
            .ok_or_else(|| CompileError::NotResolved { id: id.clone() })?;
        Ok(assemble(id, flat, exclusion))
    }
}
