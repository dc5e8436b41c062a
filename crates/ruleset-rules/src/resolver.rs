//! Inclusion resolution.
//!
//! Every list moves through `Unresolved → Resolving → Resolved`. Targets of
//! `include:` lines are resolved first (recursively), so chains of any depth
//! work regardless of the order lists are visited in. Meeting a list that is
//! still `Resolving` means the inclusion graph has a cycle.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::CompileError;
use crate::parser::FileRawCollection;
use crate::registry::{FlattenedCollection, Registry, ResolveState};
use crate::rule::{FileId, InclusionDirective, RuleRecord};
use crate::trie::dedup_suffixes;

impl Registry {
    /// Resolve every list in the registry.
    pub fn resolve_all(&mut self) -> Result<(), CompileError> {
        let ids: Vec<FileId> = self.ids().into_iter().cloned().collect();
        for id in &ids {
            self.resolve(id)?;
        }
        Ok(())
    }

    /// Resolve one list (and, transitively, everything it includes).
    ///
    /// Already resolved lists are returned from the memo without being
    /// flattened again.
    pub fn resolve(&mut self, id: &FileId) -> Result<Arc<FlattenedCollection>, CompileError> {
        if !self.contains(id) {
            return Err(CompileError::UnknownFile { id: id.clone() });
        }
        let mut path = Vec::new();
        self.resolve_on_path(id, &mut path)
    }

    fn resolve_on_path(
        &mut self,
        id: &FileId,
        path: &mut Vec<FileId>,
    ) -> Result<Arc<FlattenedCollection>, CompileError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| CompileError::UnknownFile { id: id.clone() })?;

        match &entry.state {
            ResolveState::Resolved(flat) => return Ok(flat.clone()),
            ResolveState::Resolving => {
                let start = path.iter().position(|p| p == id).unwrap_or(0);
                let mut chain = path[start..].to_vec();
                chain.push(id.clone());
                return Err(CompileError::CyclicInclusion { chain });
            }
            ResolveState::Unresolved => {}
        }

        entry.state = ResolveState::Resolving;
        let directives = entry.raw.inclusions.clone();
        path.push(id.clone());

        let result = self.flatten(id, &directives, path);
        path.pop();

        let Some(entry) = self.entries.get_mut(id) else {
            return Err(CompileError::UnknownFile { id: id.clone() });
        };
        match result {
            Ok(flat) => {
                let flat = Arc::new(flat);
                debug!(
                    list = %id,
                    full = flat.full.len(),
                    suffix = flat.suffix.len(),
                    keyword = flat.keyword.len(),
                    regex = flat.regex.len(),
                    tagged = flat.tagged.len(),
                    "resolved list"
                );
                entry.state = ResolveState::Resolved(flat.clone());
                Ok(flat)
            }
            Err(e) => {
                entry.state = ResolveState::Unresolved;
                Err(e)
            }
        }
    }

    fn flatten(
        &mut self,
        id: &FileId,
        directives: &[InclusionDirective],
        path: &mut Vec<FileId>,
    ) -> Result<FlattenedCollection, CompileError> {
        let mut included = Vec::with_capacity(directives.len());
        for directive in directives {
            if !self.contains(&directive.target) {
                return Err(CompileError::UnresolvedInclusion {
                    file: id.clone(),
                    directive: directive.raw.clone(),
                });
            }
            let target = self.resolve_on_path(&directive.target, path)?;
            included.push((directive, target));
        }

        let raw = self
            .raw(id)
            .ok_or_else(|| CompileError::UnknownFile { id: id.clone() })?;
        Ok(merge(raw, &included))
    }
}

/// Ordered list that drops exact repeats.
#[derive(Default)]
struct UniqueRules {
    seen: FxHashSet<RuleRecord>,
    rules: Vec<RuleRecord>,
}

impl UniqueRules {
    fn extend<'a>(&mut self, rules: impl IntoIterator<Item = &'a RuleRecord>) {
        for rule in rules {
            if self.seen.insert(rule.clone()) {
                self.rules.push(rule.clone());
            }
        }
    }

    fn into_vec(self) -> Vec<RuleRecord> {
        self.rules
    }
}

/// Combine a list's own rules with its resolved inclusions.
fn merge(
    raw: &FileRawCollection,
    included: &[(&InclusionDirective, Arc<FlattenedCollection>)],
) -> FlattenedCollection {
    let mut full = UniqueRules::default();
    let mut keyword = UniqueRules::default();
    let mut regex = UniqueRules::default();
    let mut tagged = UniqueRules::default();
    let mut suffix_candidates = Vec::new();

    full.extend(&raw.full);
    keyword.extend(&raw.keyword);
    regex.extend(&raw.regex);
    tagged.extend(&raw.tagged);

    for (directive, target) in included {
        match &directive.filter {
            None => {
                full.extend(&target.full);
                keyword.extend(&target.keyword);
                regex.extend(&target.regex);
                suffix_candidates.extend(target.suffix.iter().cloned());
                tagged.extend(&target.tagged);
            }
            Some(filter) => tagged.extend(target.tagged.matching(filter)),
        }
    }

    suffix_candidates.extend(raw.suffix.iter().cloned());

    FlattenedCollection {
        full: full.into_vec(),
        suffix: dedup_suffixes(suffix_candidates),
        keyword: keyword.into_vec(),
        regex: regex.into_vec(),
        tagged: tagged.into_vec().into_iter().collect(),
    }
}
