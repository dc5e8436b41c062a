//! The registry of parsed lists and their resolution state.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::CompileError;
use crate::parser::{FileRawCollection, parse_list};
use crate::rule::{FileId, RuleKind, RuleRecord};
use crate::tagged::TaggedRules;

/// A list after every inclusion has been pulled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedCollection {
    pub full: Vec<RuleRecord>,
    /// Untagged suffix rules with covered subdomains removed.
    pub suffix: Vec<RuleRecord>,
    pub keyword: Vec<RuleRecord>,
    pub regex: Vec<RuleRecord>,
    /// Own and included tagged rules, first-seen order, no duplicates.
    pub tagged: TaggedRules,
}

impl FlattenedCollection {
    /// Untagged rules of one kind.
    pub fn untagged(&self, kind: RuleKind) -> &[RuleRecord] {
        match kind {
            RuleKind::Full => &self.full,
            RuleKind::Suffix => &self.suffix,
            RuleKind::Keyword => &self.keyword,
            RuleKind::Regex => &self.regex,
        }
    }

    /// Tagged rules of one kind, in order.
    pub fn tagged_of(&self, kind: RuleKind) -> impl Iterator<Item = &RuleRecord> {
        self.tagged.of_kind(kind)
    }

    pub fn rule_count(&self) -> usize {
        self.full.len()
            + self.suffix.len()
            + self.keyword.len()
            + self.regex.len()
            + self.tagged.len()
    }
}

/// Per-list resolution state.
#[derive(Debug, Clone)]
pub(crate) enum ResolveState {
    Unresolved,
    /// On the current resolution path; reaching it again is a cycle.
    Resolving,
    Resolved(Arc<FlattenedCollection>),
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) raw: FileRawCollection,
    pub(crate) state: ResolveState,
}

/// All lists of a data directory, keyed by [`FileId`].
///
/// Filled during the parse phase, mutated only by resolution, read-only
/// once every list is resolved.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) entries: FxHashMap<FileId, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a set of in-memory `(name, content)` sources.
    pub fn from_sources<I, N, C>(sources: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut registry = Self::new();
        for (name, content) in sources {
            let id = FileId::new(name.as_ref());
            let raw = parse_list(&id, content.as_ref())?;
            registry.insert(id, raw)?;
        }
        Ok(registry)
    }

    /// Add a parsed list. Two lists with the same id are an error.
    pub fn insert(&mut self, id: FileId, raw: FileRawCollection) -> Result<(), CompileError> {
        if self.entries.contains_key(&id) {
            return Err(CompileError::DuplicateFile { id });
        }
        self.entries.insert(
            id,
            Entry {
                raw,
                state: ResolveState::Unresolved,
            },
        );
        Ok(())
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List ids in sorted order.
    pub fn ids(&self) -> Vec<&FileId> {
        let mut ids: Vec<_> = self.entries.keys().collect();
        ids.sort();
        ids
    }

    /// The list as parsed.
    pub fn raw(&self, id: &FileId) -> Option<&FileRawCollection> {
        self.entries.get(id).map(|e| &e.raw)
    }

    /// The flattened list, if it has been resolved.
    pub fn flattened(&self, id: &FileId) -> Option<&FlattenedCollection> {
        match &self.entries.get(id)?.state {
            ResolveState::Resolved(flat) => Some(flat.as_ref()),
            _ => None,
        }
    }

    pub fn is_resolved(&self, id: &FileId) -> bool {
        self.flattened(id).is_some()
    }
}
