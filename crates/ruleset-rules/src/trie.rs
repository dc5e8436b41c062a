//! Reverse-label domain trie for suffix deduplication.
//!
//! Labels are walked right to left (`com` → `example` → `mail`). A terminal
//! node covers everything below it, so once `example.com` is accepted any
//! later `mail.example.com` is rejected as redundant.
//!
//! Insertion order matters: callers must feed values in ascending label
//! count (see [`dedup_suffixes`]), otherwise a subdomain inserted before
//! its parent stays accepted.

use rustc_hash::FxHashMap;

use crate::rule::RuleRecord;

#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    children: FxHashMap<String, Node>,
}

/// Trie deciding whether a suffix rule is already covered.
#[derive(Debug, Default)]
pub struct DomainTrie {
    root: Node,
    accepted: usize,
}

impl DomainTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a domain. Returns `false` if it equals, or is a subdomain of,
    /// a previously accepted value.
    pub fn insert(&mut self, domain: &str) -> bool {
        let mut node = &mut self.root;
        for label in domain.rsplit('.') {
            if node.terminal {
                return false;
            }
            node = node.children.entry(label.to_string()).or_default();
        }
        if node.terminal {
            return false;
        }

        node.terminal = true;
        // Anything deeper is now covered by this node.
        node.children = FxHashMap::default();
        self.accepted += 1;
        true
    }

    /// Whether `domain` is covered by an accepted value, without inserting.
    pub fn covers(&self, domain: &str) -> bool {
        let mut node = &self.root;
        for label in domain.rsplit('.') {
            if node.terminal {
                return true;
            }
            match node.children.get(label) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of accepted values.
    pub fn len(&self) -> usize {
        self.accepted
    }

    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }
}

/// Sort suffix rules by ascending label count and drop every rule covered
/// by a less specific one. Equal label counts keep their input order.
pub fn dedup_suffixes(mut candidates: Vec<RuleRecord>) -> Vec<RuleRecord> {
    candidates.sort_by_key(RuleRecord::label_count);

    let mut trie = DomainTrie::new();
    candidates.retain(|rule| trie.insert(&rule.value));
    candidates
}
