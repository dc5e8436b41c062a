//! Domain-list rule compiler for ruleset.
//!
//! Compiles a directory of plain-text domain lists (the `domain-list`
//! format: `full:`, `domain:`, `keyword:`, `regexp:` rules with `@attr`
//! tags and `include:` lines) into one canonical, deduplicated rule set
//! per list, ready to be transcoded by `ruleset-export`.
//!
//! # Architecture
//!
//! - **Parser**: one file's text → [`FileRawCollection`]
//! - **Registry**: every parsed list keyed by [`FileId`], plus its
//!   resolution state
//! - **Resolver**: flattens `include:` lines recursively with cycle
//!   detection and memoization
//! - **Trie**: [`DomainTrie`] drops suffix rules covered by a parent domain
//! - **Assembler**: orders the flattened list and applies per-list
//!   attribute exclusion, producing a [`CompiledRuleSet`]
//!
//! # Example
//!
//! ```
//! use ruleset_rules::{ExclusionConfig, FileId, Registry, RuleKind};
//!
//! let mut registry = Registry::from_sources([
//!     ("a", "example.com\nmail.example.com"),
//!     ("b", "include:a\ndirect.net\nfull:host.test @ads"),
//! ])
//! .unwrap();
//! registry.resolve_all().unwrap();
//!
//! let mut exclusion = ExclusionConfig::new();
//! exclusion.exclude("b", ["ads"]);
//!
//! let set = registry.compile(&FileId::new("b"), &exclusion).unwrap();
//! let suffixes: Vec<_> = set.of_kind(RuleKind::Suffix).map(|r| r.value.as_str()).collect();
//! assert_eq!(suffixes, ["example.com", "direct.net"]);
//! assert_eq!(set.of_kind(RuleKind::Full).count(), 0);
//! ```

pub mod assembler;
pub mod error;
pub mod parser;
pub mod provider;
pub mod registry;
mod resolver;
pub mod rule;
pub mod tagged;
pub mod trie;

pub use assembler::{CompiledRuleSet, ExclusionConfig, assemble};
pub use error::{CompileError, ParseErrorKind};
pub use parser::{FileRawCollection, parse_list};
pub use provider::DirProvider;
pub use registry::{FlattenedCollection, Registry};
pub use rule::{FileId, InclusionDirective, RuleKind, RuleRecord, TagSet};
pub use tagged::TaggedRules;
pub use trie::{DomainTrie, dedup_suffixes};
