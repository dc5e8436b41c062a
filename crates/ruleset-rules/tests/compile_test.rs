//! End-to-end tests for the rule compiler.
//!
//! These tests cover the full path from a data directory on disk to the
//! compiled rule set of each list:
//! - Directory loading and parsing
//! - Inclusion resolution (plain, filtered, transitive)
//! - Suffix deduplication
//! - Attribute exclusion
#![allow(clippy::tests_outside_test_module)]

use std::fs;
use std::path::Path;

use ruleset_rules::{
    CompileError, CompiledRuleSet, DirProvider, ExclusionConfig, FileId, Registry, RuleKind,
};

fn write_lists(dir: &Path, lists: &[(&str, &str)]) {
    for (name, content) in lists {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn values(set: &CompiledRuleSet, kind: RuleKind) -> Vec<String> {
    set.of_kind(kind).map(|r| r.value.clone()).collect()
}

fn compile_dir(lists: &[(&str, &str)], exclusion: &ExclusionConfig) -> Registry {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path(), lists);
    let mut registry = DirProvider::load(dir.path()).unwrap();
    registry.resolve_all().unwrap();
    // Every list must compile once the registry is resolved.
    for id in registry.ids() {
        registry.compile(id, exclusion).unwrap();
    }
    registry
}

#[test]
fn realistic_data_directory() {
    let lists = [
        (
            "google",
            "\
# Google
google.com
www.google.com
googleapis.cn @cn
full:dl.google.com @cn @ads
keyword:googlevideo
",
        ),
        (
            "google-ads",
            "\
doubleclick.net @ads
googlesyndication.com @ads
",
        ),
        (
            "geolocation-cn",
            "\
include:google @cn
include:cn
",
        ),
        ("cn", "example.cn\nmail.example.cn\nads.example.cn @ads\n"),
        (
            "geolocation-!cn",
            "\
include:google
include:google-ads
github.com
",
        ),
    ];

    let mut exclusion = ExclusionConfig::new();
    exclusion.exclude("geolocation-cn", ["ads"]);
    exclusion.exclude("geolocation-!cn", ["cn"]);

    let registry = compile_dir(&lists, &exclusion);

    let gcn = registry
        .compile(&FileId::new("geolocation-cn"), &exclusion)
        .unwrap();
    assert_eq!(values(&gcn, RuleKind::Suffix), ["example.cn", "googleapis.cn"]);
    // dl.google.com carries @ads, which is excluded for this list.
    assert!(values(&gcn, RuleKind::Full).is_empty());
    assert!(values(&gcn, RuleKind::Keyword).is_empty());

    let gncn = registry
        .compile(&FileId::new("geolocation-!cn"), &exclusion)
        .unwrap();
    assert_eq!(
        values(&gncn, RuleKind::Suffix),
        [
            "google.com",
            "github.com",
            "doubleclick.net",
            "googlesyndication.com"
        ]
    );
    assert!(values(&gncn, RuleKind::Full).is_empty());
    assert_eq!(values(&gncn, RuleKind::Keyword), ["googlevideo"]);
}

#[test]
fn chained_include_with_exclusion() {
    let mut exclusion = ExclusionConfig::new();
    exclusion.exclude("c", ["ads"]);
    let registry = compile_dir(
        &[
            ("a", "example.com\nmail.example.com\n"),
            ("b", "include:a\ndirect.net\n"),
            ("c", "full:host.test @cn @ads\n"),
        ],
        &exclusion,
    );

    let a = registry.compile(&FileId::new("a"), &exclusion).unwrap();
    assert_eq!(values(&a, RuleKind::Suffix), ["example.com"]);

    let b = registry.compile(&FileId::new("b"), &exclusion).unwrap();
    assert_eq!(values(&b, RuleKind::Suffix), ["example.com", "direct.net"]);

    let c = registry.compile(&FileId::new("c"), &exclusion).unwrap();
    assert!(values(&c, RuleKind::Full).is_empty());
}

#[test]
fn filter_pulls_exactly_matching_tags() {
    let registry = compile_dir(
        &[
            ("x", "plain.com\none.com @cn\ntwo.com @cn @ads\nthree.com @ads\n"),
            ("y", "include:x @cn\n"),
        ],
        &ExclusionConfig::new(),
    );
    let y = registry
        .compile(&FileId::new("y"), &ExclusionConfig::new())
        .unwrap();
    assert_eq!(values(&y, RuleKind::Suffix), ["one.com", "two.com"]);
    assert!(y.iter().all(|r| r.tags.contains("cn")));
}

#[test]
fn cycle_in_directory_fails_whole_compilation() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(
        dir.path(),
        &[
            ("ok", "fine.com\n"),
            ("p", "include:q\n"),
            ("q", "include:r\n"),
            ("r", "include:p\n"),
        ],
    );
    let mut registry = DirProvider::load(dir.path()).unwrap();
    let err = registry.resolve_all().unwrap_err();
    assert!(matches!(err, CompileError::CyclicInclusion { .. }));
    assert!(err.to_string().starts_with("cyclic inclusion: P -> Q -> R -> P"));
}

#[test]
fn include_of_missing_list() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path(), &[("a", "include:ghost\n")]);
    let mut registry = DirProvider::load(dir.path()).unwrap();
    let err = registry.resolve_all().unwrap_err();
    assert_eq!(err.to_string(), "A: included list not found: include:ghost");
}

#[test]
fn resolution_order_does_not_matter() {
    let sources = [
        ("top", "include:mid\ntop.com\n"),
        ("mid", "include:leaf\nmid.com\nsub.top.com\n"),
        ("leaf", "leaf.com\nfull:leaf.io @cn\n"),
    ];

    let mut forward = Registry::from_sources(sources).unwrap();
    forward.resolve_all().unwrap();

    let mut backward = Registry::from_sources(sources).unwrap();
    for name in ["leaf", "mid", "top"] {
        backward.resolve(&FileId::new(name)).unwrap();
    }

    for name in ["top", "mid", "leaf"] {
        let id = FileId::new(name);
        assert_eq!(
            forward.compile(&id, &ExclusionConfig::new()).unwrap(),
            backward.compile(&id, &ExclusionConfig::new()).unwrap()
        );
    }
}
