//! Benchmarks for parsing, suffix deduplication and resolution.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ruleset_rules::{
    ExclusionConfig, FileId, Registry, RuleKind, RuleRecord, dedup_suffixes, parse_list,
};

/// A list of `n` domains where roughly a third are subdomains of others.
fn synthetic_list(n: usize) -> String {
    let mut out = String::with_capacity(n * 24);
    for i in 0..n {
        match i % 3 {
            0 => out.push_str(&format!("site{i}.com\n")),
            1 => out.push_str(&format!("cdn.site{}.com\n", i - 1)),
            _ => out.push_str(&format!("full:api{i}.example.org @cn\n")),
        }
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list");
    for n in [1_000, 10_000, 100_000] {
        let content = synthetic_list(n);
        let id = FileId::new("bench");
        group.bench_with_input(BenchmarkId::from_parameter(n), &content, |b, content| {
            b.iter(|| parse_list(&id, black_box(content)).unwrap())
        });
    }
    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_suffixes");
    for n in [1_000, 10_000, 100_000] {
        let rules: Vec<RuleRecord> = (0..n)
            .map(|i| match i % 2 {
                0 => RuleRecord::untagged(RuleKind::Suffix, &format!("a{}.b{}.com", i, i % 97)),
                _ => RuleRecord::untagged(RuleKind::Suffix, &format!("b{}.com", i % 97)),
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &rules, |b, rules| {
            b.iter(|| dedup_suffixes(black_box(rules.clone())))
        });
    }
    group.finish();
}

fn bench_resolve_chain(c: &mut Criterion) {
    // A 50-deep include chain, each list with 200 own domains.
    let sources: Vec<(String, String)> = (0..50)
        .map(|i| {
            let mut content = String::new();
            if i + 1 < 50 {
                content.push_str(&format!("include:list{}\n", i + 1));
            }
            for j in 0..200 {
                content.push_str(&format!("d{j}.list{i}.net\n"));
            }
            (format!("list{i}"), content)
        })
        .collect();

    c.bench_function("resolve_chain_50", |b| {
        b.iter(|| {
            let mut registry = Registry::from_sources(sources.iter().cloned()).unwrap();
            registry.resolve_all().unwrap();
            registry
                .compile(&FileId::new("list0"), &ExclusionConfig::new())
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_parse, bench_dedup, bench_resolve_chain);
criterion_main!(benches);
