// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for document conversion and a full bind pass.
//!
//! Measures the per-page-load cost of:
//! - Converting the fetched locale document into the lookup tree
//! - Resolving a realistic batch of tag bindings

use cloudlang::i18n::{bind_tags, LocaleContext, LocaleNode, TagBinding};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_document() -> String {
    let mut xml = String::from(
        "<content><default>en</default>\
         <languages><en>English</en><zh>中文</zh><fr>Français</fr></languages>",
    );
    for i in 0..200 {
        xml.push_str(&format!(
            "<item id=\"key{i}\"><en>value {i}</en><zh>值 {i}</zh><fr>valeur {i}</fr></item>"
        ));
    }
    xml.push_str("</content>");
    xml
}

fn conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    let xml = sample_document();

    group.bench_function("convert_document", |b| {
        b.iter(|| {
            let _ = black_box(LocaleNode::from_xml(&xml).unwrap());
        });
    });

    group.finish();
}

fn bind_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let document = LocaleNode::from_xml(&sample_document()).unwrap();
    let mut context = LocaleContext::from_document(&document);
    context.set_current("zh");

    let bindings: Vec<TagBinding> = (0..200)
        .map(|i| TagBinding::text(format!("#el{i}"), format!("key{i}")))
        .collect();

    group.bench_function("bind_200_tags", |b| {
        b.iter(|| {
            let _ = black_box(bind_tags(&bindings, &context));
        });
    });

    group.finish();
}

criterion_group!(benches, conversion_benchmark, bind_pass_benchmark);
criterion_main!(benches);
