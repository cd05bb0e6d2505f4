//! Benchmarks for markup toggling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use togglemark::markup::{Style, toggle};
use togglemark::text::Selection;

fn bench_toggle_bold(c: &mut Criterion) {
    let text = "hello world";
    c.bench_function("toggle_bold", |b| {
        b.iter(|| toggle(Style::Bold, black_box(text), Selection::new(0, 5)))
    });
}

fn bench_toggle_quote_large(c: &mut Criterion) {
    let text = "a line of prose that goes on for a while\n".repeat(500);
    let end = text.encode_utf16().count();
    c.bench_function("toggle_quote_large", |b| {
        b.iter(|| toggle(Style::Quote, black_box(&text), Selection::new(0, end)))
    });
}

fn bench_toggle_heading_deep(c: &mut Criterion) {
    let text = format!("{}#### Title", "intro\n".repeat(1000));
    let start = text.encode_utf16().count() - 2;
    c.bench_function("toggle_heading_deep", |b| {
        b.iter(|| toggle(Style::Heading, black_box(&text), Selection::caret(start)))
    });
}

criterion_group!(
    benches,
    bench_toggle_bold,
    bench_toggle_quote_large,
    bench_toggle_heading_deep
);
criterion_main!(benches);
