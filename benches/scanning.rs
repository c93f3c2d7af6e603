//! Performance benchmarks for ferrolink
//!
//! Run with: cargo bench --bench scanning

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ferrolink::{Autolinker, Input, autolink, find_links};

/// Sample texts of various sizes and link densities
mod samples {
    pub const TINY: &str = "Go to djangoproject.com!";

    pub const SMALL: &str = "Questions? Mail info@djangoproject.org or see \
        https://docs.djangoproject.com/en/stable/ (the docs).";

    /// Prose with a link every few sentences
    pub fn prose() -> String {
        let paragraph = "The release notes live at https://example.com/releases/1.2 and \
            the tracker at www.example.org/issues?state=open. Write to \
            dev@example.com if something breaks, or ping the mirror at \
            [2001:db8::7]:8080/status. Nothing else here looks like a link, \
            not even file.rs or version 1.2.3.\n\n";
        paragraph.repeat(60)
    }

    /// Text with no link candidates at all
    pub fn plain() -> String {
        "Hello, this is plain text without any link markers in it; just words ".repeat(100)
    }

    /// Already-escaped text full of character references
    pub fn entity_heavy() -> String {
        "&lt;a&gt; &amp;&quot;x.com/?a=1&amp;b=2&quot; &lt;me@example.com&gt; ".repeat(100)
    }

    /// Words made only of trimmable punctuation and brackets
    pub fn pathological_brackets() -> String {
        let word = format!("{}x.com{}", "([{<\"'".repeat(50), ")]}>\"'.,".repeat(50));
        format!("{word} ").repeat(20)
    }

    /// One very long word just under the scan limit
    pub fn long_word() -> String {
        format!("http://example.com/{}", "a.".repeat(1000))
    }
}

fn bench_autolink(c: &mut Criterion) {
    let mut group = c.benchmark_group("autolink");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| b.iter(|| autolink(black_box(samples::TINY))));

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| b.iter(|| autolink(black_box(samples::SMALL))));

    let prose = samples::prose();
    group.throughput(Throughput::Bytes(prose.len() as u64));
    group.bench_function("prose", |b| b.iter(|| autolink(black_box(prose.as_str()))));

    let plain = samples::plain();
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain", |b| b.iter(|| autolink(black_box(plain.as_str()))));

    let entities = samples::entity_heavy();
    group.throughput(Throughput::Bytes(entities.len() as u64));
    group.bench_function("safe_entities", |b| {
        b.iter(|| autolink(Input::Safe(black_box(&entities))))
    });

    group.finish();
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    let prose = samples::prose();
    group.throughput(Throughput::Bytes(prose.len() as u64));
    group.bench_function("find_links", |b| {
        b.iter(|| find_links(Input::Raw(black_box(&prose))))
    });

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let html_heavy = "<script>alert('xss')</script> & more <tags> here! ".repeat(100);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("html_heavy", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(html_heavy.len() * 2);
            ferrolink::escape::escape_into(&mut out, black_box(html_heavy.as_bytes()));
            out
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let brackets = samples::pathological_brackets();
    group.throughput(Throughput::Bytes(brackets.len() as u64));
    group.bench_function("bracket_runs", |b| {
        b.iter(|| autolink(black_box(brackets.as_str())))
    });

    let long = samples::long_word();
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("long_word", |b| b.iter(|| autolink(black_box(long.as_str()))));

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::prose();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| autolink(black_box(input.as_str())))
    });

    group.bench_function("with_reuse", |b| {
        let linker = Autolinker::default();
        let mut buffer = Vec::with_capacity(input.len() * 2);
        b.iter(|| {
            linker.process_into(black_box(input.as_str()), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_autolink,
    bench_scanning,
    bench_escaping,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
