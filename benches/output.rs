use criterion::{Criterion, criterion_group, criterion_main};
use gitdoc::log::{MemorySink, Printer};
use std::hint::black_box;
use std::sync::Arc;

fn bench_emit(c: &mut Criterion) {
    let sink = Arc::new(MemorySink::new());
    let base = Printer::new().with_sink(sink.clone());
    let mut group = c.benchmark_group("Printer::info");

    let plain = base.with_disable_color();
    group.bench_function("plain", |b| {
        b.iter(|| plain.info(format_args!("converted {}", black_box("report.docx"))));
        sink.clear();
    });

    group.bench_function("colored", |b| {
        b.iter(|| base.info(format_args!("converted {}", black_box("report.docx"))));
        sink.clear();
    });

    let traced = base.with_enable_trace();
    group.bench_function("trace", |b| {
        b.iter(|| traced.info(format_args!("converted {}", black_box("report.docx"))));
        sink.clear();
    });

    let inline = base.with_inline();
    group.bench_function("inline", |b| {
        b.iter(|| inline.normal(format_args!("enter the commit message:")));
        sink.clear();
    });
    group.finish();
}

fn bench_trace_gate(c: &mut Criterion) {
    let sink = Arc::new(MemorySink::new());
    let printer = Printer::new().with_sink(sink);
    c.bench_function("Printer::trace (disabled)", |b| {
        b.iter(|| printer.trace(format_args!("exec: {}", black_box("git status"))));
    });
}

criterion_group!(benches, bench_emit, bench_trace_gate);
criterion_main!(benches);
