use claw_context_core::{Message, SessionAnalyzer};
use claw_context_memory::MemoryFormatter;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn synthetic_session(turns: usize) -> Vec<Message> {
    let mut messages = vec![Message::system("You are a helpful assistant.")];
    for i in 0..turns {
        messages.push(Message::user(format!(
            "I prefer rust. Please install crate {} and search the docs.",
            i
        )));
        messages.push(Message::assistant(format!(
            "Done.\n- installed crate {}\n✅ tests pass\nWe decided to use cargo.",
            i
        )));
    }
    messages
}

fn bench_analyze_500_messages(c: &mut Criterion) {
    let analyzer = SessionAnalyzer::default();
    let messages = synthetic_session(250);

    c.bench_function("analyze_500_messages", |b| {
        b.iter(|| analyzer.analyze(black_box(&messages)));
    });
}

fn bench_compress_500_messages(c: &mut Criterion) {
    let analyzer = SessionAnalyzer::default();
    let messages = synthetic_session(250);

    c.bench_function("compress_500_messages", |b| {
        b.iter(|| analyzer.compress(black_box(&messages), 50));
    });
}

fn bench_full_sync_render(c: &mut Criterion) {
    let analyzer = SessionAnalyzer::default();
    let formatter = MemoryFormatter::default();
    let messages = synthetic_session(250);

    c.bench_function("analyze_and_render_markdown", |b| {
        b.iter(|| {
            let context = analyzer.analyze(black_box(&messages));
            let entry = formatter.context_to_memory(&context);
            formatter.to_markdown(&entry)
        });
    });
}

criterion_group!(
    benches,
    bench_analyze_500_messages,
    bench_compress_500_messages,
    bench_full_sync_render
);
criterion_main!(benches);
