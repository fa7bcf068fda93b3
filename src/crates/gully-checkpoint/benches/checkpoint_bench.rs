use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gully_checkpoint::{Checkpoint, CheckpointSaver, InMemorySaver};
use serde_json::json;

fn checkpoint_save_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("checkpoint save", |b| {
        b.to_async(&runtime).iter(|| async {
            let saver = InMemorySaver::new();
            let checkpoint = Checkpoint::new(
                "bench-session",
                1,
                json!({"messages": [{"role": "human", "content": "hello"}], "model_calls": 1}),
            );

            saver.put(black_box(checkpoint)).await.unwrap();
        });
    });
}

fn checkpoint_load_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("checkpoint load", |b| {
        b.to_async(&runtime).iter(|| async {
            let saver = InMemorySaver::new();
            let checkpoint = Checkpoint::new(
                "bench-session",
                1,
                json!({"messages": [{"role": "human", "content": "hello"}], "model_calls": 1}),
            );

            saver.put(checkpoint).await.unwrap();
            saver.get(black_box("bench-session")).await.unwrap();
        });
    });
}

criterion_group!(benches, checkpoint_save_benchmark, checkpoint_load_benchmark);
criterion_main!(benches);
