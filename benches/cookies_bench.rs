use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pageanalytics::cookies::codec;
use pageanalytics::cookies::jar::MemoryCookieJar;
use pageanalytics::deferred::DeferredOptionsChannel;
use serde_json::json;

fn benchmark_codec(c: &mut Criterion) {
    let options = json!({"dimension5": "search", "dimension15": "404", "nonInteraction": 1});
    let encoded = codec::encode("analytics_next_page_call", &options).unwrap();

    c.bench_function("cookie_encode", |b| {
        b.iter(|| codec::encode(black_box("analytics_next_page_call"), black_box(&options)))
    });
    c.bench_function("cookie_decode", |b| {
        b.iter(|| codec::decode(black_box("analytics_next_page_call"), black_box(&encoded)))
    });
}

fn benchmark_stash_and_consume(c: &mut Criterion) {
    let channel = DeferredOptionsChannel::new(MemoryCookieJar::new());

    c.bench_function("deferred_stash_consume", |b| {
        b.iter(|| {
            channel.stash_for_next_pageview(black_box(&json!({"a": 1})));
            channel.stash_for_next_pageview(black_box(&json!({"b": 2})));
            black_box(channel.consume_stashed());
        })
    });
}

criterion_group!(benches, benchmark_codec, benchmark_stash_and_consume);
criterion_main!(benches);
