//! 注册表与批量提交基准测试

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use shortenit::services::{ShortenerService, ShortenerSettings, TelemetryReporter};
use shortenit::storage::{ShortLinkRequest, ShortlinkRegistry};

fn batch(size: usize) -> Vec<ShortLinkRequest> {
    (0..size)
        .map(|i| ShortLinkRequest::new(format!("https://site{}.example.com/path", i), 30))
        .collect()
}

/// 预先填充 `existing` 条记录的注册表
fn populated_registry(existing: usize) -> ShortlinkRegistry {
    let mut registry = ShortlinkRegistry::default();
    let now = chrono::Utc::now();
    for _ in 0..existing / 5 {
        registry.insert_batch(batch(5), now);
    }
    registry
}

fn bench_insert_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/insert_batch");

    for existing in [0usize, 1_000, 10_000] {
        let base = populated_registry(existing);
        group.bench_with_input(
            BenchmarkId::new("five_urls", existing),
            &existing,
            |b, _| {
                b.iter_batched(
                    || (base_clone(&base), batch(5)),
                    |(mut registry, requests)| registry.insert_batch(requests, chrono::Utc::now()),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// 注册表持有 `Box<dyn CodeGenerator>`，无法 Clone，这里按相同内容重建
fn base_clone(base: &ShortlinkRegistry) -> ShortlinkRegistry {
    let mut registry = ShortlinkRegistry::default();
    let now = chrono::Utc::now();
    let requests: Vec<_> = base
        .records()
        .iter()
        .map(|r| {
            ShortLinkRequest::new(r.url.clone(), r.validity_minutes)
                .with_shortcode(r.shortcode.clone())
        })
        .collect();
    registry.insert_batch(requests, now);
    registry
}

fn bench_service_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("service/submit");

    let fresh_service =
        || ShortenerService::new(ShortenerSettings::default(), TelemetryReporter::disabled());

    group.bench_function("valid_batch_of_five", |b| {
        b.iter_batched(
            || (fresh_service(), batch(5)),
            |(service, requests)| {
                let result = service.submit(requests);
                (service, result)
            },
            BatchSize::SmallInput,
        );
    });

    let invalid = {
        let mut requests = batch(4);
        requests.push(ShortLinkRequest::new("not-a-url", 30));
        requests
    };
    let service = fresh_service();
    group.bench_function("rejected_batch", |b| {
        b.iter_batched(
            || invalid.clone(),
            |requests| service.submit(requests),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert_batch, bench_service_submit);
criterion_main!(benches);
