//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortenit::utils::url_validator::validate_url;
use shortenit::utils::{generate_random_code, is_valid_shortcode};

// ============== is_valid_shortcode 基准测试 ==============

fn bench_is_valid_shortcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/is_valid_shortcode");

    group.bench_function("valid_simple", |b| {
        b.iter(|| {
            assert!(is_valid_shortcode("abc123"));
        });
    });

    group.bench_function("invalid_space", |b| {
        b.iter(|| {
            assert!(!is_valid_shortcode("bad code!"));
        });
    });

    let long_code = "a".repeat(256);
    group.bench_function("valid_long", |b| {
        b.iter(|| {
            assert!(is_valid_shortcode(&long_code));
        });
    });

    group.finish();
}

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_random_code");

    for length in [4usize, 6, 12, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            b.iter(|| generate_random_code(len));
        });
    }

    group.finish();
}

// ============== validate_url 基准测试 ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    group.bench_function("valid_https", |b| {
        b.iter(|| {
            assert!(validate_url("https://example.com/path?query=1").is_ok());
        });
    });

    group.bench_function("invalid_relative", |b| {
        b.iter(|| {
            assert!(validate_url("not-a-url").is_err());
        });
    });

    group.bench_function("invalid_no_host", |b| {
        b.iter(|| {
            assert!(validate_url("mailto:someone@example.com").is_err());
        });
    });

    let long_url = format!("https://example.com/{}", "a".repeat(1000));
    group.bench_function("valid_long_url", |b| {
        b.iter(|| {
            assert!(validate_url(&long_url).is_ok());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_is_valid_shortcode,
    bench_generate_random_code,
    bench_validate_url,
);
criterion_main!(benches);
