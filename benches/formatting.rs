use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tintlog::{ColorSpec, ColorTarget, Level, Logger};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::render");

    let mut log = Logger::new(Level::Debug, false);
    log.show_time = false;
    group.bench_function("plain", |b| {
        b.iter(|| log.render(black_box(Level::Info), black_box("Application started")));
    });

    let mut log = Logger::new(Level::Debug, true);
    log.show_time = false;
    for target in [ColorTarget::Level, ColorTarget::Message, ColorTarget::Full] {
        log.color_target = target;
        group.bench_function(target.as_str(), |b| {
            b.iter(|| log.render(black_box(Level::Warn), black_box("Connection timeout")));
        });
    }

    group.finish();
}

fn bench_render_with_timestamp(c: &mut Criterion) {
    let log = Logger::new(Level::Debug, false);
    c.bench_function("Logger::render timestamped", |b| {
        b.iter(|| log.render(black_box(Level::Info), black_box("Application started")));
    });
}

fn bench_wrap(c: &mut Criterion) {
    let spec = ColorSpec::yellow();
    c.bench_function("ColorSpec::wrap", |b| {
        b.iter(|| spec.wrap(black_box("Low disk space on /var")));
    });
}

criterion_group!(benches, bench_render, bench_render_with_timestamp, bench_wrap);
criterion_main!(benches);
