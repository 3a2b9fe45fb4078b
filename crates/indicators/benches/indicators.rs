use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use tadesk_indicators::{
    bollinger_bands, dema, ema, frama, macd, rsi, sma, stochastic_oscillator, DEFAULT_W,
};

/// Deterministic jagged price path; no RNG so runs are comparable.
fn price_walk(len: usize) -> Vec<f64> {
    let mut prices = Vec::with_capacity(len);
    let mut p = 100.0;
    for i in 0..len {
        let step = ((i as u64).wrapping_mul(2654435761) % 1000) as f64 / 1000.0 - 0.5;
        p += step;
        prices.push(p);
    }
    prices
}

fn engine_benchmarks(c: &mut Criterion) {
    let data = price_walk(1000);
    let mut group = c.benchmark_group("engines");
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("sma20", |b| b.iter(|| sma(20, black_box(&data))));
    group.bench_function("ema20", |b| b.iter(|| ema(20, black_box(&data))));
    group.bench_function("dema20", |b| b.iter(|| dema(20, black_box(&data))));
    group.bench_function("frama16", |b| {
        b.iter(|| frama(16, black_box(&data), DEFAULT_W))
    });
    group.bench_function("rsi14", |b| b.iter(|| rsi(14, black_box(&data))));
    group.bench_function("stoch14", |b| {
        b.iter(|| stochastic_oscillator(14, black_box(&data)))
    });
    group.bench_function("macd12_26", |b| b.iter(|| macd(12, 26, black_box(&data))));
    group.bench_function("bb20", |b| {
        b.iter(|| bollinger_bands(20, black_box(&data), 2.0))
    });

    group.finish();
}

criterion_group!(benches, engine_benchmarks);
criterion_main!(benches);
