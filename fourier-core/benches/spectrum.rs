use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fourier_demo::signal::{synthesize, SynthConfig};
use fourier_demo::spectrum::SpectrumAnalyzer;

fn bench_analyze(c: &mut Criterion) {
    let config = SynthConfig {
        noise_seed: Some(7),
        ..Default::default()
    };
    let series = synthesize(&config).unwrap();
    let mut analyzer = SpectrumAnalyzer::new(series.len(), config.sample_rate).unwrap();

    c.bench_function("analyze_2000_samples", |b| {
        b.iter(|| analyzer.analyze(black_box(&series.amplitudes)).unwrap())
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
