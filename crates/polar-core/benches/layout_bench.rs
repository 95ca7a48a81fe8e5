use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polar_core::{label_placement, LayoutParams};

fn gen_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1.0 + (i as f64 * 0.37).sin().abs() * 6.0 + i as f64 * 0.001).collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[16usize, 150usize, 1_000usize] {
        let values = gen_values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, v| {
            b.iter(|| {
                let p = LayoutParams::compute(black_box(v), 90.0, 350.0, None).unwrap();
                let mut acc = 0.0f64;
                for (i, &value) in v.iter().enumerate() {
                    let angle = p.label_angle(i);
                    let place = label_placement(angle, "label", Some(value));
                    acc += place.rotation + p.radius(value);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
