use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridloom::prelude::*;

const BW: u32 = 64;
const BH: u32 = 48;

fn rule_fill_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules/fill");
    group.throughput(criterion::Throughput::Elements(BW as u64 * BH as u64));

    let rect = Rect::new(16, 8, BW, BH);
    let params = FillParams::default();

    for kind in RuleKind::ALL {
        let mut bitmap = vec![0u8; (BW * BH) as usize];
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.as_str()),
            &kind,
            |b, &kind| {
                let mut t = 0.0f32;
                b.iter(|| {
                    t = (t + 0.01) % 1.0;
                    let mut rng = Mulberry32::new(777);
                    fill_rule(kind, &mut bitmap, BW, BH, rect, t, &mut rng, &params);
                    black_box(bitmap[0]);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, rule_fill_benches);
criterion_main!(benches);
