use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;

use vec86_core::catalog::TEST_OPERANDS;
use vec86_core::flags::Flags;
use vec86_core::{alu, run};

fn bench_full_matrix(c: &mut Criterion) {
    c.bench_function("full_matrix_text", |b| {
        b.iter(|| {
            let count = run(&mut io::sink()).unwrap();
            black_box(count)
        })
    });
}

fn bench_adapters(c: &mut Criterion) {
    c.bench_function("add16_all_pairs", |b| {
        b.iter(|| {
            let mut acc = 0u16;
            for w in TEST_OPERANDS.windows(2) {
                let mut f = Flags::from_bits(0);
                acc = acc.wrapping_add(alu::add16(&mut f, w[0], w[1]));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_full_matrix, bench_adapters);
criterion_main!(benches);
