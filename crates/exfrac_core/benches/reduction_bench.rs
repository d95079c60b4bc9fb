//! Canonicalization and arithmetic throughput.
//!
//! Measures the constructor's gcd-reduction path and a chained arithmetic
//! workload, on word-sized and multi-word operands.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use exfrac_core::Fraction;
use num_bigint::BigInt;

fn bench_canonicalize(c: &mut Criterion) {
    c.bench_function("new_word_sized", |b| {
        b.iter(|| Fraction::new(black_box(123_456i64), black_box(654_321i64)).expect("non-zero"))
    });

    let num = BigInt::from(1_234_567_891_011_121_314i64).pow(8);
    let den = BigInt::from(987_654_321_098_765_432i64).pow(8);
    c.bench_function("new_multi_word", |b| {
        b.iter(|| Fraction::new(black_box(num.clone()), black_box(den.clone())).expect("non-zero"))
    });
}

fn bench_arithmetic(c: &mut Criterion) {
    let a = Fraction::new(355, 113).expect("non-zero");
    let b_ = Fraction::new(-22, 7).expect("non-zero");
    c.bench_function("add_mul_div_chain", |b| {
        b.iter(|| {
            let sum = black_box(&a) + black_box(&b_);
            let product = &sum * &a;
            product.checked_div(&b_).expect("non-zero divisor")
        })
    });
}

criterion_group!(benches, bench_canonicalize, bench_arithmetic);
criterion_main!(benches);
