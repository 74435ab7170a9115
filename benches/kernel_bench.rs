use criterion::{Criterion, black_box, criterion_group, criterion_main};
use deci_kernel::UBigInt;
use deci_kernel::kernel;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let a: UBigInt = "1234567890123456789012345678901234567890".parse().unwrap();
    let b: UBigInt = "9876543210987654321098765432109876543210".parse().unwrap();

    group.bench_function("add_256_digit", |bencher| {
        bencher.iter(|| {
            let mut wa = black_box(a.clone()).into_words();
            wa.push(0);
            let overflow = kernel::add(&mut wa, black_box(b.words()));
            black_box(overflow)
        })
    });

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    let a: UBigInt = "1234567890123456789012345678901234567890".parse().unwrap();
    let b: UBigInt = "9876543210987654321098765432109876543210".parse().unwrap();

    group.bench_function("mul_256_digit_schoolbook", |bencher| {
        bencher.iter(|| {
            let mut out = vec![0; a.words().len() + b.words().len()];
            kernel::mul(black_box(a.words()), black_box(b.words()), &mut out);
            black_box(out)
        })
    });

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    let a: UBigInt = "123456789012345678901234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    let b: UBigInt = "998877665544332211998877665544".parse().unwrap();

    group.bench_function("div_knuth_d", |bencher| {
        bencher.iter(|| {
            let mut wa = black_box(a.clone()).into_words();
            let len = kernel::div(&mut wa, black_box(b.words()));
            black_box(len)
        })
    });

    group.finish();
}

fn bench_parse_and_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("parse_decimal_40_digit", |bencher| {
        bencher.iter(|| {
            black_box(
                black_box("12345678901234567890123456789012345678")
                    .parse::<UBigInt>()
                    .unwrap(),
            )
        })
    });

    let n: UBigInt = "12345678901234567890123456789012345678".parse().unwrap();
    group.bench_function("to_decimal_string_40_digit", |bencher| {
        bencher.iter(|| black_box(black_box(&n).to_decimal_string()))
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_div, bench_parse_and_display);
criterion_main!(benches);
