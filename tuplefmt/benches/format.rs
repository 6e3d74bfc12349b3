use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;
use tuplefmt::{format_to, sink::Span, to_string, tupled};

fn flat(c: &mut Criterion) {
    let value = (1u64, 2.5f64, 'c', "text", true);
    let mut group = c.benchmark_group("flat");
    group.bench_function("to_string", |b| b.iter(|| to_string(black_box(&value))));
    group.bench_function("format!", |b| {
        b.iter(|| {
            let (a, f, c, s, t) = black_box(&value);
            format!("({}, {}, {}, {}, {})", a, f, c, s, *t as u8)
        })
    });
    group.bench_function("span", |b| {
        let mut buf = [0; 64];
        b.iter(|| {
            let mut out = Span::new(&mut buf);
            format_to(&mut out, black_box(&value)).map(|out| out.len())
        })
    });
    group.finish();
}

fn nested(c: &mut Criterion) {
    let value = ([[1u8; 4]; 4], ((1, 2), (3, (4, 5))), [(); 8]);
    let mut group = c.benchmark_group("nested");
    group.bench_function("to_string", |b| b.iter(|| to_string(black_box(&value))));
    group.bench_function("tupled", |b| {
        let mut out = String::with_capacity(256);
        b.iter(|| {
            out.clear();
            write!(out, "{}", tupled(black_box(&value)))
        })
    });
    group.finish();
}

criterion_group!(benches, flat, nested);
criterion_main!(benches);
