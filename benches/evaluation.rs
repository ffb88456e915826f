use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polish_calc::{tokenize, CachedEvaluator, Evaluator};

/// Benchmark a single-operator expression
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = Evaluator::new();
    let expr = "+ 2 3";
    let tokens = tokenize(expr).unwrap();

    group.bench_function("prefix_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("pretokenized_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_tokens(black_box(&tokens)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box("2 + 3")).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box("2.0 + 3.0")).unwrap())
    });
}

/// Benchmark nested groups, which exercise the recursive path
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = Evaluator::new();
    let mut cached = CachedEvaluator::default();
    let expr = "+ (/ (* (+ 10 20) 3) (- 4 1)) 5";
    let infix = "(10 + 20) * 3 / (4 - 1) + 5";

    group.bench_function("prefix_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("cached_complex_arithmetic", |b| {
        b.iter(|| cached.evaluate(black_box(expr)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(infix)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box("(10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0")).unwrap())
    });
}

/// Benchmark parallel evaluation of many expressions
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let evaluator = Evaluator::new();
    let expressions: Vec<String> = (0..1000)
        .map(|i| format!("+ (* {} 2) (- {} 1)", i, i))
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| evaluator.evaluate_batch(black_box(&expressions)))
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            black_box(&expressions)
                .iter()
                .map(|expression| evaluator.evaluate(expression))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_batch,
);
criterion_main!(benches);
