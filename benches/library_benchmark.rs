use rand::{SeedableRng, rngs::StdRng};

use pwcompose::{
    random_string::random_string, CharClass, ClassGenerator, CompositeGenerator,
    PasswordGenerator, Settings,
};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark_random_string(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("random_string 64", |b| {
        b.iter(|| random_string(&mut rng, 64, CharClass::LowerLetter.alphabet()))
    });
}

fn criterion_benchmark_standard_composite(c: &mut Criterion) {
    let settings = Settings::new(16).unwrap();
    let generator = CompositeGenerator::standard(&settings);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("standard composite 16", |b| {
        b.iter(|| generator.generate_with(&mut rng))
    });
}

fn criterion_benchmark_long_composite(c: &mut Criterion) {
    let generator: CompositeGenerator = [
        CharClass::Digit,
        CharClass::Symbol,
        CharClass::UpperLetter,
        CharClass::LowerLetter,
    ]
    .into_iter()
    .map(|class| ClassGenerator::with_length(class, 128).unwrap())
    .collect();

    c.bench_function("composite 128", |b| b.iter(|| generator.generate()));
}

criterion_group!(
    benches,
    criterion_benchmark_random_string,
    criterion_benchmark_standard_composite,
    criterion_benchmark_long_composite
);
criterion_main!(benches);
