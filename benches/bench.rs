use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ngram_suggest::config::SuggesterConfig;
use ngram_suggest::suggester::Suggester;

fn generate_words(count: usize) -> Vec<String> {
    let syllables = ["ba", "lu", "to", "ri", "ne", "sa", "ko", "me", "di", "gu"];
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i + 7;
            for _ in 0..4 {
                word.push_str(syllables[n % syllables.len()]);
                n /= 3;
            }
            word
        })
        .collect()
}

fn bench_suggest(c: &mut Criterion) {
    let words = generate_words(1000);
    let suggester = Suggester::new(&words, SuggesterConfig::default()).unwrap();

    let mut group = c.benchmark_group("suggest");

    group.bench_function("build_1000", |b| {
        b.iter(|| Suggester::new(black_box(&words), SuggesterConfig::default()).unwrap())
    });

    group.bench_function("known_word", |b| {
        b.iter(|| suggester.suggest(black_box(&words[42])))
    });

    group.bench_function("unknown_word", |b| {
        b.iter(|| suggester.suggest(black_box("lutorisa")))
    });

    group.finish();
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
