use criterion::{criterion_group, criterion_main, Criterion};
use keywalk_core::api;
use keywalk_core::config::ScoreWeights;
use keywalk_core::keymap;
use keywalk_core::profile;
use std::hint::black_box;

fn setup_wordlist() -> Vec<String> {
    let seeds = [
        "qwerty123",
        "1qaz2wsx",
        "Password2024",
        "xK9#mQ2$vL",
        "zxcvbnm",
        "correct horse battery staple",
    ];
    (0..500)
        .map(|i| format!("{}{}", seeds[i % seeds.len()], i))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let weights = ScoreWeights::default();
    let map = keymap::build_coord_map("qwerty");

    c.bench_function("analyze (keyboard walk)", |b| {
        b.iter(|| api::analyze_with_map(black_box("1qaz2wsx3edc"), &map, &weights))
    });

    c.bench_function("analyze (random-looking)", |b| {
        b.iter(|| api::analyze_with_map(black_box("xK9#mQ2$vL8&"), &map, &weights))
    });

    let lines = setup_wordlist();
    c.bench_function("batch (500 lines)", |b| {
        b.iter(|| api::analyze_batch(black_box(&lines), "qwerty", &weights))
    });

    c.bench_function("profile (500 lines)", |b| {
        b.iter(|| profile::analyze_profile(black_box(&lines), "qwerty"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
