criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_thread_move,
        sampling_seeded_move,
        comparing_moves,
        comparing_tokens,
        parsing_greeting,
}

fn sampling_thread_move(c: &mut criterion::Criterion) {
    c.bench_function("draw a Move from the thread generator", |b| {
        b.iter(|| generate_move())
    });
}

fn sampling_seeded_move(c: &mut criterion::Criterion) {
    let mut player = Random::seeded(0);
    c.bench_function("draw a Move from a seeded Player", |b| {
        b.iter(|| player.decide())
    });
}

fn comparing_moves(c: &mut criterion::Criterion) {
    c.bench_function("compare all 9 Move pairs", |b| {
        b.iter(|| {
            Move::ALL
                .iter()
                .flat_map(|a| Move::ALL.iter().map(move |x| a.compare(*x)))
                .map(i8::from)
                .sum::<i8>()
        })
    });
}

fn comparing_tokens(c: &mut criterion::Criterion) {
    c.bench_function("parse and compare two move tokens", |b| {
        b.iter(|| compare(criterion::black_box("rock"), criterion::black_box("scissors")))
    });
}

fn parsing_greeting(c: &mut criterion::Criterion) {
    c.bench_function("parse a Greeting frame", |b| {
        b.iter(|| criterion::black_box("hello 3").parse::<Greeting>())
    });
}

use rochambeau::*;
