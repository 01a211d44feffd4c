use criterion::{criterion_group, criterion_main, Criterion};
use keytravel::config::SearchParams;
use keytravel::geometry::{Finger, FingerAssignment, Marker};
use keytravel::layout::ScoredLayout;
use keytravel::optimizer::{generate_random_layout, make_rng, GenerationalSearch, SearchInputs};
use keytravel::scorer::{calculate_distance, Scorer};
use std::hint::black_box;

const CHARS: &str = "etaoinshrdlcumwfgypbvkjxqz.,";

fn setup_inputs() -> SearchInputs {
    let fingers: Vec<Finger> = Finger::assignable().collect();
    let mut markers = Vec::new();
    let mut assignment = FingerAssignment::new();
    for r in 0..3 {
        for c in 0..10 {
            let idx = markers.len();
            markers.push(Marker::new(c as f32 * 40.0 + r as f32 * 10.0, r as f32 * 40.0));
            assignment.insert(idx, fingers[(c as usize).min(fingers.len() - 1)]);
        }
    }
    SearchInputs::builder()
        .markers(markers)
        .finger_assignment(assignment)
        .allowed_characters(CHARS)
        .build()
}

fn setup_text() -> String {
    "the quick brown fox jumps over the lazy dog, then naps. ".repeat(200)
}

fn bench_distance(c: &mut Criterion) {
    let inputs = setup_inputs();
    let text = setup_text();
    let layout = generate_random_layout(&inputs, &mut make_rng(Some(1)));

    c.bench_function("calculate_distance_11k_chars", |b| {
        b.iter(|| calculate_distance(black_box(&layout), black_box(&text)))
    });
}

fn bench_generation(c: &mut Criterion) {
    let params = SearchParams {
        seed: Some(7),
        ..Default::default()
    };
    let mut search = GenerationalSearch::new(setup_inputs(), Scorer::new(setup_text()), params)
        .expect("valid params");
    let noop = |_: usize, _: &ScoredLayout| {};

    c.bench_function("generation_tick_pop50", |b| {
        b.iter(|| search.tick(&mut || false, &noop))
    });
}

criterion_group!(benches, bench_distance, bench_generation);
criterion_main!(benches);
