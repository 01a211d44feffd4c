pub mod crossover;
pub mod runner;

pub use self::crossover::{breed_generation, crossover, repair};
pub use self::runner::{
    run_iterative, run_iterative_async, GenerationalSearch, ProgressCallback, SearchState,
};

use crate::error::{KeyTravelError, KtResult};
use crate::geometry::{assigned_finger, Finger, FingerAssignment, Marker};
use crate::layout::{Key, Layout, ScoredLayout};
use crate::scorer::Scorer;
use fastrand::Rng;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Everything the search reads but never changes.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SearchInputs {
    pub markers: Vec<Marker>,
    #[builder(default)]
    pub finger_assignment: FingerAssignment,
    /// Distinct characters, in first-seen order.
    #[builder(setter(transform = |chars: &str| distinct_chars(chars)))]
    pub allowed_characters: Vec<char>,
}

impl SearchInputs {
    pub fn finger_for(&self, index: usize) -> Finger {
        assigned_finger(&self.finger_assignment, index)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Drops repeated characters, keeping the first occurrence.
pub fn distinct_chars(chars: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for c in chars.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

pub fn make_rng(seed: Option<u64>) -> Rng {
    if let Some(s) = seed {
        Rng::with_seed(s)
    } else {
        Rng::new()
    }
}

/// Assigns characters to markers in slot order, drawing each one uniformly
/// from the remaining pool. Slots left over once the pool is empty stay empty.
pub fn generate_random_layout(inputs: &SearchInputs, rng: &mut Rng) -> Layout {
    let mut pool = inputs.allowed_characters.clone();

    inputs
        .markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let character = if pool.is_empty() {
                None
            } else {
                Some(pool.remove(rng.usize(0..pool.len())))
            };
            Key {
                x: marker.x,
                y: marker.y,
                character,
                finger: inputs.finger_for(i),
            }
        })
        .collect()
}

/// Builds `population_size` random, scored layouts (unsorted).
pub fn initialize_population(
    inputs: &SearchInputs,
    scorer: &Scorer,
    population_size: usize,
    rng: &mut Rng,
) -> Vec<ScoredLayout> {
    (0..population_size)
        .map(|_| ScoredLayout::new(generate_random_layout(inputs, rng), scorer))
        .collect()
}

/// Best first. Ties keep their relative order.
pub fn sort_population(population: &mut [ScoredLayout]) {
    population.sort_by(|a, b| a.distance().total_cmp(&b.distance()));
}

/// Pure random sampling: one population, no recombination.
pub fn run_once(
    inputs: &SearchInputs,
    scorer: &Scorer,
    population_size: usize,
    rng: &mut Rng,
) -> KtResult<ScoredLayout> {
    if population_size == 0 {
        return Err(KeyTravelError::Config(
            "population_size must be at least 1".to_string(),
        ));
    }

    let mut population = initialize_population(inputs, scorer, population_size, rng);
    sort_population(&mut population);

    debug!(
        "Sampled {} layouts: best {:.2}, worst {:.2}",
        population.len(),
        population[0].distance(),
        population[population.len() - 1].distance()
    );

    Ok(population.swap_remove(0))
}
