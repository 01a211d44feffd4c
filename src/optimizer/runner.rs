use super::crossover::breed_generation;
use super::{initialize_population, make_rng, sort_population, SearchInputs};
use crate::config::SearchParams;
use crate::error::{KeyTravelError, KtResult};
use crate::layout::{self, ScoredLayout};
use crate::scorer::Scorer;
use fastrand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Stopped,
}

/// Receives the best layout of the current generation every
/// `report_interval` generations.
pub trait ProgressCallback {
    fn on_progress(&self, generation: usize, best: &ScoredLayout);
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, &ScoredLayout),
{
    fn on_progress(&self, generation: usize, best: &ScoredLayout) {
        self(generation, best)
    }
}

/// The generational search as an explicit state machine. Each `tick` runs
/// exactly one generation: sort, breed, report.
pub struct GenerationalSearch {
    inputs: SearchInputs,
    scorer: Scorer,
    params: SearchParams,
    population: Vec<ScoredLayout>,
    best_ever: Option<ScoredLayout>,
    generation: usize,
    state: SearchState,
    rng: Rng,
}

impl GenerationalSearch {
    pub fn new(inputs: SearchInputs, scorer: Scorer, params: SearchParams) -> KtResult<Self> {
        params.validate()?;

        let mut rng = make_rng(params.seed);
        let population = initialize_population(&inputs, &scorer, params.population_size, &mut rng);

        Ok(Self {
            inputs,
            scorer,
            params,
            population,
            best_ever: None,
            generation: 0,
            state: SearchState::Running,
            rng,
        })
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn population(&self) -> &[ScoredLayout] {
        &self.population
    }

    /// Lowest distance seen so far, including the current population.
    pub fn best(&self) -> Option<&ScoredLayout> {
        self.best_ever
            .iter()
            .chain(self.population.iter())
            .min_by(|a, b| a.distance().total_cmp(&b.distance()))
    }

    fn stop(&mut self, reason: &str) -> SearchState {
        info!("Search stopped at generation {} ({})", self.generation, reason);
        self.state = SearchState::Stopped;
        self.state
    }

    /// Runs one generation unless the search is stopped or `is_cancelled`
    /// returns true. Cancellation is only checked here, before any work.
    pub fn tick<C, CB>(&mut self, is_cancelled: &mut C, callback: &CB) -> SearchState
    where
        C: FnMut() -> bool,
        CB: ProgressCallback + ?Sized,
    {
        if self.state == SearchState::Stopped {
            return self.state;
        }
        if is_cancelled() {
            return self.stop("cancelled");
        }
        if let Some(max) = self.params.max_generations {
            if self.generation >= max {
                return self.stop("generation limit");
            }
        }

        sort_population(&mut self.population);

        let current_best = &self.population[0];
        let improved = self
            .best_ever
            .as_ref()
            .is_none_or(|b| current_best.distance() < b.distance());
        if improved {
            self.best_ever = Some(current_best.clone());
        }

        let repair_pool = if self.params.repair_children {
            Some(self.inputs.allowed_characters.as_slice())
        } else {
            None
        };
        let next = breed_generation(&self.population, &self.scorer, repair_pool, &mut self.rng);

        self.generation += 1;

        debug!(
            "Gen {:6} | Best: {:.2} | Worst: {:.2} | Invalid children: {}",
            self.generation,
            self.population[0].distance(),
            self.population[self.population.len() - 1].distance(),
            next.iter()
                .filter(|c| layout::validate(c.layout()).is_err())
                .count()
        );

        if self.generation % self.params.report_interval == 0 {
            callback.on_progress(self.generation, &self.population[0]);
        }

        self.population = next;
        self.state
    }

    fn into_best(self) -> KtResult<ScoredLayout> {
        self.best()
            .cloned()
            .ok_or_else(|| KeyTravelError::Validation("population is empty".to_string()))
    }
}

/// Runs generations back to back until cancelled or the generation limit is
/// hit. Returns the best layout seen.
pub fn run_iterative<C, CB>(
    inputs: SearchInputs,
    scorer: Scorer,
    params: SearchParams,
    callback: &CB,
    mut is_cancelled: C,
) -> KtResult<ScoredLayout>
where
    C: FnMut() -> bool,
    CB: ProgressCallback + ?Sized,
{
    let mut search = GenerationalSearch::new(inputs, scorer, params)?;
    info!(
        "Generational search: {} markers, population {}",
        search.inputs.marker_count(),
        search.population.len()
    );

    while search.tick(&mut is_cancelled, callback) == SearchState::Running {}

    search.into_best()
}

/// Same as `run_iterative`, but yields to the tokio scheduler after every
/// generation so other tasks (signal handlers, UI updates) keep running.
pub async fn run_iterative_async<C, CB>(
    inputs: SearchInputs,
    scorer: Scorer,
    params: SearchParams,
    callback: &CB,
    mut is_cancelled: C,
) -> KtResult<ScoredLayout>
where
    C: FnMut() -> bool,
    CB: ProgressCallback + ?Sized,
{
    let mut search = GenerationalSearch::new(inputs, scorer, params)?;
    info!(
        "Generational search (async): {} markers, population {}",
        search.inputs.marker_count(),
        search.population.len()
    );

    while search.tick(&mut is_cancelled, callback) == SearchState::Running {
        tokio::task::yield_now().await;
    }

    search.into_best()
}
