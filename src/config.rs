use crate::error::{KeyTravelError, KtResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Individuals per generation.
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Generations between two progress reports.
pub const DEFAULT_REPORT_INTERVAL: usize = 10;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    pub population_size: usize,

    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    pub report_interval: usize,

    /// Stop the generational search after this many generations.
    /// Without it the search only stops when cancelled.
    #[arg(long)]
    pub max_generations: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Resolve duplicated/missing characters in crossover children.
    #[arg(long, default_value_t = false)]
    pub repair_children: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            report_interval: DEFAULT_REPORT_INTERVAL,
            max_generations: None,
            seed: None,
            repair_children: false,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KtResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: SearchParams = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> KtResult<()> {
        if self.population_size == 0 {
            return Err(KeyTravelError::Config(
                "population_size must be at least 1".to_string(),
            ));
        }
        if self.report_interval == 0 {
            return Err(KeyTravelError::Config(
                "report_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
