pub mod engine;
pub mod types;

pub use self::engine::{calculate_distance, finger_travel};
pub use self::types::{FingerStats, FingerTravel};

use crate::layout::Key;

/// Fitness handle for the optimizer: a text sample and the cost model
/// applied to it.
#[derive(Debug, Clone)]
pub struct Scorer {
    text: String,
}

impl Scorer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fast path used by the search loop.
    pub fn distance(&self, layout: &[Key]) -> f32 {
        engine::calculate_distance(layout, &self.text)
    }

    /// Detailed breakdown for reports.
    pub fn finger_travel(&self, layout: &[Key]) -> FingerTravel {
        engine::finger_travel(layout, &self.text)
    }
}
