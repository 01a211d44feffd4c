use crate::geometry::Finger;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FingerStats {
    pub presses: usize,
    pub distance: f32,
}

/// Travel broken down by finger.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FingerTravel {
    pub per_finger: BTreeMap<Finger, FingerStats>,
    // Characters of the text with no key in the layout
    pub skipped_chars: usize,
    // Accumulated in keystroke order, like `calculate_distance`
    total: f32,
}

impl FingerTravel {
    pub fn record(&mut self, finger: Finger, distance: f32) {
        let stats = self.per_finger.entry(finger).or_default();
        stats.presses += 1;
        stats.distance += distance;
        self.total += distance;
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn presses(&self, finger: Finger) -> usize {
        self.per_finger.get(&finger).map_or(0, |s| s.presses)
    }

    pub fn total_presses(&self) -> usize {
        self.per_finger.values().map(|s| s.presses).sum()
    }
}
