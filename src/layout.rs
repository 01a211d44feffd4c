use crate::error::{KeyTravelError, KtResult};
use crate::geometry::Finger;
use crate::scorer::Scorer;
use std::collections::HashSet;

/// Placeholder shown for a marker without a character.
pub const EMPTY_LABEL: char = '_';

/// One marker slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Key {
    pub x: f32,
    pub y: f32,
    /// `None` means no character is assigned to this slot.
    pub character: Option<char>,
    pub finger: Finger,
}

impl Key {
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Keys indexed by marker slot.
pub type Layout = Vec<Key>;

/// A layout together with its travel distance.
///
/// The only constructor scores the layout, so `distance` always belongs to
/// `layout`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLayout {
    layout: Layout,
    distance: f32,
}

impl ScoredLayout {
    pub fn new(layout: Layout, scorer: &Scorer) -> Self {
        let distance = scorer.distance(&layout);
        Self { layout, distance }
    }

    pub fn layout(&self) -> &[Key] {
        &self.layout
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn into_layout(self) -> Layout {
        self.layout
    }
}

/// Renders the characters in slot order, `_` for empty slots.
pub fn layout_string(layout: &[Key]) -> String {
    layout
        .iter()
        .map(|k| k.character.unwrap_or(EMPTY_LABEL))
        .collect()
}

/// Checks that no character occupies more than one slot.
pub fn validate(layout: &[Key]) -> KtResult<()> {
    let mut seen = HashSet::new();
    for (slot, key) in layout.iter().enumerate() {
        if let Some(c) = key.character {
            if !seen.insert(c) {
                return Err(KeyTravelError::InvalidLayout(format!(
                    "character '{}' assigned twice (again at slot {})",
                    c, slot
                )));
            }
        }
    }
    Ok(())
}

/// Characters of `allowed` that no slot of `layout` carries, in pool order.
pub fn missing_characters(layout: &[Key], allowed: &[char]) -> Vec<char> {
    let present: HashSet<char> = layout.iter().filter_map(|k| k.character).collect();
    allowed
        .iter()
        .copied()
        .filter(|c| !present.contains(c))
        .collect()
}
