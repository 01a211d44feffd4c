use super::types::FingerTravel;
use crate::geometry::Finger;
use crate::layout::Key;
use std::collections::HashMap;

/// Builds char -> key lookup. When a character sits on several keys the
/// first one in slot order wins.
fn build_char_map(layout: &[Key]) -> HashMap<char, &Key> {
    let mut map = HashMap::with_capacity(layout.len());
    for key in layout {
        if let Some(c) = key.character {
            map.entry(c).or_insert(key);
        }
    }
    map
}

#[inline(always)]
fn euclid(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Walks the text keystroke by keystroke.
/// `on_press` receives the finger and the travel of that press
/// (`None` on the finger's first press). Returns the number of skipped
/// characters.
fn walk<F>(layout: &[Key], text: &str, mut on_press: F) -> usize
where
    F: FnMut(Finger, Option<f32>),
{
    let char_map = build_char_map(layout);
    let mut last_pos: HashMap<Finger, (f32, f32)> = HashMap::new();
    let mut skipped = 0;

    for c in text.chars() {
        let Some(key) = char_map.get(&c) else {
            skipped += 1;
            continue;
        };

        let pos = key.position();
        let travel = last_pos.insert(key.finger, pos).map(|prev| euclid(prev, pos));
        on_press(key.finger, travel);
    }

    skipped
}

/// Total Euclidean finger travel needed to type `text` on `layout`.
///
/// Unmapped characters are skipped. A finger's first press only records its
/// position.
pub fn calculate_distance(layout: &[Key], text: &str) -> f32 {
    let mut total = 0.0;
    walk(layout, text, |_, travel| {
        if let Some(d) = travel {
            total += d;
        }
    });
    total
}

/// Per-finger version of `calculate_distance`.
pub fn finger_travel(layout: &[Key], text: &str) -> FingerTravel {
    let mut breakdown = FingerTravel::default();
    let skipped = walk(layout, text, |finger, travel| {
        breakdown.record(finger, travel.unwrap_or(0.0));
    });
    breakdown.skipped_chars = skipped;
    breakdown
}
