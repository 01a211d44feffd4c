#![allow(dead_code)]

use keytravel::geometry::{Finger, FingerAssignment, Marker};
use keytravel::layout::{Key, Layout};
use keytravel::optimizer::SearchInputs;

/// Builder for Key to clean up tests
pub struct KeyBuilder {
    key: Key,
}

impl KeyBuilder {
    pub fn new(c: char) -> Self {
        Self {
            key: Key {
                x: 0.0,
                y: 0.0,
                character: Some(c),
                finger: Finger::LeftIndex,
            },
        }
    }

    pub fn empty() -> Self {
        let mut b = Self::new(' ');
        b.key.character = None;
        b
    }

    pub fn pos(mut self, x: f32, y: f32) -> Self {
        self.key.x = x;
        self.key.y = y;
        self
    }

    pub fn finger(mut self, finger: Finger) -> Self {
        self.key.finger = finger;
        self
    }

    pub fn build(self) -> Key {
        self.key
    }
}

/// The 3-4-5 layout: 'a' at the origin, 'b' at (3, 4), one finger.
pub fn triangle_layout() -> Layout {
    vec![
        KeyBuilder::new('a').pos(0.0, 0.0).finger(Finger::LeftIndex).build(),
        KeyBuilder::new('b').pos(3.0, 4.0).finger(Finger::LeftIndex).build(),
    ]
}

/// Ten markers on a row, alternating hands every five keys.
pub fn row_inputs(chars: &str) -> SearchInputs {
    let fingers = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::LeftIndex,
        Finger::RightIndex,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];
    let mut assignment = FingerAssignment::new();
    for (i, f) in fingers.iter().enumerate() {
        assignment.insert(i, *f);
    }

    SearchInputs::builder()
        .markers((0..10).map(|i| Marker::new(i as f32 * 20.0, 0.0)).collect())
        .finger_assignment(assignment)
        .allowed_characters(chars)
        .build()
}

/// Two markers on different index fingers, pool "ab".
pub fn two_finger_inputs() -> SearchInputs {
    let mut assignment = FingerAssignment::new();
    assignment.insert(0, Finger::LeftIndex);
    assignment.insert(1, Finger::RightIndex);

    SearchInputs::builder()
        .markers(vec![Marker::new(0.0, 0.0), Marker::new(10.0, 0.0)])
        .finger_assignment(assignment)
        .allowed_characters("ab")
        .build()
}

pub const SAMPLE_TEXT: &str = "the quick brown fox jumps over the lazy dog";
