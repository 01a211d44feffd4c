use crate::error::KtResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A fixed key position on the keyboard template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
}

impl Marker {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
    Either,
}

/// Finger responsible for a marker. The string forms are the labels
/// stored in the layout JSON files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Finger {
    #[strum(serialize = "Left Pinky")]
    #[serde(rename = "Left Pinky")]
    LeftPinky,
    #[strum(serialize = "Left Ring")]
    #[serde(rename = "Left Ring")]
    LeftRing,
    #[strum(serialize = "Left Middle")]
    #[serde(rename = "Left Middle")]
    LeftMiddle,
    #[strum(serialize = "Left Index")]
    #[serde(rename = "Left Index")]
    LeftIndex,
    #[strum(serialize = "Right Index")]
    #[serde(rename = "Right Index")]
    RightIndex,
    #[strum(serialize = "Right Middle")]
    #[serde(rename = "Right Middle")]
    RightMiddle,
    #[strum(serialize = "Right Ring")]
    #[serde(rename = "Right Ring")]
    RightRing,
    #[strum(serialize = "Right Pinky")]
    #[serde(rename = "Right Pinky")]
    RightPinky,
    Thumbs,
    /// Sentinel for markers without an assignment. All such markers
    /// share this one finger. Saved files may spell it as an empty label.
    #[default]
    #[serde(alias = "")]
    Unknown,
}

impl Finger {
    /// The fingers a user may assign to a marker.
    pub fn assignable() -> impl Iterator<Item = Finger> {
        Finger::iter().filter(|f| *f != Finger::Unknown)
    }

    pub fn hand(&self) -> Hand {
        match self {
            Self::LeftPinky | Self::LeftRing | Self::LeftMiddle | Self::LeftIndex => Hand::Left,
            Self::RightIndex | Self::RightMiddle | Self::RightRing | Self::RightPinky => {
                Hand::Right
            }
            Self::Thumbs | Self::Unknown => Hand::Either,
        }
    }
}

/// Marker index -> finger. Indices without an entry resolve to `Finger::Unknown`.
pub type FingerAssignment = BTreeMap<usize, Finger>;

pub fn assigned_finger(assignment: &FingerAssignment, index: usize) -> Finger {
    assignment.get(&index).copied().unwrap_or(Finger::Unknown)
}

/// The saved layout file: marker positions, the character pool and finger
/// assignments. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardDefinition {
    pub markers: Vec<Marker>,
    pub allowed_characters: String,
    pub marker_fingers: FingerAssignment,
}

impl KeyboardDefinition {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KtResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> KtResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> KtResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn finger_for(&self, index: usize) -> Finger {
        assigned_finger(&self.marker_fingers, index)
    }
}
