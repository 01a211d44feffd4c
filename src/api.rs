use crate::config::SearchParams;
use crate::error::{KeyTravelError, KtResult};
use crate::geometry::KeyboardDefinition;
use crate::layout::{self, Key, Layout, ScoredLayout, EMPTY_LABEL};
use crate::optimizer::{self, ProgressCallback, SearchInputs};
use crate::scorer::{FingerTravel, Scorer};
use tracing::{info, warn};

/// Search inputs and fitness handle built from a layout file and a text.
pub struct PreparedSearch {
    pub inputs: SearchInputs,
    pub scorer: Scorer,
}

/// Validates a layout definition against a text sample.
///
/// Both the text and the character pool are trimmed and must not be empty.
/// Finger assignments for markers that do not exist are dropped.
pub fn prepare(def: &KeyboardDefinition, text: &str) -> KtResult<PreparedSearch> {
    let text = text.trim();
    let allowed = def.allowed_characters.trim();

    if text.is_empty() {
        return Err(KeyTravelError::Validation(
            "Text sample is empty".to_string(),
        ));
    }
    if allowed.is_empty() {
        return Err(KeyTravelError::Validation(
            "Allowed characters are empty".to_string(),
        ));
    }

    let mut fingers = def.marker_fingers.clone();
    let marker_count = def.marker_count();
    fingers.retain(|&idx, finger| {
        let keep = idx < marker_count;
        if !keep {
            warn!(
                "Ignoring finger '{}' for marker {} (only {} markers)",
                finger, idx, marker_count
            );
        }
        keep
    });

    let inputs = SearchInputs::builder()
        .markers(def.markers.clone())
        .finger_assignment(fingers)
        .allowed_characters(allowed)
        .build();

    if inputs.allowed_characters.len() != allowed.chars().count() {
        warn!("Allowed characters contain duplicates; using each character once");
    }
    if inputs.allowed_characters.len() < marker_count {
        info!(
            "{} characters for {} markers; {} markers stay empty",
            inputs.allowed_characters.len(),
            marker_count,
            marker_count - inputs.allowed_characters.len()
        );
    }

    Ok(PreparedSearch {
        inputs,
        scorer: Scorer::new(text),
    })
}

/// Random sampling of `params.population_size` layouts.
pub fn optimize_once(
    def: &KeyboardDefinition,
    text: &str,
    params: &SearchParams,
) -> KtResult<ScoredLayout> {
    params.validate()?;
    let prepared = prepare(def, text)?;
    let mut rng = optimizer::make_rng(params.seed);

    let best = optimizer::run_once(
        &prepared.inputs,
        &prepared.scorer,
        params.population_size,
        &mut rng,
    )?;
    info!("Best sampled distance: {:.2}", best.distance());
    Ok(best)
}

/// Generational search until `is_cancelled` returns true (or
/// `params.max_generations` is reached).
pub fn optimize_iterative<C, CB>(
    def: &KeyboardDefinition,
    text: &str,
    params: &SearchParams,
    callback: &CB,
    is_cancelled: C,
) -> KtResult<ScoredLayout>
where
    C: FnMut() -> bool,
    CB: ProgressCallback + ?Sized,
{
    let prepared = prepare(def, text)?;
    optimizer::run_iterative(
        prepared.inputs,
        prepared.scorer,
        params.clone(),
        callback,
        is_cancelled,
    )
}

/// Builds a layout from one character per marker (`_` or space = empty).
pub fn layout_from_assignment(def: &KeyboardDefinition, characters: &str) -> KtResult<Layout> {
    let chars: Vec<char> = characters.chars().collect();
    if chars.len() > def.marker_count() {
        return Err(KeyTravelError::Validation(format!(
            "{} characters given for {} markers",
            chars.len(),
            def.marker_count()
        )));
    }

    let layout: Layout = def
        .markers
        .iter()
        .enumerate()
        .map(|(i, m)| Key {
            x: m.x,
            y: m.y,
            character: chars
                .get(i)
                .copied()
                .filter(|&c| c != EMPTY_LABEL && c != ' '),
            finger: def.finger_for(i),
        })
        .collect();

    layout::validate(&layout)?;
    Ok(layout)
}

/// Scores a fixed assignment against the text.
pub fn score_assignment(
    def: &KeyboardDefinition,
    text: &str,
    characters: &str,
) -> KtResult<(Layout, FingerTravel)> {
    let layout = layout_from_assignment(def, characters)?;
    let travel = Scorer::new(text.trim()).finger_travel(&layout);
    Ok((layout, travel))
}
