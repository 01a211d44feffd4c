use crate::layout::{missing_characters, Key, Layout, ScoredLayout};
use crate::scorer::Scorer;
use fastrand::Rng;
use std::collections::{HashSet, VecDeque};

/// Single-point crossover: slots before a random cut come from `p1`,
/// the rest from `p2`.
///
/// The child is not guaranteed to be a permutation; a character can end up
/// on two slots or disappear. See `repair`.
pub fn crossover(p1: &[Key], p2: &[Key], rng: &mut Rng) -> Layout {
    let len = p1.len();
    debug_assert_eq!(len, p2.len(), "Parents must have same length");

    if len == 0 {
        return Vec::new();
    }

    let cut = rng.usize(0..len);
    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(&p1[..cut]);
    child.extend_from_slice(&p2[cut..]);
    child
}

/// Resolves duplicated characters: the second and later occurrences are
/// replaced by characters of `allowed` the layout lacks (pool order), or
/// cleared when none are left.
pub fn repair(mut layout: Layout, allowed: &[char]) -> Layout {
    let mut missing: VecDeque<char> = missing_characters(&layout, allowed).into();
    let mut seen = HashSet::with_capacity(layout.len());

    for key in layout.iter_mut() {
        if let Some(c) = key.character {
            if !seen.insert(c) {
                key.character = missing.pop_front();
                if let Some(replacement) = key.character {
                    seen.insert(replacement);
                }
            }
        }
    }
    layout
}

/// Produces the next generation from a population sorted best first.
///
/// Individual `i` of the better half is paired with its mirror `n - 1 - i`;
/// each pair yields two children (one per parent order). Parents are not
/// carried over, except the unpaired middle individual of an odd-sized
/// population.
pub fn breed_generation(
    sorted: &[ScoredLayout],
    scorer: &Scorer,
    repair_pool: Option<&[char]>,
    rng: &mut Rng,
) -> Vec<ScoredLayout> {
    let n = sorted.len();
    let mut next = Vec::with_capacity(n);

    let push_child = |child: Layout, next: &mut Vec<ScoredLayout>| {
        let child = match repair_pool {
            Some(allowed) => repair(child, allowed),
            None => child,
        };
        next.push(ScoredLayout::new(child, scorer));
    };

    for i in 0..n / 2 {
        let best = sorted[i].layout();
        let worst = sorted[n - 1 - i].layout();

        let child_a = crossover(best, worst, rng);
        push_child(child_a, &mut next);
        let child_b = crossover(worst, best, rng);
        push_child(child_b, &mut next);
    }

    if n % 2 == 1 {
        next.push(sorted[n / 2].clone());
    }

    next
}
