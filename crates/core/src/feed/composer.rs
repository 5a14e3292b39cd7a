//! The weighted-interleave feed composer.

use rand::Rng;

use crate::catalog::CatalogItem;
use crate::feed::PreferenceSet;

/// Fixed repeating 10-slot interleave pattern, walked cyclically.
///
/// `true` slots draw from the matched (preferred-genre) group, `false` slots
/// from the unmatched group: 6 preferred and 4 other per 10 output
/// positions. The exact slot assignment is part of the observable contract,
/// so it is spelled out as a literal rather than derived from a ratio.
const INTERLEAVE_PATTERN: [bool; 10] = [
    true, false, true, false, true, true, false, true, false, true,
];

/// Compose a display feed from a catalog snapshot.
///
/// With an empty preference set this is a plain uniform shuffle. Otherwise
/// the catalog is partitioned by genre membership, both groups are shuffled
/// independently, and the output interleaves them along
/// [`INTERLEAVE_PATTERN`]. When a slot's designated group is exhausted the
/// other group is drained instead, so the result is always a permutation of
/// the input: same length, every item exactly once.
pub fn compose(
    catalog: Vec<CatalogItem>,
    preferred: &PreferenceSet,
    rng: &mut impl Rng,
) -> Vec<CatalogItem> {
    if preferred.is_empty() {
        let mut all = catalog;
        shuffle(&mut all, rng);
        return all;
    }

    let (mut matched, mut unmatched): (Vec<_>, Vec<_>) = catalog.into_iter().partition(|item| {
        item.genre_lower()
            .map(|g| preferred.contains(&g))
            .unwrap_or(false)
    });

    shuffle(&mut matched, rng);
    shuffle(&mut unmatched, rng);

    // Consume from the front of each shuffled group.
    matched.reverse();
    unmatched.reverse();

    let total = matched.len() + unmatched.len();
    let mut feed = Vec::with_capacity(total);

    for position in 0..total {
        let wants_matched = INTERLEAVE_PATTERN[position % INTERLEAVE_PATTERN.len()];
        let next = if wants_matched {
            matched.pop().or_else(|| unmatched.pop())
        } else {
            unmatched.pop().or_else(|| matched.pop())
        };
        match next {
            Some(item) => feed.push(item),
            // Unreachable while `position < total`, but stopping is the
            // documented behavior if both groups are drained.
            None => break,
        }
    }

    feed
}

/// Uniform in-place Fisher-Yates shuffle.
///
/// For each index from the last down to the second, swaps with a uniformly
/// random index in `[0, i]`. Produces each of the `n!` permutations with
/// equal probability given a uniform rng.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
