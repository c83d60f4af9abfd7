//! Shuffle engine - permutes a round's colors so the player never starts solved

use tracing::trace;

use crate::arrangement::Arrangement;
use crate::rng::SimpleRng;

/// Produce a uniformly random permutation of `source` that differs from it in
/// at least one position.
///
/// A full Fisher-Yates shuffle is retried while the result equals `source`
/// position by position. Rows with no distinct permutation (length 0 or 1, or
/// every entry the same color) are returned unchanged.
pub fn shuffle_permutation(source: &Arrangement, rng: &mut SimpleRng) -> Arrangement {
    let mut out = source.clone();
    if !has_distinct_permutation(source) {
        return out;
    }

    let mut attempts = 1u32;
    loop {
        rng.shuffle(&mut out);
        if out.as_slice() != source.as_slice() {
            break;
        }
        attempts += 1;
    }
    trace!(attempts, len = source.len(), "shuffled arrangement");
    out
}

fn has_distinct_permutation(source: &Arrangement) -> bool {
    match source.first() {
        Some(first) => source.iter().any(|c| c != first),
        None => false,
    }
}
