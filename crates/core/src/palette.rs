//! Color pool - picks the distinct colors used in a round

use crate::arrangement::Arrangement;
use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::types::{MAX_ITEM_COUNT, MIN_ITEM_COUNT, PALETTE};

/// Reject item counts the palette cannot cover.
pub fn validate_item_count(n: usize) -> Result<(), GameError> {
    if (MIN_ITEM_COUNT..=MAX_ITEM_COUNT).contains(&n) {
        Ok(())
    } else {
        Err(GameError::InvalidItemCount {
            requested: n,
            max: MAX_ITEM_COUNT,
        })
    }
}

/// Choose `n` distinct palette colors uniformly at random, without replacement.
///
/// Runs a partial Fisher-Yates over a copy of the palette: after `n` steps the
/// prefix is a uniform sample in uniform order.
pub fn select_colors(n: usize, rng: &mut SimpleRng) -> Result<Arrangement, GameError> {
    validate_item_count(n)?;

    let mut pool = PALETTE;
    for i in 0..n {
        let j = i + rng.next_range((pool.len() - i) as u32) as usize;
        pool.swap(i, j);
    }

    let mut out = Arrangement::new();
    out.extend(pool[..n].iter().copied());
    Ok(out)
}
