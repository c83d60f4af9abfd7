//! Arrangement helpers - fixed-capacity color sequences and comparisons

use arrayvec::ArrayVec;

use crate::types::{Color, MAX_ITEM_COUNT};

/// An ordered row of colors, one per position.
///
/// Capacity is the palette size, so arrangements never touch the heap.
pub type Arrangement = ArrayVec<Color, MAX_ITEM_COUNT>;

/// Number of positions where `player` and `target` hold the same color.
pub fn correct_count(player: &[Color], target: &[Color]) -> usize {
    player
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count()
}

/// Whether both rows contain exactly the same colors with the same multiplicity.
pub fn same_multiset(a: &[Color], b: &[Color]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = [false; MAX_ITEM_COUNT];
    if b.len() > used.len() {
        return false;
    }
    a.iter().all(|color| {
        let hit = b
            .iter()
            .enumerate()
            .find(|(i, other)| !used[*i] && *other == color)
            .map(|(i, _)| i);
        match hit {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

/// Copy a slice into an arrangement, or `None` if it exceeds the capacity.
pub fn arrangement_from_slice(colors: &[Color]) -> Option<Arrangement> {
    let mut out = Arrangement::new();
    out.try_extend_from_slice(colors).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE;

    #[test]
    fn test_correct_count_positional() {
        let target = [Color::RED, Color::GREEN, Color::BLUE];
        assert_eq!(correct_count(&target, &target), 3);
        assert_eq!(
            correct_count(&[Color::GREEN, Color::RED, Color::BLUE], &target),
            1
        );
        assert_eq!(
            correct_count(&[Color::BLUE, Color::RED, Color::GREEN], &target),
            0
        );
    }

    #[test]
    fn test_same_multiset() {
        let a = [Color::RED, Color::GREEN, Color::BLUE];
        let b = [Color::BLUE, Color::RED, Color::GREEN];
        assert!(same_multiset(&a, &b));
        assert!(!same_multiset(&a, &[Color::RED, Color::GREEN]));
        assert!(!same_multiset(&a, &[Color::RED, Color::GREEN, Color::GREEN]));
        assert!(!same_multiset(
            &[Color::RED, Color::RED, Color::GREEN],
            &[Color::RED, Color::GREEN, Color::GREEN]
        ));
    }

    #[test]
    fn test_arrangement_from_slice_respects_capacity() {
        assert_eq!(arrangement_from_slice(&PALETTE).map(|a| a.len()), Some(10));
        let mut too_long = PALETTE.to_vec();
        too_long.push(Color::RED);
        assert!(arrangement_from_slice(&too_long).is_none());
    }
}
