//! Scoring module - points for a cascade round
//!
//! - Every removed item is worth `POINTS_PER_ITEM`.
//! - The first round of a cascade earns no combo bonus.
//! - From the second round on the bonus is `COMBO_BASE * round_index`
//!   (`round_index` is 0-based).

use match3_types::{COMBO_BASE, POINTS_PER_ITEM};

/// Score calculation result for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundScore {
    /// Points for the removed items alone.
    pub base: u32,
    pub combo_bonus: u32,
    pub total: u32,
}

pub fn calculate_item_score(removed: usize) -> u32 {
    u32::try_from(removed)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_ITEM)
}

/// Combo bonus for the round at `round_index` of a cascade.
pub fn calculate_combo_bonus(round_index: usize) -> u32 {
    if round_index == 0 {
        return 0;
    }
    COMBO_BASE.saturating_mul(u32::try_from(round_index).unwrap_or(u32::MAX))
}

pub fn calculate_round_score(removed: usize, round_index: usize) -> RoundScore {
    if removed == 0 {
        return RoundScore::default();
    }
    let base = calculate_item_score(removed);
    let combo_bonus = calculate_combo_bonus(round_index);
    RoundScore {
        base,
        combo_bonus,
        total: base.saturating_add(combo_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_score() {
        assert_eq!(calculate_item_score(0), 0);
        assert_eq!(calculate_item_score(3), 30);
        assert_eq!(calculate_item_score(7), 70);
    }

    #[test]
    fn test_combo_bonus() {
        assert_eq!(calculate_combo_bonus(0), 0);
        assert_eq!(calculate_combo_bonus(1), 50);
        assert_eq!(calculate_combo_bonus(3), 150);
    }

    #[test]
    fn test_round_score() {
        let first = calculate_round_score(3, 0);
        assert_eq!(first, RoundScore { base: 30, combo_bonus: 0, total: 30 });

        let second = calculate_round_score(4, 1);
        assert_eq!(second.total, 90);

        // Nothing removed, nothing earned.
        assert_eq!(calculate_round_score(0, 5), RoundScore::default());
    }
}
