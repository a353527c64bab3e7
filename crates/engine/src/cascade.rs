//! Cascade module - match removal, gravity settling, and chained rounds

use std::rc::Rc;

use match3_core::{Board, BoardError, Game, ItemRef};
use tracing::{debug, trace};

use crate::error::Result;
use crate::scoring::{calculate_round_score, RoundScore};

/// Outcome of [`settle`].
#[derive(Debug, Clone, Default)]
pub struct SettleReport {
    /// Gravity passes that moved at least one item.
    pub passes: usize,
    /// Every item that moved, each listed once, in first-move order.
    pub moved: Vec<ItemRef>,
}

impl SettleReport {
    pub fn is_idle(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Run gravity passes until the board stops moving.
pub fn settle(board: &Board) -> std::result::Result<SettleReport, BoardError> {
    let mut report = SettleReport::default();
    loop {
        let moved = board.iterate()?;
        if moved.is_empty() {
            break;
        }
        report.passes += 1;
        for item in moved {
            if !report.moved.iter().any(|seen| Rc::ptr_eq(seen, &item)) {
                report.moved.push(item);
            }
        }
    }
    trace!(passes = report.passes, moved = report.moved.len(), "board settled");
    Ok(report)
}

/// One removal round of a cascade.
#[derive(Debug, Clone)]
pub struct CascadeRound {
    pub removed: Vec<ItemRef>,
    pub score: RoundScore,
    /// Gravity passes run after the removal.
    pub settle_passes: usize,
}

/// Outcome of [`resolve_cascade`].
#[derive(Debug, Clone, Default)]
pub struct CascadeReport {
    pub rounds: Vec<CascadeRound>,
    /// Points awarded over all rounds.
    pub total: u32,
    /// True when the round limit stopped the cascade while matches remained.
    pub truncated: bool,
}

impl CascadeReport {
    pub fn removed_count(&self) -> usize {
        self.rounds.iter().map(|round| round.removed.len()).sum()
    }
}

/// Remove matches, score them, settle, and repeat until the board holds no
/// match or `max_rounds` rounds have run. Points are awarded to `game` as each
/// round completes.
pub fn resolve_cascade(game: &mut Game, max_rounds: usize) -> Result<CascadeReport> {
    let board = game.board().clone();
    let mut report = CascadeReport::default();

    while report.rounds.len() < max_rounds {
        let removed = board.find_and_remove_matches();
        if removed.is_empty() {
            break;
        }

        let round_index = report.rounds.len();
        let score = calculate_round_score(removed.len(), round_index);
        game.award(score.total);
        report.total = report.total.saturating_add(score.total);

        let settled = settle(&board)?;
        debug!(
            round = round_index,
            removed = removed.len(),
            points = score.total,
            "cascade round"
        );
        report.rounds.push(CascadeRound {
            removed,
            score,
            settle_passes: settled.passes,
        });
    }

    report.truncated = report.rounds.len() >= max_rounds && board.has_match();
    Ok(report)
}
