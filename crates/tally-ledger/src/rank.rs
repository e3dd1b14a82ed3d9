//! Leaderboard computation.
//!
//! A full scan of the namespace feeds two independent stable sorts: one
//! descending for the positive board, one ascending for the negative
//! board. Each board truncates to five entries and stops early at the
//! first non-qualifying score, so a zero score never appears on either.

use std::cmp::Reverse;

/// Maximum entries per board.
pub const WINDOW: usize = 5;

/// The two leaderboards, names already stripped of the namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    /// Up to five `(name, score)` with score > 0, descending by score.
    pub top: Vec<(String, i64)>,
    /// Up to five `(name, score)` with score < 0, ascending by score.
    pub bottom: Vec<(String, i64)>,
}

impl Leaderboard {
    /// Compute both boards from a scan of `(name, score)` entries.
    ///
    /// Ties at a board boundary are broken by sort stability, i.e. by
    /// scan order.
    pub fn compute(entries: &[(String, i64)]) -> Self {
        let mut descending = entries.to_vec();
        descending.sort_by_key(|(_, score)| Reverse(*score));

        let mut top = Vec::new();
        for (name, score) in &descending {
            if top.len() == WINDOW || *score <= 0 {
                break;
            }
            top.push((name.clone(), *score));
        }

        let mut ascending = entries.to_vec();
        ascending.sort_by_key(|(_, score)| *score);

        let mut bottom = Vec::new();
        for (name, score) in &ascending {
            if bottom.len() == WINDOW || *score >= 0 {
                break;
            }
            bottom.push((name.clone(), *score));
        }

        Self { top, bottom }
    }

    /// Render both boards as one reply, rank numbers starting at 1.
    pub fn render(&self) -> String {
        let mut out = String::from("Top 5 scores:\n");
        render_board(&mut out, &self.top);
        out.push_str("\nBottom 5 scores:\n");
        render_board(&mut out, &self.bottom);
        out
    }
}

fn render_board(out: &mut String, board: &[(String, i64)]) {
    if board.is_empty() {
        out.push_str("Nobody on the board yet.\n");
        return;
    }
    for (idx, (name, score)) in board.iter().enumerate() {
        out.push_str(&format!("{}: {} | {}\n", idx + 1, name, score));
    }
}
