//! Move history as a sequence of immutable board snapshots.

use super::types::Board;
use serde::Serialize;
use tracing::instrument;

/// Ordered snapshots from game start to the furthest move made.
///
/// Entry `k` is the board after `k` moves; entry 0 is always the empty
/// board. The only way to grow a history is [`History::branch`], which
/// drops every entry after the branch point before appending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for histories built through this API.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot after `step` moves.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Returns all snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Iterates over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }

    /// Returns a new history made of entries `0..=step` followed by `next`.
    ///
    /// `self` is left untouched.
    #[instrument(skip(self, next), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&self, step: usize, next: Board) -> Self {
        let keep = (step + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(next);
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
