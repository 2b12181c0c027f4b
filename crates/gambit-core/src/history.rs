//! Append-only record of every position reached in a game.

use crate::board::Board;

/// Boards in the order they were reached, oldest first.
///
/// Never empty: index 0 is the initial position and the last entry is the
/// current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Start a history at `initial`.
    pub fn new(initial: Board) -> History {
        History {
            boards: vec![initial],
        }
    }

    /// The board after the most recent move.
    #[inline]
    pub fn current(&self) -> &Board {
        // `boards` is never empty
        &self.boards[self.boards.len() - 1]
    }

    /// The board immediately before the current one, if any move was made.
    #[inline]
    pub fn previous(&self) -> Option<&Board> {
        self.boards.len().checked_sub(2).map(|i| &self.boards[i])
    }

    /// Number of boards recorded (one more than the number of plies played).
    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Number of plies played since the initial position.
    #[inline]
    pub fn ply(&self) -> usize {
        self.boards.len() - 1
    }

    /// Always `false`; a history holds at least its initial board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Board at `index`, where 0 is the initial position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All boards, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[Board] {
        &self.boards
    }

    /// Iterate over the boards, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// Append the board reached by a new move.
    pub(crate) fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Mutable access to the current board, used to complete a promotion.
    pub(crate) fn current_mut(&mut self) -> &mut Board {
        let last = self.boards.len() - 1;
        &mut self.boards[last]
    }

    /// Drop everything and start over from `initial`.
    pub(crate) fn reset(&mut self, initial: Board) {
        self.boards.clear();
        self.boards.push(initial);
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
