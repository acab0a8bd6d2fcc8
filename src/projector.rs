//! Visit-order board to move-by-move coordinate list.

use crate::types::{Board, Coord};
use serde::Serialize;

/// Squares in visiting order: index `i` is the square reached on move `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Coord>);

impl MoveSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.0
    }

    /// Square at 0-based `index`.
    pub fn get(&self, index: usize) -> Option<Coord> {
        self.0.get(index).copied()
    }

    /// Square reached on 1-indexed `move_number`.
    pub fn square_of(&self, move_number: usize) -> Option<Coord> {
        move_number.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }
}

impl IntoIterator for MoveSequence {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Project a completed board into its move sequence.
///
/// Expects a finished tour (a permutation of `1..=size²`). The board is not
/// re-validated: cells outside that range (e.g. `UNVISITED`) are skipped in
/// every build, and the squares they would have filled stay at `(0, 0)`.
pub fn project(board: &Board) -> MoveSequence {
    let size = board.size();
    let total = size * size;
    let mut squares = vec![Coord::new(0, 0); total];

    for x in 0..size {
        for y in 0..size {
            let k = board.get(x, y);
            if k >= 1 && k as usize <= total {
                squares[k as usize - 1] = Coord::from_square(x, y);
            }
        }
    }

    MoveSequence(squares)
}
