//! Core data types for the Knight's Tour generator.
//!
//! The board uses flat `Vec` storage with column-major layout:
//! `cells[x * size + y]` holds the value of square `(x, y)`.

use serde::{Deserialize, Serialize};

/// Cell value for a square the knight has not reached yet.
pub const UNVISITED: i32 = -1;

/// Largest board side whose move numbers (up to `size²`) fit in an `i32` cell.
pub const MAX_BOARD_SIZE: usize = 46_340;

/// The eight legal knight displacements `{(±1,±2), (±2,±1)}`.
pub const KNIGHT_MOVES: [(i32, i32); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// A square on the board, `x` = column, `y` = row.
///
/// Signed so that callers can express (and get rejected for) off-board starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if `other` is exactly one knight move away.
    pub fn is_knight_move_from(self, other: Coord) -> bool {
        let d = (self.x - other.x, self.y - other.y);
        KNIGHT_MOVES.contains(&d)
    }

    /// Square of a board. Callers guarantee `x, y < MAX_BOARD_SIZE`, which every
    /// `Board` and `KnightCache` enforces on construction.
    #[inline]
    pub(crate) fn from_square(x: usize, y: usize) -> Self {
        debug_assert!(x < MAX_BOARD_SIZE && y < MAX_BOARD_SIZE);
        Coord::new(x as i32, y as i32)
    }
}

/// Visit-order grid: `UNVISITED` or the 1-indexed move number `k` on which the
/// knight landed on that square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<i32>,
}

impl Board {
    /// Create a new board with every square unvisited.
    ///
    /// # Panics
    /// Panics if `size > MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(size <= MAX_BOARD_SIZE, "board size must be at most {MAX_BOARD_SIZE}");
        Self {
            size,
            cells: vec![UNVISITED; size * size],
        }
    }

    /// Wrap existing column-major cells. `None` if the length is not `size²`
    /// or `size > MAX_BOARD_SIZE`.
    pub fn from_cells(size: usize, cells: Vec<i32>) -> Option<Self> {
        (size <= MAX_BOARD_SIZE && cells.len() == size * size).then_some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat column-major cells.
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[x * self.size + y]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, val: i32) {
        self.cells[x * self.size + y] = val;
    }

    #[inline(always)]
    pub fn is_unvisited(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == UNVISITED
    }

    /// True if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        in_bounds(coord, self.size)
    }

    /// Row-major copy (`rows[y][x]`), the shape a renderer usually wants.
    pub fn rows(&self) -> Vec<Vec<i32>> {
        (0..self.size)
            .map(|y| (0..self.size).map(|x| self.get(x, y)).collect())
            .collect()
    }

    /// Checks that the board is a completed tour: every cell holds a distinct
    /// value in `1..=size²` and consecutive move numbers are a knight move apart.
    pub fn is_knights_tour(&self) -> bool {
        let total = self.cells.len();
        let mut squares: Vec<Option<Coord>> = vec![None; total];

        for x in 0..self.size {
            for y in 0..self.size {
                let k = self.get(x, y);
                if k < 1 || k as usize > total {
                    return false;
                }
                let slot = &mut squares[k as usize - 1];
                if slot.is_some() {
                    return false;
                }
                *slot = Some(Coord::from_square(x, y));
            }
        }

        squares
            .windows(2)
            .all(|pair| match (pair[0], pair[1]) {
                (Some(a), Some(b)) => b.is_knight_move_from(a),
                _ => false,
            })
    }
}

#[inline(always)]
pub(crate) fn in_bounds(coord: Coord, size: usize) -> bool {
    coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < size && (coord.y as usize) < size
}

/// Pre-computed knight destinations for all squares.
///
/// Stores the in-bounds knight moves for every square.
/// Indexed by `x * size + y`, each entry is a slice of `(nx, ny)` pairs.
pub struct KnightCache {
    pub size: usize,
    /// Flat storage of all destination pairs.
    data: Vec<(usize, usize)>,
    /// offsets[i] = start index in `data` for square i.
    /// offsets[i+1] - offsets[i] = number of destinations for square i.
    offsets: Vec<usize>,
}

impl KnightCache {
    /// Build the cache for a `size`×`size` board.
    ///
    /// # Panics
    /// Panics if `size > MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(size <= MAX_BOARD_SIZE, "board size must be at most {MAX_BOARD_SIZE}");
        let total = size * size;
        let mut data = Vec::with_capacity(total * KNIGHT_MOVES.len());
        let mut offsets = Vec::with_capacity(total + 1);

        for x in 0..size {
            for y in 0..size {
                offsets.push(data.len());
                for &(dx, dy) in &KNIGHT_MOVES {
                    let to = Coord::new(x as i32 + dx, y as i32 + dy);
                    if in_bounds(to, size) {
                        data.push((to.x as usize, to.y as usize));
                    }
                }
            }
        }
        offsets.push(data.len()); // sentinel

        Self { size, data, offsets }
    }

    /// Get the pre-computed knight destinations for square (x, y).
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> &[(usize, usize)] {
        let idx = x * self.size + y;
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.data[start..end]
    }

    /// Onward-degree of (x, y): how many of its destinations are still unvisited.
    #[inline]
    pub fn onward_degree(&self, board: &Board, x: usize, y: usize) -> usize {
        self.get(x, y)
            .iter()
            .filter(|&&(nx, ny)| board.is_unvisited(nx, ny))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_get_set() {
        let mut b = Board::new(6);
        b.set(3, 5, 7);
        assert_eq!(b.get(3, 5), 7);
        assert_eq!(b.get(5, 3), UNVISITED);
        assert!(b.is_unvisited(0, 0));
        assert_eq!(b.rows()[5][3], 7);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(3, vec![UNVISITED; 8]).is_none());
        assert!(Board::from_cells(3, vec![UNVISITED; 9]).is_some());
    }

    #[test]
    fn test_from_cells_rejects_oversized_board() {
        // Checked before the length, so no size² overflow
        assert!(Board::from_cells(MAX_BOARD_SIZE + 1, Vec::new()).is_none());
        assert!(Board::from_cells(usize::MAX, Vec::new()).is_none());
    }

    #[test]
    #[should_panic(expected = "board size must be at most")]
    fn test_board_new_rejects_oversized_board() {
        let _ = Board::new(MAX_BOARD_SIZE + 1);
    }

    #[test]
    fn test_max_board_size_move_numbers_fit() {
        let total = MAX_BOARD_SIZE * MAX_BOARD_SIZE;
        assert!(i32::try_from(total).is_ok());
        assert!(i32::try_from((MAX_BOARD_SIZE + 1) * (MAX_BOARD_SIZE + 1)).is_err());
    }

    #[test]
    fn test_contains() {
        let b = Board::new(8);
        assert!(b.contains(Coord::new(0, 7)));
        assert!(!b.contains(Coord::new(-1, 0)));
        assert!(!b.contains(Coord::new(0, 8)));
        assert!(!Board::new(0).contains(Coord::new(0, 0)));
    }

    #[test]
    fn test_knight_cache_counts() {
        let kc = KnightCache::new(8);
        // Corner has 2 moves, centre has 8
        assert_eq!(kc.get(0, 0).len(), 2);
        assert_eq!(kc.get(1, 0).len(), 3);
        assert_eq!(kc.get(3, 3).len(), 8);
        // 3x3 centre is unreachable
        assert!(KnightCache::new(3).get(1, 1).is_empty());
    }

    #[test]
    fn test_knight_cache_moves_are_legal() {
        let kc = KnightCache::new(6);
        for x in 0..6 {
            for y in 0..6 {
                let from = Coord::from_square(x, y);
                for &(tx, ty) in kc.get(x, y) {
                    assert!(Coord::from_square(tx, ty).is_knight_move_from(from));
                }
            }
        }
    }

    #[test]
    fn test_onward_degree_ignores_visited() {
        let kc = KnightCache::new(5);
        let mut b = Board::new(5);
        assert_eq!(kc.onward_degree(&b, 0, 0), 2);
        b.set(1, 2, 1);
        assert_eq!(kc.onward_degree(&b, 0, 0), 1);
    }

    #[test]
    fn test_is_knights_tour_rejects_bad_boards() {
        // Unfilled
        assert!(!Board::new(5).is_knights_tour());
        // 1x1 trivially valid
        assert!(Board::from_cells(1, vec![1]).unwrap().is_knights_tour());
        // 2x2 permutation, but not knight moves
        assert!(!Board::from_cells(2, vec![1, 2, 3, 4]).unwrap().is_knights_tour());
        // Duplicate values
        assert!(!Board::from_cells(2, vec![1, 1, 2, 3]).unwrap().is_knights_tour());
    }
}
