//! Tour generation: randomized Warnsdorff search with bounded restarts.
//!
//! Each attempt walks greedily from the start square, always stepping to the
//! unvisited destination with the fewest onward moves. Ties go to whichever
//! candidate comes first after a shuffle. There is no backtracking: a dead end
//! throws the attempt away and the next one starts over with fresh randomness.

use crate::error::{TourError, TourResult};
use crate::projector::{project, MoveSequence};
use crate::types::{in_bounds, Board, Coord, KnightCache, MAX_BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Attempt budget used when the caller does not pick one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Parameters for tour generation.
#[derive(Debug, Clone)]
pub struct TourParams {
    /// Upper bound on independent attempts before giving up.
    pub max_attempts: u32,
}

impl Default for TourParams {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A completed tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Visit-order board, every cell in `1..=size²`.
    pub board: Board,
    /// Which attempt succeeded (1-based).
    pub attempts: u32,
}

impl Tour {
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Squares in visiting order.
    pub fn moves(&self) -> MoveSequence {
        project(&self.board)
    }
}

/// Search for a knight's tour of a `board_size`×`board_size` board from `start`.
///
/// Fails fast with [`TourError::BoardTooLarge`] if `board_size` exceeds
/// [`MAX_BOARD_SIZE`], with [`TourError::InvalidStart`] if `start` is off the
/// board, and returns [`TourError::NoTourFound`] once `params.max_attempts` attempts have
/// all dead-ended. The result is reproducible for an identically seeded `rng`.
pub fn generate_tour<R: Rng + ?Sized>(
    start: Coord,
    board_size: usize,
    params: &TourParams,
    rng: &mut R,
) -> TourResult<Tour> {
    if board_size > MAX_BOARD_SIZE {
        return Err(TourError::BoardTooLarge {
            board_size,
            max: MAX_BOARD_SIZE,
        });
    }
    if !in_bounds(start, board_size) {
        return Err(TourError::InvalidStart {
            x: start.x,
            y: start.y,
            board_size,
        });
    }

    let cache = KnightCache::new(board_size);
    let start = (start.x as usize, start.y as usize);

    for attempt in 1..=params.max_attempts {
        match run_attempt(start, &cache, rng) {
            Some(board) => {
                log::info!(
                    "knight's tour on {board_size}x{board_size} from {start:?} found on attempt {attempt}"
                );
                return Ok(Tour {
                    board,
                    attempts: attempt,
                });
            }
            None => log::debug!("attempt {attempt} from {start:?} hit a dead end"),
        }
    }

    log::warn!(
        "no knight's tour on {board_size}x{board_size} from {start:?} after {} attempts",
        params.max_attempts
    );
    Err(TourError::NoTourFound {
        attempts: params.max_attempts,
    })
}

/// One greedy walk. `None` on a dead end.
fn run_attempt<R: Rng + ?Sized>(
    start: (usize, usize),
    cache: &KnightCache,
    rng: &mut R,
) -> Option<Board> {
    let size = cache.size;
    // size <= MAX_BOARD_SIZE, so size² fits
    let total = (size * size) as i32;
    let mut board = Board::new(size);
    let (mut x, mut y) = start;
    board.set(x, y, 1);

    let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(8);

    for move_no in 2..=total {
        candidates.clear();
        candidates.extend(
            cache
                .get(x, y)
                .iter()
                .copied()
                .filter(|&(nx, ny)| board.is_unvisited(nx, ny)),
        );
        candidates.shuffle(rng);

        // min_by_key keeps the first of equal minima
        let (nx, ny) = candidates
            .iter()
            .copied()
            .min_by_key(|&(cx, cy)| cache.onward_degree(&board, cx, cy))?;

        board.set(nx, ny, move_no);
        x = nx;
        y = ny;
    }

    Some(board)
}
