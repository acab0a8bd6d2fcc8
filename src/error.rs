//! Error types for tour generation

/// Tour generation errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Start square is off the board; no attempt was made
    #[error("start ({x}, {y}) is outside a {board_size}x{board_size} board")]
    InvalidStart { x: i32, y: i32, board_size: usize },

    /// Board side too large for `i32` move numbers; no attempt was made
    #[error("board size {board_size} exceeds the maximum of {max}")]
    BoardTooLarge { board_size: usize, max: usize },

    /// Every attempt dead-ended
    #[error("no knight's tour found in {attempts} attempts")]
    NoTourFound { attempts: u32 },
}

/// Result type for tour operations
pub type TourResult<T> = Result<T, TourError>;
