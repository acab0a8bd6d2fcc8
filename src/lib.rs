//! WebAssembly Knight's Tour generator.
//!
//! Exports high-level functions callable from JavaScript via wasm-bindgen.
//! Boards are passed as flat `Int32Array`s in column-major layout:
//! `cells[x * size + y]` maps to JS `board[x][y]`.

pub mod error;
pub mod projector;
pub mod rng;
pub mod tour;
pub mod types;

pub use error::{TourError, TourResult};
pub use projector::{project, MoveSequence};
pub use rng::TourRng;
pub use tour::{generate_tour, Tour, TourParams, DEFAULT_MAX_ATTEMPTS};
pub use types::{Board, Coord, KnightCache, KNIGHT_MOVES, MAX_BOARD_SIZE, UNVISITED};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::{generate_tour, project, Board, Coord, TourError, TourParams, TourRng};

    fn set(obj: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
        js_sys::Reflect::set(obj, &key.into(), value).map(|_| ())
    }

    /// Generate a knight's tour.
    /// Returns JS object: `{ success: bool, attempts: u32, boardSize, board: Int32Array, moves: [{x, y}] }`.
    /// `board` and `moves` are only present on success. Throws on an off-board start.
    #[wasm_bindgen(js_name = "generateTour")]
    pub fn wasm_generate_tour(
        start_x: i32,
        start_y: i32,
        board_size: usize,
        max_attempts: u32,
        seed: Option<u64>,
    ) -> Result<JsValue, JsValue> {
        let mut rng = TourRng::from_optional_seed(seed);
        let params = TourParams { max_attempts };

        let obj = js_sys::Object::new();
        set(&obj, "boardSize", &(board_size as u32).into())?;

        match generate_tour(Coord::new(start_x, start_y), board_size, &params, &mut rng) {
            Ok(tour) => {
                set(&obj, "success", &true.into())?;
                set(&obj, "attempts", &tour.attempts.into())?;

                let moves = serde_wasm_bindgen::to_value(&tour.moves())?;
                set(&obj, "moves", &moves)?;

                let cells = tour.board.cells();
                let board_arr = js_sys::Int32Array::new_with_length(cells.len() as u32);
                board_arr.copy_from(cells);
                set(&obj, "board", &board_arr.into())?;
            }
            Err(TourError::NoTourFound { attempts }) => {
                set(&obj, "success", &false.into())?;
                set(&obj, "attempts", &attempts.into())?;
            }
            Err(e) => return Err(JsError::new(&e.to_string()).into()),
        }

        Ok(obj.into())
    }

    /// Convert a completed board into its move sequence.
    /// Returns `[{x, y}, ...]` where index `i` is the square of move `i + 1`.
    #[wasm_bindgen(js_name = "projectMoves")]
    pub fn wasm_project_moves(board_size: usize, cells: &[i32]) -> Result<JsValue, JsValue> {
        let board = Board::from_cells(board_size, cells.to_vec()).ok_or_else(|| {
            JsError::new(&format!(
                "expected {} cells for a {board_size}x{board_size} board, got {}",
                board_size.saturating_mul(board_size),
                cells.len()
            ))
        })?;
        Ok(serde_wasm_bindgen::to_value(&project(&board))?)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM tour generator ready".to_string()
    }
}
