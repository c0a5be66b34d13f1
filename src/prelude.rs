//! Commonly used types and utilities for ease of import.

pub use crate::{
    check_draw, check_win, select_move, Board, GameEngine, GameState, GameStatus, Move, MoveError,
    Player,
};

#[cfg(feature = "std")]
pub use crate::init_logging;

#[cfg(feature = "std")]
pub use crate::ui::{alert_for, parse_cell, print_board, OutcomeAlert};
