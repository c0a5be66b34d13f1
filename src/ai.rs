// Computer move selection. Uses no_std and avoids heap allocations.
//
// Four tiers, each tried only when the previous yields nothing: complete an
// own line, block the human's line, take the center, fall back to a random
// empty cell.

use crate::board::{Board, Player};
use crate::config::{BOARD_CELLS, CENTER_CELL, WIN_PATTERNS};
use crate::rules::pattern_cells;
use rand::Rng;

/// First cell (in pattern declaration order) that would complete a line for
/// `player`: the pattern is missing exactly one cell and that cell is open.
pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    let positions = board.positions(player);
    for pattern in WIN_PATTERNS {
        let open = pattern_cells(&pattern).difference(&positions);
        if let Some(index) = open.sole() {
            if !board.is_occupied(index) {
                return Some(index);
            }
        }
    }
    None
}

/// Choose the computer's next cell. The board must have at least one empty
/// cell; the controller never calls this on a full board.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> usize {
    // take the win
    if let Some(index) = completing_cell(board, Player::Computer) {
        return index;
    }
    // block the human
    if let Some(index) = completing_cell(board, Player::Human) {
        return index;
    }
    // take the center
    if !board.is_occupied(CENTER_CELL) {
        return CENTER_CELL;
    }
    // random empty cell; terminates since an empty cell exists here
    loop {
        let index = rng.random_range(0..BOARD_CELLS);
        if !board.is_occupied(index) {
            return index;
        }
    }
}
