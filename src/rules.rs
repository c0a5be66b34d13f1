//! Pure win and draw checks over a board.

use crate::board::{Board, Player};
use crate::cellset::CellSet;
use crate::config::{GRID_SIZE, WIN_PATTERNS};

type Cells = CellSet<u16, GRID_SIZE>;

/// True iff one of the eight winning lines is fully held by `player`.
/// Returns on the first matching pattern; all eight are examined before
/// concluding there is no win.
pub fn check_win(board: &Board, player: Player) -> bool {
    let positions = board.positions(player);
    for pattern in WIN_PATTERNS {
        let line = pattern_cells(&pattern);
        if line.is_subset(&positions) {
            return true;
        }
    }
    false
}

/// True iff all nine cells are occupied, by either side. Deliberately
/// ignores wins: callers must test `check_win` for the mover before this,
/// or a board-filling winning move reads as a draw.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

pub(crate) fn pattern_cells(pattern: &[usize; 3]) -> Cells {
    let mut cells = Cells::new();
    for &index in pattern {
        // pattern tables only hold indices in [0..9)
        let _ = cells.insert(index);
    }
    cells
}
