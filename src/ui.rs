#![cfg(feature = "std")]

//! Terminal rendering and input parsing for the interactive frontend.

use crate::board::Board;
use crate::config::{BOARD_CELLS, GRID_SIZE};
use crate::game::GameStatus;

/// End-of-round dialog content: title, message and the label of the single
/// restart action. The engine never builds these; the frontend maps a
/// terminal [`GameStatus`] onto one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeAlert {
    pub title: &'static str,
    pub message: &'static str,
    pub dismiss: &'static str,
}

const HUMAN_WIN: OutcomeAlert = OutcomeAlert {
    title: "You WIN!",
    message: "YOU ARE SMART",
    dismiss: "VICTORY",
};

const COMPUTER_WIN: OutcomeAlert = OutcomeAlert {
    title: "You LOSE!",
    message: "EMBARASSING!",
    dismiss: "OUCH!",
};

const DRAW: OutcomeAlert = OutcomeAlert {
    title: "NO ONE WINS!",
    message: "MEH!",
    dismiss: "TRY AGAIN!",
};

/// Alert content for a terminal status; `None` while the game runs.
pub fn alert_for(status: GameStatus) -> Option<OutcomeAlert> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::HumanWin => Some(HUMAN_WIN),
        GameStatus::ComputerWin => Some(COMPUTER_WIN),
        GameStatus::Draw => Some(DRAW),
    }
}

/// Parse keypad-style cell input: "1" through "9", row-major from the top
/// left. Returns the zero-based cell index.
pub fn parse_cell(input: &str) -> Option<usize> {
    let cell: usize = input.trim().parse().ok()?;
    if (1..=BOARD_CELLS).contains(&cell) {
        Some(cell - 1)
    } else {
        None
    }
}

/// Print the grid. Occupied cells show their mark, empty cells the 1-9 key
/// that selects them.
pub fn print_board(board: &Board) {
    println!();
    for r in 0..GRID_SIZE {
        print!("  ");
        for c in 0..GRID_SIZE {
            let index = r * GRID_SIZE + c;
            let ch = match board.cell(index) {
                Some(mv) => mv.indicator(),
                None => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
            };
            if c + 1 < GRID_SIZE {
                print!(" {} |", ch);
            } else {
                println!(" {}", ch);
            }
        }
        if r + 1 < GRID_SIZE {
            println!("  ---+---+---");
        }
    }
    println!();
}
