//! Game controller: turn alternation, outcome evaluation, reset.

use crate::ai;
use crate::board::{Board, Move, Player};
use crate::common::MoveError;
use crate::rules::{check_draw, check_win};
use rand::Rng;

/// Status of a game; also the outcome reported for each applied move.
/// `InProgress` means play continues; the other three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameStatus {
    /// True for the three terminal states.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Serializable snapshot of a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
}

/// Core game state machine. The human opens on an empty board; moves
/// strictly alternate, with win checked before draw after every placement.
/// Exactly one writer mutates the board, one move at a time; a terminal
/// status admits no further moves until `reset`.
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl GameEngine {
    /// New game: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Human,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose move is expected next. Meaningless once the game is
    /// over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Query helper for frontends gating input. `index` must be in [0..9).
    pub fn is_occupied(&self, index: usize) -> bool {
        self.board.is_occupied(index)
    }

    /// Query helper for frontends gating input.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Back to the initial state: empty board, human to move. The only
    /// exit from a terminal status.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Player::Human;
        self.status = GameStatus::InProgress;
    }

    /// Place the human's mark at `index` and evaluate the outcome.
    pub fn apply_human_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.apply(Player::Human, index)
    }

    /// Let the computer choose a cell, place its mark and evaluate the
    /// outcome. Never invoked on a full board by a conforming caller, so
    /// move selection always finds a cell.
    pub fn apply_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != Player::Computer {
            return Err(MoveError::OutOfTurn);
        }
        let index = ai::select_move(&self.board, rng);
        self.apply(Player::Computer, index)
    }

    fn apply(&mut self, player: Player, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.turn != player {
            return Err(MoveError::OutOfTurn);
        }
        self.board.place(Move::new(player, index))?;

        // Win for the mover first, then draw. check_draw is purely "board
        // full", so the order is part of the contract.
        if check_win(&self.board, player) {
            self.status = match player {
                Player::Human => GameStatus::HumanWin,
                Player::Computer => GameStatus::ComputerWin,
            };
        } else if check_draw(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.turn = player.opponent();
        }
        Ok(self.status)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            turn: self.turn,
            status: self.status,
        }
    }

    /// Restore an engine from a previously saved snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: state.board,
            turn: state.turn,
            status: state.status,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
