//! Headless batch simulation: a uniformly random mover in the human seat
//! against the heuristic computer, over seeded RNGs. Prints a JSON summary.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tictactoe::{GameEngine, GameStatus, BOARD_CELLS};

#[derive(Serialize)]
struct SimReport {
    games: usize,
    human_wins: usize,
    computer_wins: usize,
    draws: usize,
    mean_moves: f64,
}

fn random_open_cell<R: Rng>(engine: &GameEngine, rng: &mut R) -> usize {
    loop {
        let index = rng.random_range(0..BOARD_CELLS);
        if !engine.is_occupied(index) {
            return index;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();

    let mut human_wins = 0;
    let mut computer_wins = 0;
    let mut draws = 0;
    let mut total_moves = 0;

    for _ in 0..games {
        let outcome = loop {
            let cell = random_open_cell(&engine, &mut rng);
            let status = engine
                .apply_human_move(cell)
                .map_err(|e| anyhow::anyhow!(e))?;
            if status.is_over() {
                break status;
            }
            let status = engine
                .apply_computer_move(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            if status.is_over() {
                break status;
            }
        };
        match outcome {
            GameStatus::HumanWin => human_wins += 1,
            GameStatus::ComputerWin => computer_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::InProgress => unreachable!("loop exits on terminal status"),
        }
        total_moves += engine.board().move_count();
        engine.reset();
    }

    let report = SimReport {
        games,
        human_wins,
        computer_wins,
        draws,
        mean_moves: if games == 0 {
            0.0
        } else {
            total_moves as f64 / games as f64
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
