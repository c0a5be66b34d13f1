#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::thread;
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging,
    ui::{alert_for, parse_cell, print_board},
    GameEngine, GameStatus,
};

/// Play tic-tac-toe against the computer in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 500, help = "Computer thinking pause in milliseconds")]
    delay_ms: u64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::new();
    println!("You are X, the computer is O. Pick a cell with keys 1-9.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(engine.board());

        let index = match prompt_cell(&engine, &mut lines)? {
            Some(index) => index,
            None => break,
        };
        let status = engine.apply_human_move(index).map_err(|e| anyhow::anyhow!(e))?;
        if status.is_over() {
            if !finish_round(&mut engine, status, &mut lines)? {
                break;
            }
            continue;
        }

        // Input is not read again until the reply lands, so the board
        // stays locked for the duration of the pause.
        println!("Computer is thinking...");
        thread::sleep(Duration::from_millis(cli.delay_ms));

        let before = engine.board().occupied();
        let status = engine.apply_computer_move(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        if let Some(cell) = engine.board().occupied().difference(&before).sole() {
            log::info!("Computer plays cell {}", cell + 1);
        }
        if status.is_over() {
            if !finish_round(&mut engine, status, &mut lines)? {
                break;
            }
        }
    }

    Ok(())
}

/// Read cells until one names an empty square. `None` on end of input.
#[cfg(feature = "std")]
fn prompt_cell(
    engine: &GameEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<usize>> {
    loop {
        print!("Your move [1-9]: ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        match parse_cell(&line) {
            Some(index) if engine.is_occupied(index) => {
                println!("Cell {} is already taken.", index + 1);
            }
            Some(index) => return Ok(Some(index)),
            None => println!("Enter a number from 1 to 9."),
        }
    }
}

/// Show the end-of-round alert and offer a restart. Returns `false` when
/// the player declines and the program should exit.
#[cfg(feature = "std")]
fn finish_round(
    engine: &mut GameEngine,
    status: GameStatus,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    print_board(engine.board());
    if let Some(alert) = alert_for(status) {
        println!("{}", alert.title);
        println!("{}", alert.message);
        print!("{} Play again? [y/n]: ", alert.dismiss);
        io::stdout().flush()?;
        if let Some(line) = lines.next() {
            if line?.trim().eq_ignore_ascii_case("y") {
                engine.reset();
                return Ok(true);
            }
        }
    }
    Ok(false)
}
