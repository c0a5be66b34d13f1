#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cellset;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod rules;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use cellset::{CellSet, CellSetError};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use rules::*;
