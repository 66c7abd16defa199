#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
mod display;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod session;
mod ship;
mod view;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::Command;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use session::*;
pub use ship::*;
pub use view::*;
