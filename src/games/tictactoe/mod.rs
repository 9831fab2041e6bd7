//! Turn-mode game: markers alternate on a grid until one completes a line
//! or the grid fills up.

mod controller;
pub mod rules;
mod types;

pub use controller::{FIRST_MARKER, TurnController};
pub use rules::{WinPatterns, WinResult};
pub use types::{Move, TurnStatus, TurnUpdate};
