//! Rules for turn-mode games.
//!
//! Pure functions over a [`Grid`](crate::games::grid::Grid). Rules are
//! kept apart from the controller so they can be evaluated on any grid.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinPatterns, WinResult, evaluate};
