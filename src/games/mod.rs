//! Game implementations.

pub mod grid;
pub mod snake;
pub mod tictactoe;
