//! Grid Arcade - grid-cell game simulation engine
//!
//! Two game modes share one small substrate: a fixed-size grid and a rule
//! evaluated after every state change.
//!
//! # Architecture
//!
//! - **Grid**: fixed dimensions, index or coordinate addressing
//! - **Turn mode**: markers alternate, a line of three wins, a full grid draws
//! - **Motion mode**: a body moves one lattice step per tick until it hits the edge
//! - **Scheduler**: event-driven turn loop and tick-driven motion loop
//! - **Frontend**: terminal input source and rendering target
//!
//! # Example
//!
//! ```
//! use grid_arcade::{TurnController, TurnStatus, Marker};
//!
//! let mut game = TurnController::classic();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(
//!     game.status(),
//!     TurnStatus::Won { marker: Marker::O, pattern: [0, 1, 2] }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod error;
pub mod games;
pub mod headless;
pub mod notify;
pub mod scheduler;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ArcadeConfig, ConfigError, MotionConfig, TurnConfig};

// Crate-level exports - Errors
pub use error::{GameError, InvalidMoveReason};

// Crate-level exports - Grid model
pub use games::grid::{Cell, Dimensions, Grid, Lattice, Marker, Point};

// Crate-level exports - Turn mode
pub use games::tictactoe::{Move, TurnController, TurnStatus, TurnUpdate, WinPatterns, WinResult};

// Crate-level exports - Motion mode
pub use games::snake::{Body, Heading, MotionEngine, MotionStatus, MotionUpdate};

// Crate-level exports - Headless runs
pub use headless::{ReplayError, replay, simulate};

// Crate-level exports - Loops and notifications
pub use notify::{RenderTarget, TurnEvent};
pub use scheduler::{
    ClockHandle, InputEvent, IntervalClock, ManualClock, TickSource, run_motion_loop,
    run_turn_loop,
};
