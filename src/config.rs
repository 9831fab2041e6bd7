//! Game configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the classic 3x3 board and a 1000 x 600 motion field walked in steps of
//! 50 every 200 ms.

use crate::games::grid::{Dimensions, Lattice, Point};
use crate::games::snake::{Body, Heading};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Turn-mode settings.
    #[serde(default)]
    turn: TurnConfig,

    /// Motion-mode settings.
    #[serde(default)]
    motion: MotionConfig,
}

/// Turn-mode grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Number of columns.
    #[serde(default = "default_side")]
    columns: usize,

    /// Number of rows.
    #[serde(default = "default_side")]
    rows: usize,
}

/// Motion-mode playfield, timing and starting body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Playfield width in lattice units.
    #[serde(default = "default_width")]
    width: i32,

    /// Playfield height in lattice units.
    #[serde(default = "default_height")]
    height: i32,

    /// Distance covered per tick.
    #[serde(default = "default_step")]
    step: i32,

    /// Tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Initial head x.
    #[serde(default)]
    start_x: i32,

    /// Initial head y.
    #[serde(default)]
    start_y: i32,

    /// Initial heading.
    #[serde(default)]
    heading: Heading,

    /// Number of body segments.
    #[serde(default = "default_length")]
    length: usize,
}

/// Largest turn grid accepted from configuration.
pub const MAX_TURN_CELLS: usize = 4096;

fn default_side() -> usize {
    3
}

fn default_width() -> i32 {
    1000
}

fn default_height() -> i32 {
    600
}

fn default_step() -> i32 {
    50
}

fn default_tick_ms() -> u64 {
    200
}

fn default_length() -> usize {
    1
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            columns: default_side(),
            rows: default_side(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            step: default_step(),
            tick_ms: default_tick_ms(),
            start_x: 0,
            start_y: 0,
            heading: Heading::default(),
            length: default_length(),
        }
    }
}

impl TurnConfig {
    /// Creates a turn configuration for a `columns` x `rows` grid.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.columns, self.rows)
    }

    /// Checks that the grid can hold at least one line.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::new("turn grid must have at least one cell"));
        }
        if self.columns < 3 && self.rows < 3 {
            return Err(ConfigError::new(
                "turn grid needs 3 cells in some direction to hold a line",
            ));
        }
        match self.columns.checked_mul(self.rows) {
            Some(cells) if cells <= MAX_TURN_CELLS => Ok(()),
            _ => Err(ConfigError::new(format!(
                "turn grid {}x{} exceeds {} cells",
                self.columns, self.rows, MAX_TURN_CELLS
            ))),
        }
    }
}

impl MotionConfig {
    /// Creates a motion configuration on a `width` x `height` field.
    pub fn new(width: i32, height: i32, step: i32) -> Self {
        Self {
            width,
            height,
            step,
            ..Self::default()
        }
    }

    /// Sets the initial head and heading.
    pub fn with_start(mut self, head: Point, heading: Heading) -> Self {
        self.start_x = head.x;
        self.start_y = head.y;
        self.heading = heading;
        self
    }

    /// Sets the number of body segments.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the tick period.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Playfield bounds.
    pub fn lattice(&self) -> Lattice {
        Lattice::new(self.width, self.height, self.step)
    }

    /// Initial head position.
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Tick period.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Body laid out from the start position.
    pub fn initial_body(&self) -> Body {
        Body::new(self.start(), self.heading, self.length, self.step)
    }

    /// Checks the playfield and that the initial body fits inside it.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::new("motion field must have positive size"));
        }
        if self.step <= 0 {
            return Err(ConfigError::new("motion step must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick period must be positive"));
        }
        let lattice = self.lattice();
        let nodes = match self.heading {
            Heading::Left | Heading::Right => lattice.columns(),
            Heading::Up | Heading::Down => lattice.rows(),
        };
        if self.length > nodes {
            return Err(ConfigError::new(format!(
                "body length {} exceeds the {} nodes along heading {}",
                self.length, nodes, self.heading
            )));
        }
        if !lattice.is_aligned(self.start()) {
            return Err(ConfigError::new(format!(
                "start {} is not a multiple of step {}",
                self.start(),
                self.step
            )));
        }
        if let Some(outside) = self.initial_body().iter().find(|p| !lattice.contains(**p)) {
            return Err(ConfigError::new(format!(
                "initial body segment {} lies outside the {}x{} field",
                outside, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl ArcadeConfig {
    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(turn = ?config.turn, motion = ?config.motion, "Config loaded successfully");
        Ok(config)
    }

    /// Validates both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.turn.validate()?;
        self.motion.validate()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
