use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{Cell, Direction, Grid};

pub const CONFIG_PATH: &str = "snake.json";

const SCREEN_WIDTH: i32 = 400;
const SCREEN_HEIGHT: i32 = 400;
const CELL_SIZE: i32 = 20;
const MOVE_EVERY: u32 = 5; // callbacks per move
const MAX_CELLS: usize = 256 * 256;

/// On-disk settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
    pub move_every: u32,
    pub start: Cell,
    pub direction: Direction,
    /// Fixed RNG seed; the clock is used when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            move_every: MOVE_EVERY,
            start: Cell::new(5, 5),
            direction: Direction::Right,
            seed: None,
        }
    }
}

impl Config {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validated simulation parameters.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        let grid = Grid::new(
            self.screen_width / self.cell_size,
            self.screen_height / self.cell_size,
        );
        Rules::new(grid, self.cell_size, self.move_every, self.start, self.direction)
    }
}

/// Parameters the simulation runs with. Only built through [`Rules::new`],
/// so a `GameState` never sees a zero divisor or a start off the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rules {
    grid: Grid,
    cell_size: i32,
    move_every: u32,
    start: Cell,
    direction: Direction,
}

impl Rules {
    pub fn new(
        grid: Grid,
        cell_size: i32,
        move_every: u32,
        start: Cell,
        direction: Direction,
    ) -> Result<Self, ConfigError> {
        if cell_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {cell_size}"
            )));
        }
        if move_every == 0 {
            return Err(ConfigError::Invalid("move_every must be at least 1".to_owned()));
        }
        if grid.width < 1 || grid.height < 1 {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} has no cells",
                grid.width, grid.height
            )));
        }
        if grid.area() > MAX_CELLS {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} exceeds {MAX_CELLS} cells",
                grid.width, grid.height
            )));
        }
        if !grid.contains(start) {
            return Err(ConfigError::Invalid(format!(
                "start ({}, {}) lies outside the {}x{} grid",
                start.x, start.y, grid.width, grid.height
            )));
        }
        Ok(Self { grid, cell_size, move_every, start, direction })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Driver callbacks per snake move; at least 1.
    pub fn move_every(&self) -> u32 {
        self.move_every
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn screen_size(&self) -> (i32, i32) {
        (self.grid.width * self.cell_size, self.grid.height * self.cell_size)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid: Grid::new(SCREEN_WIDTH / CELL_SIZE, SCREEN_HEIGHT / CELL_SIZE),
            cell_size: CELL_SIZE,
            move_every: MOVE_EVERY,
            start: Cell::new(5, 5),
            direction: Direction::Right,
        }
    }
}
