use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Rejected board layouts passed to the explicit setup constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("snake must have at least one segment")]
    EmptySnake,

    #[error("cell ({}, {}) is outside the grid", .0.x, .0.y)]
    OutOfBounds(Cell),

    #[error("snake occupies cell ({}, {}) twice", .0.x, .0.y)]
    Duplicate(Cell),

    #[error("cell ({}, {}) is covered by the snake", .0.x, .0.y)]
    Occupied(Cell),
}
