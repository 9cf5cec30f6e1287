//! Grid snake: a tick-driven simulation with a render projection that any
//! drawing backend can consume. The binary wires it to macroquad.

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;

pub use config::{Config, Rules};
pub use error::{ConfigError, SetupError};
pub use game::{Collision, GameState, Phase, StepOutcome};
pub use grid::{Cell, Direction, Grid};
pub use input::{HeldDirections, InputSource};
pub use render::{FillRect, PixelRect, RenderModel, Rgba, TextDirective};
