use std::collections::HashSet;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Rules;
use crate::error::SetupError;
use crate::grid::{Cell, Direction};
use crate::input::{self, InputSource};
use crate::render::{self, FillRect, PixelRect, RenderModel, TextDirective};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver(Collision),
    /// The snake covers every cell; nowhere left to put food.
    Won,
}

/// What a single [`GameState::step`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Session already finished; nothing changed.
    Halted,
    /// Tick counted but not a move tick.
    Waiting,
    Moved,
    Ate,
    /// Ate the last free cell.
    Filled,
    Crashed(Collision),
}

pub struct GameState {
    rules: Rules,
    snake: Vec<Cell>,
    direction: Direction,
    food: Option<Cell>,
    score: u32,
    ticks: u64,
    phase: Phase,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Fresh session: a one-cell snake at the start cell and random food.
    pub fn new(rules: Rules, seed: u64) -> Self {
        let mut game = Self::blank(rules, vec![rules.start()], rules.direction(), seed);
        game.place_initial_food();
        let grid = rules.grid();
        info!(
            "session started: {}x{} grid, move every {} ticks, seed {}",
            grid.width,
            grid.height,
            rules.move_every(),
            seed
        );
        game
    }

    /// Session with an explicit body (head first). Food is placed randomly.
    pub fn from_snake(
        rules: Rules,
        snake: Vec<Cell>,
        direction: Direction,
        seed: u64,
    ) -> Result<Self, SetupError> {
        if snake.is_empty() {
            return Err(SetupError::EmptySnake);
        }
        for (i, &c) in snake.iter().enumerate() {
            if !rules.grid().contains(c) {
                return Err(SetupError::OutOfBounds(c));
            }
            if snake[..i].contains(&c) {
                return Err(SetupError::Duplicate(c));
            }
        }
        let mut game = Self::blank(rules, snake, direction, seed);
        game.place_initial_food();
        Ok(game)
    }

    fn blank(rules: Rules, snake: Vec<Cell>, direction: Direction, seed: u64) -> Self {
        Self {
            rules,
            snake,
            direction,
            food: None,
            score: 0,
            ticks: 0,
            phase: Phase::Playing,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn place_initial_food(&mut self) {
        if self.spawn_food().is_none() {
            self.phase = Phase::Won;
        }
    }

    /// Starts a new session with the same rules. The RNG stream carries on.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push(self.rules.start());
        self.direction = self.rules.direction();
        self.food = None;
        self.score = 0;
        self.ticks = 0;
        self.phase = Phase::Playing;
        self.place_initial_food();
        info!("session reset");
    }

    /// Moves the food to `cell`. Fails if the cell is off the grid or on the snake.
    pub fn place_food(&mut self, cell: Cell) -> Result<(), SetupError> {
        if !self.rules.grid().contains(cell) {
            return Err(SetupError::OutOfBounds(cell));
        }
        if self.snake.contains(&cell) {
            return Err(SetupError::Occupied(cell));
        }
        self.food = Some(cell);
        Ok(())
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Head first; never empty.
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    /// Turns the snake unless `requested` would reverse it onto itself.
    /// Returns whether the request was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.is_over() || requested == self.direction.opposite() {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Applies the highest-priority held direction that is allowed.
    pub fn steer<I: InputSource + ?Sized>(&mut self, source: &I) {
        for dir in input::held(source) {
            if self.set_direction(dir) {
                break;
            }
        }
    }

    /// One driver callback. The snake only moves every `move_every` calls.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_over() {
            return StepOutcome::Halted;
        }

        self.ticks += 1;
        if self.ticks % u64::from(self.rules.move_every()) != 0 {
            return StepOutcome::Waiting;
        }

        let new_head = self.head().step(self.direction);

        if !self.rules.grid().contains(new_head) {
            return self.crash(Collision::Wall);
        }
        // Checked against the body before the move, tail included.
        if self.snake.contains(&new_head) {
            return self.crash(Collision::Body);
        }

        self.snake.insert(0, new_head);

        if self.food == Some(new_head) {
            self.score += 1;
            debug!("ate at ({}, {}), score {}", new_head.x, new_head.y, self.score);
            if self.spawn_food().is_none() {
                self.phase = Phase::Won;
                info!("board filled, final score {}", self.score);
                return StepOutcome::Filled;
            }
            StepOutcome::Ate
        } else {
            self.snake.pop();
            StepOutcome::Moved
        }
    }

    fn crash(&mut self, collision: Collision) -> StepOutcome {
        self.phase = Phase::GameOver(collision);
        info!("game over ({:?}), final score {}", collision, self.score);
        StepOutcome::Crashed(collision)
    }

    /// Puts food on a uniformly chosen free cell. `None` when the snake
    /// covers the whole grid, in which case the food is cleared.
    pub fn spawn_food(&mut self) -> Option<Cell> {
        let grid = self.rules.grid();
        let occupied: HashSet<Cell> = self.snake.iter().copied().collect();
        let mut free = Vec::with_capacity(grid.area().saturating_sub(occupied.len()));
        free.extend(grid.cells().filter(|c| !occupied.contains(c)));

        self.food = if free.is_empty() {
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        };
        if let Some(c) = self.food {
            debug!("food placed at ({}, {})", c.x, c.y);
        }
        self.food
    }

    /// Snapshot of the current frame. Does not touch state.
    pub fn render(&self) -> RenderModel {
        let size = self.rules.cell_size();
        let rect = |c: Cell| PixelRect { x: c.x * size, y: c.y * size, w: size, h: size };

        let food = self.food.map(|c| FillRect { rect: rect(c), color: render::FOOD });
        let snake = self
            .snake
            .iter()
            .enumerate()
            .map(|(i, &c)| FillRect {
                rect: rect(c),
                color: if i == 0 { render::SNAKE_HEAD } else { render::SNAKE_BODY },
            })
            .collect();

        let (screen_w, screen_h) = self.rules.screen_size();
        let banner = match self.phase {
            Phase::Playing => None,
            Phase::GameOver(_) => Some("GAME OVER!"),
            Phase::Won => Some("YOU WIN!"),
        }
        .map(|text| TextDirective {
            x: screen_w / 2 - 50,
            y: screen_h / 2 - 20,
            text: text.to_owned(),
        });

        RenderModel {
            background: render::BACKGROUND,
            food,
            snake,
            banner,
            score: TextDirective { x: 10, y: 10, text: format!("Score: {}", self.score) },
        }
    }

    /// Per-callback entry point: read input, advance, project.
    pub fn advance<I: InputSource + ?Sized>(&mut self, source: &I) -> RenderModel {
        self.steer(source);
        self.step();
        self.render()
    }
}
