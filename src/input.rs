use crate::grid::Direction;

/// Anything that can answer "is this direction held right now".
pub trait InputSource {
    fn is_direction_held(&self, dir: Direction) -> bool;
}

/// Fixed set of held directions. Handy for replays and headless runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl HeldDirections {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only(dir: Direction) -> Self {
        Self::none().with(dir)
    }

    pub fn with(mut self, dir: Direction) -> Self {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }
}

impl InputSource for HeldDirections {
    fn is_direction_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Held directions in priority order.
pub fn held<I: InputSource + ?Sized>(input: &I) -> impl Iterator<Item = Direction> + '_ {
    Direction::PRIORITY
        .into_iter()
        .filter(move |d| input.is_direction_held(*d))
}
