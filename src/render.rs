//! Backend-neutral frame description. The core fills a [`RenderModel`];
//! whatever owns the window turns it into draw calls.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

// Palette
pub const BACKGROUND: Rgba = Rgba::opaque(0, 0, 0);
pub const FOOD: Rgba = Rgba::opaque(255, 0, 0);
pub const SNAKE_HEAD: Rgba = Rgba::opaque(0, 180, 0);
pub const SNAKE_BODY: Rgba = Rgba::opaque(0, 255, 0);

/// Screen-space rectangle in pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FillRect {
    pub rect: PixelRect,
    pub color: Rgba,
}

/// Text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDirective {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub background: Rgba,
    pub food: Option<FillRect>,
    /// Head first.
    pub snake: Vec<FillRect>,
    pub banner: Option<TextDirective>,
    pub score: TextDirective,
}

impl RenderModel {
    /// Every fill in draw order: food, then the snake.
    pub fn fills(&self) -> impl Iterator<Item = &FillRect> {
        self.food.iter().chain(self.snake.iter())
    }

    /// Banner (when present) and score line.
    pub fn texts(&self) -> impl Iterator<Item = &TextDirective> {
        self.banner.iter().chain(std::iter::once(&self.score))
    }
}
