use grid_snake::config::{CONFIG_PATH, Config, Rules};
use grid_snake::{Direction, GameState, InputSource, RenderModel, Rgba};
use log::{info, warn};
use macroquad::prelude::*;

const WINDOW_TITLE: &str = "Snake - Macroquad";
const FONT_SIZE: f32 = 16.0;

/// Arrow keys plus WASD.
struct Keyboard;

impl InputSource for Keyboard {
    fn is_direction_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            Direction::Down => is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            Direction::Left => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Direction::Right => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        }
    }
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

fn draw_model(model: &RenderModel) {
    clear_background(to_color(model.background));
    for fill in model.fills() {
        let r = fill.rect;
        draw_rectangle(r.x as f32, r.y as f32, r.w as f32, r.h as f32, to_color(fill.color));
    }
    // Directives anchor at the top-left; macroquad draws from the baseline.
    for text in model.texts() {
        draw_text(&text.text, text.x as f32, text.y as f32 + FONT_SIZE, FONT_SIZE, WHITE);
    }
}

fn load_rules() -> (Rules, Option<u64>) {
    let config = Config::load(CONFIG_PATH).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        Config::default()
    });
    match config.rules() {
        Ok(rules) => (rules, config.seed),
        Err(e) => {
            warn!("{e}; using default rules");
            (Rules::default(), config.seed)
        }
    }
}

fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1_000_000.0) as u64
}

fn window_conf() -> Conf {
    let (width, height) = Rules::default().screen_size();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let (rules, seed) = load_rules();
    let (width, height) = rules.screen_size();
    if (width, height) != Rules::default().screen_size() {
        request_new_screen_size(width as f32, height as f32);
    }

    let seed = seed.unwrap_or_else(clock_seed);
    let mut game = GameState::new(rules, seed);

    loop {
        if is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape) {
            info!("quit with score {}", game.score());
            break;
        }
        if game.is_over() && is_key_pressed(KeyCode::R) {
            game.reset();
        }

        let model = game.advance(&Keyboard);
        draw_model(&model);

        next_frame().await;
    }
}
