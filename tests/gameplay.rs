use std::collections::HashSet;

use grid_snake::{
    Cell, Collision, Config, ConfigError, Direction, GameState, Grid, HeldDirections, Phase,
    Rules, StepOutcome,
};

fn assert_body_distinct(game: &GameState) {
    let unique: HashSet<_> = game.snake().iter().copied().collect();
    assert_eq!(unique.len(), game.snake().len());
}

#[test]
fn eats_food_three_cells_ahead() {
    let rules = Rules::default();
    let n = rules.move_every() as usize;
    let mut game = GameState::new(rules, 11);
    game.place_food(Cell::new(8, 5)).expect("free cell");

    for _ in 0..3 * n {
        game.step();
    }

    assert_eq!(game.head(), Cell::new(8, 5));
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().len(), 2);
    let food = game.food().expect("food relocated");
    assert_ne!(food, Cell::new(8, 5));
    assert!(!game.snake().contains(&food));
}

#[test]
fn spawn_never_lands_on_snake() {
    let rules = Rules::new(Grid::new(4, 3), 20, 5, Cell::new(0, 0), Direction::Right).expect("rules");
    let body = vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(3, 0),
        Cell::new(3, 1),
        Cell::new(2, 1),
        Cell::new(1, 1),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 2),
    ];
    for seed in 0..200 {
        let mut game = GameState::from_snake(rules, body.clone(), Direction::Up, seed).expect("layout");
        for _ in 0..5 {
            let food = game.spawn_food().expect("two free cells");
            assert!(!game.snake().contains(&food));
            assert!(rules.grid().contains(food));
        }
    }
}

#[test]
fn spawn_reaches_every_free_cell() {
    let rules = Rules::new(Grid::new(3, 1), 20, 5, Cell::new(0, 0), Direction::Right).expect("rules");
    let mut game = GameState::new(rules, 3);
    let seen: HashSet<_> = (0..100).filter_map(|_| game.spawn_food()).collect();
    assert_eq!(seen, HashSet::from([Cell::new(1, 0), Cell::new(2, 0)]));
}

#[test]
fn random_play_keeps_body_invariants() {
    let rules = Rules::new(Grid::new(20, 20), 20, 1, Cell::new(5, 5), Direction::Right).expect("rules");
    let dirs = Direction::PRIORITY;
    for seed in 0..20u64 {
        let mut game = GameState::new(rules, seed);
        let mut len = game.snake().len();
        for tick in 0..400u64 {
            let pick = dirs[((tick * 7 + seed * 13) / 9 % 4) as usize];
            game.steer(&HeldDirections::only(pick));
            let outcome = game.step();
            assert!(!game.snake().is_empty());
            match outcome {
                StepOutcome::Moved => assert_eq!(game.snake().len(), len),
                StepOutcome::Ate | StepOutcome::Filled => {
                    assert_eq!(game.snake().len(), len + 1)
                }
                StepOutcome::Crashed(_) | StepOutcome::Halted => {
                    assert_eq!(game.snake().len(), len)
                }
                StepOutcome::Waiting => unreachable!("move_every is 1"),
            }
            len = game.snake().len();
            if game.is_over() {
                break;
            }
            assert_body_distinct(&game);
            if let Some(food) = game.food() {
                assert!(!game.snake().contains(&food));
            }
        }
    }
}

#[test]
fn turn_then_hit_wall() {
    let mut game = GameState::new(Rules::default(), 5);
    game.place_food(Cell::new(19, 19)).expect("free cell");
    let up = HeldDirections::only(Direction::Up);

    // Five moves up reach row 0, the sixth leaves the grid.
    for _ in 0..5 * 5 {
        game.advance(&up);
    }
    assert_eq!(game.head(), Cell::new(5, 0));
    assert_eq!(game.phase(), Phase::Playing);

    let model = (0..5).map(|_| game.advance(&up)).last().expect("frames");
    assert_eq!(game.phase(), Phase::GameOver(Collision::Wall));
    assert_eq!(game.head(), Cell::new(5, 0));
    assert_eq!(model.banner.expect("banner").text, "GAME OVER!");
    assert_eq!(model.score.text, "Score: 0");
}

#[test]
fn restart_after_crash() {
    let mut game = GameState::from_snake(Rules::default(), vec![Cell::new(0, 0)], Direction::Left, 1)
        .expect("layout");
    for _ in 0..5 {
        game.step();
    }
    assert!(game.is_over());
    assert_eq!(game.step(), StepOutcome::Halted);

    game.reset();
    assert!(!game.is_over());
    for _ in 0..5 {
        game.step();
    }
    assert_eq!(game.head(), Cell::new(6, 5));
}

#[test]
fn bad_config_never_reaches_a_game() {
    let zero_divisor = Config::from_json(r#"{ "move_every": 0 }"#).expect("json");
    assert!(matches!(zero_divisor.rules(), Err(ConfigError::Invalid(_))));

    let off_grid = Config::from_json(r#"{ "start": {"x": 50, "y": 50} }"#).expect("json");
    assert!(matches!(off_grid.rules(), Err(ConfigError::Invalid(_))));

    let oversized = Config::from_json(r#"{ "cell_size": 1, "screen_width": 5000 }"#).expect("json");
    assert!(matches!(oversized.rules(), Err(ConfigError::Invalid(_))));
}

#[test]
fn one_tick_cadence_moves_every_step() {
    let config = Config::from_json(r#"{ "move_every": 1, "start": {"x": 0, "y": 0} }"#).expect("json");
    let rules = config.rules().expect("valid rules");
    let mut game = GameState::new(rules, 2);
    game.place_food(Cell::new(19, 19)).expect("free cell");
    assert_eq!(game.head(), Cell::new(0, 0));
    assert_eq!(game.step(), StepOutcome::Moved);
    assert_eq!(game.head(), Cell::new(1, 0));

    game.reset();
    assert_eq!(game.head(), Cell::new(0, 0));
    assert!(rules.grid().contains(game.head()));
}

#[test]
fn spawn_on_largest_grid_skips_long_body() {
    let rules = Rules::new(Grid::new(256, 256), 1, 5, Cell::new(255, 0), Direction::Down)
        .expect("rules at the size limit");
    let body: Vec<Cell> = (0..256).rev().map(|x| Cell::new(x, 0)).collect();
    let mut game = GameState::from_snake(rules, body, Direction::Down, 9).expect("layout");
    for _ in 0..20 {
        let food = game.spawn_food().expect("free cells");
        assert!(food.y > 0);
    }
}
