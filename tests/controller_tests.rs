//! Integration tests for the game controller

use blockfall::core::{Controller, Grid, Phase, PieceFactory, RandomSource, SimpleRng};
use blockfall::types::{Color, GameAction, RotateDirection, TetrominoKind};

/// Spawns kinds from a fixed script, repeating the last entry once exhausted.
struct Script {
    kinds: Vec<TetrominoKind>,
    next: usize,
}

impl Script {
    fn new(kinds: &[TetrominoKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_index(&mut self, _len: usize) -> usize {
        let i = self.next.min(self.kinds.len() - 1);
        self.next += 1;
        let kind = self.kinds[i];
        TetrominoKind::ALL.iter().position(|k| *k == kind).unwrap()
    }
}

fn scripted(kinds: &[TetrominoKind]) -> Controller<()> {
    Controller::new(PieceFactory::new(Script::new(kinds)), ())
}

/// Tick until the active piece locks. Returns the number of ticks taken.
fn drop_until_locked(game: &mut Controller<()>) -> usize {
    let spawned = game.pieces_spawned();
    let mut ticks = 0;
    while game.pieces_spawned() == spawned {
        assert!(game.tick(), "tick refused while dropping");
        ticks += 1;
        assert!(ticks <= 64, "piece never locked");
    }
    ticks
}

fn occupied(grid: &Grid) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_some() {
                cells.push((r as i32, c as i32));
            }
        }
    }
    cells
}

#[test]
fn test_o_piece_falls_and_locks_at_the_floor() {
    let mut game = scripted(&[TetrominoKind::O]);
    game.start();

    for _ in 0..18 {
        assert!(game.tick());
    }
    let piece = game.active().unwrap();
    assert_eq!((piece.row, piece.col), (18, 4));
    assert_eq!(game.pieces_spawned(), 1);

    // 19th tick cannot descend any further.
    assert!(game.tick());
    assert_eq!(game.pieces_spawned(), 2);
    assert_eq!(occupied(game.grid()), vec![(18, 4), (18, 5), (19, 4), (19, 5)]);
    assert_eq!(game.grid().get(19, 4), Some(Some(Color::Yellow)));
    assert_eq!(game.score(), 0);
    assert!(game.is_running());
}

#[test]
fn test_completing_a_row_scores_and_shifts_down() {
    use TetrominoKind::{I, O};
    let mut game = scripted(&[I, I, O]);
    game.start();

    for _ in 0..4 {
        assert!(game.apply_action(GameAction::MoveLeft));
    }
    assert_eq!(game.active().unwrap().col, 0);
    drop_until_locked(&mut game);

    // Second I stays at the spawn column and fills 4..=7.
    drop_until_locked(&mut game);
    assert_eq!(game.score(), 0);

    for _ in 0..4 {
        assert!(game.apply_action(GameAction::MoveRight));
    }
    assert_eq!(game.active().unwrap().col, 8);
    drop_until_locked(&mut game);

    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    // The top half of the O dropped into the bottom row.
    assert_eq!(occupied(game.grid()), vec![(19, 8), (19, 9)]);
    assert!(game.grid().row(0).iter().all(Option::is_none));
    assert!(game.is_running());
}

#[test]
fn test_i_piece_stops_at_left_wall() {
    let mut game = scripted(&[TetrominoKind::I]);
    game.start();

    for expected in [3, 2, 1, 0] {
        assert!(game.move_horizontal(-1));
        assert_eq!(game.active().unwrap().col, expected);
    }
    assert_eq!(game.active().unwrap().leftmost_col(), 0);

    let before = game.active().cloned();
    assert!(!game.move_horizontal(-1));
    assert_eq!(game.active().cloned(), before);
    assert_eq!(game.active().unwrap().leftmost_col(), 0);
}

#[test]
fn test_stacking_in_one_column_ends_the_game() {
    let mut game = scripted(&[TetrominoKind::O]);
    game.start();

    for locked in 1..=10 {
        assert!(!game.is_game_over(), "game over before lock {locked}");
        drop_until_locked(&mut game);
    }

    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.pieces_spawned(), 11);
    assert!(game.grid().row(0).iter().any(Option::is_some));
    assert!(!game.tick_timer().is_armed());

    let frozen = game.grid().clone();
    assert!(!game.tick());
    assert!(!game.move_horizontal(1));
    assert!(!game.rotate(RotateDirection::Clockwise));
    assert!(!game.apply_action(GameAction::Descend));
    assert_eq!(game.grid(), &frozen);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = scripted(&[TetrominoKind::O]);
    game.start();
    while !game.is_game_over() {
        game.tick();
    }

    assert!(game.apply_action(GameAction::Start));
    assert!(game.is_running());
    assert_eq!(game.grid().filled_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.pieces_spawned(), 1);
}

#[test]
fn test_rotation_cycle_returns_to_spawn_shape() {
    let mut game = scripted(&[TetrominoKind::T]);
    game.start();
    // Give the T room to turn in every orientation.
    game.tick();
    let spawn = game.active().unwrap().shape.clone();

    for _ in 0..4 {
        assert!(game.apply_action(GameAction::RotateRight));
    }
    assert_eq!(game.active().unwrap().shape, spawn);

    assert!(game.apply_action(GameAction::RotateLeft));
    assert!(game.apply_action(GameAction::RotateRight));
    assert_eq!(game.active().unwrap().shape, spawn);
}

#[test]
fn test_actions_before_start_are_ignored() {
    let mut game = scripted(&[TetrominoKind::S]);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Descend,
        GameAction::RotateLeft,
        GameAction::RotateRight,
        GameAction::Pause,
    ] {
        assert!(!game.apply_action(action), "{action:?} accepted before start");
    }
    assert_eq!(game.phase(), Phase::Ready);
    assert!(game.active().is_none());
}

#[test]
fn test_small_grid_game() {
    let mut game = scripted(&[TetrominoKind::O]).with_grid(Grid::new(6, 10));
    game.start();

    // Rows 4-5, then 2-3, then the third O locks at the top.
    assert_eq!(drop_until_locked(&mut game), 5);
    assert_eq!(drop_until_locked(&mut game), 3);
    assert!(!game.is_game_over());
    assert_eq!(drop_until_locked(&mut game), 1);
    assert!(game.is_game_over());
}

/// Random play: drives a seeded game with seeded inputs and checks the
/// invariants that must hold after every single operation.
#[test]
fn test_random_play_invariants() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Descend,
        GameAction::RotateLeft,
        GameAction::RotateRight,
    ];

    for seed in [1, 7, 12345, 0xdead_beef] {
        let mut game = Controller::new(PieceFactory::seeded(seed), ());
        let mut inputs = SimpleRng::new(seed ^ 0x5555);
        game.start();

        for _ in 0..5_000 {
            if game.is_game_over() {
                assert!(game.grid().row(0).iter().any(Option::is_some));
                game.start();
            }

            if inputs.next_range(3) == 0 {
                game.tick();
            } else {
                let action = actions[inputs.next_range(actions.len() as u32) as usize];
                game.apply_action(action);
            }

            assert_eq!(game.score(), game.lines() * 100);

            if game.is_running() {
                let grid = game.grid();
                let piece = game.active().unwrap();
                assert!(
                    grid.row(0).iter().all(Option::is_none),
                    "running with an occupied top row"
                );
                for (r, c) in piece.cells() {
                    assert!(c >= 0 && (c as usize) < grid.cols(), "col {c} out of bounds");
                    assert!(r >= 0 && (r as usize) < grid.rows(), "row {r} out of bounds");
                }
            }
        }
    }
}
