use blockfall::core::{Controller, PieceFactory, RandomSource};
use blockfall::term::{color_rgb, GameView, CELL_W};
use blockfall::types::{Color, GameAction, TetrominoKind};

/// Plays back a fixed list of kinds, then repeats the last one.
struct Script(Vec<TetrominoKind>);

impl RandomSource for Script {
    fn next_index(&mut self, _len: usize) -> usize {
        let kind = if self.0.len() > 1 {
            self.0.remove(0)
        } else {
            self.0[0]
        };
        TetrominoKind::ALL.iter().position(|k| *k == kind).unwrap()
    }
}

fn game(kinds: &[TetrominoKind]) -> Controller<GameView> {
    Controller::new(
        PieceFactory::new(Script(kinds.to_vec())),
        GameView::new(20, 10),
    )
}

fn lock_active(game: &mut Controller<GameView>) {
    let spawned = game.pieces_spawned();
    while game.pieces_spawned() == spawned {
        assert!(game.tick());
    }
}

/// Screen position of the left half of board cell (row, col).
fn cell_xy(row: u16, col: u16) -> (u16, u16) {
    (1 + col * CELL_W, 1 + row)
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::new(20, 10);
    let canvas = view.canvas();

    // 10 cells * 2 columns + border => 22 wide, 20 rows + border => 22 high
    assert_eq!(canvas.glyph(0, 0).unwrap().ch, '┌');
    assert_eq!(canvas.glyph(21, 0).unwrap().ch, '┐');
    assert_eq!(canvas.glyph(0, 21).unwrap().ch, '└');
    assert_eq!(canvas.glyph(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_start_prompt_until_started() {
    let mut game = game(&[TetrominoKind::T]);
    assert!(game.view().canvas().row_text(11).contains("PRESS ENTER"));

    game.apply_action(GameAction::Start);
    assert!(!game.view().canvas().row_text(11).contains("PRESS ENTER"));
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut game = game(&[TetrominoKind::O]);
    game.start();
    lock_active(&mut game);

    let canvas = game.view().canvas();
    let (x, y) = cell_xy(19, 4);
    for dx in 0..CELL_W {
        let glyph = canvas.glyph(x + dx, y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(Color::Yellow));
    }

    // Empty neighbour on the left.
    let (x, y) = cell_xy(19, 3);
    assert_eq!(canvas.glyph(x, y).unwrap().ch, '·');
}

#[test]
fn term_view_draws_the_active_piece() {
    let mut game = game(&[TetrominoKind::I]);
    game.start();
    game.tick();

    let canvas = game.view().canvas();
    for col in 4..8 {
        let (x, y) = cell_xy(1, col);
        assert_eq!(canvas.glyph(x, y).unwrap().ch, '█');
    }
    // The row it left is empty again.
    let (x, y) = cell_xy(0, 4);
    assert_eq!(canvas.glyph(x, y).unwrap().ch, '·');
}

#[test]
fn term_view_updates_score_after_a_clear() {
    use TetrominoKind::{I, O};
    let mut game = game(&[I, I, O]);
    game.start();
    assert!(game.view().canvas().row_text(1).trim_end().ends_with('0'));

    for _ in 0..4 {
        game.apply_action(GameAction::MoveLeft);
    }
    lock_active(&mut game);
    lock_active(&mut game);
    for _ in 0..4 {
        game.apply_action(GameAction::MoveRight);
    }
    lock_active(&mut game);

    assert_eq!(game.score(), 100);
    assert_eq!(game.view().score(), 100);
    assert!(game.view().canvas().row_text(1).contains("100"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut game = game(&[TetrominoKind::O]);
    game.start();

    game.apply_action(GameAction::Pause);
    assert!(game.view().canvas().row_text(11).contains("PAUSED"));
    game.apply_action(GameAction::Pause);
    assert!(!game.view().canvas().row_text(11).contains("PAUSED"));

    while !game.is_game_over() {
        game.tick();
    }
    assert!(game.view().canvas().row_text(11).contains("GAME OVER"));
}
