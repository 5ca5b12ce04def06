//! Tests for the terminal front end: input handling and rendering.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use tictactoe::{
    App, BoardLayout, Direction, Flow, GameStatus, Input, MIN_HEIGHT, MIN_WIDTH, Player, Position,
    Square, draw,
};

/// App with a layout for an 80x30 terminal already recorded.
fn app_with_layout() -> (App, BoardLayout) {
    let mut app = App::new(true);
    let layout = BoardLayout::compute(Rect::new(0, 0, 80, 30)).expect("80x30 fits");
    app.set_layout(Some(layout));
    (app, layout)
}

fn click_cell(app: &mut App, layout: &BoardLayout, pos: Position) -> Flow {
    let rect = layout.cell(pos);
    app.handle_input(Input::Click {
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
    })
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(app: &App, width: u16, height: u16) -> (Option<BoardLayout>, String) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("Test terminal");
    let mut layout = None;
    terminal
        .draw(|f| layout = draw(f, app))
        .expect("Draw failed");
    (layout, screen_text(terminal.backend().buffer()))
}

#[test]
fn test_click_plays_cell() {
    let (mut app, layout) = app_with_layout();
    assert_eq!(click_cell(&mut app, &layout, Position::Center), Flow::Continue);
    assert_eq!(
        app.engine().board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(app.engine().current_player(), Player::O);
    assert_eq!(app.cursor(), Position::Center);
}

#[test]
fn test_clicks_play_top_row_win() {
    let (mut app, layout) = app_with_layout();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        click_cell(&mut app, &layout, pos);
    }
    assert_eq!(app.engine().status(), GameStatus::Won(Player::X));

    // Further clicks change nothing
    let before = app.engine().state().clone();
    click_cell(&mut app, &layout, Position::BottomRight);
    assert_eq!(app.engine().state(), &before);
}

#[test]
fn test_click_outside_board_ignored() {
    let (mut app, layout) = app_with_layout();
    let board = layout.board();
    app.handle_input(Input::Click { column: 0, row: 0 });
    app.handle_input(Input::Click {
        column: board.x + 11,
        row: board.y + 1,
    });
    assert!(app.engine().board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_click_before_first_frame_ignored() {
    let mut app = App::new(true);
    app.handle_input(Input::Click { column: 40, row: 15 });
    assert!(app.engine().board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_reset_button_resets() {
    let (mut app, layout) = app_with_layout();
    click_cell(&mut app, &layout, Position::TopLeft);
    click_cell(&mut app, &layout, Position::BottomRight);

    let reset = layout.reset();
    app.handle_input(Input::Click {
        column: reset.x + reset.width / 2,
        row: reset.y + 1,
    });

    assert_eq!(app.engine().state(), tictactoe::GameEngine::new().state());
}

#[test]
fn test_keyboard_play_and_reset() {
    let (mut app, _) = app_with_layout();
    app.handle_input(Input::Select(Position::TopLeft));
    app.handle_input(Input::MoveCursor(Direction::Down));
    app.handle_input(Input::Confirm);

    assert_eq!(app.cursor(), Position::MiddleLeft);
    assert_eq!(
        app.engine().board().get(Position::MiddleLeft),
        Square::Occupied(Player::O)
    );

    assert_eq!(app.handle_input(Input::Reset), Flow::Continue);
    assert_eq!(app.engine().state(), tictactoe::GameEngine::new().state());
    assert_eq!(app.handle_input(Input::Quit), Flow::Quit);
}

#[test]
fn test_render_shows_board_and_status() {
    let (mut app, layout) = app_with_layout();
    click_cell(&mut app, &layout, Position::Center);

    let (drawn, text) = render(&app, 80, 30);
    assert_eq!(drawn, Some(layout));
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Player O's turn"));
    assert!(text.contains("Reset Game"));

    let center = layout.cell(Position::Center);
    let row: String = text.lines().nth(center.y as usize + 1).unwrap().to_string();
    assert!(row.contains('X'));
}

#[test]
fn test_render_shows_winner() {
    let mut app = App::new(false);
    app.set_layout(BoardLayout::compute(Rect::new(0, 0, 80, 30)));
    for index in [0, 3, 1, 4, 2] {
        app.handle_input(Input::Select(Position::from_index(index).unwrap()));
    }
    let (_, text) = render(&app, 80, 30);
    assert!(text.contains("Player X wins!"));
}

#[test]
fn test_render_too_small() {
    let app = App::new(true);
    let (layout, text) = render(&app, MIN_WIDTH - 1, MIN_HEIGHT);
    assert!(layout.is_none());
    assert!(text.contains("Terminal too small"));
}

#[test]
fn test_keys_ignored_while_board_hidden() {
    let (mut app, _) = app_with_layout();
    app.handle_input(Input::Select(Position::TopLeft));

    // Terminal shrank: the last frame had no board
    let (layout, _) = render(&app, MIN_WIDTH - 1, MIN_HEIGHT);
    app.set_layout(layout);

    let before = app.engine().state().clone();
    app.handle_input(Input::Select(Position::Center));
    app.handle_input(Input::Confirm);
    assert_eq!(app.engine().state(), &before);

    // Board visible again: keys play
    app.set_layout(BoardLayout::compute(Rect::new(0, 0, 80, 30)));
    app.handle_input(Input::Select(Position::Center));
    assert_eq!(
        app.engine().board().get(Position::Center),
        Square::Occupied(Player::O)
    );
}
