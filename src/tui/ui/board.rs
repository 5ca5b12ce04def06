//! Tic-tac-toe board rendering.

use super::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};
use crate::games::tictactoe::{Player, Position, Square, rules};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;

/// Renders the board: cells, separators, cursor and winning line.
pub fn render_board(f: &mut Frame, layout: &BoardLayout, app: &App) {
    let board = app.engine().board();
    let winning = rules::winning_triple(board).map(|(_, triple)| triple);

    for pos in Position::iter() {
        let highlight = winning.is_some_and(|triple| triple.contains(&pos));
        render_square(
            f,
            layout.cell(pos),
            board.get(pos),
            pos,
            pos == app.cursor(),
            highlight,
            app.show_hints(),
        );
    }

    render_separators(f, layout.board());
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    under_cursor: bool,
    winning: bool,
    show_hints: bool,
) {
    let (text, style) = match square {
        Square::Empty if show_hints => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        style.fg(Color::Green)
    } else {
        style
    };

    let cell_style = if under_cursor {
        Style::default().bg(Color::White)
    } else {
        Style::default()
    };

    // Middle line of the cell
    let lines = vec![Line::default(), Line::from(Span::styled(text, style))];
    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separators(f: &mut Frame, board: Rect) {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");
    let style = Style::default().fg(Color::DarkGray);

    for row in 1..3 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1);
        f.render_widget(Paragraph::new(horizontal.as_str()).style(style), area);
    }

    let vertical: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    for row in 0..3 {
        for col in 1..3 {
            let x = board.x + col * (CELL_WIDTH + 1) - 1;
            let y = board.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT);
            f.render_widget(Paragraph::new(vertical.clone()).style(style), area);
        }
    }
}
