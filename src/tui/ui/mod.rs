//! Stateless UI rendering using ratatui.
//!
//! [`BoardLayout`] is the single source of truth for where things are on
//! screen: the same rectangles are used to draw and to hit-test clicks.

mod board;

use super::app::App;
use crate::games::tictactoe::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

pub use board::render_board;

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two vertical separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two horizontal separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
/// Smallest terminal width that fits the board.
pub const MIN_WIDTH: u16 = BOARD_WIDTH + 2;
/// Smallest terminal height that fits title, board, status, button and help.
pub const MIN_HEIGHT: u16 = 3 + BOARD_HEIGHT + 3 + 3 + 1;

const RESET_WIDTH: u16 = 16;
const RESET_LABEL: &str = "Reset Game";
const HELP: &str = "1-9 or click: play | arrows + enter: move | r: reset | q: quit";

/// Screen rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    title: Rect,
    board: Rect,
    cells: [Rect; 9],
    status: Rect,
    reset: Rect,
    help: Rect,
}

impl BoardLayout {
    /// Lays out a frame of the given size, or `None` if it is too small.
    #[instrument]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(3),            // Reset button
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|index| {
            let row = (index / 3) as u16;
            let col = (index % 3) as u16;
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
        });

        Some(Self {
            title: chunks[0],
            board,
            cells,
            status: chunks[2],
            reset: center_rect(chunks[3], RESET_WIDTH, 3),
            help: chunks[4],
        })
    }

    /// Area occupied by the whole board.
    pub fn board(&self) -> Rect {
        self.board
    }

    /// Area of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area of the reset button.
    pub fn reset(&self) -> Rect {
        self.reset
    }

    /// Cell under a terminal coordinate. Separators belong to no cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Returns true if the coordinate is on the reset button.
    pub fn is_reset(&self, column: u16, row: u16) -> bool {
        contains(self.reset, column, row)
    }
}

/// Draws the whole UI and returns the layout used, if the frame fits.
pub fn draw(frame: &mut Frame, app: &App) -> Option<BoardLayout> {
    let area = frame.area();
    let Some(layout) = BoardLayout::compute(area) else {
        let warning = Paragraph::new(format!(
            "Terminal too small: need at least {}x{}",
            MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
        frame.render_widget(warning, area);
        return None;
    };

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_board(frame, &layout, app);

    let status_style = if app.engine().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.engine().message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let reset = Paragraph::new(RESET_LABEL)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    Some(layout)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
