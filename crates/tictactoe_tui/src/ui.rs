//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Mark, Outcome, Player, Position};

use crate::app::App;
use crate::glyphs::{CELL_HEIGHT, CELL_WIDTH};

const CELL_OUTER_WIDTH: u16 = CELL_WIDTH as u16 + 2;
const CELL_OUTER_HEIGHT: u16 = CELL_HEIGHT as u16 + 2;
const BOARD_WIDTH: u16 = CELL_OUTER_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_OUTER_HEIGHT * 3;

const HINT: &str = "arrows/hjkl move · enter/space/1-9 play · click a cell · r restart · q quit";

/// Screen rectangles of the 9 cells from the last render.
///
/// Used to translate mouse clicks into board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Rectangle of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let rect = self.cell(*pos);
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
    }
}

/// Renders the whole screen and returns where the cells were drawn.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(5), // Labels
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1), // Hint
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_labels(frame, chunks[1], app);
    let layout = draw_board(frame, chunks[2], app);

    let hint = Paragraph::new(HINT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);

    layout
}

fn draw_labels(frame: &mut Frame, area: Rect, app: &App) {
    let outcome_style = match app.engine().current_outcome() {
        Outcome::Win { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Outcome::Tie => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Outcome::InProgress => Style::default(),
    };

    let text = Text::from(vec![
        Line::from(app.score_text()),
        Line::from(app.turn_text()),
        Line::from(Span::styled(app.outcome_text(), outcome_style)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Round {} ", app.engine().round()));
    let labels = Paragraph::new(text).alignment(Alignment::Center).block(block);
    frame.render_widget(labels, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> BoardLayout {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let mut layout = BoardLayout::default();

    for pos in Position::ALL {
        let rect = Rect::new(
            board_area.x.saturating_add(pos.col() as u16 * CELL_OUTER_WIDTH),
            board_area.y.saturating_add(pos.row() as u16 * CELL_OUTER_HEIGHT),
            CELL_OUTER_WIDTH,
            CELL_OUTER_HEIGHT,
        )
        .intersection(area);

        layout.cells[pos.index()] = rect;
        draw_cell(frame, rect, app, pos);
    }

    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let outcome = engine.current_outcome();
    let mark = engine.board().get(pos);

    let mark_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let (style, border_style) = match outcome {
        Outcome::Win { line, .. } if line.contains(&pos) => (
            mark_style.bg(Color::Green).fg(Color::Black),
            Style::default().fg(Color::Green),
        ),
        Outcome::Tie => (
            mark_style.fg(Color::Yellow),
            Style::default().fg(Color::Yellow),
        ),
        Outcome::InProgress if pos == *app.cursor() => (
            mark_style.bg(Color::White).fg(Color::Black),
            Style::default().fg(Color::White),
        ),
        _ => (mark_style, Style::default().fg(Color::DarkGray)),
    };

    let content: Vec<String> = match mark.player() {
        Some(player) => glyph_lines(app, player),
        None => vec![(pos.index() + 1).to_string()],
    };

    let padding = CELL_HEIGHT.saturating_sub(content.len()) / 2;
    let mut lines: Vec<Line> = std::iter::repeat_n(Line::default(), padding).collect();
    lines.extend(content.into_iter().map(Line::from));

    let cell = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(cell, area);
}

fn glyph_lines(app: &App, player: Player) -> Vec<String> {
    app.glyphs().get(player).lines().to_vec()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_rectangles() {
        let mut layout = BoardLayout::default();
        for pos in Position::ALL {
            let (x, y) = (pos.col() as u16 * 10, pos.row() as u16 * 5);
            layout.cells[pos.index()] = Rect::new(x, y, 10, 5);
        }

        assert_eq!(layout.cell_at(0, 0), Position::new(0, 0).ok());
        assert_eq!(layout.cell_at(15, 7), Some(Position::CENTER));
        assert_eq!(layout.cell_at(29, 14), Position::new(2, 2).ok());
        assert_eq!(layout.cell_at(30, 0), None);
        assert_eq!(layout.cell_at(0, 15), None);
    }

    #[test]
    fn test_default_layout_matches_nothing() {
        assert_eq!(BoardLayout::default().cell_at(0, 0), None);
    }

    #[test]
    fn test_center_rect() {
        let rect = center_rect(Rect::new(0, 0, 100, 50), BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(rect.width, BOARD_WIDTH);
        assert_eq!(rect.height, BOARD_HEIGHT);
        assert_eq!(rect.x, (100 - BOARD_WIDTH) / 2);
    }

    #[test]
    fn test_center_rect_clamps_to_small_area() {
        let area = Rect::new(2, 3, 20, 10);
        let rect = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(rect, area);
    }
}
