//! UI rendering using ratatui.

use super::app::{App, Phase};
use super::input::{CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};
use optimal_tictactoe::{Cell, Line, Move, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(GRID_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let grid = center_rect(chunks[1], GRID_WIDTH, GRID_HEIGHT);
    app.set_board_origin(grid.x, grid.y);
    render_board(f, grid, app);

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/Enter, 1-9 or click: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if *app.phase() == Phase::PlayAgain {
        render_prompt(f, chunks[1]);
    }
}

/// Renders the 3x3 grid with fixed-size cells.
fn render_board(f: &mut Frame, grid: Rect, app: &App) {
    let winning_line = app.game().winning_line();
    let show_cursor = *app.phase() == Phase::Playing;

    for mv in Move::ALL {
        let area = Rect::new(
            grid.x + mv.col as u16 * CELL_WIDTH,
            grid.y + mv.row as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(f.area());
        render_cell(f, area, app, mv, winning_line, show_cursor);
    }
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    app: &App,
    mv: Move,
    winning_line: Option<Line>,
    show_cursor: bool,
) {
    let (text, style) = match app.game().board().get(mv) {
        Cell::Empty => (
            format!("{}", mv.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (
            mark_symbol(player).to_string(),
            Style::default()
                .fg(mark_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let border = match winning_line {
        Some(line) if line.contains(mv) => Style::default()
            .fg(app.game().board().get(mv).player().map_or(Color::White, mark_color))
            .add_modifier(Modifier::BOLD),
        _ if show_cursor && *app.cursor() == mv => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::DarkGray),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(paragraph, area);
}

fn render_prompt(f: &mut Frame, area: Rect) {
    let popup = center_rect(area, 30, 3);
    f.render_widget(Clear, popup);
    let prompt = Paragraph::new("Play Again? (Y/N)")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, popup);
}

/// The human's mark is drawn as a red circle, the computer's as a green cross.
fn mark_symbol(player: Player) -> &'static str {
    match player {
        Player::One => "O",
        Player::Two => "X",
    }
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Green,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use optimal_tictactoe::GameStatus;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::{Duration, Instant};

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Top-left corner of the cell drawn for `mv`.
    fn cell_corner(app: &App, mv: Move) -> (u16, u16) {
        let (x, y) = app.board_origin().unwrap();
        (x + mv.col as u16 * CELL_WIDTH, y + mv.row as u16 * CELL_HEIGHT)
    }

    /// Position of the mark inside the cell drawn for `mv`.
    fn cell_center(app: &App, mv: Move) -> (u16, u16) {
        let (x, y) = cell_corner(app, mv);
        (x + CELL_WIDTH / 2, y + CELL_HEIGHT / 2)
    }

    #[test]
    fn test_draw_records_origin_and_ignores_title_clicks() {
        let mut app = App::new(&Settings::default());
        let buffer = render(&mut app);
        assert!(app.board_origin().is_some());

        // Click the centre column on the title bar.
        let x = (60 - GRID_WIDTH) / 2 + CELL_WIDTH + CELL_WIDTH / 2;
        app.handle_click(x, 0, Instant::now());
        assert_eq!(app.game().move_count(), 0, "row 0 is the title bar");

        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Tic Tac Toe"));
        assert!(rendered.contains("Your turn."));
        assert_eq!(buffer[cell_center(&app, Move::new(1, 1))].symbol(), "5");
    }

    #[test]
    fn test_finished_game_shows_marks_line_and_prompt() {
        let mut app = App::new(&Settings::default());
        let start = Instant::now();
        while *app.phase() == Phase::Playing {
            if app.game().to_move() == Player::One {
                let cell = app.game().board().empty_cells().next().unwrap();
                app.handle_key(KeyCode::Char(char::from(b'1' + cell.index() as u8)), start);
            }
            app.tick(start);
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::Two));
        app.tick(start + Duration::from_secs(3));
        assert_eq!(*app.phase(), Phase::PlayAgain);

        let buffer = render(&mut app);

        // Board is 112/12./2..; the popup covers the middle row.
        assert_eq!(buffer[cell_center(&app, Move::new(0, 0))].symbol(), "O");
        assert_eq!(buffer[cell_center(&app, Move::new(0, 1))].symbol(), "O");
        assert_eq!(buffer[cell_center(&app, Move::new(0, 2))].symbol(), "X");
        assert_eq!(buffer[cell_center(&app, Move::new(2, 0))].symbol(), "X");
        assert_eq!(buffer[cell_center(&app, Move::new(0, 0))].fg, Color::Red);
        assert_eq!(buffer[cell_center(&app, Move::new(0, 2))].fg, Color::Green);

        for mv in [Move::new(0, 2), Move::new(2, 0)] {
            assert!(Line::AscendingDiagonal.contains(mv));
            assert_eq!(buffer[cell_corner(&app, mv)].fg, Color::Green, "{mv} border");
        }
        assert_eq!(buffer[cell_corner(&app, Move::new(0, 0))].fg, Color::DarkGray);

        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        // Once in the status bar, once in the popup.
        assert_eq!(rendered.matches("Play Again? (Y/N)").count(), 2);
    }
}
