//! Application state and logic.

use crate::settings::Settings;
use crossterm::event::KeyCode;
use derive_getters::Getters;
use optimal_tictactoe::{Game, GameStatus, Move, Player};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::input::{cell_at, digit_cell, move_cursor};

/// Where the session is between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A game is running.
    Playing,
    /// The game ended; the result stays on screen until the delay passes.
    ShowingResult {
        /// When the game ended.
        since: Instant,
    },
    /// Waiting for the yes/no answer to "Play Again?".
    PlayAgain,
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Move,
    phase: Phase,
    status_message: String,
    #[getter(skip)]
    result_delay: Duration,
    board_origin: Option<(u16, u16)>,
}

impl App {
    /// Creates a new application from settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let game = Game::new(settings.first_player().player());
        let status_message = turn_message(&game);
        Self {
            game,
            cursor: Move::new(1, 1),
            phase: Phase::Playing,
            status_message,
            result_delay: settings.result_delay(),
            board_origin: None,
        }
    }

    /// Records where the grid was drawn, for mouse mapping.
    pub fn set_board_origin(&mut self, x: u16, y: u16) {
        self.board_origin = Some((x, y));
    }

    /// Handles a key press.
    #[instrument(skip(self, now), fields(phase = ?self.phase))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Action {
        match (self.phase, key) {
            (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => {
                info!("User quit");
                Action::Quit
            }
            (_, KeyCode::Char('r') | KeyCode::Char('R')) => {
                self.restart();
                Action::Continue
            }
            (Phase::PlayAgain, KeyCode::Char('y') | KeyCode::Char('Y')) => {
                self.restart();
                Action::Continue
            }
            (Phase::PlayAgain, KeyCode::Char('n') | KeyCode::Char('N')) => {
                info!("User declined another game");
                Action::Quit
            }
            (Phase::Playing, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.place(self.cursor, now);
                Action::Continue
            }
            (Phase::Playing, KeyCode::Char(c)) => {
                if let Some(cell) = digit_cell(c) {
                    self.cursor = cell;
                    self.place(cell, now);
                }
                Action::Continue
            }
            (Phase::Playing, arrow) => {
                self.cursor = move_cursor(self.cursor, arrow);
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    /// Handles a left click at a terminal coordinate.
    #[instrument(skip(self, now))]
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(cell) = self.board_origin.and_then(|origin| cell_at(origin, column, row)) else {
            debug!("Click outside the grid");
            return;
        };
        self.cursor = cell;
        self.place(cell, now);
    }

    /// Advances time: plays the computer's turn and moves on from the result
    /// message once the delay has passed.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Playing if self.game.to_move() == Player::Two => self.computer_turn(now),
            Phase::ShowingResult { since } if now.duration_since(since) >= self.result_delay => {
                debug!("Result delay elapsed, prompting for another game");
                self.phase = Phase::PlayAgain;
                self.status_message = "Play Again? (Y/N)".to_string();
            }
            _ => {}
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.phase = Phase::Playing;
        self.status_message = turn_message(&self.game);
    }

    fn place(&mut self, cell: Move, now: Instant) {
        match self.game.play(cell) {
            Ok(status) => {
                debug!(row = cell.row, col = cell.col, "Human move applied");
                self.after_move(status, now, format!("You played {}", cell.label()));
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("Move error: {}", e);
            }
        }
    }

    fn computer_turn(&mut self, now: Instant) {
        match self.game.play_computer() {
            Ok(cell) => {
                let status = self.game.status();
                self.after_move(status, now, format!("Computer played {}", cell.label()));
            }
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                self.status_message = format!("Computer error: {}", e);
            }
        }
    }

    fn after_move(&mut self, status: GameStatus, now: Instant, played: String) {
        if status.is_over() {
            info!(%status, "Game over");
            self.phase = Phase::ShowingResult { since: now };
            self.status_message = status.to_string();
        } else {
            self.status_message = format!("{}. {}", played, turn_message(&self.game));
        }
    }
}

fn turn_message(game: &Game) -> String {
    match game.to_move() {
        Player::One => "Your turn.".to_string(),
        Player::Two => "Computer is thinking...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FirstPlayer;

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_human_move_then_computer_reply() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.handle_key(KeyCode::Char('5'), now), Action::Continue);
        assert_eq!(app.game().to_move(), Player::Two);

        app.tick(now);
        assert_eq!(app.game().to_move(), Player::One);
        assert_eq!(app.game().move_count(), 2);
        assert!(app.status_message().starts_with("Computer played Top-left"));
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Up, now);
        app.handle_key(KeyCode::Left, now);
        assert_eq!(*app.cursor(), Move::new(0, 0));
        app.handle_key(KeyCode::Enter, now);
        assert!(!app.game().board().is_empty(0, 0));
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Char('5'), now);
        app.tick(now);
        app.handle_key(KeyCode::Char('5'), now);
        assert!(app.status_message().contains("occupied"));
    }

    #[test]
    fn test_click_maps_to_cell() {
        let mut app = app();
        let now = Instant::now();
        app.handle_click(30, 10, now);
        assert_eq!(app.game().move_count(), 0);

        app.set_board_origin(0, 0);
        app.handle_click(20, 4, now);
        assert!(!app.game().board().is_empty(1, 2));
    }

    #[test]
    fn test_result_then_prompt_then_restart() {
        let mut app = App::new(&Settings::default().with_first_player(FirstPlayer::Human));
        let start = Instant::now();
        // Human takes the first empty cell each turn; the computer wins on
        // its third move.
        while *app.phase() == Phase::Playing {
            if app.game().to_move() == Player::One {
                let cell = app.game().board().empty_cells().next().unwrap();
                app.handle_key(KeyCode::Char(char::from(b'1' + cell.index() as u8)), start);
            }
            app.tick(start);
        }
        assert_eq!(app.status_message(), "Player 2 Wins!");
        assert_eq!(app.game().move_count(), 6);

        app.tick(start + Duration::from_millis(100));
        assert!(matches!(app.phase(), Phase::ShowingResult { .. }));

        app.tick(start + Duration::from_secs(3));
        assert_eq!(*app.phase(), Phase::PlayAgain);
        assert_eq!(app.status_message(), "Play Again? (Y/N)");

        assert_eq!(app.handle_key(KeyCode::Char('y'), start), Action::Continue);
        assert_eq!(*app.phase(), Phase::Playing);
        assert_eq!(app.game().move_count(), 0);
    }

    #[test]
    fn test_declining_prompt_quits() {
        let mut app = app();
        app.phase = Phase::PlayAgain;
        assert_eq!(app.handle_key(KeyCode::Char('n'), Instant::now()), Action::Quit);
    }

    #[test]
    fn test_restart_key_any_time() {
        let mut app = App::new(&Settings::default().with_first_player(FirstPlayer::Computer));
        let now = Instant::now();
        app.tick(now);
        assert_eq!(app.game().move_count(), 1);
        app.handle_key(KeyCode::Char('r'), now);
        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.game().to_move(), Player::Two);
    }

    #[test]
    fn test_keys_ignored_while_showing_result() {
        let mut app = app();
        app.phase = Phase::ShowingResult { since: Instant::now() };
        app.handle_key(KeyCode::Char('5'), Instant::now());
        assert_eq!(app.game().move_count(), 0);
    }
}
