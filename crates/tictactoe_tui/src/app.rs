//! Application state and event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use tictactoe_engine::{GameEngine, Outcome, Position};
use tracing::{debug, info, instrument};

use crate::glyphs::GlyphSet;
use crate::input::{Command, command_for_key, move_cursor};
use crate::ui::BoardLayout;

/// Main application state.
///
/// Owns the session's engine. Every handler runs to completion before the
/// next event is read, so engine calls never interleave.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    glyphs: GlyphSet,
    cursor: Position,
    #[getter(skip)]
    layout: Option<BoardLayout>,
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Creates a new application around `engine`.
    #[instrument(skip_all)]
    pub fn new(engine: GameEngine, glyphs: GlyphSet) -> Self {
        Self {
            engine,
            glyphs,
            cursor: Position::CENTER,
            layout: None,
            should_quit: false,
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the cells were drawn, for click translation.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = Some(layout);
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let Some(command) = command_for_key(key) else {
            return;
        };
        debug!(?command, "Key command");

        match command {
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::PlayCursor => self.play_at(self.cursor),
            Command::PlayAt(pos) => {
                self.cursor = pos;
                self.play_at(pos);
            }
            Command::Restart => self.restart(),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event; left clicks on a cell play there.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let Some(pos) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.cell_at(mouse.column, mouse.row))
        else {
            debug!(column = mouse.column, row = mouse.row, "Click outside board");
            return;
        };

        self.cursor = pos;
        self.play_at(pos);
    }

    /// Plays the current player's mark at `pos`.
    fn play_at(&mut self, pos: Position) {
        let player = self.engine.current_player();
        let outcome = self.engine.play(pos);
        debug!(%player, position = %pos, %outcome, "Cell clicked");
    }

    /// Starts a new round, keeping scores.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.cursor = Position::CENTER;
    }

    /// Score label, e.g. `X: 2   O: 1   Ties: 0`.
    pub fn score_text(&self) -> String {
        self.engine.scores().to_string()
    }

    /// Turn label.
    pub fn turn_text(&self) -> String {
        if self.engine.current_outcome().is_over() {
            "Press r to play again".to_string()
        } else {
            format!("{}'s turn", self.engine.current_player())
        }
    }

    /// Outcome label; empty while the round is in progress.
    pub fn outcome_text(&self) -> String {
        match self.engine.current_outcome() {
            Outcome::InProgress => String::new(),
            outcome => outcome.to_string(),
        }
    }
}
