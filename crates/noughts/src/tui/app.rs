//! Application state and the event loop.

use super::input::{self, Cursor, Input};
use super::layout::ScreenLayout;
use super::ui;
use crate::Palette;
use crossterm::event::{self, Event};
use noughts_rules::{Action, Dispatched, GameState};
use ratatui::{Terminal, backend::Backend};
use std::ops::ControlFlow;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Owns the single game and everything the screen needs between frames.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Cursor,
    message: Option<String>,
    layout: Option<ScreenLayout>,
    palette: Palette,
    frame: Duration,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(palette: Palette, frame: Duration) -> Self {
        Self {
            game: GameState::new(),
            cursor: Cursor::default(),
            message: None,
            layout: None,
            palette,
            frame,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the current status message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs the poll-render loop until the player quits.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");
        loop {
            self.draw(terminal)?;

            if !event::poll(self.frame)? {
                continue;
            }
            if self.handle_event(&event::read()?).is_break() {
                info!("Player quit");
                return Ok(());
            }
        }
    }

    /// Renders the current state and remembers the layout for click mapping.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), B::Error> {
        let mut layout = None;
        terminal.draw(|frame| {
            layout = Some(ui::draw(
                frame,
                &self.game,
                self.cursor,
                self.message.as_deref(),
                &self.palette,
            ));
        })?;
        self.layout = layout;
        Ok(())
    }

    /// Handles one terminal event. Breaks when the player asked to quit.
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow<()> {
        let translated = input::translate(
            event,
            self.layout.as_ref(),
            self.cursor,
            self.game.status().is_terminal(),
        );
        match translated {
            Some(Input::Act(action)) => self.handle_action(action),
            Some(Input::Select(cursor)) => {
                self.cursor = cursor;
                ControlFlow::Continue(())
            }
            None => ControlFlow::Continue(()),
        }
    }

    /// Hands an action to the engine and turns the result into a message.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) -> ControlFlow<()> {
        match self.game.dispatch(action) {
            Ok(Dispatched::Moved(outcome)) => {
                debug!(?outcome, "Move accepted");
                self.message = outcome.changed.then(|| outcome.status.to_string());
                if let Action::PlaceAt { row, col } = action {
                    self.cursor = Cursor { row, col };
                }
                ControlFlow::Continue(())
            }
            Ok(Dispatched::Reset) => {
                self.cursor = Cursor::default();
                self.message = Some(format!("New game. Player {} starts.", self.game.turn()));
                ControlFlow::Continue(())
            }
            Ok(Dispatched::Quit) => ControlFlow::Break(()),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
                ControlFlow::Continue(())
            }
        }
    }
}
