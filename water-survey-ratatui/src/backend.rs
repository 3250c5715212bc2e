//! Terminal runner for the survey wizard.
//!
//! Owns the terminal for the lifetime of one session and drives a
//! `SurveyStore` from keyboard input.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;
use tracing::{info, warn};
use water_survey::{Advance, SurveyStore, Transport};

use crate::draw::{Screen, draw};
use crate::input::{UiCommand, WizardUi};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for the terminal wizard.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// The respondent left before any response was saved.
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Full-screen wizard that walks a respondent through the survey.
#[derive(Debug, Clone)]
pub struct RatatuiSurvey {
    /// Title shown at the top of every step.
    title: String,
    theme: Theme,
}

impl Default for RatatuiSurvey {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiSurvey {
    pub fn new() -> Self {
        Self {
            title: "Water Service Satisfaction Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the wizard until the respondent quits.
    ///
    /// Returns how many responses were saved during the session, or
    /// `RatatuiError::Cancelled` if the respondent quit without saving any.
    pub fn run<T: Transport>(&self, store: &mut SurveyStore<T>) -> Result<usize, RatatuiError> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, store);
        self.restore_terminal(&mut terminal)?;

        let saved = result?;
        if saved == 0 {
            return Err(RatatuiError::Cancelled);
        }
        Ok(saved)
    }

    fn event_loop<T: Transport>(
        &self,
        terminal: &mut CrosstermTerminal,
        store: &mut SurveyStore<T>,
    ) -> Result<usize, RatatuiError> {
        let mut ui = WizardUi::new();
        let mut saved = 0;

        loop {
            self.render(terminal, store, &ui)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };

            match ui.handle_key(store, key) {
                UiCommand::Continue => {}
                UiCommand::Quit => break,
                UiCommand::Submit => {
                    let Some(pending) = store.begin_submission() else {
                        continue;
                    };
                    // The exchange blocks, so show the saving screen first.
                    self.render(terminal, store, &ui)?;
                    match store.complete_submission(pending) {
                        Advance::Submitted => saved += 1,
                        outcome => warn!(?outcome, "submission did not complete"),
                    }
                }
            }
        }

        info!(saved, "survey session ended");
        Ok(saved)
    }

    fn render<T: Transport>(
        &self,
        terminal: &mut CrosstermTerminal,
        store: &SurveyStore<T>,
        ui: &WizardUi,
    ) -> Result<(), RatatuiError> {
        let view = store.view();
        let screen = Screen {
            title: &self.title,
            theme: &self.theme,
            view: &view,
            ui,
        };
        terminal.draw(|frame| draw(frame, &screen))?;
        Ok(())
    }

    fn setup_terminal(&self) -> Result<CrosstermTerminal, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(&self, terminal: &mut CrosstermTerminal) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let survey = RatatuiSurvey::new()
            .with_title("Tell us how we did")
            .with_theme(Theme {
                primary: Color::Magenta,
                ..Theme::default()
            });
        assert_eq!(survey.title, "Tell us how we did");
        assert_eq!(survey.theme.primary, Color::Magenta);
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        let err = RatatuiError::from(io::Error::other("tty gone"));
        assert_eq!(err.to_string(), "I/O error: tty gone");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }
}
