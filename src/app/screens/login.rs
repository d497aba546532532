//! Login page — simulated provider handshake followed by a name prompt.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::app::context::SessionContext;
use crate::app::modal::Modal;
use crate::app::screen::{LoginProvider, Screen, ScreenTransition};
use crate::session::SessionError;

const MAX_NAME_LEN: usize = 24;
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Phase of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginPhase {
    /// Simulated provider handshake; a presentation-only timer with no
    /// effect on core state.
    Connecting { until: Instant },
    /// Name entry prompt.
    EnterName,
}

/// State for the login page.
#[derive(Debug)]
pub struct LoginScreen {
    provider: LoginProvider,
    phase: LoginPhase,
    input: String,
    error: Option<String>,
    spinner_frame: usize,
}

impl LoginScreen {
    /// Creates the login page. The Google flow starts with a simulated
    /// latency phase; guest login goes straight to the name prompt.
    #[instrument]
    pub fn new(provider: LoginProvider, delay: std::time::Duration) -> Self {
        debug!(?provider, "Initializing LoginScreen");
        let phase = match provider {
            LoginProvider::Google => LoginPhase::Connecting {
                until: Instant::now() + delay,
            },
            LoginProvider::Guest => LoginPhase::EnterName,
        };
        Self {
            provider,
            phase,
            input: String::new(),
            error: None,
            spinner_frame: 0,
        }
    }

    fn submit(&mut self, ctx: &mut SessionContext) -> ScreenTransition {
        let guest = self.provider == LoginProvider::Guest;
        match ctx.login(&self.input, guest) {
            Ok(()) => {
                let title = match self.provider {
                    LoginProvider::Google => "Welcome!",
                    LoginProvider::Guest => "Welcome Guest!",
                };
                let message =
                    format!("Welcome to Neon Tic Tac Toe, {}!", ctx.session().name());
                info!(name = %ctx.session().name(), "Login succeeded");
                ScreenTransition::GoToProfile {
                    notice: Some(Modal::info(title, message)),
                }
            }
            Err(SessionError::EmptyName) => {
                warn!("Login cancelled: empty name");
                self.error = Some("Please enter a valid name to continue.".to_string());
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for LoginScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &SessionContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(self.provider.label())
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        match self.phase {
            LoginPhase::Connecting { .. } => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                let text = format!("{} Simulating Google login...", spinner);
                let connecting = Paragraph::new(text)
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(connecting, chunks[1]);
            }
            LoginPhase::EnterName => {
                let input = Paragraph::new(format!("{}█", self.input))
                    .style(Style::default().fg(Color::White))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Enter your name"),
                    );
                frame.render_widget(input, chunks[1]);
            }
        }

        if let Some(error) = &self.error {
            let error = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(error, chunks[2]);
        }

        let help = Paragraph::new("Enter: Confirm | Esc: Back to Home")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) -> ScreenTransition {
        if let LoginPhase::Connecting { .. } = self.phase {
            return match key.code {
                KeyCode::Esc => ScreenTransition::GoToHome { notice: None },
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Char(c) if self.input.len() < MAX_NAME_LEN => {
                self.input.push(c);
                self.error = None;
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Esc => ScreenTransition::GoToHome { notice: None },
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, _ctx))]
    fn tick(&mut self, _ctx: &mut SessionContext) -> ScreenTransition {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if let LoginPhase::Connecting { until } = self.phase
            && Instant::now() >= until
        {
            debug!("Simulated login latency elapsed");
            self.phase = LoginPhase::EnterName;
        }
        ScreenTransition::Stay
    }
}
