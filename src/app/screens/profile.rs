//! Profile page — avatar, display name, and match statistics.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{debug, info, instrument};

use crate::app::context::SessionContext;
use crate::app::modal::{Modal, ModalKind};
use crate::app::screen::{Screen, ScreenTransition};

/// State for the profile page.
#[derive(Debug)]
pub struct ProfileScreen {
    modal: Option<Modal>,
}

impl ProfileScreen {
    /// Creates the profile page, optionally with a notice modal open.
    #[instrument(skip(notice))]
    pub fn new(notice: Option<Modal>) -> Self {
        debug!("Initializing ProfileScreen");
        Self { modal: notice }
    }

    /// Handles a key while a modal is open. Only the logout flow uses a
    /// confirm modal on this page.
    fn handle_modal_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) -> ScreenTransition {
        let Some(modal) = &self.modal else {
            return ScreenTransition::Stay;
        };
        let kind = *modal.kind();
        match kind {
            ModalKind::Info => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.modal = None;
                }
                ScreenTransition::Stay
            }
            ModalKind::Confirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    info!("Logout confirmed");
                    ctx.logout();
                    ScreenTransition::GoToHome {
                        notice: Some(Modal::info(
                            "Logged Out",
                            "You have been successfully logged out.",
                        )),
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.modal = None;
                    ScreenTransition::Stay
                }
                _ => ScreenTransition::Stay,
            },
        }
    }
}

impl Screen for ProfileScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &SessionContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let session = ctx.session();
        let initial = session.avatar_initial().unwrap_or('?');
        let header_text = format!("( {} )  {}", initial, session.name());
        let header = Paragraph::new(header_text)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Profile"));
        frame.render_widget(header, chunks[0]);

        let stats = session.stats();
        let rows = vec![
            stat_row("Matches Played", stats.matches_played().to_string(), Color::White),
            stat_row("Matches Won", stats.matches_won().to_string(), Color::Green),
            stat_row("Matches Lost", stats.matches_lost().to_string(), Color::Red),
            stat_row("Matches Drawn", stats.matches_draw().to_string(), Color::Yellow),
            stat_row(
                "Win Percentage",
                format!("{}%", stats.win_rate().round() as u32),
                Color::Cyan,
            ),
        ];
        let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];
        let table = Table::new(rows, widths)
            .block(Block::default().borders(Borders::ALL).title("Statistics"));
        frame.render_widget(table, chunks[1]);

        let help = Paragraph::new("n/Enter: New Game | l: Logout | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        if let Some(modal) = &self.modal {
            modal.render(frame);
        }
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) -> ScreenTransition {
        if self.modal.is_some() {
            return self.handle_modal_key(key, ctx);
        }

        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                info!("Starting new game from profile");
                ScreenTransition::GoToGame
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.modal = Some(Modal::confirm(
                    "Logout",
                    "Are you sure you want to logout? Your stats will be saved.",
                ));
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

fn stat_row(label: &str, value: String, color: Color) -> Row<'static> {
    Row::new(vec![
        Cell::from(label.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(value).style(Style::default().fg(color)),
    ])
}
