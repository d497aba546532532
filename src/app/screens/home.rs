//! Home page — entry menu with the login options.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::app::context::SessionContext;
use crate::app::modal::Modal;
use crate::app::screen::{LoginProvider, Screen, ScreenTransition};

const MENU: [&str; 3] = ["Login with Google", "Play as Guest", "Quit"];

/// State for the home page.
#[derive(Debug)]
pub struct HomeScreen {
    list_state: ListState,
    modal: Option<Modal>,
}

impl HomeScreen {
    /// Creates the home page, optionally with a notice modal open.
    #[instrument(skip(notice))]
    pub fn new(notice: Option<Modal>) -> Self {
        debug!("Initializing HomeScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            modal: notice,
        }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => MENU.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % MENU.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

impl Screen for HomeScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &SessionContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("NEON TIC TAC TOE")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let subtitle = Paragraph::new("A two-player arcade classic")
            .style(Style::default().fg(Color::Magenta))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[1]);

        let items: Vec<ListItem> = MENU.iter().map(|label| ListItem::new(*label)).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[2], &mut list_state);

        let help = Paragraph::new("↑/↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        if let Some(modal) = &self.modal {
            modal.render(frame);
        }
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut SessionContext) -> ScreenTransition {
        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.modal = None;
            }
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.list_state.selected() {
                Some(0) => {
                    info!("Google login selected");
                    ScreenTransition::GoToLogin {
                        provider: LoginProvider::Google,
                    }
                }
                Some(1) => {
                    info!("Guest login selected");
                    ScreenTransition::GoToLogin {
                        provider: LoginProvider::Guest,
                    }
                }
                _ => ScreenTransition::Quit,
            },
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
