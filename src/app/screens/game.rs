//! Game page — the 3x3 board, turn indicator, and status line.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::app::context::SessionContext;
use crate::app::modal::{Modal, ModalKind};
use crate::app::screen::{Screen, ScreenTransition};
use crate::game::{Board, Cell, GameStatus, Marker};

/// State for the game page.
#[derive(Debug)]
pub struct GameScreen {
    modal: Option<Modal>,
}

impl GameScreen {
    /// Creates the game page.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self { modal: None }
    }

    fn end_modal(status: GameStatus) -> Option<Modal> {
        match status {
            GameStatus::Won(Marker::X) => {
                Some(Modal::info("Victory!", "Player X has won the game!"))
            }
            GameStatus::Won(Marker::O) => {
                Some(Modal::info("Victory!", "Player O has won the game!"))
            }
            GameStatus::Draw => Some(Modal::info("Game Over", "The game ended in a draw!")),
            GameStatus::InProgress => None,
        }
    }

    /// Handles a key while a modal is open. Only the restart flow uses a
    /// confirm modal on this page.
    fn handle_modal_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) {
        let Some(modal) = &self.modal else { return };
        let kind = *modal.kind();
        match kind {
            ModalKind::Info => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.modal = None;
                }
            }
            ModalKind::Confirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    info!("Restart confirmed");
                    ctx.restart();
                    self.modal = Some(Modal::info("Game Restarted", "A new game has begun!"));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.modal = None;
                }
                _ => {}
            },
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &SessionContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let game = ctx.game();
        let marker = game.current_marker();
        let turn_color = marker_color(marker);
        let header = Paragraph::new(format!("Current Player: {}", marker))
            .style(Style::default().fg(turn_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Neon Tic Tac Toe"));
        frame.render_widget(header, chunks[0]);

        render_board(frame, chunks[1], ctx);

        let (status_text, status_color) = match game.status() {
            GameStatus::InProgress => ("Game in Progress".to_string(), Color::Magenta),
            GameStatus::Won(Marker::X) => ("Player X Wins!".to_string(), Color::Cyan),
            GameStatus::Won(Marker::O) => ("Player O Wins!".to_string(), Color::Magenta),
            GameStatus::Draw => ("It's a Draw!".to_string(), Color::Yellow),
        };
        let status = Paragraph::new(status_text)
            .style(
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("1-9: Place Marker | r: Restart | p/Esc: Profile | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        if let Some(modal) = &self.modal {
            modal.render(frame);
        }
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) -> ScreenTransition {
        if self.modal.is_some() {
            self.handle_modal_key(key, ctx);
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let pos = c as usize - '1' as usize;
                if let Some(status) = ctx.play_move(pos) {
                    self.modal = Self::end_modal(status);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.modal = Some(Modal::confirm(
                    "Restart Game",
                    "Are you sure you want to restart the current game?",
                ));
                ScreenTransition::Stay
            }
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => {
                ScreenTransition::GoToProfile { notice: None }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::X => Color::Cyan,
        Marker::O => Color::Magenta,
    }
}

/// Renders the 3x3 board centered in the area, highlighting the winning
/// line once the game ends.
fn render_board(frame: &mut Frame, area: Rect, ctx: &SessionContext) {
    let board = ctx.game().board();
    let winning: Option<[usize; 3]> = board.winning_line().map(|hit| *hit.line());

    let board_area = center_rect(area, 40, 13);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(frame, rows[0], board, 0, winning);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], board, 3, winning);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], board, 6, winning);
}

fn render_row(frame: &mut Frame, area: Rect, board: &Board, start: usize, winning: Option<[usize; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(frame, cols[0], board, start, winning);
    render_vertical_sep(frame, cols[1]);
    render_cell(frame, cols[2], board, start + 1, winning);
    render_vertical_sep(frame, cols[3]);
    render_cell(frame, cols[4], board, start + 2, winning);
}

fn render_cell(frame: &mut Frame, area: Rect, board: &Board, pos: usize, winning: Option<[usize; 3]>) {
    let Some(cell) = board.get(pos) else { return };
    let (text, mut style) = match cell {
        Cell::Empty => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Taken(marker) => (
            marker.to_string(),
            Style::default()
                .fg(marker_color(marker))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if winning.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
