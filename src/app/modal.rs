//! Modal dialogs rendered over the active screen.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Kind of modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Informational message, dismissed with Esc or Enter.
    Info,
    /// Yes/no confirmation; the owning screen decides what "yes" does.
    Confirm,
}

/// A modal dialog shown over the active screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Modal {
    /// Dialog title.
    title: String,
    /// Dialog body text.
    message: String,
    /// Info or confirm.
    kind: ModalKind,
}

impl Modal {
    /// Creates an informational modal.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ModalKind::Info,
        }
    }

    /// Creates a confirmation modal.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ModalKind::Confirm,
        }
    }

    /// Renders the modal centered in the frame, clearing what is beneath.
    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(frame.area(), 50, 9);
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let body = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(self.title.as_str())
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(body, chunks[0]);

        let hint = match self.kind {
            ModalKind::Info => "Esc / Enter: Close",
            ModalKind::Confirm => "y: Yes | n / Esc: No",
        };
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

/// Computes a centered rect of the given percentage width and fixed height.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height.min(area.height))
}
