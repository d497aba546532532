//! Screen trait and transition type for the page state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::context::SessionContext;
use crate::app::modal::Modal;

/// Login flow entry points offered on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginProvider {
    /// Simulated third-party login with a presentation-only delay.
    Google,
    /// Direct guest login; the name gets a `" (Guest)"` suffix.
    Guest,
}

impl LoginProvider {
    /// Returns the display label for this provider.
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Login with Google",
            Self::Guest => "Play as Guest",
        }
    }
}

/// The result of handling an event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and [`Screen::tick`] to
/// drive the [`AppController`](crate::AppController) state machine. A
/// transition may carry a notice modal shown on the destination page.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the home page.
    GoToHome {
        /// Modal shown over the home page on arrival.
        notice: Option<Modal>,
    },
    /// Navigate to the login page for the given provider.
    GoToLogin {
        /// Which login flow to start.
        provider: LoginProvider,
    },
    /// Navigate to the game page.
    GoToGame,
    /// Navigate to the profile page.
    GoToProfile {
        /// Modal shown over the profile page on arrival.
        notice: Option<Modal>,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each page of the application.
///
/// Each screen owns its own state (including any open modal), renders its
/// UI, and handles key events. The controller calls these methods in the
/// event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &SessionContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut SessionContext) -> ScreenTransition;

    /// Advances time-driven presentation state (spinners, delays).
    fn tick(&mut self, _ctx: &mut SessionContext) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
